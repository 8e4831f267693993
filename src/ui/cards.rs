//! Pure card formatting for deals and recommendations.
//!
//! Nothing here touches the terminal; widgets in `results` and
//! `recommendations` turn these cards into lines.

use crate::state::{Deal, Recommendation};
use crate::util::{format_price, percent_encode, take_chars};

/// Characters of a deal name used for its placeholder image text.
pub const DEAL_PLACEHOLDER_CHARS: usize = 20;
/// Characters of a recommendation name used for its placeholder image text.
pub const RECOMMENDATION_PLACEHOLDER_CHARS: usize = 15;
/// Seller line for recommendations without a brand.
pub const RECOMMENDED_FOR_YOU: &str = "Recommended for you";

/// What: Build a placeholder image URL for a card without an image.
///
/// Inputs:
/// - `base`: Placeholder service base URL.
/// - `name`: Product name.
/// - `max_chars`: How many leading characters of the name to embed.
///
/// Output:
/// - `{base}?text={percent-encoded prefix}`.
#[must_use]
pub fn placeholder_image(base: &str, name: &str, max_chars: usize) -> String {
    format!("{base}?text={}", percent_encode(take_chars(name, max_chars)))
}

/// Picks the supplied image unless it is blank.
fn image_or_placeholder(image: Option<&str>, base: &str, name: &str, max_chars: usize) -> String {
    image
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(|| placeholder_image(base, name, max_chars), str::to_string)
}

/// Display-ready deal card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DealCard {
    /// Product name.
    pub title: String,
    /// Seller name.
    pub seller: String,
    /// Current price, `$0.00` when unknown.
    pub price: String,
    /// `Was: $X` line, only when the previous price is higher.
    pub was: Option<String>,
    /// Image URL or placeholder.
    pub image_url: String,
    /// Listing URL.
    pub url: String,
}

impl DealCard {
    /// What: Format one deal.
    ///
    /// Inputs:
    /// - `deal`: Deal as received.
    /// - `placeholder_base`: Placeholder image service.
    ///
    /// Output:
    /// - Card with price text, optional `Was:` line, and an image URL that is never empty.
    #[must_use]
    pub fn from_deal(deal: &Deal, placeholder_base: &str) -> Self {
        let was = match (deal.original_price, deal.price) {
            (Some(orig), Some(price)) if orig > price => {
                Some(format!("Was: {}", format_price(Some(orig))))
            }
            _ => None,
        };
        Self {
            title: deal.product_name.clone(),
            seller: deal.seller.clone(),
            price: format_price(deal.price),
            was,
            image_url: image_or_placeholder(
                deal.image_url.as_deref(),
                placeholder_base,
                &deal.product_name,
                DEAL_PLACEHOLDER_CHARS,
            ),
            url: deal.url.clone(),
        }
    }
}

/// Display-ready recommendation card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendationCard {
    /// Product name (`name`, `product_name`, or `Product`).
    pub title: String,
    /// Brand or `Recommended for you`.
    pub seller: String,
    /// Price, `$0.00` when unknown.
    pub price: String,
    /// Why it was recommended.
    pub reason: Option<String>,
    /// Image URL or placeholder.
    pub image_url: String,
    /// Product page, if any.
    pub url: Option<String>,
}

impl RecommendationCard {
    /// What: Format one recommendation.
    ///
    /// Inputs:
    /// - `rec`: Recommendation as received.
    /// - `placeholder_base`: Placeholder image service.
    #[must_use]
    pub fn from_recommendation(rec: &Recommendation, placeholder_base: &str) -> Self {
        let title = rec.display_name().to_string();
        let seller = rec
            .brand
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(RECOMMENDED_FOR_YOU)
            .to_string();
        Self {
            image_url: image_or_placeholder(
                rec.image_url.as_deref(),
                placeholder_base,
                &title,
                RECOMMENDATION_PLACEHOLDER_CHARS,
            ),
            title,
            seller,
            price: format_price(rec.price),
            reason: rec.reason.clone().filter(|r| !r.trim().is_empty()),
            url: rec.url.clone().filter(|u| !u.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://via.placeholder.com/300x200/6366F1/FFFFFF";

    #[test]
    /// What: Deals without an image get a placeholder built from the first 20 characters.
    fn deal_placeholder_uses_twenty_chars() {
        let deal = Deal {
            product_name: "Hydrating Facial Cleanser 16oz".into(),
            ..Deal::default()
        };
        let card = DealCard::from_deal(&deal, BASE);
        assert_eq!(
            card.image_url,
            format!("{BASE}?text=Hydrating%20Facial%20Cle")
        );
        assert_eq!(card.price, "$0.00");
    }

    #[test]
    /// What: `Was:` appears only when the original price is higher than the price.
    fn was_line_only_for_markdowns() {
        let mut deal = Deal {
            product_name: "Sunscreen".into(),
            price: Some(12.5),
            original_price: Some(20.0),
            image_url: Some("https://img.example/a.png".into()),
            ..Deal::default()
        };
        let card = DealCard::from_deal(&deal, BASE);
        assert_eq!(card.was.as_deref(), Some("Was: $20.00"));
        assert_eq!(card.price, "$12.50");
        assert_eq!(card.image_url, "https://img.example/a.png");

        deal.original_price = Some(12.5);
        assert!(DealCard::from_deal(&deal, BASE).was.is_none());

        deal.price = None;
        deal.original_price = Some(30.0);
        assert!(DealCard::from_deal(&deal, BASE).was.is_none());
    }

    #[test]
    /// What: Recommendation cards fall back to `Recommended for you` and a 15-char placeholder.
    fn recommendation_fallbacks() {
        let rec = Recommendation {
            product_name: Some("Ceramide Night Cream".into()),
            price: Some(18.0),
            ..Recommendation::default()
        };
        let card = RecommendationCard::from_recommendation(&rec, BASE);
        assert_eq!(card.title, "Ceramide Night Cream");
        assert_eq!(card.seller, RECOMMENDED_FOR_YOU);
        assert_eq!(card.price, "$18.00");
        assert_eq!(card.image_url, format!("{BASE}?text=Ceramide%20Night%20"));

        let branded = Recommendation {
            brand: Some("CeraVe".into()),
            ..Recommendation::default()
        };
        let card = RecommendationCard::from_recommendation(&branded, BASE);
        assert_eq!(card.title, "Product");
        assert_eq!(card.seller, "CeraVe");
        assert_eq!(card.price, "$0.00");
    }
}
