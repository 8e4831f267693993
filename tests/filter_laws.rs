//! Integration tests for the profile relevance filter and the results header it drives.

#![cfg(test)]

use skindeals::logic::{begin_search, count_line, filter_deals, is_skincare_query};
use skindeals::state::vocab::SKINCARE_KEYWORDS;
use skindeals::state::{AppState, Deal, PreferenceProfile, ViewState};
use tokio::sync::mpsc;

fn deal(name: &str, description: Option<&str>) -> Deal {
    Deal {
        product_name: name.into(),
        description: description.map(Into::into),
        ..Deal::default()
    }
}

fn profile(skin: &str, preferred: &[&str], avoided: &[&str]) -> PreferenceProfile {
    PreferenceProfile {
        user_id: Some(1),
        skin_type: Some(skin.into()),
        preferred_ingredients: preferred.iter().map(|s| (*s).to_string()).collect(),
        avoided_ingredients: avoided.iter().map(|s| (*s).to_string()).collect(),
        ..PreferenceProfile::default()
    }
}

fn catalogue() -> Vec<Deal> {
    vec![
        deal("Oily Skin Moisturizer", Some("with niacinamide")),
        deal("Dry Cream", None),
        deal("Barrier Serum", Some("hyaluronic acid, fragrance")),
        deal("Gentle Cleanser", Some("Hyaluronic Acid formula")),
        deal("Clay Mask for OILY skin", Some("light fragrance")),
    ]
}

#[test]
/// What: The documented moisturizer example keeps only the matching deal.
fn moisturizer_example() {
    let deals = vec![
        deal("Oily Skin Moisturizer (with niacinamide)", None),
        deal("Dry Cream", None),
    ];
    let p = profile("oily", &["niacinamide"], &[]);
    let kept = filter_deals(&deals, "moisturizer", Some(&p), true);
    assert_eq!(kept, vec![deals[0].clone()]);
    assert_eq!(
        count_line(kept.len(), deals.len(), true, p.skin_type()),
        "Found 1 deals (filtered for oily skin)"
    );
}

#[test]
/// What: Across profiles and queries the output is a non-empty ordered subset, or the input.
///
/// Inputs:
/// - Several profiles against every skincare keyword and a non-skincare query.
///
/// Output:
/// - Kept deals appear in input order; an engaged filter never returns an empty list
///   for a non-empty input.
fn output_is_ordered_subset_or_input() {
    let deals = catalogue();
    let profiles = [
        profile("oily", &["niacinamide"], &[]),
        profile("dry", &[], &[]),
        profile("sensitive", &["hyaluronic_acid"], &["fragrance"]),
        profile("combination", &["vitamin_c"], &["alcohol"]),
    ];
    let queries: Vec<&str> = SKINCARE_KEYWORDS
        .iter()
        .copied()
        .chain(["headphones", "laptop"])
        .collect();

    for p in &profiles {
        for q in &queries {
            for enabled in [true, false] {
                let kept = filter_deals(&deals, q, Some(p), enabled);
                assert!(!kept.is_empty(), "empty output for {q} / {:?}", p.skin_type);
                let mut cursor = deals.iter();
                for k in &kept {
                    assert!(
                        cursor.any(|d| d == k),
                        "{} out of order or invented",
                        k.product_name
                    );
                }
                if !enabled || !is_skincare_query(q) {
                    assert_eq!(kept, deals);
                }
            }
        }
    }
}

#[test]
/// What: Skin type matches ignore case and avoided ingredients only gate the ingredient branch.
fn skin_match_overrides_avoid_list() {
    let deals = catalogue();
    let p = profile("sensitive", &["hyaluronic_acid"], &["fragrance"]);
    let kept: Vec<String> = filter_deals(&deals, "serum", Some(&p), true)
        .into_iter()
        .map(|d| d.product_name)
        .collect();
    // The serum mentions fragrance, so only the cleanser survives the ingredient branch.
    assert_eq!(kept, vec!["Gentle Cleanser".to_string()]);

    let oily = profile("oily", &["vitamin_c"], &["fragrance"]);
    let kept: Vec<String> = filter_deals(&deals, "Face MASK", Some(&oily), true)
        .into_iter()
        .map(|d| d.product_name)
        .collect();
    assert_eq!(
        kept,
        vec![
            "Oily Skin Moisturizer".to_string(),
            "Clay Mask for OILY skin".to_string()
        ]
    );
}

#[test]
/// What: The app's count line always reports the length of the shown list.
fn count_line_tracks_shown_list() {
    let mut app = AppState {
        match_profile: true,
        ..AppState::default()
    };
    app.apply_identity(Some(skindeals::state::UserIdentity {
        id: 1,
        name: "Ada".into(),
        email: "ada@example.com".into(),
    }));
    app.set_profile(Some(profile("dry", &["niacinamide"], &[])));

    for (query, expected_shown) in [("moisturizer", 2), ("headphones", 5)] {
        app.render_deals(query, catalogue(), None);
        assert_eq!(app.deals.len(), expected_shown);
        assert!(app.count_line.starts_with(&format!("Found {} deals", app.deals.len())));
        assert_eq!(app.filter_applied, expected_shown < 5);
    }
    assert_eq!(app.view, ViewState::Results);
}

#[test]
/// What: A blank query sends no request and keeps the current panel.
fn blank_query_sends_nothing() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    for text in ["", "   ", "\t"] {
        let mut app = AppState {
            input: text.into(),
            view: ViewState::Recommendations,
            ..AppState::default()
        };
        assert!(!begin_search(&mut app, &tx));
        assert_eq!(app.view, ViewState::Recommendations);
    }
    assert!(rx.try_recv().is_err());
}
