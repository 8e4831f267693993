use tracing::info;

use super::{OutcomeSender, log_failure};
use crate::sources::Backend;
use crate::state::{Outcome, SearchQuery};

/// What: Run one deal search and report the result.
///
/// Inputs:
/// - `backend`: Backend implementation.
/// - `query`: Trimmed query with toggles.
/// - `out`: Outcome channel.
///
/// Details:
/// - An unsuccessful response, a response without `all_deals`, and any failure all
///   report `SearchFailed`; there is no distinct error panel.
pub async fn search<B: Backend>(backend: &B, query: SearchQuery, out: &OutcomeSender) {
    match backend.search(&query).await {
        Ok(Some(results)) => {
            info!(query = %query.text, deals = results.deals.len(), "search completed");
            let _ = out.send(Outcome::SearchCompleted {
                query: query.text,
                deals: results.deals,
                insights: results.insights,
            });
        }
        Ok(None) => {
            info!(query = %query.text, "search returned no deals");
            let _ = out.send(Outcome::SearchFailed { query: query.text });
        }
        Err(err) => {
            log_failure("search", &err);
            let _ = out.send(Outcome::SearchFailed { query: query.text });
        }
    }
}
