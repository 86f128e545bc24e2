//! Axum route handlers for the Scholarship Filter.

use axum::{extract::State, response::IntoResponse, Json};
use tracing::debug;

use crate::scholarships::filter::{find_scholarships, ScholarshipCriteria};
use crate::state::AppState;

/// Carries the true number of matches; the body is always a full, padded page.
pub const MATCH_COUNT_HEADER: &str = "x-match-count";

/// POST /api/scholarships
///
/// Filters the catalog by the posted criteria. The response body stays a plain
/// array so existing clients render it unchanged.
pub async fn handle_find_scholarships(
    State(state): State<AppState>,
    Json(criteria): Json<ScholarshipCriteria>,
) -> impl IntoResponse {
    let search = find_scholarships(&criteria, state.catalog.records());
    debug!(
        "Scholarship search matched {} of {} records",
        search.match_count,
        state.catalog.len()
    );

    (
        [(MATCH_COUNT_HEADER, search.match_count.to_string())],
        Json(search.scholarships),
    )
}
