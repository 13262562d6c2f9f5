//! Application router: common routes plus bookmark routes behind the bearer check.

use crate::auth::require_bearer;
use crate::routes::{bookmark_routes, common_routes};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected with a JSON 413.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let bookmarks = bookmark_routes(state.clone())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));
    Router::new()
        .merge(common_routes(state))
        .merge(bookmarks)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
