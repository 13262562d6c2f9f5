//! Bookmark collection and item routes under the configured base path.

use crate::handlers::bookmarks::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn bookmark_routes(state: AppState) -> Router {
    let base = state.config.base_path.clone();
    let collection = if base.is_empty() { "/".to_string() } else { base.clone() };
    let item = format!("{}/:id", base);
    Router::new()
        .route(&collection, get(list).post(create))
        .route(&item, get(read).patch(update).delete(delete_handler))
        .with_state(state)
}
