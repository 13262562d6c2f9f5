//! Bookmarks API: a small REST service for saved links, backed by PostgreSQL.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod sanitize;
pub mod serializer;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use app::build_router;
pub use config::ApiConfig;
pub use error::{AppError, ConfigError};
pub use model::{Bookmark, BookmarkPatch, NewBookmark};
pub use serializer::{serialize_bookmark, BookmarkView};
pub use state::AppState;
pub use store::{ensure_bookmarks_table, ensure_database_exists, BookmarkStore, PgBookmarkStore};
