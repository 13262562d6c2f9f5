//! Persistence gateway for the bookmarks table.

mod postgres;
mod schema;

pub use postgres::PgBookmarkStore;
pub use schema::{ensure_bookmarks_table, ensure_database_exists};

use crate::error::AppError;
use crate::model::{Bookmark, BookmarkPatch, NewBookmark};
use async_trait::async_trait;

/// CRUD operations on bookmarks. Each call is a single statement; there are no
/// multi-call transactions and no retries.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All rows, in no particular order.
    async fn list(&self) -> Result<Vec<Bookmark>, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, AppError>;

    /// Persist a new row and return it with its assigned id.
    async fn insert(&self, new: &NewBookmark) -> Result<Bookmark, AppError>;

    /// Apply the supplied fields. Returns the affected-row count (0 or 1).
    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<u64, AppError>;

    /// Remove the row. Returns the affected-row count (0 or 1).
    async fn delete(&self, id: i64) -> Result<u64, AppError>;

    /// Round-trip to the backing store, used by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;
}
