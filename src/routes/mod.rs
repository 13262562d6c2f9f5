//! Route tables.

pub mod bookmarks;
pub mod common;

pub use bookmarks::bookmark_routes;
pub use common::common_routes;
