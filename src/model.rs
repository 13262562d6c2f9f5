//! Bookmark record types.

use serde::{Deserialize, Serialize};

/// A row of the `bookmarks` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub rating: i64,
}

/// Validated creation payload; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookmark {
    pub title: String,
    pub description: String,
    pub url: String,
    pub rating: i64,
}

/// Validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub rating: Option<i64>,
}

impl NewBookmark {
    pub fn into_bookmark(self, id: i64) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            description: self.description,
            url: self.url,
            rating: self.rating,
        }
    }
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.url.is_none() && self.rating.is_none()
    }

    /// Apply supplied fields to an in-memory record.
    pub fn apply_to(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title = title.clone();
        }
        if let Some(description) = &self.description {
            bookmark.description = description.clone();
        }
        if let Some(url) = &self.url {
            bookmark.url = url.clone();
        }
        if let Some(rating) = self.rating {
            bookmark.rating = rating;
        }
    }
}
