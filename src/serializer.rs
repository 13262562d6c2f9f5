//! Stored record to client representation.

use crate::model::Bookmark;
use crate::sanitize::sanitize_text;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookmarkView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub rating: i64,
}

/// `id` and `rating` pass through; text fields are sanitized.
pub fn serialize_bookmark(bookmark: &Bookmark) -> BookmarkView {
    BookmarkView {
        id: bookmark.id,
        title: sanitize_text(&bookmark.title),
        description: sanitize_text(&bookmark.description),
        url: sanitize_text(&bookmark.url),
        rating: bookmark.rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_record_serializes_unchanged() {
        let b = Bookmark {
            id: 3,
            title: "Docs".into(),
            description: "Standard library".into(),
            url: "https://doc.rust-lang.org/std/".into(),
            rating: 5,
        };
        let view = serialize_bookmark(&b);
        assert_eq!(view.id, 3);
        assert_eq!(view.title, b.title);
        assert_eq!(view.description, b.description);
        assert_eq!(view.url, b.url);
        assert_eq!(view.rating, 5);
    }

    #[test]
    fn markup_in_any_text_field_is_escaped() {
        let b = Bookmark {
            id: 911,
            title: "<script>alert(1)</script>".into(),
            description: "<b>bold</b>".into(),
            url: "<iframe>".into(),
            rating: 1,
        };
        let view = serialize_bookmark(&b);
        assert_eq!(view.title, "&lt;script&gt;alert(1)&lt;/script&gt;");
        assert_eq!(view.description, "&lt;b&gt;bold&lt;/b&gt;");
        assert_eq!(view.url, "&lt;iframe&gt;");
    }
}
