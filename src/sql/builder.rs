//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the bookmarks table.

use super::params::BindValue;
use crate::model::{BookmarkPatch, NewBookmark};

pub const BOOKMARKS_TABLE: &str = "bookmarks";

/// Columns in output order; `id` first.
pub const BOOKMARK_COLUMNS: &[&str] = &["id", "title", "description", "url", "rating"];

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list() -> String {
    BOOKMARK_COLUMNS
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Push a parameter and return its placeholder with cast, e.g. `$2::text`.
    fn push_param(&mut self, v: BindValue) -> String {
        let n = self.params.len() + 1;
        let ph = format!("${}::{}", n, v.cast());
        self.params.push(v);
        ph
    }
}

/// SELECT every row. No ordering is promised.
pub fn select_all() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {}", column_list(), quoted(BOOKMARKS_TABLE));
    q
}

pub fn select_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(BindValue::Int8(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        column_list(),
        quoted(BOOKMARKS_TABLE),
        quoted("id"),
        ph
    );
    q
}

/// INSERT all non-id columns; the database assigns the id. Returns the created row.
pub fn insert(new: &NewBookmark) -> QueryBuf {
    let mut q = QueryBuf::new();
    let values = [
        ("title", BindValue::Text(new.title.clone())),
        ("description", BindValue::Text(new.description.clone())),
        ("url", BindValue::Text(new.url.clone())),
        ("rating", BindValue::Int8(new.rating)),
    ];
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (col, v) in values {
        cols.push(quoted(col));
        placeholders.push(q.push_param(v));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(BOOKMARKS_TABLE),
        cols.join(", "),
        placeholders.join(", "),
        column_list()
    );
    q
}

/// UPDATE by id, setting only the fields present in the patch.
/// Returns `None` for an empty patch since there is nothing to set.
pub fn update(id: i64, patch: &BookmarkPatch) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    let fields = [
        ("title", patch.title.clone().map(BindValue::Text)),
        ("description", patch.description.clone().map(BindValue::Text)),
        ("url", patch.url.clone().map(BindValue::Text)),
        ("rating", patch.rating.map(BindValue::Int8)),
    ];
    for (col, v) in fields {
        let Some(v) = v else { continue };
        let ph = q.push_param(v);
        sets.push(format!("{} = {}", quoted(col), ph));
    }
    if sets.is_empty() {
        return None;
    }
    let id_ph = q.push_param(BindValue::Int8(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        quoted(BOOKMARKS_TABLE),
        sets.join(", "),
        quoted("id"),
        id_ph
    );
    Some(q)
}

pub fn delete(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(BindValue::Int8(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = {}",
        quoted(BOOKMARKS_TABLE),
        quoted("id"),
        ph
    );
    q
}
