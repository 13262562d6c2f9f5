//! Shared helpers: an in-memory `BookmarkStore`, fixtures, and a request driver.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use bookmarks_api::{
    build_router, ApiConfig, AppError, AppState, Bookmark, BookmarkPatch, BookmarkStore, NewBookmark,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TOKEN: &str = "b08141cf-3086-42fd-9345-815aafe43c00";

#[derive(Default)]
struct Table {
    rows: Vec<Bookmark>,
    next_id: i64,
}

/// Store double with database-like id assignment: ids start above any seeded row and are never reused.
#[derive(Clone, Default)]
pub struct MemoryStore {
    table: Arc<Mutex<Table>>,
    fail: bool,
}

impl MemoryStore {
    pub fn seeded(rows: Vec<Bookmark>) -> Self {
        let next_id = rows.iter().map(|b| b.id).max().unwrap_or(0);
        MemoryStore {
            table: Arc::new(Mutex::new(Table { rows, next_id })),
            fail: false,
        }
    }

    /// A store whose every call fails like a lost connection.
    pub fn broken() -> Self {
        MemoryStore {
            fail: true,
            ..Default::default()
        }
    }

    pub fn rows(&self) -> Vec<Bookmark> {
        self.table.lock().unwrap().rows.clone()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Bookmark>, AppError> {
        self.check()?;
        Ok(self.rows())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, AppError> {
        self.check()?;
        Ok(self.table.lock().unwrap().rows.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, new: &NewBookmark) -> Result<Bookmark, AppError> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let row = new.clone().into_bookmark(table.next_id);
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<u64, AppError> {
        self.check()?;
        if patch.is_empty() {
            return Ok(0);
        }
        let mut table = self.table.lock().unwrap();
        match table.rows.iter_mut().find(|b| b.id == id) {
            Some(row) => {
                patch.apply_to(row);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        self.check()?;
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|b| b.id != id);
        Ok((before - table.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn make_bookmarks() -> Vec<Bookmark> {
    vec![
        Bookmark {
            id: 1,
            title: "Rust".into(),
            description: "The Rust programming language".into(),
            url: "https://www.rust-lang.org".into(),
            rating: 5,
        },
        Bookmark {
            id: 2,
            title: "Tokio".into(),
            description: "Asynchronous runtime".into(),
            url: "https://tokio.rs".into(),
            rating: 4,
        },
        Bookmark {
            id: 3,
            title: "crates.io".into(),
            description: "Package registry".into(),
            url: "https://crates.io".into(),
            rating: 3,
        },
        Bookmark {
            id: 4,
            title: "docs.rs".into(),
            description: "Crate documentation".into(),
            url: "https://docs.rs".into(),
            rating: 4,
        },
    ]
}

pub fn test_config() -> ApiConfig {
    ApiConfig::new(TOKEN).with_public_url("http://localhost:8000")
}

pub fn app_with(store: MemoryStore) -> Router {
    build_router(AppState::new(store, test_config()))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub raw: Vec<u8>,
}

/// Send one request with the valid bearer token.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    send_with_auth(app, method, uri, body, Some(&format!("Bearer {}", TOKEN))).await
}

pub async fn send_with_auth(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    authorization: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = authorization {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let raw = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec();
    let body = if raw.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&raw).unwrap_or(Value::Null)
    };
    TestResponse {
        status,
        headers,
        body,
        raw,
    }
}

pub fn to_json(bookmarks: &[Bookmark]) -> Value {
    serde_json::to_value(bookmarks).expect("bookmarks serialize")
}
