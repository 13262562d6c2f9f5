//! PostgreSQL implementation of the bookmark store.

use super::BookmarkStore;
use crate::error::AppError;
use crate::model::{Bookmark, BookmarkPatch, NewBookmark};
use crate::sql::{self, QueryBuf};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgBookmarkStore {
    pool: PgPool,
}

impl PgBookmarkStore {
    pub fn new(pool: PgPool) -> Self {
        PgBookmarkStore { pool }
    }

    async fn fetch_many(&self, q: &QueryBuf) -> Result<Vec<Bookmark>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Bookmark>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn fetch_optional(&self, q: &QueryBuf) -> Result<Option<Bookmark>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Bookmark>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl BookmarkStore for PgBookmarkStore {
    async fn list(&self) -> Result<Vec<Bookmark>, AppError> {
        self.fetch_many(&sql::select_all()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>, AppError> {
        self.fetch_optional(&sql::select_by_id(id)).await
    }

    async fn insert(&self, new: &NewBookmark) -> Result<Bookmark, AppError> {
        self.fetch_optional(&sql::insert(new))
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<u64, AppError> {
        match sql::update(id, patch) {
            Some(q) => self.execute(&q).await,
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        self.execute(&sql::delete(id)).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
