//! Bookmark handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::model::Bookmark;
use crate::serializer::{serialize_bookmark, BookmarkView};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

pub const BODY_NOT_OBJECT_MESSAGE: &str = "Request body must be a JSON object";

/// Ids that do not parse as integers cannot match a row.
fn parse_id(id_str: &str) -> Option<i64> {
    id_str.parse().ok()
}

/// A body sent without a JSON content type is treated as an empty object.
fn body_to_map(body: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, AppError> {
    match body {
        Ok(Json(Value::Object(m))) => Ok(m),
        Ok(_) => Err(AppError::BadRequest(BODY_NOT_OBJECT_MESSAGE.into())),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Map::new()),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!("request body over limit");
            Err(AppError::PayloadTooLarge)
        }
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "unreadable request body");
            Err(AppError::BadRequest(BODY_NOT_OBJECT_MESSAGE.into()))
        }
    }
}

/// Shared lookup for every item route.
async fn load_or_404(state: &AppState, id_str: &str) -> Result<Bookmark, AppError> {
    let found = match parse_id(id_str) {
        Some(id) => state.store.get_by_id(id).await?,
        None => None,
    };
    found.ok_or_else(|| {
        tracing::warn!(id = %id_str, "bookmark not found");
        AppError::NotFound
    })
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list().await?;
    let data: Vec<BookmarkView> = rows.iter().map(serialize_bookmark).collect();
    Ok((StatusCode::OK, Json(data)))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let new = RequestValidator::validate_create(&body)?;
    let row = state.store.insert(&new).await?;
    tracing::info!(id = row.id, "bookmark created");
    let location = state.config.item_location(row.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(serialize_bookmark(&row)),
    ))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let row = load_or_404(&state, &id_str).await?;
    Ok((StatusCode::OK, Json(serialize_bookmark(&row))))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load_or_404(&state, &id_str).await?;
    let body = body_to_map(body)?;
    let patch = RequestValidator::validate_patch(&body)?;
    let affected = state.store.update(existing.id, &patch).await?;
    tracing::info!(id = existing.id, affected, "bookmark updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let existing = load_or_404(&state, &id_str).await?;
    let affected = state.store.delete(existing.id).await?;
    tracing::info!(id = existing.id, affected, "bookmark deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_ids_do_not_parse() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("1.5"), None);
    }

    #[test]
    fn non_object_body_is_a_bad_request() {
        let err = body_to_map(Ok(Json(serde_json::json!([1, 2])))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == BODY_NOT_OBJECT_MESSAGE));
    }
}
