//! Request body validation for bookmark create and update.

use crate::error::AppError;
use crate::model::{BookmarkPatch, NewBookmark};
use serde_json::{Map, Value};

/// Fields a creation body must carry, checked in this order.
pub const REQUIRED_FIELDS: &[&str] = &["title", "description", "url", "rating"];

/// Fields a partial update may change. Anything else in the body is ignored.
pub const UPDATABLE_FIELDS: &[&str] = &["title", "description", "url", "rating"];

pub const EMPTY_PATCH_MESSAGE: &str =
    "Request body must contain either 'title', 'description', 'url', or 'rating'";

/// A field counts as present when it is set, not null and, for strings, not empty.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Stricter rule for partial updates: `false`, `0` and `""` are not a supplied value.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(_) => true,
    }
}

/// First field of `required` missing from `body`, in declaration order.
pub fn first_missing<'a>(body: &Map<String, Value>, required: &[&'a str]) -> Option<&'a str> {
    required.iter().copied().find(|field| !is_present(body.get(*field)))
}

type Supplied = fn(Option<&Value>) -> bool;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a creation body: every required field present, then typed.
    pub fn validate_create(body: &Map<String, Value>) -> Result<NewBookmark, AppError> {
        if let Some(field) = first_missing(body, REQUIRED_FIELDS) {
            tracing::warn!(field, "create rejected: missing field");
            return Err(AppError::Validation(format!("Missing '{}' in request body", field)));
        }
        Ok(NewBookmark {
            title: text_field(body, "title", is_present)?.unwrap_or_default(),
            description: text_field(body, "description", is_present)?.unwrap_or_default(),
            url: text_field(body, "url", is_present)?.unwrap_or_default(),
            rating: rating_field(body, is_present)?.unwrap_or_default(),
        })
    }

    /// Validate a partial update: at least one updatable field truthy. Falsy fields are left out.
    pub fn validate_patch(body: &Map<String, Value>) -> Result<BookmarkPatch, AppError> {
        if !UPDATABLE_FIELDS.iter().any(|f| is_truthy(body.get(*f))) {
            tracing::warn!("update rejected: no updatable field");
            return Err(AppError::Validation(EMPTY_PATCH_MESSAGE.into()));
        }
        Ok(BookmarkPatch {
            title: text_field(body, "title", is_truthy)?,
            description: text_field(body, "description", is_truthy)?,
            url: text_field(body, "url", is_truthy)?,
            rating: rating_field(body, is_truthy)?,
        })
    }
}

/// `Some` when the field is supplied and a string; unsupplied fields yield `None`.
fn text_field(body: &Map<String, Value>, field: &str, supplied: Supplied) -> Result<Option<String>, AppError> {
    let v = body.get(field);
    if !supplied(v) {
        return Ok(None);
    }
    match v {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        _ => Err(AppError::Validation(format!("'{}' must be a string", field))),
    }
}

fn rating_field(body: &Map<String, Value>, supplied: Supplied) -> Result<Option<i64>, AppError> {
    let v = body.get("rating");
    if !supplied(v) {
        return Ok(None);
    }
    match v {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(rating) => Ok(Some(rating)),
            None if n.as_f64().is_some_and(|f| f.fract() == 0.0) => {
                Err(AppError::Validation("'rating' is out of range".into()))
            }
            None => Err(AppError::Validation("'rating' must be an integer".into())),
        },
        _ => Err(AppError::Validation("'rating' must be an integer".into())),
    }
}
