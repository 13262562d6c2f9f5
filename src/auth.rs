//! Static bearer-token check applied to the bookmark routes.

use crate::error::AppError;
use crate::extractors::BearerToken;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

pub async fn require_bearer(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match token {
        Some(t) if t == state.config.api_token => Ok(next.run(request).await),
        _ => {
            tracing::warn!(path = %request.uri().path(), "unauthorized request");
            Err(AppError::Unauthorized)
        }
    }
}
