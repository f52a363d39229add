//! Auth guards. Both run before the handler body.
//!
//! `/login` answers 401 on bad credentials; every book route answers 400
//! when the session cookie is missing or unknown.

use axum::{
    extract::{Request, State},
    http::header::{AUTHORIZATION, COOKIE},
    middleware::Next,
    response::Response,
};
use books_security::{cookie::find_cookie, Credentials};
use books_shared::constants::MSG_INVALID_CREDENTIALS;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized(MSG_INVALID_CREDENTIALS.to_string()))?;

    let presented = Credentials::from_basic_header(header).map_err(|e| {
        debug!("Malformed Authorization header: {}", e);
        ApiError::Unauthorized(MSG_INVALID_CREDENTIALS.to_string())
    })?;

    state.books.authenticate(&presented)?;

    Ok(next.run(request).await)
}

pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = find_cookie(
        request
            .headers()
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok()),
        state.cookie_name(),
    );

    state.books.verify_session(token.as_deref())?;

    Ok(next.run(request).await)
}
