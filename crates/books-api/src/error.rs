use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use books_core::DomainError;
use books_shared::constants::{MSG_BOOK_NOT_FOUND, MSG_INVALID_COOKIE, MSG_INVALID_CREDENTIALS};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{}", MSG_INVALID_COOKIE)]
    InvalidSession,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCredentials => {
                ApiError::Unauthorized(MSG_INVALID_CREDENTIALS.to_string())
            }
            DomainError::InvalidSession => ApiError::InvalidSession,
            DomainError::BookNotFound(_) => ApiError::NotFound(MSG_BOOK_NOT_FOUND.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                StatusCode::UNAUTHORIZED
            }
            ApiError::InvalidSession => {
                tracing::warn!("Invalid session cookie");
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                StatusCode::NOT_FOUND
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                StatusCode::BAD_REQUEST
            }
        };
        let challenge = matches!(self, ApiError::Unauthorized(_));

        let body = Json(ErrorResponse {
            message: self.to_string(),
        });
        let mut response = (status, body).into_response();
        if challenge {
            response.headers_mut().insert(
                WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"books\""),
            );
        }
        response
    }
}
