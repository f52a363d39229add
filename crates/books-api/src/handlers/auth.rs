//! Login handler

use axum::{extract::State, Json};

use crate::dto::LoginResponse;
use crate::state::AppState;

/// Login handler - GET /login
///
/// Credentials are checked by `require_basic_auth` before this runs.
pub async fn login(State(state): State<AppState>) -> Json<LoginResponse> {
    let token = state.books.open_session();
    Json(LoginResponse {
        auth_cookie: token.into_inner(),
    })
}
