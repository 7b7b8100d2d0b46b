//! Authentication handler implementations

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::{
    error::AppResult, middleware::auth::AuthenticatedUser, services::AuthService,
    state::AppState,
};

use super::{
    request::LoginRequest,
    response::{AuthResponse, CurrentUserResponse},
};

/// Login with the administrator credentials
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<AuthResponse>> {
    let Json(payload) = payload?;
    payload.validate()?;

    let issued = AuthService::login(&payload.username, &payload.password, state.config())?;

    Ok(Json(AuthResponse {
        access_token: issued.token,
        token_type: "Bearer".to_string(),
        expires_in: issued.expires_in,
    }))
}

/// Report who the presented token belongs to
pub async fn get_current_user(auth_user: AuthenticatedUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        username: auth_user.username,
        role: auth_user.role,
    })
}
