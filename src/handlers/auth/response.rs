//! Authentication response DTOs

use serde::Serialize;

/// Authentication token response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Currently authenticated administrator
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub username: String,
    pub role: String,
}
