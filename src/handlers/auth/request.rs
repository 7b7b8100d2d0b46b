//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

/// Administrator login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}
