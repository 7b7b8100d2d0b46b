//! Authentication service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    constants::ADMIN_ROLE,
    error::{AppError, AppResult},
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // admin username
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Issued access token
#[derive(Debug)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Check administrator credentials and issue an access token
    pub fn login(username: &str, password: &str, config: &Config) -> AppResult<IssuedToken> {
        let Some(password_hash) = config.admin.password_hash.as_deref() else {
            tracing::warn!("Login attempted but ADMIN_PASSWORD_HASH is not configured");
            return Err(AppError::InvalidCredentials);
        };

        let password_ok = Self::verify_password(password, password_hash)?;
        if username != config.admin.username || !password_ok {
            tracing::debug!(username = %username, "Login rejected");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(username = %username, "Administrator logged in");
        Self::issue_token(username, config)
    }

    /// Sign an access token for `username`
    pub fn issue_token(username: &str, config: &Config) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);

        let claims = Claims {
            sub: username.to_string(),
            role: ADMIN_ROLE.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: config.jwt.expiry_hours * 3600,
        })
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Configuration(format!("Invalid ADMIN_PASSWORD_HASH: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

    use super::*;
    use crate::config::{
        AdminConfig, DatabaseConfig, JwtConfig, LogFormat, ServerConfig, StorageBackend,
        StorageConfig,
    };

    fn test_config(password_hash: Option<String>) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                log_format: LogFormat::Pretty,
                max_request_body_bytes: 1024,
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: "test_secret_key_for_testing_only".to_string(),
                expiry_hours: 1,
            },
            admin: AdminConfig {
                username: "admin".to_string(),
                password_hash,
            },
        }
    }

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_issue_and_verify_token() {
        let config = test_config(None);
        let issued = AuthService::issue_token("admin", &config).unwrap();
        assert_eq!(issued.expires_in, 3600);

        let claims = AuthService::verify_token(&issued.token, &config.jwt.secret).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, ADMIN_ROLE);
    }

    #[test]
    fn test_token_with_wrong_secret_is_rejected() {
        let config = test_config(None);
        let issued = AuthService::issue_token("admin", &config).unwrap();

        let err = AuthService::verify_token(&issued.token, "another_secret").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
        assert!(AuthService::verify_token("not-a-jwt", &config.jwt.secret).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mut config = test_config(None);
        config.jwt.expiry_hours = -2;
        let issued = AuthService::issue_token("admin", &config).unwrap();

        let err = AuthService::verify_token(&issued.token, &config.jwt.secret).unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }

    #[test]
    fn test_login() {
        let config = test_config(Some(hash("correct horse")));

        assert!(AuthService::login("admin", "correct horse", &config).is_ok());
        assert!(matches!(
            AuthService::login("admin", "wrong", &config),
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            AuthService::login("someone", "correct horse", &config),
            Err(AppError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_disabled_without_hash() {
        let config = test_config(None);
        assert!(matches!(
            AuthService::login("admin", "anything", &config),
            Err(AppError::InvalidCredentials)
        ));
    }
}
