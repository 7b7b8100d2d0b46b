//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default maximum accepted request body size (1 MiB)
pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Longest accepted JWT lifetime in hours (one year)
pub const MAX_JWT_EXPIRY_HOURS: i64 = 24 * 365;

/// Default administrator username
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Role carried by tokens issued through the login endpoint
pub const ADMIN_ROLE: &str = "admin";

// =============================================================================
// CONTEST CONSTRAINTS
// =============================================================================

/// Earliest accepted contest year (inclusive)
pub const MIN_CONTEST_YEAR: i32 = 2000;

/// Latest accepted contest year (inclusive)
pub const MAX_CONTEST_YEAR: i32 = 2100;

/// Class levels
pub mod class_levels {
    pub const NINE: &str = "9";
    pub const TEN: &str = "10";
    pub const ELEVEN: &str = "11";
    pub const TWELVE: &str = "12";
    pub const OTHER: &str = "other";

    pub const ALL: &[&str] = &[NINE, TEN, ELEVEN, TWELVE, OTHER];
}
