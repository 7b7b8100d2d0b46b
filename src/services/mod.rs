//! Business logic services

pub mod auth_service;
pub mod contest_service;

pub use auth_service::AuthService;
pub use contest_service::ContestService;
