//! Business logic services for the application layer.

pub mod auth_service;
pub mod purge_service;

pub use auth_service::AuthService;
pub use purge_service::PurgeService;
