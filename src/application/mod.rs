//! Application layer services implementing the purge workflow.
//!
//! Services consume the client traits from [`crate::domain::clients`] and
//! provide a transport-independent API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::purge_service::PurgeService`] - Resolve a page and purge its URLs
//! - [`services::auth_service::AuthService`] - Shared public key check for webhook calls

pub mod services;
