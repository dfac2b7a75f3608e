//! HTTP layer for the purge webhook.
//!
//! # Modules
//!
//! - [`dto`] - Query parameter parsing and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
