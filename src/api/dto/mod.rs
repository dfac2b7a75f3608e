//! Data Transfer Objects for the HTTP endpoints.

pub mod health;
pub mod purge;
