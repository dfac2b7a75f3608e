//! HTTP request handlers.

pub mod health;
pub mod purge;

pub use health::health_handler;
pub use purge::purge_handler;
