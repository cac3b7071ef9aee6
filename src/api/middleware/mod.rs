//! Middleware for the API layer.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
