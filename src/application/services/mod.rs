//! Application services orchestrating domain operations.

pub mod auth_service;
pub mod link_service;

pub use auth_service::{AuthContext, AuthService, hash_token};
pub use link_service::{LinkPage, LinkService, Resolution};
