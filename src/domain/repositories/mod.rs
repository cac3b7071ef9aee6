//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern.
//! Concrete implementations live in `crate::infrastructure::persistence`;
//! mock implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link storage, lookup and access counters
//! - [`UserRepository`] - User accounts
//! - [`TokenRepository`] - API token authentication

pub mod link_repository;
pub mod token_repository;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use token_repository::TokenRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
