//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! runtime-bound prepared statements.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage, lookup and access counters
//! - [`PgUserRepository`] - User accounts
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_link_repository;
pub mod pg_token_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
