//! Core business entities.

pub mod short_link;
pub mod user;

pub use short_link::{NewShortLink, ShortLink};
pub use user::{ApiToken, NewUser, User};
