//! Request and response shapes for the API layer.
//!
//! Shapes are shared between the server handlers and the frontend; field
//! presence and format constraints are enforced with `validator` derives.

pub mod health;
pub mod links;
pub mod resolve;
pub mod stats;
