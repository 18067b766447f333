//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter models carry validated
//! input from controllers down to the data layer.

pub mod resource;
pub mod user;
