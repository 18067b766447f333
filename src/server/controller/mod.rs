//! HTTP request handlers.
//!
//! Controllers resolve the principal, convert DTOs to parameter models, call the service
//! layer and convert the resulting domain models back to DTOs.

pub mod resource;
