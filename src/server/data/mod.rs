//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! entity types out of the service and controller layers.

pub mod resource;
pub mod user;
