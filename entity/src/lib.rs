//! SeaORM entity models for the orchestrator database.
//!
//! Each module mirrors one table created by the `migration` crate.

pub mod prelude;

pub mod dispatcher;
pub mod server;
pub mod user;
