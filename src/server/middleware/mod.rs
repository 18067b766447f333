//! Request guards and session wrappers.

pub mod auth;
pub mod session;
