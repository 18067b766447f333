//! Wire-level data transfer objects shared by the API.

pub mod api;
pub mod resource;
