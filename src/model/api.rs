use serde::{Deserialize, Serialize};

/// Body returned with every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub msg: String,
}
