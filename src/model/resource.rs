use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A dispatcher or server as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDto {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub token: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for registering a dispatcher or server.
///
/// Every field is optional on the wire so that missing values surface as validation
/// errors instead of deserialization failures. Owner fields sent by the client are
/// not part of the DTO and are dropped during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateResourceDto {
    pub name: Option<String>,
    pub url: Option<String>,
    pub token: Option<String>,
}

/// Request body for updating a dispatcher or server.
///
/// Absent fields (`None`) are left unchanged. An explicit `null` (`Some(None)`) is kept
/// apart so it can be rejected like a missing value on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateResourceDto {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub token: Option<Option<String>>,
}

/// Marks a field as present, whether it holds a value or `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
