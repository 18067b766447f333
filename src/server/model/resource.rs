//! Domain & parameter models for owner-scoped resources.
//!
//! Dispatchers and servers share one shape, so a single `Resource` domain model and one
//! pair of parameter models serve both kinds. Parameter models can only be built from
//! validated input: `name`, `url` and `token` are wrapped in `NonBlank`, which makes it
//! impossible for the data layer to receive a blank value.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::resource::{CreateResourceDto, ResourceDto, UpdateResourceDto},
    server::error::validation::ValidationError,
};

/// The two kinds of owner-scoped resources exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Dispatcher,
    Server,
}

impl ResourceKind {
    /// Singular name used in error messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dispatcher => "Dispatcher",
            Self::Server => "Server",
        }
    }

    /// Collection path the kind is mounted under.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dispatcher => "/dispatchers",
            Self::Server => "/servers",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dispatcher or server row owned by a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub token: String,
    /// ID of the owning user.
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    /// Converts the resource domain model to a DTO for API responses.
    pub fn into_dto(self) -> ResourceDto {
        ResourceDto {
            id: self.id,
            name: self.name,
            url: self.url,
            token: self.token,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A string value that contains at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonBlank(String);

impl NonBlank {
    /// Validates that `value` is not blank.
    ///
    /// The value is stored as given, surrounding whitespace included.
    ///
    /// # Arguments
    /// - `field` - Name of the field being validated, used in the error
    /// - `value` - Raw value supplied by the client
    ///
    /// # Returns
    /// - `Ok(NonBlank)` - The value has at least one non-whitespace character
    /// - `Err(ValidationError::EmptyField)` - The value is empty or whitespace only
    pub fn parse(field: &'static str, value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField { field });
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Parameters for creating a new resource.
///
/// The owner is always the authenticated principal; it is never read from the request.
#[derive(Debug, Clone)]
pub struct CreateResourceParam {
    /// ID of the user that will own the resource.
    pub user_id: i32,
    pub name: NonBlank,
    pub url: NonBlank,
    pub token: NonBlank,
}

impl CreateResourceParam {
    /// Validates a create DTO and stamps it with the principal's ID.
    ///
    /// Fields are checked in the order `name`, `url`, `token`; the first failure is
    /// returned.
    ///
    /// # Arguments
    /// - `kind` - Kind of resource being created, used in error messages
    /// - `user_id` - ID of the authenticated principal
    /// - `dto` - Request body
    ///
    /// # Returns
    /// - `Ok(CreateResourceParam)` - All required fields present and non-blank
    /// - `Err(ValidationError::MissingField)` - A required field was not supplied
    /// - `Err(ValidationError::EmptyField)` - A required field was blank
    pub fn from_dto(
        kind: ResourceKind,
        user_id: i32,
        dto: CreateResourceDto,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id,
            name: required(kind, "name", dto.name)?,
            url: required(kind, "url", dto.url)?,
            token: required(kind, "token", dto.token)?,
        })
    }
}

/// Parameters for updating an existing resource.
///
/// `id` and `user_id` select the row; only the optional fields are written.
#[derive(Debug, Clone)]
pub struct UpdateResourceParam {
    pub id: i32,
    /// ID of the authenticated principal; rows owned by anyone else are never touched.
    pub user_id: i32,
    pub name: Option<NonBlank>,
    pub url: Option<NonBlank>,
    pub token: Option<NonBlank>,
}

impl UpdateResourceParam {
    /// Validates an update DTO for the row `id` owned by `user_id`.
    ///
    /// Each supplied field must be non-null and non-blank; absent fields stay unchanged.
    ///
    /// # Returns
    /// - `Ok(UpdateResourceParam)` - Every supplied field is non-blank
    /// - `Err(ValidationError::MissingField)` - A field was sent as `null`
    /// - `Err(ValidationError::EmptyField)` - A supplied field was blank
    pub fn from_dto(
        kind: ResourceKind,
        id: i32,
        user_id: i32,
        dto: UpdateResourceDto,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            user_id,
            name: optional(kind, "name", dto.name)?,
            url: optional(kind, "url", dto.url)?,
            token: optional(kind, "token", dto.token)?,
        })
    }
}

fn required(
    kind: ResourceKind,
    field: &'static str,
    value: Option<String>,
) -> Result<NonBlank, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField { kind, field })?;
    NonBlank::parse(field, value)
}

fn optional(
    kind: ResourceKind,
    field: &'static str,
    value: Option<Option<String>>,
) -> Result<Option<NonBlank>, ValidationError> {
    value.map(|v| required(kind, field, v)).transpose()
}
