//! User domain model.
//!
//! Users are created by the external authentication service. The API only loads them
//! to turn the ID stored in a session into a verified principal.

/// An authenticated principal.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Stable identity used to scope every resource operation.
    pub id: i32,
    /// Display name of the user.
    pub name: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
