use thiserror::Error;

use crate::server::model::resource::ResourceKind;

/// Rejected client input, detected before anything is written to the database.
///
/// Results in a 412 Precondition Failed response carrying the error message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was not supplied at all.
    #[error("{kind}.{field} cannot be null")]
    MissingField {
        kind: ResourceKind,
        field: &'static str,
    },

    /// A field was supplied but is empty or whitespace only.
    #[error("Validation notEmpty on {field} failed")]
    EmptyField { field: &'static str },
}
