use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the request's session.
    ///
    /// The caller never logged in, or the session expired. Results in a 401
    /// Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} stored in session was not found in the database")]
    UserNotInDatabase(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized with a generic message. The specific
/// reason is logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                msg: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
