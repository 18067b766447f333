//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Client-side failures (invalid input, store rejections) are reported as
//! 412 Precondition Failed with the underlying message so callers can correct
//! the request. Infrastructure failures are reported as 500 with a generic message.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Client input failed validation before reaching the database.
    ///
    /// Results in 412 Precondition Failed with the validation message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 412 Precondition Failed with the store's message. Nothing is
    /// retried.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    ///
    /// Only raised while preparing the session store at startup. Results in
    /// 500 Internal Server Error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Request body could not be parsed as JSON of the expected shape.
    ///
    /// Results in 412 Precondition Failed.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path parameter could not be parsed, e.g. a non-integer ID.
    ///
    /// Results in 412 Precondition Failed.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound`
/// - 412 Precondition Failed - For `Validation`, `DbErr`, `JsonRejection`, `PathRejection`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto { msg })).into_response(),
            Self::Validation(err) => precondition_failed(err.to_string()),
            Self::JsonRejection(rejection) => precondition_failed(rejection.body_text()),
            Self::PathRejection(rejection) => precondition_failed(rejection.body_text()),
            Self::DbErr(err) => {
                tracing::warn!("Store operation failed: {}", err);
                precondition_failed(err.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn precondition_failed(msg: String) -> Response {
    (StatusCode::PRECONDITION_FAILED, Json(ErrorDto { msg })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                msg: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
