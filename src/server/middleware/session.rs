//! Type-safe session access.
//!
//! The session is written by the external login service and read by this API. Keeping
//! the key in one place keeps both sides agreeing on where the principal is stored.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Session key holding the authenticated user's ID.
const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Reads and writes the authenticated user's ID.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session.
    ///
    /// Writes the same key the external login service does. Tests use it to log a
    /// user in.
    ///
    /// # Arguments
    /// - `user_id` - ID of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    #[cfg(test)]
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }
}
