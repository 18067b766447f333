//! Authentication guard resolving the request's principal.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the authenticated principal for a request.
///
/// Every resource handler calls `require()` before touching the store, so an
/// unauthenticated request never reaches resource logic.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - The session's user exists
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session's user was removed
    /// - `Err(AppError::SessionErr)` / `Err(AppError::DbErr)` - Lookup failed
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
