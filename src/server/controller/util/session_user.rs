use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::{SessionUserId, SessionUserRole, UserRole},
};

/// Retrieves the signed in user's ID from session
///
/// # Returns
/// - `Ok(String)`: User ID of the signed in user
/// - `Err(AuthError::UserNotInSession)`: No user is signed in
/// - `Err(Error)`: Session store errors
pub async fn require_user(session: &Session) -> Result<String, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    Ok(user_id)
}

/// Retrieves the signed in user's ID from session, requiring the admin role
///
/// # Returns
/// - `Ok(String)`: User ID of the signed in admin
/// - `Err(AuthError::UserNotInSession)`: No user is signed in
/// - `Err(AuthError::AdminRequired)`: The user is signed in without the admin role
/// - `Err(Error::ParseError)`: The role stored in session is not recognised
pub async fn require_admin(session: &Session) -> Result<String, Error> {
    let user_id = require_user(session).await?;

    match SessionUserRole::get(session).await? {
        Some(UserRole::Admin) => Ok(user_id),
        _ => Err(Error::AuthError(AuthError::AdminRequired(user_id))),
    }
}
