use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "crewhub:user:id";
pub const SESSION_USER_ROLE_KEY: &str = "crewhub:user:role";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: &str) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(user_id)| user_id))
    }
}

/// Role of the signed in user, captured from the access token at sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Volunteer,
    Admin,
}

impl UserRole {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Admin => "admin",
        }
    }
}

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserRole(pub String);

impl SessionUserRole {
    /// Insert user role into session
    pub async fn insert(session: &Session, role: UserRole) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ROLE_KEY, SessionUserRole(role.as_str().to_string()))
            .await?;

        Ok(())
    }

    /// Get user role from session
    pub async fn get(session: &Session) -> Result<Option<UserRole>, Error> {
        session
            .get::<SessionUserRole>(SESSION_USER_ROLE_KEY)
            .await?
            .map(|SessionUserRole(role)| match role.as_str() {
                "volunteer" => Ok(UserRole::Volunteer),
                "admin" => Ok(UserRole::Admin),
                other => Err(Error::ParseError(format!(
                    "Failed to parse session user role: {}",
                    other
                ))),
            })
            .transpose()
    }
}
