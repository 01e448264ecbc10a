use sea_orm::DatabaseConnection;

use crate::server::model::auth::{AccessTokenKeys, DEFAULT_JWT_AUDIENCE};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub access_token_keys: AccessTokenKeys,
}

/// Builds state from a database connection and the auth provider's JWT secret, using the
/// default token audience.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, jwt_secret): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            access_token_keys: AccessTokenKeys::new(&jwt_secret, DEFAULT_JWT_AUDIENCE),
        }
    }
}
