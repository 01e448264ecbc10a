use crewhub::server::model::session::user::{SessionUserId, SessionUserRole, UserRole};
use tower_sessions::Session;

/// Puts a signed in volunteer into the session.
pub async fn sign_in_volunteer(session: &Session, user_id: &str) {
    SessionUserId::insert(session, user_id).await.unwrap();
    SessionUserRole::insert(session, UserRole::Volunteer)
        .await
        .unwrap();
}

/// Puts a signed in admin into the session.
pub async fn sign_in_admin(session: &Session, user_id: &str) {
    SessionUserId::insert(session, user_id).await.unwrap();
    SessionUserRole::insert(session, UserRole::Admin)
        .await
        .unwrap();
}
