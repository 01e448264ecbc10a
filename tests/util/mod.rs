//! Shared helpers for integration tests.

pub mod session;

use crewhub::server::model::app::AppState;
use crewhub_test_utils::TestSetup;

/// Extension trait for TestSetup to build the server's AppState
pub trait TestSetupExt {
    fn into_app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        self.state::<AppState>()
    }
}

/// Reads a JSON response body.
pub async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
