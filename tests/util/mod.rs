//! Helpers for building application state over a seeded test directory.

use axum::{body::to_bytes, response::Response};
use raidcomp::{
    model::class::ClassSpecTable,
    server::{model::app::AppState, service::build::HashPolicy},
};
use raidcomp_test_utils::TestSetup;

/// Extension trait for TestSetup to create AppState over its data files
pub trait TestSetupExt {
    fn into_app_state(&self) -> AppState;
    fn into_app_state_with_policy(&self, hash_policy: HashPolicy) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        self.into_app_state_with_policy(HashPolicy::default())
    }

    fn into_app_state_with_policy(&self, hash_policy: HashPolicy) -> AppState {
        let classes =
            ClassSpecTable::from_json(&self.classes_json).expect("Failed to parse test classes");

        AppState::new(
            classes,
            self.raiders_file.clone(),
            self.builds_file.clone(),
            hash_policy,
        )
    }
}

/// Reads a response body as UTF-8 text
pub async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

/// Reads a response body as JSON
pub async fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(resp).await).expect("Response body is not JSON")
}
