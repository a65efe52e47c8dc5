use axum::{extract::State, http::StatusCode, response::IntoResponse};
use raidcomp::server::controller::class::get_classes;

use super::*;

/// Tests the class table is returned as loaded.
///
/// Expected: 200 OK with every class of the table keyed by identifier
#[tokio::test]
async fn returns_class_table() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_classes(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["warrior"]["specs"][0]["role"], "tank");
    assert_eq!(body["shaman"]["specs"][1]["range"], "ranged");
    assert!(body.get("necromancer").is_none());

    Ok(())
}
