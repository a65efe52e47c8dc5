//! Requests sent through the full API router, path matching included.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use raidcomp::server::router::routes;
use raidcomp_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, body_text, TestSetupExt};

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

mod delete_raider {
    use super::*;

    /// Tests players named like the roster endpoints can still be deleted.
    ///
    /// Expected: 200 OK for each name and an empty roster afterwards
    #[tokio::test]
    async fn deletes_players_named_like_endpoints() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_raiders(vec![
                factory::raider("Roles", "warrior", 0),
                factory::raider("Export", "priest", 1),
                factory::raider("Import", "mage", 0),
            ])
            .build()
            .await?;
        let app = routes().with_state(test.into_app_state());

        for name in ["roles", "export", "import"] {
            let resp = app
                .clone()
                .oneshot(request(Method::DELETE, &format!("/api/raiders/{}", name)))
                .await
                .unwrap();

            assert_eq!(resp.status(), StatusCode::OK, "deleting {}", name);
        }

        assert_eq!(test.read_raiders().await?, serde_json::json!([]));

        Ok(())
    }

    /// Tests an unknown name through the router.
    ///
    /// Expected: 404 NOT_FOUND
    #[tokio::test]
    async fn not_found_for_unknown_name() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let app = routes().with_state(test.into_app_state());

        let resp = app
            .oneshot(request(Method::DELETE, "/api/raiders/thrall"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod roster_endpoints {
    use super::*;

    /// Tests the grouped roster and export are served from the roster paths.
    ///
    /// Expected: 200 OK with the classification and export text
    #[tokio::test]
    async fn serves_roles_and_export() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_raiders(vec![factory::raider("Varian", "warrior", 0)])
            .build()
            .await?;
        let app = routes().with_state(test.into_app_state());

        let resp = app
            .clone()
            .oneshot(request(Method::GET, "/api/roster/roles?sort=ilvl"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["roles"]["tanks"][0]["name"], "Varian");

        let resp = app
            .oneshot(request(Method::GET, "/api/roster/export"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "Varian;warrior;0\n");

        Ok(())
    }
}
