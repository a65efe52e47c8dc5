use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use raidcomp::{
    model::api::ExportDto,
    server::{
        controller::build::{get_build, get_build_roster, save_build},
        service::build::{short_hash, HashPolicy},
    },
};

use super::*;

fn export(text: &str) -> Json<ExportDto> {
    Json(ExportDto {
        export: text.to_string(),
    })
}

mod save_build {
    use super::*;

    /// Tests a saved build can be fetched back unchanged.
    ///
    /// Expected: 200 OK with a 7 character hash, then the exact export text
    #[tokio::test]
    async fn saves_and_returns_export() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let state = test.into_app_state();

        let result = save_build(State(state.clone()), export("Thrall;shaman;1;2\n")).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let hash = body_json(resp).await["hash"]
            .as_str()
            .unwrap()
            .to_string();
        assert_eq!(hash, short_hash("Thrall;shaman;1;2\n", 7));

        let resp = get_build(State(state), Path(hash))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "Thrall;shaman;1;2\n");

        Ok(())
    }

    /// Tests an empty export is saved like any other text.
    ///
    /// Expected: 200 OK, then an empty body from the returned hash
    #[tokio::test]
    async fn saves_empty_export() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let state = test.into_app_state();

        let result = save_build(State(state.clone()), export("")).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let hash = body_json(resp).await["hash"]
            .as_str()
            .unwrap()
            .to_string();

        let resp = get_build(State(state), Path(hash))
            .await
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "");

        Ok(())
    }

    /// Tests a taken short hash moves the build to the 8 character re-hash.
    ///
    /// Expected: 200 OK with the re-hash and the existing build untouched
    #[tokio::test]
    async fn rehashes_on_collision() -> Result<(), TestError> {
        let h0 = short_hash("Thrall;shaman;1\n", 7);
        let test = TestBuilder::new()
            .with_builds(vec![(h0.as_str(), "Varian;warrior;0\n")])
            .build()
            .await?;

        let result = save_build(State(test.into_app_state()), export("Thrall;shaman;1\n")).await;

        let hash = body_json(result.unwrap().into_response()).await["hash"]
            .as_str()
            .unwrap()
            .to_string();
        assert_eq!(hash, short_hash(&h0, 8));

        let stored = test.read_builds().await?;
        assert_eq!(stored[h0.as_str()], "Varian;warrior;0\n");
        assert_eq!(stored[hash.as_str()], "Thrall;shaman;1\n");

        Ok(())
    }

    /// Tests the single re-hash policy gives up when the re-hash is taken too.
    ///
    /// Expected: Err with 500 INTERNAL_SERVER_ERROR response
    #[tokio::test]
    async fn error_when_rehash_taken() -> Result<(), TestError> {
        let h0 = short_hash("Thrall;shaman;1\n", 7);
        let h1 = short_hash(&h0, 8);
        let test = TestBuilder::new()
            .with_builds(vec![(h0.as_str(), "a\n"), (h1.as_str(), "b\n")])
            .build()
            .await?;

        let result = save_build(
            State(test.into_app_state_with_policy(HashPolicy::SingleRehash)),
            export("Thrall;shaman;1\n"),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod get_build {
    use super::*;

    /// Tests an unknown hash.
    ///
    /// Expected: Err with 404 NOT_FOUND response
    #[tokio::test]
    async fn not_found_for_unknown_hash() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = get_build(State(test.into_app_state()), Path("0000000".to_string())).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "Build not found");

        Ok(())
    }
}

mod get_build_roster {
    use super::*;

    /// Tests a stored build is parsed into players.
    ///
    /// Expected: 200 OK with the players and their statuses
    #[tokio::test]
    async fn returns_players() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_builds(vec![("abc1234", "Thrall;shaman;1;9\nVarian;warrior;0;2\n")])
            .build()
            .await?;

        let result =
            get_build_roster(State(test.into_app_state()), Path("abc1234".to_string())).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body[0]["name"], "Thrall");
        assert_eq!(body[0]["status"], "9");
        assert_eq!(body[1]["spec"]["id"], 0);

        Ok(())
    }

    /// Tests an unknown hash.
    ///
    /// Expected: Err with 404 NOT_FOUND response
    #[tokio::test]
    async fn not_found_for_unknown_hash() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result =
            get_build_roster(State(test.into_app_state()), Path("0000000".to_string())).await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::NOT_FOUND
        );

        Ok(())
    }
}
