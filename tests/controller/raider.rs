use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use raidcomp::{
    model::{
        api::{ExportDto, NewPlayersDto},
        player::{InviteStatus, PlayerEntry},
        roster::RosterSort,
    },
    server::controller::raider::{
        add_raiders, delete_raider, export_raiders, get_raider_roles, get_raiders,
        import_raiders, replace_raiders, reset_raiders, ExportParams, RolesParams,
    },
};

use super::*;

mod get_raiders {
    use super::*;

    /// Tests a missing raiders file reads as an empty roster.
    ///
    /// Expected: 200 OK with an empty array
    #[tokio::test]
    async fn empty_without_raiders_file() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = get_raiders(State(test.into_app_state())).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, serde_json::json!([]));

        Ok(())
    }

    /// Tests a corrupt raiders file surfaces as an internal error.
    ///
    /// Expected: Err with 500 INTERNAL_SERVER_ERROR response
    #[tokio::test]
    async fn error_for_corrupt_raiders_file() -> Result<(), TestError> {
        let test = TestBuilder::new().with_raw_raiders("[{").build().await?;

        let result = get_raiders(State(test.into_app_state())).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod add_raiders {
    use super::*;

    /// Tests a single player object is appended.
    ///
    /// Expected: 200 OK and the player persisted with its status
    #[tokio::test]
    async fn adds_single_player() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let player = PlayerEntry::new("Thrall", "shaman", 1).with_status(InviteStatus::ACCEPTED);

        let result = add_raiders(
            State(test.into_app_state()),
            Json(NewPlayersDto::One(player)),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let stored = test.read_raiders().await?;
        assert_eq!(stored[0]["name"], "Thrall");
        assert_eq!(stored[0]["status"], "2");

        Ok(())
    }

    /// Tests an array of players is appended after the existing roster.
    ///
    /// Expected: 200 OK with the existing player first
    #[tokio::test]
    async fn appends_many_players() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_raiders(vec![factory::raider("Varian", "warrior", 0)])
            .build()
            .await?;

        let result = add_raiders(
            State(test.into_app_state()),
            Json(NewPlayersDto::Many(vec![
                PlayerEntry::new("Jaina", "mage", 2),
                PlayerEntry::new("Anduin", "priest", 1),
            ])),
        )
        .await;

        let resp = result.unwrap().into_response();
        let body = body_json(resp).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Varian", "Jaina", "Anduin"]);

        Ok(())
    }
}

mod delete_raider {
    use super::*;

    /// Tests deletion matches names regardless of case.
    ///
    /// Expected: 200 OK with the player removed from the file
    #[tokio::test]
    async fn deletes_ignoring_case() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_raiders(vec![
                factory::raider("Thrall", "shaman", 1),
                factory::raider("Varian", "warrior", 0),
            ])
            .build()
            .await?;

        let result = delete_raider(
            State(test.into_app_state()),
            Path("THRALL".to_string()),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let stored = test.read_raiders().await?;
        assert_eq!(stored.as_array().unwrap().len(), 1);
        assert_eq!(stored[0]["name"], "Varian");

        Ok(())
    }

    /// Tests deleting a name that is not on the roster.
    ///
    /// Expected: Err with 404 NOT_FOUND response and the file untouched
    #[tokio::test]
    async fn not_found_for_unknown_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_raiders(vec![factory::raider("Varian", "warrior", 0)])
            .build()
            .await?;
        let before = test.read_raw_raiders().await?;

        let result = delete_raider(
            State(test.into_app_state()),
            Path("thrall".to_string()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "Player not found");
        assert_eq!(test.read_raw_raiders().await?, before);

        Ok(())
    }
}

mod replace_and_reset {
    use super::*;

    /// Tests PUT replaces the whole roster.
    ///
    /// Expected: 200 OK and only the new players stored
    #[tokio::test]
    async fn replaces_roster() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_raiders(vec![factory::raider("Varian", "warrior", 0)])
            .build()
            .await?;

        let result = replace_raiders(
            State(test.into_app_state()),
            Json(vec![PlayerEntry::new("Jaina", "mage", 0)]),
        )
        .await;

        assert!(result.is_ok());
        let stored = test.read_raiders().await?;
        assert_eq!(stored.as_array().unwrap().len(), 1);
        assert_eq!(stored[0]["name"], "Jaina");

        Ok(())
    }

    /// Tests DELETE empties the roster.
    ///
    /// Expected: 204 NO_CONTENT and an empty array stored
    #[tokio::test]
    async fn resets_roster() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_raiders(vec![factory::raider("Varian", "warrior", 0)])
            .build()
            .await?;

        let result = reset_raiders(State(test.into_app_state())).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(test.read_raiders().await?, serde_json::json!([]));

        Ok(())
    }
}

mod get_raider_roles {
    use super::*;

    /// Tests the roster is grouped by role with counts and skipped entries.
    ///
    /// Expected: 200 OK with one player per known role and the unknown class skipped
    #[tokio::test]
    async fn groups_by_role() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_raiders(vec![
                factory::raider("Varian", "warrior", 0),
                factory::raider("Anduin", "priest", 1),
                factory::raider("Thrall", "shaman", 1),
                factory::raider("Garrosh", "warrior", 2),
                factory::raider("Ghost", "necromancer", 0),
            ])
            .build()
            .await?;

        let result = get_raider_roles(
            State(test.into_app_state()),
            Query(RolesParams { sort: None }),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["roles"]["tanks"][0]["name"], "Varian");
        assert_eq!(body["roles"]["healers"][0]["name"], "Anduin");
        assert_eq!(body["roles"]["rangedDps"][0]["name"], "Thrall");
        assert_eq!(body["roles"]["meleeDps"][0]["name"], "Garrosh");
        assert_eq!(body["summary"]["total"], 4);
        assert_eq!(body["summary"]["dps"], 2);
        assert_eq!(body["skipped"][0]["index"], 4);
        assert_eq!(body["skipped"][0]["reason"]["kind"], "unknownClass");

        Ok(())
    }

    /// Tests sorting by item level within a bucket.
    ///
    /// Expected: highest item level first
    #[tokio::test]
    async fn sorts_by_item_level() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_raiders(vec![
                factory::raider_with("Jaina", "mage", 0, 440, 2),
                factory::raider_with("Khadgar", "mage", 1, 455, 2),
            ])
            .build()
            .await?;

        let result = get_raider_roles(
            State(test.into_app_state()),
            Query(RolesParams {
                sort: Some(RosterSort::Ilvl),
            }),
        )
        .await;

        let body = body_json(result.unwrap().into_response()).await;
        assert_eq!(body["roles"]["rangedDps"][0]["name"], "Khadgar");
        assert_eq!(body["roles"]["rangedDps"][1]["name"], "Jaina");

        Ok(())
    }
}

mod export_import {
    use super::*;

    /// Tests export renders the roster with status codes when asked.
    ///
    /// Expected: 200 OK with one line per player
    #[tokio::test]
    async fn exports_with_status() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_raiders(vec![
                factory::raider_with("Thrall", "shaman", 1, 450, 9),
                factory::raider("Varian", "warrior", 0),
            ])
            .build()
            .await?;

        let result = export_raiders(
            State(test.into_app_state()),
            Query(ExportParams { status: Some(true) }),
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "Thrall;shaman;1;9\nVarian;warrior;0;\n");

        Ok(())
    }

    /// Tests import replaces the roster with the parsed lines.
    ///
    /// Expected: 200 OK, comment skipped and the spec name resolved
    #[tokio::test]
    async fn imports_export_text() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_raiders(vec![factory::raider("Varian", "warrior", 0)])
            .build()
            .await?;

        let result = import_raiders(
            State(test.into_app_state()),
            Json(ExportDto {
                export: "# raid\nthrall;shaman;enhancement;3\n".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
        let stored = test.read_raiders().await?;
        assert_eq!(stored.as_array().unwrap().len(), 1);
        assert_eq!(stored[0]["name"], "Thrall");
        assert_eq!(stored[0]["spec"]["id"], 2);
        assert_eq!(stored[0]["status"], "3");

        Ok(())
    }
}
