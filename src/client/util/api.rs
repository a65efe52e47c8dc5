//! Calls to the roster planner API.
//!
//! Requests are only made from the browser; in any other build the transport returns an
//! error instead of touching the network.

use std::fmt;

use raidcomp::model::{
    api::{BuildHashDto, ClassifiedRosterDto, ExportDto},
    class::ClassSpecTable,
    player::PlayerEntry,
};

#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    NotFound,
    Failed(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Not found"),
            Self::Failed(message) => write!(f, "{}", message),
        }
    }
}

pub async fn get_classes() -> Result<ClassSpecTable, RequestError> {
    transport::get_json("/api/classes").await
}

pub async fn get_roster_roles(sort_by_ilvl: bool) -> Result<ClassifiedRosterDto, RequestError> {
    let url = if sort_by_ilvl {
        "/api/roster/roles?sort=ilvl"
    } else {
        "/api/roster/roles"
    };

    transport::get_json(url).await
}

pub async fn add_player(player: PlayerEntry) -> Result<Vec<PlayerEntry>, RequestError> {
    transport::post_json("/api/raiders", &player).await
}

pub async fn delete_player(name: String) -> Result<Vec<PlayerEntry>, RequestError> {
    transport::delete_json(&format!("/api/raiders/{}", name.to_lowercase())).await
}

/// Empties the stored roster
pub async fn reset_roster() -> Result<(), RequestError> {
    transport::delete_empty("/api/raiders").await
}

pub async fn import_roster(export: String) -> Result<Vec<PlayerEntry>, RequestError> {
    transport::post_json("/api/roster/import", &ExportDto { export }).await
}

/// Stored roster as export text, status codes included when `with_status` is set
pub async fn export_roster(with_status: bool) -> Result<String, RequestError> {
    transport::get_text(&format!("/api/roster/export?status={}", with_status)).await
}

pub async fn save_build(export: String) -> Result<BuildHashDto, RequestError> {
    transport::post_json("/api/build", &ExportDto { export }).await
}

/// Players of a saved build, `None` when the hash is unknown
pub async fn get_build_roster(hash: String) -> Result<Option<Vec<PlayerEntry>>, RequestError> {
    match transport::get_json(&format!("/api/build/{}/roster", hash)).await {
        Ok(roster) => Ok(Some(roster)),
        Err(RequestError::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(feature = "web")]
mod transport {
    use reqwasm::http::{Request, RequestCredentials};
    use serde::{de::DeserializeOwned, Serialize};

    use raidcomp::model::api::ErrorDto;

    use super::RequestError;

    pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, RequestError> {
        send(Request::get(url)).await
    }

    pub async fn delete_json<T: DeserializeOwned>(url: &str) -> Result<T, RequestError> {
        send(Request::delete(url)).await
    }

    pub async fn delete_empty(url: &str) -> Result<(), RequestError> {
        let response = Request::delete(url)
            .credentials(RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| RequestError::Failed(format!("Failed to send request: {}", e)))?;

        match response.status() {
            200 | 204 => Ok(()),
            404 => Err(RequestError::NotFound),
            status => Err(RequestError::Failed(format!(
                "Request failed with status {}",
                status
            ))),
        }
    }

    pub async fn get_text(url: &str) -> Result<String, RequestError> {
        let response = Request::get(url)
            .credentials(RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| RequestError::Failed(format!("Failed to send request: {}", e)))?;

        match response.status() {
            200 => response
                .text()
                .await
                .map_err(|e| RequestError::Failed(format!("Failed to read response: {}", e))),
            404 => Err(RequestError::NotFound),
            status => Err(RequestError::Failed(format!(
                "Request failed with status {}",
                status
            ))),
        }
    }

    pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)
            .map_err(|e| RequestError::Failed(format!("Failed to serialize request: {}", e)))?;

        send(
            Request::post(url)
                .header("Content-Type", "application/json")
                .body(body),
        )
        .await
    }

    async fn send<T: DeserializeOwned>(request: Request) -> Result<T, RequestError> {
        let response = request
            .credentials(RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| RequestError::Failed(format!("Failed to send request: {}", e)))?;

        match response.status() {
            200 => response
                .json::<T>()
                .await
                .map_err(|e| RequestError::Failed(format!("Failed to parse response: {}", e))),
            404 => Err(RequestError::NotFound),
            status => {
                let message = match response.json::<ErrorDto>().await {
                    Ok(error_dto) => error_dto.error,
                    Err(_) => "Unknown error".to_string(),
                };

                Err(RequestError::Failed(format!(
                    "Request failed with status {}: {}",
                    status, message
                )))
            }
        }
    }
}

#[cfg(not(feature = "web"))]
mod transport {
    use serde::{de::DeserializeOwned, Serialize};

    use super::RequestError;

    fn unavailable() -> RequestError {
        RequestError::Failed("API requests are only available in the browser".to_string())
    }

    pub async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, RequestError> {
        Err(unavailable())
    }

    pub async fn delete_json<T: DeserializeOwned>(_url: &str) -> Result<T, RequestError> {
        Err(unavailable())
    }

    pub async fn delete_empty(_url: &str) -> Result<(), RequestError> {
        Err(unavailable())
    }

    pub async fn get_text(_url: &str) -> Result<String, RequestError> {
        Err(unavailable())
    }

    pub async fn post_json<B, T>(_url: &str, _body: &B) -> Result<T, RequestError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        Err(unavailable())
    }
}
