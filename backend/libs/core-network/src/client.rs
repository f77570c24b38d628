//! Transport-level client trait and the in-process fake backend

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::models::{ApiPostDto, ApiUserDto, NetworkRequest, NetworkResponse};

/// Transport collaborator: executes one request, returns one response.
///
/// Implementations own any retry/timeout policy; none is applied by
/// callers in the feed pipeline.
#[async_trait]
pub trait NetworkClient: Send + Sync {
    async fn execute(&self, request: NetworkRequest) -> Result<NetworkResponse>;
}

/// In-process backend simulation.
///
/// Routes a small fixed API surface and synthesizes deterministic JSON
/// payloads from the request parameters. Unknown paths get a bodyless 404,
/// non-GET methods a 405.
#[derive(Debug, Clone, Default)]
pub struct FakeNetworkClient;

impl FakeNetworkClient {
    pub fn new() -> Self {
        Self
    }

    fn user_payload(id: i64) -> ApiUserDto {
        ApiUserDto {
            id,
            name: format!("User-{}", id),
            email: Some(format!("user{}@example.com", id)),
            is_active: true,
        }
    }

    fn post_payloads(user_id: i64, limit: usize) -> Vec<ApiPostDto> {
        (0..limit)
            .map(|i| ApiPostDto {
                id: user_id * 1_000 + i as i64,
                user_id,
                title: format!("Post {} by User-{}", i, user_id),
                body: Some(format!("Generated body for post {}", i)),
            })
            .collect()
    }
}

enum Route {
    Health,
    User(i64),
    Posts { user_id: i64, limit: usize },
    Unknown,
}

fn route(path: &str) -> Route {
    if path == "/health" {
        return Route::Health;
    }
    let Some(rest) = path.strip_prefix("/users/") else {
        return Route::Unknown;
    };
    match rest.split_once('/') {
        None => match rest.parse() {
            Ok(id) => Route::User(id),
            Err(_) => Route::Unknown,
        },
        Some((id, tail)) => {
            let Ok(user_id) = id.parse() else {
                return Route::Unknown;
            };
            let Some(limit) = tail.strip_prefix("posts?limit=") else {
                return Route::Unknown;
            };
            match limit.parse() {
                Ok(limit) => Route::Posts { user_id, limit },
                Err(_) => Route::Unknown,
            }
        }
    }
}

#[async_trait]
impl NetworkClient for FakeNetworkClient {
    async fn execute(&self, request: NetworkRequest) -> Result<NetworkResponse> {
        debug!(path = %request.path, method = %request.method, "executing fake request");
        if request.method != "GET" {
            return Ok(NetworkResponse::status(405));
        }
        let response = match route(&request.path) {
            Route::Health => NetworkResponse::ok("OK"),
            Route::User(id) => NetworkResponse::ok(serde_json::to_string(&Self::user_payload(id))?),
            Route::Posts { user_id, limit } => {
                NetworkResponse::ok(serde_json::to_string(&Self::post_payloads(user_id, limit))?)
            }
            Route::Unknown => NetworkResponse::status(404),
        };
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_route_returns_200() {
        let client = FakeNetworkClient::new();
        let response = client.execute(NetworkRequest::get("/health")).await.unwrap();
        assert_eq!(response.code, 200);
        assert_eq!(response.body.as_deref(), Some("OK"));
    }

    #[tokio::test]
    async fn test_user_route_returns_decodable_payload() {
        let client = FakeNetworkClient::new();
        let response = client
            .execute(NetworkRequest::get("/users/42"))
            .await
            .unwrap();
        assert_eq!(response.code, 200);
        let dto: ApiUserDto = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
        assert_eq!(dto.id, 42);
        assert_eq!(dto.name, "User-42");
    }

    #[tokio::test]
    async fn test_posts_route_honors_limit() {
        let client = FakeNetworkClient::new();
        let response = client
            .execute(NetworkRequest::get("/users/7/posts?limit=3"))
            .await
            .unwrap();
        let posts: Vec<ApiPostDto> =
            serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
        assert_eq!(posts.len(), 3);
        assert!(posts.iter().all(|p| p.user_id == 7));
    }

    #[tokio::test]
    async fn test_unknown_path_returns_404_without_body() {
        let client = FakeNetworkClient::new();
        let response = client
            .execute(NetworkRequest::get("/nope"))
            .await
            .unwrap();
        assert_eq!(response.code, 404);
        assert_eq!(response.body, None);
    }

    #[tokio::test]
    async fn test_non_get_method_returns_405() {
        let client = FakeNetworkClient::new();
        let request = NetworkRequest {
            path: "/users/1".to_string(),
            method: "POST".to_string(),
            body: Some("{}".to_string()),
        };
        let response = client.execute(request).await.unwrap();
        assert_eq!(response.code, 405);
    }

    #[tokio::test]
    async fn test_malformed_user_id_is_unknown_route() {
        let client = FakeNetworkClient::new();
        let response = client
            .execute(NetworkRequest::get("/users/abc"))
            .await
            .unwrap();
        assert_eq!(response.code, 404);
    }
}
