//! API-level client trait layered over a transport

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::NetworkClient;
use crate::error::{NetworkError, Result};
use crate::models::{ApiPostDto, ApiUserDto, NetworkRequest};

/// API collaborator consumed by feed repositories.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get_user(&self, id: i64) -> Result<ApiUserDto>;

    async fn get_posts(&self, user_id: i64, page_size: usize) -> Result<Vec<ApiPostDto>>;
}

/// `ApiClient` over any `NetworkClient`.
///
/// Issues exactly one request per call and decodes the JSON body; there is
/// no retry or recovery on failure.
#[derive(Clone)]
pub struct FakeApiService {
    client: Arc<dyn NetworkClient>,
}

impl FakeApiService {
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        Self { client }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: String) -> Result<T> {
        let response = self.client.execute(NetworkRequest::get(&path)).await?;
        if response.code != 200 {
            return Err(NetworkError::UnexpectedStatus {
                path,
                code: response.code,
            });
        }
        let body = response
            .body
            .ok_or_else(|| NetworkError::EmptyBody { path: path.clone() })?;
        debug!(%path, bytes = body.len(), "decoded api response");
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ApiClient for FakeApiService {
    async fn get_user(&self, id: i64) -> Result<ApiUserDto> {
        self.fetch_json(format!("/users/{}", id)).await
    }

    async fn get_posts(&self, user_id: i64, page_size: usize) -> Result<Vec<ApiPostDto>> {
        self.fetch_json(format!("/users/{}/posts?limit={}", user_id, page_size))
            .await
    }
}
