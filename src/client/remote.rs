//! The backend as seen from the client.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::post::post_model::{Post, PostEnvelope, PostsDocument};
use crate::user::model::{LoginRequest, LoginResponse};

#[derive(Debug, Error)]
pub enum RemoteError {
    /// The service could not be reached
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("{message} ({status})")]
    Rejected { status: u16, message: String },

    /// The service answered 2xx with a body we can't read
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait PostApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, RemoteError>;

    async fn create_post(&self, token: &str, post: &Post) -> Result<Post, RemoteError>;

    async fn login(&self, credentials: &LoginRequest) -> Result<String, RemoteError>;
}

/// reqwest-backed client for the post store service
pub struct HttpPostApi {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl HttpPostApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn parse<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(RemoteError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PostApi for HttpPostApi {
    async fn list_posts(&self) -> Result<Vec<Post>, RemoteError> {
        let url = self.url("/api/posts");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self::parse::<PostsDocument>(response).await?.posts)
    }

    async fn create_post(&self, token: &str, post: &Post) -> Result<Post, RemoteError> {
        let url = self.url("/api/posts");
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(post)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self::parse::<PostEnvelope>(response).await?.post)
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<String, RemoteError> {
        let url = self.url("/api/login");
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self::parse::<LoginResponse>(response).await?.token)
    }
}
