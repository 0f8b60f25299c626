//! reqwest-backed network client adapter

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::application::ports::{HttpResponse, NetworkClient};
use crate::domain::AtlasError;

/// Backend network client built on [`reqwest`].
#[derive(Default)]
pub struct ReqwestNetworkClient {
    client: reqwest::Client,
}

impl ReqwestNetworkClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NetworkClient for ReqwestNetworkClient {
    async fn post_json(&self, url: &str, body: Value) -> Result<HttpResponse, AtlasError> {
        debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AtlasError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| AtlasError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status: Some(status),
            body: body.to_vec(),
        })
    }
}
