//! Network transport port interface

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::AtlasError;

/// A raw backend response.
///
/// `status` is `None` when the transport produced a response without a
/// usable status code.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: Option<u16>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Interpret the response per the backend contract.
    ///
    /// A missing status code is `InvalidResponse`; a status outside
    /// 200..=299 surfaces the UTF-8 decoded body (empty when undecodable)
    /// as `RequestFailed`. Success carries no payload.
    pub fn ensure_success(self) -> Result<(), AtlasError> {
        let status = self.status.ok_or(AtlasError::InvalidResponse)?;
        let body = String::from_utf8(self.body).unwrap_or_default();
        tracing::debug!(status, body = %body, "backend response");

        if !(200..=299).contains(&status) {
            return Err(AtlasError::RequestFailed {
                status_code: status,
                body,
            });
        }
        Ok(())
    }
}

/// Port for posting JSON payloads to the backend.
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// POST `body` as `application/json` to `url`.
    ///
    /// Transport-level failures (DNS, TLS, connection loss) map to
    /// [`AtlasError::Transport`]; any response that arrived, whatever its
    /// status, is returned as an [`HttpResponse`].
    async fn post_json(&self, url: &str, body: Value) -> Result<HttpResponse, AtlasError>;
}
