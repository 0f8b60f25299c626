//! Notification acknowledgement use case

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::{AtlasError, ConfigSnapshot};

use super::ports::NetworkClient;

/// Wire payload for `/functions/v1/acknowledge-notification`.
#[derive(Debug, Serialize)]
struct AcknowledgePayload<'a> {
    api_key: &'a str,
    notification_id: &'a str,
}

/// Use case for acknowledging receipt of a notification.
///
/// Stateless: no token rendezvous, no user requirement, just a typed POST.
pub struct AcknowledgeNotificationUseCase {
    network: Arc<dyn NetworkClient>,
}

impl AcknowledgeNotificationUseCase {
    pub fn new(network: Arc<dyn NetworkClient>) -> Self {
        Self { network }
    }

    /// Acknowledge the notification with the given identifier.
    ///
    /// The identifier is trimmed; an identifier that is empty after trimming
    /// fails with [`AtlasError::InvalidArgument`] before any network call.
    pub async fn execute(
        &self,
        config: &ConfigSnapshot,
        notification_id: &str,
    ) -> Result<(), AtlasError> {
        let notification_id = notification_id.trim();
        if notification_id.is_empty() {
            return Err(AtlasError::InvalidArgument(
                "notification_id is required".to_string(),
            ));
        }

        let payload = AcknowledgePayload {
            api_key: &config.api_key,
            notification_id,
        };
        let body = serde_json::to_value(&payload)
            .map_err(|e| AtlasError::InvalidArgument(format!("payload serialization: {e}")))?;

        let url = config.config.function_url("acknowledge-notification");
        debug!(%url, notification_id, "acknowledging notification");

        let response = self.network.post_json(&url, body).await?;
        response.ensure_success()
    }
}
