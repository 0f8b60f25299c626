//! Device registration use case
//!
//! Sequences the full registration flow: permission prompt, OS-level
//! registration trigger, token rendezvous wait, backend POST. Linear, no
//! retries; the first failing step short-circuits the rest.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::domain::{AtlasError, AuthSnapshot, DeviceToken};

use super::ports::{
    DeviceTokenProvider, LocaleProvider, NetworkClient, PermissionRequester, PlatformProvider,
    RemoteRegistrar,
};

/// How long to wait for the OS to deliver a device token when the caller
/// does not override the timeout.
pub const DEFAULT_TOKEN_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire payload for `/functions/v1/register-device`.
///
/// The API key travels in the body, not a header.
#[derive(Debug, Serialize)]
struct RegisterDevicePayload<'a> {
    api_key: &'a str,
    user_id: &'a str,
    device_token: &'a str,
    platform: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
}

/// Use case for registering the device with the backend.
pub struct RegisterDeviceUseCase {
    network: Arc<dyn NetworkClient>,
    permissions: Arc<dyn PermissionRequester>,
    registrar: Arc<dyn RemoteRegistrar>,
    tokens: Arc<dyn DeviceTokenProvider>,
    platform: Arc<dyn PlatformProvider>,
    locale: Arc<dyn LocaleProvider>,
}

impl RegisterDeviceUseCase {
    pub fn new(
        network: Arc<dyn NetworkClient>,
        permissions: Arc<dyn PermissionRequester>,
        registrar: Arc<dyn RemoteRegistrar>,
        tokens: Arc<dyn DeviceTokenProvider>,
        platform: Arc<dyn PlatformProvider>,
        locale: Arc<dyn LocaleProvider>,
    ) -> Self {
        Self {
            network,
            permissions,
            registrar,
            tokens,
            platform,
            locale,
        }
    }

    /// Run the registration flow against a previously validated session
    /// snapshot.
    ///
    /// Any failure from the permission prompt, including the user declining,
    /// surfaces as [`AtlasError::PermissionDenied`] before the OS
    /// registration is triggered and before any network call. A token wait
    /// that exceeds `timeout` fails with [`AtlasError::DeviceTokenTimeout`];
    /// the OS registration is not cancelled and may still populate the token
    /// store for a later attempt.
    pub async fn execute(&self, auth: &AuthSnapshot, timeout: Duration) -> Result<(), AtlasError> {
        debug!("requesting notification permission");
        match self.permissions.request_authorization().await {
            Ok(true) => debug!("notification permission granted"),
            Ok(false) => return Err(AtlasError::PermissionDenied),
            Err(err) => {
                debug!(error = %err, "permission request failed");
                return Err(AtlasError::PermissionDenied);
            }
        }

        self.registrar.register_for_remote_notifications().await?;
        debug!("remote notification registration requested");

        let token = self.tokens.await_token(timeout).await?;
        self.upload_token(auth, &token).await
    }

    /// POST the device token to the backend under the given session.
    pub(crate) async fn upload_token(
        &self,
        auth: &AuthSnapshot,
        token: &DeviceToken,
    ) -> Result<(), AtlasError> {
        let payload = RegisterDevicePayload {
            api_key: &auth.api_key,
            user_id: &auth.user_id,
            device_token: token.as_str(),
            platform: self.platform.platform().as_str(),
            locale: self.locale.locale(),
        };
        let body = serde_json::to_value(&payload)
            .map_err(|e| AtlasError::InvalidArgument(format!("payload serialization: {e}")))?;

        let url = auth.config.function_url("register-device");
        debug!(%url, user_id = %auth.user_id, "uploading device token");

        let response = self.network.post_json(&url, body).await?;
        response.ensure_success()
    }
}
