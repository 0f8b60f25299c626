//! Device token provider port interface

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{AtlasError, DeviceToken};

/// Port for obtaining the current device token.
///
/// The default [`await_token`](DeviceTokenProvider::await_token) falls back
/// to the immediate check, so providers without a real asynchronous token
/// source only implement `fetch_if_present`.
#[async_trait]
pub trait DeviceTokenProvider: Send + Sync {
    /// Non-blocking read of the current token.
    ///
    /// Fails with [`AtlasError::MissingDeviceToken`] when no token has been
    /// delivered yet.
    fn fetch_if_present(&self) -> Result<DeviceToken, AtlasError>;

    /// Wait until a token becomes available or `timeout` elapses.
    ///
    /// Fails with [`AtlasError::DeviceTokenTimeout`] when the deadline
    /// passes first.
    async fn await_token(&self, timeout: Duration) -> Result<DeviceToken, AtlasError> {
        let _ = timeout;
        self.fetch_if_present()
    }
}
