//! Notification permission port interface

use async_trait::async_trait;

use crate::domain::AtlasError;

/// Port for prompting the user for notification permission.
///
/// Implemented by the host application as a bridge to the OS notification
/// authorization API.
#[async_trait]
pub trait PermissionRequester: Send + Sync {
    /// Ask the OS for notification authorization.
    ///
    /// Returns `Ok(true)` when permission was granted, `Ok(false)` when the
    /// user declined.
    async fn request_authorization(&self) -> Result<bool, AtlasError>;
}
