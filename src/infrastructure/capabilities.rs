//! Default permission and registration adapters
//!
//! Rust has no portable binding to the OS notification authorization and
//! remote-registration APIs, so the defaults report
//! [`AtlasError::UnsupportedPlatform`]. A host application embedding this
//! SDK supplies its own bridges (for example over FFI to
//! `UNUserNotificationCenter` and `registerForRemoteNotifications`) through
//! the client builder.

use async_trait::async_trait;

use crate::application::ports::{PermissionRequester, RemoteRegistrar};
use crate::domain::AtlasError;

/// Permission requester for hosts without an OS bridge.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedPermissionRequester;

#[async_trait]
impl PermissionRequester for UnsupportedPermissionRequester {
    async fn request_authorization(&self) -> Result<bool, AtlasError> {
        Err(AtlasError::UnsupportedPlatform)
    }
}

/// Remote registrar for hosts without an OS bridge.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedRemoteRegistrar;

#[async_trait]
impl RemoteRegistrar for UnsupportedRemoteRegistrar {
    async fn register_for_remote_notifications(&self) -> Result<(), AtlasError> {
        Err(AtlasError::UnsupportedPlatform)
    }
}
