//! Remote notification registration port interface

use async_trait::async_trait;

use crate::domain::AtlasError;

/// Port for triggering OS-level remote notification registration.
///
/// The call only starts the registration; the OS reports completion
/// asynchronously by handing a device token to the host, which publishes it
/// into the token store. There is no way to cancel a triggered registration.
#[async_trait]
pub trait RemoteRegistrar: Send + Sync {
    /// Ask the OS to register this device for remote notifications.
    async fn register_for_remote_notifications(&self) -> Result<(), AtlasError>;
}
