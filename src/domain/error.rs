//! SDK error taxonomy

use thiserror::Error;

/// Errors produced by the SDK.
///
/// Every error is terminal to the operation that returned it; nothing is
/// retried internally. A timed-out or failed registration must be
/// re-initiated by the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AtlasError {
    /// `configure` has not been called, or the API key is empty.
    #[error("SDK is not configured. Call configure with a base URL and API key first.")]
    NotConfigured,

    /// No user is logged in. Registration requires a user ID.
    #[error("No user is logged in. Call log_in before registering for notifications.")]
    NotLoggedIn,

    /// The user (or the OS) declined notification permission.
    #[error("Notification permission was denied")]
    PermissionDenied,

    /// The backend response carried no usable status code.
    #[error("Backend response had no usable status code")]
    InvalidResponse,

    /// No device token is available yet.
    #[error("No device token is available")]
    MissingDeviceToken,

    /// The wait for a device token elapsed before the OS delivered one.
    #[error("Timed out waiting for a device token")]
    DeviceTokenTimeout,

    /// The current platform has no notification support wired up.
    #[error("Notifications are not supported on this platform")]
    UnsupportedPlatform,

    /// A caller-supplied argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The backend answered with a non-success status code.
    #[error("Request failed with status {status_code}: {body}")]
    RequestFailed { status_code: u16, body: String },

    /// The request never produced a response (DNS, TLS, connection loss, ...).
    #[error("Transport error: {0}")]
    Transport(String),
}
