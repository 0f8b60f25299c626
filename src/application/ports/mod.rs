//! Port interfaces (traits) for external collaborators
//!
//! These traits define the boundaries between the application layer and
//! the host environment: the network transport, the OS permission and
//! registration APIs, and the device token source.

pub mod permission;
pub mod platform;
pub mod registrar;
pub mod token_provider;
pub mod transport;

// Re-export common types
pub use permission::PermissionRequester;
pub use platform::{LocaleProvider, Platform, PlatformProvider};
pub use registrar::RemoteRegistrar;
pub use token_provider::DeviceTokenProvider;
pub use transport::{HttpResponse, NetworkClient};
