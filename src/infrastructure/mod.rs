//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the token
//! rendezvous store, the reqwest network client, and the default platform,
//! locale, and capability adapters.

pub mod capabilities;
pub mod network;
pub mod platform;
pub mod token_store;

// Re-export adapters
pub use capabilities::{UnsupportedPermissionRequester, UnsupportedRemoteRegistrar};
pub use network::ReqwestNetworkClient;
pub use platform::{EnvLocaleProvider, SystemPlatformProvider};
pub use token_store::DeviceTokenStore;
