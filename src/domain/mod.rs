//! Domain layer - Core value objects and errors
//!
//! Contains the device token value object, session state, and the SDK
//! error taxonomy. This layer has no dependencies on external systems.

pub mod error;
pub mod session;
pub mod token;

// Re-export common types
pub use error::AtlasError;
pub use session::{AtlasConfig, AuthSnapshot, ConfigSnapshot, Session};
pub use token::DeviceToken;
