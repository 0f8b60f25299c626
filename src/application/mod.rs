//! Application layer - Use cases and port interfaces
//!
//! Contains the registration orchestration, the acknowledgement call, and
//! the trait definitions for every external collaborator.

pub mod acknowledge;
pub mod ports;
pub mod register;

// Re-export use cases
pub use acknowledge::AcknowledgeNotificationUseCase;
pub use register::{RegisterDeviceUseCase, DEFAULT_TOKEN_TIMEOUT};
