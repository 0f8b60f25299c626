//! Atlas Push SDK
//!
//! Client SDK that registers a device for push notifications with the Atlas
//! backend and acknowledges notification receipt. The interesting part is
//! the device token rendezvous: the OS delivers a push token at an
//! unpredictable time on an unpredictable context (possibly never), while
//! the registration call needs that token now with a bounded wait.
//! [`DeviceTokenStore`] mediates that handoff.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: device token value object, session state, error taxonomy
//! - **Application**: registration and acknowledgement use cases, plus port
//!   interfaces (traits) for the OS and network collaborators
//! - **Infrastructure**: adapter implementations (token rendezvous store,
//!   reqwest network client, platform/locale providers)
//! - **Client**: the [`AtlasClient`] facade the host application holds
//!
//! # Example
//!
//! ```no_run
//! use atlas_push::{AtlasClient, AtlasConfig};
//!
//! # async fn run() -> Result<(), atlas_push::AtlasError> {
//! let client = AtlasClient::new();
//! client.configure(AtlasConfig::new("https://example.supabase.co"), "atlas_pub_key");
//! client.log_in("user_123");
//!
//! // The host's OS callback publishes tokens as they arrive:
//! client.token_store().publish_raw(&[0x0A, 0xBC, 0x01]);
//!
//! client.register_for_notifications().await?;
//! client.acknowledge_notification("notif_42").await?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod client;
pub mod domain;
pub mod infrastructure;

pub use application::{ports, DEFAULT_TOKEN_TIMEOUT};
pub use client::{AtlasClient, AtlasClientBuilder};
pub use domain::{AtlasConfig, AtlasError, DeviceToken};
pub use infrastructure::DeviceTokenStore;
