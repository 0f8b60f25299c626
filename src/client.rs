//! SDK client facade
//!
//! An [`AtlasClient`] is an explicit instance constructed and held by the
//! host application; there is no process-wide singleton. Hosts wire their
//! OS bridges in through [`AtlasClientBuilder`] and drive the client from
//! their own async runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::application::ports::{
    DeviceTokenProvider, LocaleProvider, NetworkClient, PermissionRequester, PlatformProvider,
    RemoteRegistrar,
};
use crate::application::{
    AcknowledgeNotificationUseCase, RegisterDeviceUseCase, DEFAULT_TOKEN_TIMEOUT,
};
use crate::domain::{AtlasConfig, AtlasError, AuthSnapshot, ConfigSnapshot, DeviceToken, Session};
use crate::infrastructure::{
    DeviceTokenStore, EnvLocaleProvider, ReqwestNetworkClient, SystemPlatformProvider,
    UnsupportedPermissionRequester, UnsupportedRemoteRegistrar,
};

/// Builder for [`AtlasClient`], letting the host replace any collaborator.
#[derive(Default)]
pub struct AtlasClientBuilder {
    network: Option<Arc<dyn NetworkClient>>,
    permissions: Option<Arc<dyn PermissionRequester>>,
    registrar: Option<Arc<dyn RemoteRegistrar>>,
    store: Option<Arc<DeviceTokenStore>>,
    tokens: Option<Arc<dyn DeviceTokenProvider>>,
    platform: Option<Arc<dyn PlatformProvider>>,
    locale: Option<Arc<dyn LocaleProvider>>,
}

impl AtlasClientBuilder {
    pub fn network_client(mut self, network: Arc<dyn NetworkClient>) -> Self {
        self.network = Some(network);
        self
    }

    pub fn permission_requester(mut self, permissions: Arc<dyn PermissionRequester>) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn remote_registrar(mut self, registrar: Arc<dyn RemoteRegistrar>) -> Self {
        self.registrar = Some(registrar);
        self
    }

    /// Replace the rendezvous store itself (and, unless separately
    /// overridden, the token provider backed by it).
    pub fn token_store(mut self, store: Arc<DeviceTokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace only the token provider the registration flow waits on.
    pub fn device_token_provider(mut self, tokens: Arc<dyn DeviceTokenProvider>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn platform_provider(mut self, platform: Arc<dyn PlatformProvider>) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn locale_provider(mut self, locale: Arc<dyn LocaleProvider>) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn build(self) -> AtlasClient {
        let network = self
            .network
            .unwrap_or_else(|| Arc::new(ReqwestNetworkClient::new()));
        let permissions = self
            .permissions
            .unwrap_or_else(|| Arc::new(UnsupportedPermissionRequester));
        let registrar = self
            .registrar
            .unwrap_or_else(|| Arc::new(UnsupportedRemoteRegistrar));
        let store = self.store.unwrap_or_default();
        let tokens = self
            .tokens
            .unwrap_or_else(|| store.clone() as Arc<dyn DeviceTokenProvider>);
        let platform = self
            .platform
            .unwrap_or_else(|| Arc::new(SystemPlatformProvider));
        let locale = self.locale.unwrap_or_else(|| Arc::new(EnvLocaleProvider));

        AtlasClient {
            session: Mutex::new(Session::default()),
            register: RegisterDeviceUseCase::new(
                network.clone(),
                permissions,
                registrar,
                tokens,
                platform,
                locale,
            ),
            acknowledge: AcknowledgeNotificationUseCase::new(network),
            store,
        }
    }
}

/// Client for the Atlas push notification backend.
pub struct AtlasClient {
    session: Mutex<Session>,
    store: Arc<DeviceTokenStore>,
    register: RegisterDeviceUseCase,
    acknowledge: AcknowledgeNotificationUseCase,
}

impl Default for AtlasClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AtlasClient {
    /// Create a client with the default adapters. The permission and
    /// registration steps will fail with
    /// [`AtlasError::UnsupportedPlatform`] until the host wires in real OS
    /// bridges through [`AtlasClient::builder`].
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> AtlasClientBuilder {
        AtlasClientBuilder::default()
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn validated_auth(&self) -> Result<AuthSnapshot, AtlasError> {
        self.session().validated_auth()
    }

    fn validated_config(&self) -> Result<ConfigSnapshot, AtlasError> {
        self.session().validated_config()
    }

    /// Set the backend base URL and API key, replacing any previous values.
    pub fn configure(&self, config: AtlasConfig, api_key: &str) {
        self.session().configure(config, api_key);
    }

    /// Record the logged-in user for subsequent registrations.
    pub fn log_in(&self, user_id: &str) {
        self.session().log_in(user_id);
    }

    /// The rendezvous store this client waits on.
    ///
    /// The host's OS token callback publishes into it; tests can `clear` it.
    pub fn token_store(&self) -> Arc<DeviceTokenStore> {
        self.store.clone()
    }

    /// Register this device for push notifications with the default token
    /// wait of 30 seconds.
    ///
    /// Runs permission prompt, OS registration trigger, token rendezvous
    /// wait, and the backend POST, stopping at the first failure.
    pub async fn register_for_notifications(&self) -> Result<(), AtlasError> {
        self.register_for_notifications_with_timeout(DEFAULT_TOKEN_TIMEOUT)
            .await
    }

    /// Like [`register_for_notifications`](Self::register_for_notifications),
    /// with a caller-chosen bound on the token wait.
    pub async fn register_for_notifications_with_timeout(
        &self,
        timeout: Duration,
    ) -> Result<(), AtlasError> {
        let auth = self.validated_auth()?;
        self.register.execute(&auth, timeout).await
    }

    /// Publish a device token and, since a user is required to be logged
    /// in, immediately upload it to the backend.
    ///
    /// This is the entry point for the host's OS token callback when it
    /// wants renewals pushed to the backend without a full registration
    /// round-trip. Hosts that only need the rendezvous publish directly via
    /// [`AtlasClient::token_store`].
    pub async fn set_device_token(&self, token: &str) -> Result<(), AtlasError> {
        self.store.publish(token);
        let auth = self.validated_auth()?;
        self.register
            .upload_token(&auth, &DeviceToken::from(token))
            .await
    }

    /// Hex-encode a raw OS-supplied token, publish, and upload it.
    pub async fn set_device_token_raw(&self, bytes: &[u8]) -> Result<(), AtlasError> {
        let token = DeviceToken::from_raw(bytes);
        self.store.publish(token.clone());
        let auth = self.validated_auth()?;
        self.register.upload_token(&auth, &token).await
    }

    /// Acknowledge receipt of a notification. Requires configuration but no
    /// logged-in user.
    pub async fn acknowledge_notification(&self, notification_id: &str) -> Result<(), AtlasError> {
        let config = self.validated_config()?;
        self.acknowledge.execute(&config, notification_id).await
    }

    /// Forget all session state and the stored device token.
    ///
    /// Intended for tests that reuse a client across scenarios.
    pub fn reset_for_testing(&self) {
        self.session().reset();
        self.store.clear();
    }
}
