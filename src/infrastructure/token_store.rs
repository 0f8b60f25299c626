//! Device token rendezvous store
//!
//! The OS callback that delivers a push token and the application call that
//! needs one are causally unordered: the callback may fire before, during,
//! or after the wait begins, on a different execution context. The store
//! holds the latest token in a single slot and keeps a registry of one-shot
//! waiter handles, both guarded by one lock, so a publish can never race a
//! waiter registration into a lost wakeup.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::debug;

use crate::application::ports::DeviceTokenProvider;
use crate::domain::{AtlasError, DeviceToken};

#[derive(Default)]
struct Inner {
    token: Option<DeviceToken>,
    waiters: HashMap<u64, oneshot::Sender<DeviceToken>>,
    next_waiter_id: u64,
}

/// Holds the current device token and lets callers wait for one to arrive.
///
/// Safe to share across the OS callback context, concurrent waiters, and
/// timeout expiry. The lock is held only for slot and registry mutation,
/// never across an await.
#[derive(Default)]
pub struct DeviceTokenStore {
    inner: Mutex<Inner>,
}

impl DeviceTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    // The lock only guards plain data, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `token` as the current value and wake every pending waiter
    /// with it.
    ///
    /// This is a broadcast, not a single-consumer handoff: the token became
    /// known, and everyone currently waiting wants it. Publishing with no
    /// waiters pending still updates the slot. An empty token counts as
    /// absent to every reader, so it updates the slot but leaves waiters
    /// pending until a real token arrives.
    pub fn publish(&self, token: impl Into<DeviceToken>) {
        let token = token.into();
        let drained: Vec<oneshot::Sender<DeviceToken>> = {
            let mut inner = self.lock();
            inner.token = Some(token.clone());
            if token.is_empty() {
                Vec::new()
            } else {
                inner.waiters.drain().map(|(_, tx)| tx).collect()
            }
        };

        debug!(waiters = drained.len(), "device token published");
        for waiter in drained {
            // A receiver that timed out between drain and send is gone;
            // that send failing is fine.
            let _ = waiter.send(token.clone());
        }
    }

    /// Convert a raw OS-supplied token to lowercase hex and publish it.
    pub fn publish_raw(&self, bytes: &[u8]) {
        self.publish(DeviceToken::from_raw(bytes));
    }

    /// Reset the stored token to absent. Pending waiters are unaffected.
    pub fn clear(&self) {
        self.lock().token = None;
    }

    fn remove_waiter(&self, id: u64) {
        self.lock().waiters.remove(&id);
    }
}

#[async_trait]
impl DeviceTokenProvider for DeviceTokenStore {
    fn fetch_if_present(&self) -> Result<DeviceToken, AtlasError> {
        self.lock()
            .token
            .clone()
            .filter(|token| !token.is_empty())
            .ok_or(AtlasError::MissingDeviceToken)
    }

    async fn await_token(&self, timeout: Duration) -> Result<DeviceToken, AtlasError> {
        // Fast path and waiter registration happen under the same lock as
        // publish, so a token published in between cannot be missed.
        let (waiter_id, rx) = {
            let mut inner = self.lock();
            if let Some(token) = inner.token.clone().filter(|t| !t.is_empty()) {
                return Ok(token);
            }

            let waiter_id = inner.next_waiter_id;
            inner.next_waiter_id += 1;
            let (tx, rx) = oneshot::channel();
            inner.waiters.insert(waiter_id, tx);
            (waiter_id, rx)
        };

        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(token)) => Ok(token),
            // Sender dropped without a value; treat like the deadline.
            Ok(Err(_)) | Err(_) => {
                self.remove_waiter(waiter_id);
                debug!(waiter_id, "device token wait timed out");
                Err(AtlasError::DeviceTokenTimeout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_without_token_is_missing() {
        let store = DeviceTokenStore::new();
        assert_eq!(
            store.fetch_if_present(),
            Err(AtlasError::MissingDeviceToken)
        );
    }

    #[test]
    fn publish_then_fetch() {
        let store = DeviceTokenStore::new();
        store.publish("token_1");
        assert_eq!(store.fetch_if_present(), Ok(DeviceToken::from("token_1")));
    }

    #[test]
    fn publish_replaces_previous_token() {
        let store = DeviceTokenStore::new();
        store.publish("old");
        store.publish("new");
        assert_eq!(store.fetch_if_present(), Ok(DeviceToken::from("new")));
    }

    #[test]
    fn publish_raw_stores_lowercase_hex() {
        let store = DeviceTokenStore::new();
        store.publish_raw(&[0x0A, 0xBC, 0x01]);
        assert_eq!(store.fetch_if_present(), Ok(DeviceToken::from("0abc01")));
    }

    #[test]
    fn clear_resets_to_absent() {
        let store = DeviceTokenStore::new();
        store.publish("token");
        store.clear();
        assert_eq!(
            store.fetch_if_present(),
            Err(AtlasError::MissingDeviceToken)
        );
    }

    #[test]
    fn empty_published_token_counts_as_absent() {
        let store = DeviceTokenStore::new();
        store.publish("");
        assert_eq!(
            store.fetch_if_present(),
            Err(AtlasError::MissingDeviceToken)
        );
    }

    #[tokio::test]
    async fn await_returns_present_token_immediately() {
        let store = DeviceTokenStore::new();
        store.publish("ready");

        let token = store.await_token(Duration::from_millis(1)).await.unwrap();
        assert_eq!(token.as_str(), "ready");
        // No waiter was registered on the fast path.
        assert!(store.lock().waiters.is_empty());
    }

    #[tokio::test]
    async fn empty_publish_leaves_waiters_pending() {
        let store = std::sync::Arc::new(DeviceTokenStore::new());

        let waiter = {
            let store = store.clone();
            tokio::spawn(async move { store.await_token(Duration::from_secs(1)).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        store.publish("");
        assert_eq!(store.lock().waiters.len(), 1);
        assert_eq!(
            store.fetch_if_present(),
            Err(AtlasError::MissingDeviceToken)
        );

        store.publish("real_token");
        let token = waiter.await.unwrap().unwrap();
        assert_eq!(token.as_str(), "real_token");
    }

    #[tokio::test]
    async fn timed_out_wait_removes_its_waiter() {
        let store = DeviceTokenStore::new();

        let result = store.await_token(Duration::from_millis(10)).await;
        assert_eq!(result, Err(AtlasError::DeviceTokenTimeout));
        assert!(store.lock().waiters.is_empty());
    }
}
