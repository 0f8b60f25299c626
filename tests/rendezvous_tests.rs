//! Token rendezvous integration tests
//!
//! Exercises the handoff between a token publisher (the OS callback) and
//! waiting registration calls under the orderings that matter: publish
//! before the wait, publish during the wait, no publish at all, and many
//! waiters for one publish.

use std::sync::Arc;
use std::time::Duration;

use atlas_push::ports::DeviceTokenProvider;
use atlas_push::{AtlasError, DeviceTokenStore};

#[tokio::test]
async fn token_published_before_wait_resolves_immediately() {
    let store = DeviceTokenStore::new();
    store.publish("early_token");

    // A generous timeout that must never be consumed on the fast path.
    let token = store.await_token(Duration::from_secs(30)).await.unwrap();
    assert_eq!(token.as_str(), "early_token");
}

#[tokio::test]
async fn token_published_during_wait_resolves_the_waiter() {
    let store = Arc::new(DeviceTokenStore::new());

    let waiter = {
        let store = store.clone();
        tokio::spawn(async move { store.await_token(Duration::from_secs(1)).await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    store.publish("from_callback");

    let token = waiter.await.unwrap().unwrap();
    assert_eq!(token.as_str(), "from_callback");
}

#[tokio::test]
async fn wait_without_publish_times_out() {
    let store = DeviceTokenStore::new();

    let result = store.await_token(Duration::from_millis(20)).await;
    assert_eq!(result, Err(AtlasError::DeviceTokenTimeout));
}

#[tokio::test]
async fn late_publish_does_not_resurrect_an_expired_wait() {
    let store = DeviceTokenStore::new();

    let expired = store.await_token(Duration::from_millis(20)).await;
    assert_eq!(expired, Err(AtlasError::DeviceTokenTimeout));

    // The expired call removed its waiter; publishing now only fills the
    // slot, and a fresh wait picks the token up on the fast path.
    store.publish("late_token");
    let token = store.await_token(Duration::from_millis(20)).await.unwrap();
    assert_eq!(token.as_str(), "late_token");
}

#[tokio::test]
async fn publish_broadcasts_to_all_concurrent_waiters() {
    let store = Arc::new(DeviceTokenStore::new());

    let waiters: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.await_token(Duration::from_secs(1)).await })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(50)).await;
    store.publish("shared_token");

    for waiter in waiters {
        let token = waiter.await.unwrap().unwrap();
        assert_eq!(token.as_str(), "shared_token");
    }
}

#[tokio::test]
async fn waiters_survive_clear_and_resolve_on_next_publish() {
    let store = Arc::new(DeviceTokenStore::new());
    store.publish("stale");
    store.clear();

    let waiter = {
        let store = store.clone();
        tokio::spawn(async move { store.await_token(Duration::from_secs(1)).await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    store.publish("renewed");

    let token = waiter.await.unwrap().unwrap();
    assert_eq!(token.as_str(), "renewed");
}
