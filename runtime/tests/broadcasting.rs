//! Integration tests for Store action broadcasting
//!
//! A caller that dispatches a remote operation subscribes to the store's
//! action broadcast and waits for the matching fulfilled/rejected action.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code

use cinepass_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use cinepass_runtime::{Store, StoreError};
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum LookupAction {
    /// Ask the fake backend for a record
    Request { id: u64 },
    /// Backend answered
    Fulfilled { id: u64, name: String },
    /// Backend failed
    Rejected { id: u64, status: u16 },
}

#[derive(Debug, Clone, Default)]
struct LookupState {
    names: Vec<String>,
    last_status: Option<u16>,
}

/// Fake backend: even ids resolve, odd ids answer 404 after a short delay.
struct LookupEnvironment {
    latency: Duration,
}

struct LookupReducer;

impl Reducer for LookupReducer {
    type State = LookupState;
    type Action = LookupAction;
    type Environment = LookupEnvironment;

    fn reduce(
        &self,
        state: &mut LookupState,
        action: LookupAction,
        env: &LookupEnvironment,
    ) -> SmallVec<[Effect<LookupAction>; 4]> {
        match action {
            LookupAction::Request { id } => {
                let latency = env.latency;
                smallvec![Effect::future(async move {
                    tokio::time::sleep(latency).await;
                    if id % 2 == 0 {
                        LookupAction::Fulfilled {
                            id,
                            name: format!("record-{id}"),
                        }
                    } else {
                        LookupAction::Rejected { id, status: 404 }
                    }
                })]
            },
            LookupAction::Fulfilled { name, .. } => {
                state.names.push(name);
                smallvec![Effect::None]
            },
            LookupAction::Rejected { status, .. } => {
                state.last_status = Some(status);
                smallvec![Effect::None]
            },
        }
    }
}

fn settles(id: u64) -> impl Fn(&LookupAction) -> bool {
    move |action| match action {
        LookupAction::Fulfilled { id: got, .. } | LookupAction::Rejected { id: got, .. } => {
            *got == id
        },
        LookupAction::Request { .. } => false,
    }
}

fn store(latency_ms: u64) -> Store<LookupState, LookupAction, LookupEnvironment, LookupReducer> {
    Store::new(
        LookupState::default(),
        LookupReducer,
        LookupEnvironment {
            latency: Duration::from_millis(latency_ms),
        },
    )
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_wait_for_fulfilled_outcome() {
    let store = store(5);

    let outcome = store
        .send_and_wait_for(LookupAction::Request { id: 2 }, settles(2), Duration::from_secs(1))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        LookupAction::Fulfilled {
            id: 2,
            name: "record-2".to_string()
        }
    );
}

#[tokio::test]
async fn test_wait_for_rejected_outcome() {
    let store = store(5);

    let outcome = store
        .send_and_wait_for(LookupAction::Request { id: 3 }, settles(3), Duration::from_secs(1))
        .await
        .unwrap();

    assert_eq!(outcome, LookupAction::Rejected { id: 3, status: 404 });
}

#[tokio::test]
async fn test_outcome_is_reduced_before_waiter_reads_state() {
    let store = store(0);

    store
        .send_and_wait_for(LookupAction::Request { id: 4 }, settles(4), Duration::from_secs(1))
        .await
        .unwrap();

    // The broadcast fires before the action is fed back, so give the reducer a tick.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(store.state(|s| s.names.clone()).await, vec!["record-4"]);
}

#[tokio::test]
async fn test_concurrent_waiters_receive_their_own_outcome() {
    let store = store(10);

    let (first, second) = tokio::join!(
        store.send_and_wait_for(LookupAction::Request { id: 6 }, settles(6), Duration::from_secs(1)),
        store.send_and_wait_for(LookupAction::Request { id: 7 }, settles(7), Duration::from_secs(1)),
    );

    assert!(matches!(first.unwrap(), LookupAction::Fulfilled { id: 6, .. }));
    assert!(matches!(second.unwrap(), LookupAction::Rejected { id: 7, .. }));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let store = store(200);

    let result = store
        .send_and_wait_for(
            LookupAction::Request { id: 8 },
            settles(8),
            Duration::from_millis(20),
        )
        .await;

    assert_eq!(result.unwrap_err(), StoreError::Timeout);
}

#[tokio::test]
async fn test_subscriber_sees_every_produced_action() {
    let store = store(0);
    let mut rx = store.subscribe_actions();

    let mut handle = store.send(LookupAction::Request { id: 10 }).await.unwrap();
    handle.wait().await;

    let seen = rx.recv().await.unwrap();
    assert!(matches!(seen, LookupAction::Fulfilled { id: 10, .. }));
}
