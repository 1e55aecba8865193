//! The store: one role slice, its reducer and the effects it spawns.

use crate::StoreError;
use crate::handle::{EffectHandle, Tracker};
use cinepass_core::{effect::Effect, reducer::Reducer};
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::{RwLock, broadcast};

/// Actions kept for slow subscribers
const DEFAULT_BROADCAST_CAPACITY: usize = 16;

/// Runtime for one role slice
///
/// The reducer is the only writer of the state and runs under the write
/// lock. Effects run as tokio tasks; the actions they produce are reduced
/// and then broadcast to subscribers.
///
/// Clones share the same state, environment and broadcast.
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: Arc<R>,
    environment: Arc<E>,
    closing: Arc<AtomicBool>,
    effects: Arc<Tracker>,
    outcomes: broadcast::Sender<A>,
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            environment: Arc::clone(&self.environment),
            closing: Arc::clone(&self.closing),
            effects: Arc::clone(&self.effects),
            outcomes: self.outcomes.clone(),
        }
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Send + Clone + Debug + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Store holding `initial_state`
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, DEFAULT_BROADCAST_CAPACITY)
    }

    /// Store whose action broadcast keeps `capacity` actions
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (outcomes, _) = broadcast::channel(capacity.max(1));

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer: Arc::new(reducer),
            environment: Arc::new(environment),
            closing: Arc::new(AtomicBool::new(false)),
            effects: Arc::default(),
            outcomes,
        }
    }

    /// Effects currently running on this store
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.effects.running()
    }

    /// Stop accepting actions and wait up to `timeout` for running effects.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] with the number of effects
    /// still running at the deadline.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        tracing::info!("Store shutting down");
        metrics::counter!("store.shutdown.initiated").increment(1);
        self.closing.store(true, Ordering::Release);

        if tokio::time::timeout(timeout, self.effects.idle()).await.is_err() {
            let running = self.effects.running();
            tracing::error!(running, "Store shutdown timed out");
            metrics::counter!("store.shutdown.timeout").increment(1);
            return Err(StoreError::ShutdownTimeout(running));
        }

        tracing::info!("Store drained");
        Ok(())
    }

    /// Reduce `action` and spawn the effects it returns.
    ///
    /// Returns after the reducer ran; the handle waits for the effects.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] once shutdown has begun.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError> {
        if self.closing.load(Ordering::Acquire) {
            tracing::warn!(?action, "Store closing; action rejected");
            metrics::counter!("store.shutdown.rejected_actions").increment(1);
            return Err(StoreError::ShutdownInProgress);
        }

        Ok(self.reduce(action).await)
    }

    /// Send `action`, then wait for an effect-produced action matching
    /// `predicate`.
    ///
    /// The subscription is taken before sending, so a fast outcome is not
    /// missed. The returned action has already been reduced.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ShutdownInProgress`] if the store is closing
    /// - [`StoreError::Timeout`] if nothing matches within `timeout`
    /// - [`StoreError::ChannelClosed`] if the broadcast closes
    pub async fn send_and_wait_for<F>(
        &self,
        action: A,
        predicate: F,
        timeout: Duration,
    ) -> Result<A, StoreError>
    where
        F: Fn(&A) -> bool,
    {
        let mut outcomes = self.outcomes.subscribe();
        self.send(action).await?;

        let matching = async {
            loop {
                match outcomes.recv().await {
                    Ok(action) if predicate(&action) => break Ok(action),
                    Ok(_) => {},
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Outcome subscriber lagged");
                    },
                    Err(broadcast::error::RecvError::Closed) => break Err(StoreError::ChannelClosed),
                }
            }
        };

        tokio::time::timeout(timeout, matching)
            .await
            .map_err(|_| StoreError::Timeout)?
    }

    /// Every action produced by an effect, after it was reduced
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.outcomes.subscribe()
    }

    /// Read from the current state
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        f(&*self.state.read().await)
    }

    async fn reduce(&self, action: A) -> EffectHandle {
        tracing::debug!(?action, "Reducing");
        metrics::counter!("store.commands.total").increment(1);

        let effects = {
            let mut state = self.state.write().await;
            let started = Instant::now();
            let effects = self.reducer.reduce(&mut state, action, &self.environment);
            metrics::histogram!("store.reducer.duration_seconds")
                .record(started.elapsed().as_secs_f64());
            effects
        };

        let tracker = Arc::new(Tracker::default());
        for effect in effects {
            self.run(effect, &tracker);
        }
        EffectHandle::tracking(tracker)
    }

    /// Outcomes of effects already running are reduced even while closing,
    /// so a broadcast action is always reflected in the state.
    async fn feed_back(&self, action: A) {
        let observed = action.clone();
        self.reduce(action).await;
        // No subscribers is fine
        let _ = self.outcomes.send(observed);
    }

    fn spawn(&self, tracker: &Arc<Tracker>, task: impl Future<Output = ()> + Send + 'static) {
        let guards = (tracker.start(), self.effects.start());
        tokio::spawn(async move {
            let _guards = guards;
            task.await;
        });
    }

    fn run(&self, effect: Effect<A>, tracker: &Arc<Tracker>) {
        match effect {
            Effect::None => {
                metrics::counter!("store.effects.executed", "type" => "none").increment(1);
            },
            Effect::Future(future) => {
                metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                let store = self.clone();
                self.spawn(tracker, async move {
                    match future.await {
                        Some(action) => store.feed_back(action).await,
                        None => tracing::trace!("Future effect produced no action"),
                    }
                });
            },
        }
    }
}
