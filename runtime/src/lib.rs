//! # Tasklist Runtime
//!
//! The Store runtime that coordinates reducer execution and dispatch.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer and executes effects
//! - **Dispatch loop**: `Effect::Dispatch` actions are fed back into the
//!   reducer, FIFO, before `send` returns
//! - **Action broadcast**: every dispatched action is published to
//!   subscribers (observers, adapters, loggers)
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action (runs to completion, including dispatched actions)
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::sync::Arc;
use tasklist_core::{effect::Effect, reducer::Reducer};
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A single `send` produced more actions than allowed
        ///
        /// This means reducers keep dispatching each other in a loop. State
        /// changes made before the limit was hit are kept.
        #[error("Dispatch chain exceeded {0} actions")]
        DispatchLimitExceeded(usize),
    }
}

pub use error::StoreError;

/// Store configuration
///
/// # Example
///
/// ```
/// use tasklist_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_action_capacity(64)
///     .with_max_dispatch_depth(8);
///
/// assert_eq!(config.action_capacity(), 64);
/// assert_eq!(config.max_dispatch_depth(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Buffered actions per broadcast subscriber before it starts lagging
    action_capacity: usize,

    /// Maximum actions processed by a single `send` (initial action included)
    max_dispatch_depth: usize,
}

impl StoreConfig {
    /// Create a configuration with default settings
    ///
    /// Defaults:
    /// - `action_capacity`: 16
    /// - `max_dispatch_depth`: 32
    #[must_use]
    pub const fn new() -> Self {
        Self {
            action_capacity: 16,
            max_dispatch_depth: 32,
        }
    }

    /// Set the broadcast buffer size (clamped to at least 1)
    #[must_use]
    pub const fn with_action_capacity(mut self, capacity: usize) -> Self {
        self.action_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Set the maximum dispatch chain length (clamped to at least 1)
    #[must_use]
    pub const fn with_max_dispatch_depth(mut self, depth: usize) -> Self {
        self.max_dispatch_depth = if depth == 0 { 1 } else { depth };
        self
    }

    /// Broadcast buffer size
    #[must_use]
    pub const fn action_capacity(&self) -> usize {
        self.action_capacity
    }

    /// Maximum dispatch chain length
    #[must_use]
    pub const fn max_dispatch_depth(&self) -> usize {
        self.max_dispatch_depth
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Arc, Effect, Reducer, RwLock, StoreConfig, StoreError};
    use std::collections::VecDeque;
    use tokio::sync::broadcast;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; one writer at a time)
    /// 2. Reducer (component logic)
    /// 3. Environment (injected dependencies)
    /// 4. Dispatch (effects feeding actions back into the reducer)
    ///
    /// Cloning a Store is cheap and yields a handle to the same state.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        config: StoreConfig,
        /// Every action produced by an effect is published here.
        action_broadcast: broadcast::Sender<A>,
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
                config: self.config,
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Clone + std::fmt::Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.action_capacity());

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                config,
                action_broadcast,
            }
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> StoreConfig {
            self.config
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Queues every `Effect::Dispatch` action, broadcasts it, and
        ///    reduces it in turn (FIFO) until the queue is empty
        /// 4. Releases the lock
        ///
        /// The whole chain runs under one lock, so a concurrent `send` (or a
        /// `state` read) never observes a half-handled event.
        ///
        /// Returns the number of actions reduced, the initial one included.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::DispatchLimitExceeded`] if the chain grows
        /// past [`StoreConfig::max_dispatch_depth`].
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<usize, StoreError> {
            tracing::debug!(?action, "Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let limit = self.config.max_dispatch_depth();
            let mut queue = VecDeque::from([action]);
            let mut processed = 0;

            while let Some(action) = queue.pop_front() {
                if processed == limit {
                    tracing::error!(limit, "Dispatch chain exceeded limit, dropping remaining actions");
                    metrics::counter!("store.dispatch.limit_exceeded").increment(1);
                    return Err(StoreError::DispatchLimitExceeded(limit));
                }
                processed += 1;

                let effects = {
                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();
                    self.reducer.reduce(&mut *state, action, &self.environment)
                };

                for effect in effects {
                    match effect {
                        Effect::None => {},
                        Effect::Dispatch(next) => {
                            tracing::trace!(action = ?next, "Effect dispatched action");
                            metrics::counter!("store.dispatch.total").increment(1);
                            // No subscribers is not an error
                            let _ = self.action_broadcast.send(next.clone());
                            queue.push_back(next);
                        },
                    }
                }
            }

            tracing::debug!(processed, "Action processing completed");
            Ok(processed)
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let open = store.state(|s| s.remaining_count()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Subscribe to actions dispatched by effects
        ///
        /// Only actions produced by effects are broadcast, not the actions
        /// passed to [`Store::send`]. Subscribers that fall more than
        /// [`StoreConfig::action_capacity`] actions behind observe
        /// `RecvError::Lagged`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }
    }
}

pub use store::Store;
