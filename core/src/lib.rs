//! # Tasklist Core
//!
//! Core traits and types for the tasklist reducer architecture.
//!
//! A UI component is modelled as state plus a reducer. User events become
//! actions; the reducer applies them to state and describes any follow-up
//! work as effects, which the runtime executes.
//!
//! ## Core Concepts
//!
//! - **State**: Owned, cloneable data for one component
//! - **Action**: Every input the component reacts to (user intents and outcomes)
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: A description of follow-up work (never executed by the reducer)
//! - **Environment**: Injected dependencies (clock, id source)
//!
//! ## Example
//!
//! ```
//! use tasklist_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let _ = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

// Re-export commonly used types
pub use smallvec::{SmallVec, smallvec};

/// Reducer composition utilities
pub mod composition;

/// Reducer module - The core trait for component logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They hold every rule of a component and are deterministic and testable
/// without a runtime.
pub mod reducer {
    use super::{SmallVec, effect::Effect};

    /// The Reducer trait - core abstraction for component logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Implementations validate the action, update state in place and
        /// return descriptions of follow-up work. Actions a reducer does not
        /// care about are ignored and produce no effects.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Follow-up work descriptions
///
/// Effects are values returned from reducers. The runtime decides when and
/// how to run them.
pub mod effect {
    /// Effect type - describes work to perform after a reduction
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the store once the current reduction
        /// has finished
        ///
        /// Dispatched actions run in FIFO order within the same `send`, and
        /// are broadcast to observers.
        Dispatch(Action),
    }

    impl<Action> Effect<Action> {
        /// Create a dispatch effect
        #[must_use]
        pub const fn dispatch(action: Action) -> Self {
            Self::Dispatch(action)
        }

        /// Returns true if this effect does nothing
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Self::None)
        }

        /// Returns the dispatched action, if any
        #[must_use]
        pub const fn as_dispatch(&self) -> Option<&Action> {
            match self {
                Self::Dispatch(action) => Some(action),
                Self::None => None,
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// Everything a reducer would otherwise reach for globally (the current
/// time, fresh identifiers) is abstracted behind a trait and injected via
/// the Environment parameter.
pub mod environment {
    use chrono::{DateTime, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Source of fresh identifiers
    ///
    /// Every call returns a value never returned before by the same
    /// generator, no matter how close together the calls are.
    pub trait IdGenerator: Send + Sync {
        /// Produce the next identifier
        fn next_id(&self) -> u64;
    }

    /// Monotonically increasing counter
    ///
    /// Starts at 1 unless constructed with [`CounterIds::starting_at`].
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_core::environment::{CounterIds, IdGenerator};
    ///
    /// let ids = CounterIds::new();
    /// assert_eq!(ids.next_id(), 1);
    /// assert_eq!(ids.next_id(), 2);
    /// ```
    #[derive(Debug)]
    pub struct CounterIds {
        next: AtomicU64,
    }

    impl CounterIds {
        /// Create a counter starting at 1
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(1)
        }

        /// Create a counter whose first id is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }
    }

    impl Default for CounterIds {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for CounterIds {
        fn next_id(&self) -> u64 {
            self.next.fetch_add(1, Ordering::Relaxed)
        }
    }
}
