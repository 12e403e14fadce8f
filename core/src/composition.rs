//! Reducer composition utilities
//!
//! A component is usually several small reducers, each owning one slice
//! of the component state:
//! - **`scope_reducer`**: Run a reducer over one field of a larger state
//! - **`combine_reducers`**: Run several reducers over the same state/action
//!
//! # Example
//!
//! ```
//! use tasklist_core::composition::{combine_reducers, scope_reducer};
//! use tasklist_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Default)]
//! struct Panel {
//!     items: Vec<String>,
//!     title: String,
//! }
//!
//! #[derive(Clone)]
//! enum PanelAction {
//!     Push(String),
//!     Rename(String),
//! }
//!
//! struct ItemsReducer;
//! struct TitleReducer;
//!
//! impl Reducer for ItemsReducer {
//!     type State = Vec<String>;
//!     type Action = PanelAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, items: &mut Vec<String>, action: PanelAction, _env: &()) -> SmallVec<[Effect<PanelAction>; 4]> {
//!         if let PanelAction::Push(item) = action {
//!             items.push(item);
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! impl Reducer for TitleReducer {
//!     type State = String;
//!     type Action = PanelAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, title: &mut String, action: PanelAction, _env: &()) -> SmallVec<[Effect<PanelAction>; 4]> {
//!         if let PanelAction::Rename(new_title) = action {
//!             *title = new_title;
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let panel = combine_reducers(vec![
//!     Box::new(scope_reducer(ItemsReducer, |p: &Panel| &p.items, |p: &mut Panel, v| p.items = v)),
//!     Box::new(scope_reducer(TitleReducer, |p: &Panel| &p.title, |p: &mut Panel, v| p.title = v)),
//! ]);
//!
//! let mut state = Panel::default();
//! let _ = panel.reduce(&mut state, PanelAction::Push("first".into()), &());
//! let _ = panel.reduce(&mut state, PanelAction::Rename("Inbox".into()), &());
//! assert_eq!(state.items, vec!["first".to_string()]);
//! assert_eq!(state.title, "Inbox");
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// A boxed reducer that can be shared with the runtime
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer sees every action, in the order given. Effects of all
/// reducers are concatenated in the same order, so a dispatch from the
/// first reducer runs before a dispatch from the second.
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    A: Clone,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E> {
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> std::fmt::Debug for CombinedReducer<S, A, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    A: Clone,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects.into_iter().filter(|e| !e.is_none()));
        }

        all_effects
    }
}

/// Scopes a reducer to operate on one slice of a larger state.
///
/// The slice is cloned, reduced, and written back as a whole, so the
/// child reducer always replaces its slice rather than sharing it.
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, R>
where
    SubS: Clone,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
    }
}

/// A scoped reducer that operates on a slice of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, R> {
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
}

impl<S, SubS, R: std::fmt::Debug> std::fmt::Debug for ScopedReducer<S, SubS, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedReducer")
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}

impl<S, SubS, R> Reducer for ScopedReducer<S, SubS, R>
where
    SubS: Clone,
    R: Reducer<State = SubS>,
{
    type State = S;
    type Action = R::Action;
    type Environment = R::Environment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut slice = (self.get_state)(state).clone();
        let effects = self.reducer.reduce(&mut slice, action, env);
        (self.set_state)(state, slice);
        effects
    }
}
