//! The widget reducer: form, task list and filter composed over `TodoState`.

use crate::filter::FilterReducer;
use crate::form::FormReducer;
use crate::task_list::TaskListReducer;
use crate::types::{TodoAction, TodoState};
use std::sync::Arc;
use tasklist_core::{
    SmallVec,
    composition::{CombinedReducer, combine_reducers, scope_reducer},
    effect::Effect,
    environment::{Clock, CounterIds, IdGenerator, SystemClock},
    reducer::Reducer,
};

/// Environment dependencies for the widget
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of task ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates an environment from explicit dependencies
    #[must_use]
    pub fn new(clock: impl Clock + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
            ids: Arc::new(ids),
        }
    }

    /// System clock and a counter starting at 1
    #[must_use]
    pub fn production() -> Self {
        Self::new(SystemClock, CounterIds::new())
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the whole widget
///
/// Every action goes to the form, then the task list, then the filter.
/// A valid `Submit` therefore dispatches `AddTask`, which the store feeds
/// back in before `send` returns.
pub struct TodoReducer {
    inner: CombinedReducer<TodoState, TodoAction, TodoEnvironment>,
}

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: combine_reducers(vec![
                Box::new(scope_reducer(
                    FormReducer,
                    |s: &TodoState| &s.form,
                    |s: &mut TodoState, form| s.form = form,
                )),
                Box::new(scope_reducer(
                    TaskListReducer,
                    |s: &TodoState| &s.tasks,
                    |s: &mut TodoState, tasks| s.tasks = tasks,
                )),
                Box::new(scope_reducer(
                    FilterReducer,
                    |s: &TodoState| &s.filter,
                    |s: &mut TodoState, filter| s.filter = filter,
                )),
            ]),
        }
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoReducer").field("inner", &self.inner).finish()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let span = tracing::trace_span!("todo_reduce", action = action.name());
        let _enter = span.enter();

        self.inner.reduce(state, action, env)
    }
}
