//! View filter: which subset of tasks is shown.

use crate::reducer::TodoEnvironment;
use crate::task_list::TaskList;
use crate::types::{Task, TodoAction};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tasklist_core::{SmallVec, effect::Effect, reducer::Reducer};
use thiserror::Error;

/// Selected view filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every task
    #[default]
    All,
    /// Incomplete tasks only
    Active,
    /// Completed tasks only
    Completed,
}

impl Filter {
    /// Every filter, in button order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Whether `task` is shown under this filter
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed(),
            Self::Completed => task.completed(),
        }
    }

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that names no filter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown filter `{0}` (expected all, active or completed)")]
pub struct ParseFilterError(String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}

/// Tasks of `tasks` shown under `filter`, in source order
#[must_use]
pub fn visible(tasks: &TaskList, filter: Filter) -> TaskList {
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}

/// Reducer for the selected filter
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = Filter;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        if let TodoAction::SetFilter { filter } = action {
            tracing::debug!(from = %state, to = %filter, "Filter selected");
            *state = filter;
        }
        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskId;
    use tasklist_core::environment::{Clock, CounterIds};
    use tasklist_testing::{ReducerTest, assertions, test_clock};

    fn sample() -> TaskList {
        ["A", "B", "C", "D"]
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let task = Task::new(TaskId::new(i as u64), text.to_string(), test_clock().now());
                // B and D done
                if i % 2 == 1 { task.toggled() } else { task }
            })
            .collect()
    }

    #[test]
    fn visible_subsets_keep_order() {
        let tasks = sample();

        assert_eq!(visible(&tasks, Filter::All), tasks);
        assert_eq!(visible(&tasks, Filter::Active).texts(), vec!["A", "C"]);
        assert_eq!(visible(&tasks, Filter::Completed).texts(), vec!["B", "D"]);
    }

    #[test]
    fn visible_on_empty_list() {
        for filter in Filter::ALL {
            assert!(visible(&TaskList::new(), filter).is_empty());
        }
    }

    #[test]
    fn parse_and_display() {
        for filter in Filter::ALL {
            assert_eq!(filter.to_string().parse::<Filter>(), Ok(filter));
        }
        assert_eq!(" Active ".parse::<Filter>(), Ok(Filter::Active));
        assert_eq!(
            "done".parse::<Filter>(),
            Err(ParseFilterError("done".to_string()))
        );
    }

    #[test]
    fn default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn reducer_sets_filter() {
        ReducerTest::new(FilterReducer)
            .with_env(TodoEnvironment::new(test_clock(), CounterIds::new()))
            .given_state(Filter::All)
            .when_action(TodoAction::SetFilter {
                filter: Filter::Completed,
            })
            .then_state(|filter| assert_eq!(*filter, Filter::Completed))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn reducer_ignores_other_actions() {
        ReducerTest::new(FilterReducer)
            .with_env(TodoEnvironment::new(test_clock(), CounterIds::new()))
            .given_state(Filter::Active)
            .when_action(TodoAction::ClearCompleted)
            .then_state(|filter| assert_eq!(*filter, Filter::Active))
            .run();
    }
}
