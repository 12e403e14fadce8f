//! The ordered task collection and the reducer that owns it.
//!
//! Every operation returns a new `TaskList` instead of editing in place.

use crate::reducer::TodoEnvironment;
use crate::types::{Task, TaskId, TodoAction};
use serde::{Deserialize, Serialize};
use tasklist_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Tasks in insertion order (which is also display order)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates tasks in order
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    /// Tasks as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.0
    }

    /// Looks up a task by id
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.0.iter().find(|task| task.id() == id)
    }

    /// Task texts in order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(Task::text).collect()
    }

    /// Returns a list with `task` appended
    ///
    /// No de-duplication: two tasks may share the same text.
    #[must_use]
    pub fn add(&self, task: Task) -> Self {
        let mut tasks = self.0.clone();
        tasks.push(task);
        Self(tasks)
    }

    /// Returns a list where the task with `id` is replaced by its toggled copy
    ///
    /// An unknown id yields an identical list.
    #[must_use]
    pub fn toggle(&self, id: TaskId) -> Self {
        self.0
            .iter()
            .map(|task| if task.id() == id { task.toggled() } else { task.clone() })
            .collect()
    }

    /// Returns a list without completed tasks, order preserved
    #[must_use]
    pub fn clear_completed(&self) -> Self {
        self.0.iter().filter(|task| !task.completed()).cloned().collect()
    }

    /// Number of incomplete tasks
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.0.iter().filter(|task| !task.completed()).count()
    }

    /// Number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.len() - self.remaining_count()
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Reducer for the task list
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskListReducer;

impl Reducer for TaskListReducer {
    type State = TaskList;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        tasks: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::AddTask { text } => {
                let task = Task::new(TaskId::new(env.ids.next_id()), text, env.clock.now());
                tracing::debug!(id = %task.id(), "Task added");

                *tasks = tasks.add(task.clone());
                smallvec![Effect::dispatch(TodoAction::TaskAdded { task })]
            },

            TodoAction::ToggleTask { id } => {
                let updated = tasks.toggle(id);
                let Some(task) = updated.get(id).cloned() else {
                    tracing::debug!(%id, "Toggle ignored, no such task");
                    return SmallVec::new();
                };
                tracing::debug!(%id, completed = task.completed(), "Task toggled");

                *tasks = updated;
                smallvec![Effect::dispatch(TodoAction::TaskToggled { task })]
            },

            TodoAction::ClearCompleted => {
                if tasks.completed_count() == 0 {
                    tracing::debug!("Nothing to clear");
                    return SmallVec::new();
                }
                let removed: Vec<TaskId> = tasks
                    .iter()
                    .filter(|task| task.completed())
                    .map(Task::id)
                    .collect();
                tracing::debug!(count = removed.len(), "Completed tasks cleared");

                *tasks = tasks.clear_completed();
                smallvec![Effect::dispatch(TodoAction::CompletedCleared { removed })]
            },

            // Owned by other reducers, or events
            TodoAction::InputChanged { .. }
            | TodoAction::Submit
            | TodoAction::SetFilter { .. }
            | TodoAction::TaskAdded { .. }
            | TodoAction::TaskToggled { .. }
            | TodoAction::CompletedCleared { .. }
            | TodoAction::ValidationFailed { .. } => SmallVec::new(),
        }
    }
}
