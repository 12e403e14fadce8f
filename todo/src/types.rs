//! Domain types for the to-do widget.
//!
//! A task is created once and never edited. Completing or reopening it
//! produces a new `Task` value that replaces the old one in the list.

use crate::filter::Filter;
use crate::form::{FormError, FormState};
use crate::task_list::TaskList;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tasklist_macros::Action;

/// Unique identifier for a task within one widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw id
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, incomplete task
    #[must_use]
    pub const fn new(id: TaskId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// Unique identifier
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Text exactly as submitted
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the task is done
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// When the task was created
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy with `completed` negated and every other field unchanged
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// State of the whole widget
///
/// Each field is owned by one reducer: `tasks` by the task list, `filter`
/// by the filter buttons, `form` by the input form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Every task, in insertion order
    pub tasks: TaskList,
    /// Selected view filter
    pub filter: Filter,
    /// Input field and its validation state
    pub form: FormState,
}

impl TodoState {
    /// Creates an empty widget state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks shown under the current filter, in insertion order
    #[must_use]
    pub fn visible(&self) -> TaskList {
        crate::filter::visible(&self.tasks, self.filter)
    }

    /// Number of incomplete tasks, regardless of filter
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.tasks.remaining_count()
    }
}

/// Actions for the to-do widget
///
/// Commands are what the UI sends (one per user interaction, plus
/// `AddTask`, which the form dispatches after a valid submission). Events
/// are dispatched by reducers after a change and broadcast to observers;
/// no reducer reacts to them.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    // ========== Commands ==========
    /// Command: The input text changed
    #[command]
    InputChanged {
        /// Full contents of the input
        text: String,
    },

    /// Command: The form was submitted
    #[command]
    Submit,

    /// Command: Append a task (text is not re-validated)
    #[command]
    AddTask {
        /// Task text
        text: String,
    },

    /// Command: Flip a task's completion
    #[command]
    ToggleTask {
        /// Task to toggle
        id: TaskId,
    },

    /// Command: Select a view filter
    #[command]
    SetFilter {
        /// New filter
        filter: Filter,
    },

    /// Command: Remove every completed task
    #[command]
    ClearCompleted,

    // ========== Events ==========
    /// Event: A task was appended
    #[event]
    TaskAdded {
        /// The new task
        task: Task,
    },

    /// Event: A task was replaced by its toggled copy
    #[event]
    TaskToggled {
        /// The task after toggling
        task: Task,
    },

    /// Event: Completed tasks were removed
    #[event]
    CompletedCleared {
        /// Ids of removed tasks, in list order
        removed: Vec<TaskId>,
    },

    /// Event: A submission was rejected
    #[event]
    ValidationFailed {
        /// Why the submission was rejected
        error: FormError,
    },
}
