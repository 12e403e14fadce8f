//! A single-screen to-do list widget built on the tasklist reducer core.
//!
//! The widget holds three pieces of state: the task list, the selected
//! view filter and the input form. Each user interaction becomes one
//! [`TodoAction`] sent to a [`Store`](tasklist_runtime::Store); the
//! [`TodoReducer`] updates the state and dispatches follow-up actions
//! (a valid submission dispatches `AddTask`, changes dispatch events).
//! After every interaction the widget derives a fresh [`TodoView`] and
//! hands it to a [`Render`] implementation.
//!
//! # Quick Start
//!
//! ```no_run
//! use todo_widget::{Filter, TerminalRenderer, TodoConfig, TodoEnvironment, TodoWidget};
//!
//! # async fn example() -> Result<(), todo_widget::WidgetError> {
//! let mut widget = TodoWidget::new(
//!     TodoEnvironment::production(),
//!     TodoConfig::default(),
//!     TerminalRenderer::new(std::io::stdout()),
//! );
//!
//! widget.mount().await?;
//! widget.add("Buy milk").await?;
//! widget.toggle_row(1).await?;
//! widget.select_filter(Filter::Completed).await?;
//! widget.clear_completed().await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod filter;
pub mod form;
pub mod reducer;
pub mod task_list;
pub mod types;
pub mod view;
pub mod widget;

// Re-export commonly used types
pub use config::TodoConfig;
pub use filter::{Filter, FilterReducer, ParseFilterError};
pub use form::{FormError, FormReducer, FormState, FormStatus};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use task_list::{TaskList, TaskListReducer};
pub use types::{Task, TaskId, TodoAction, TodoState};
pub use view::{FilterButton, Render, TaskRow, TerminalRenderer, TodoView};
pub use widget::{TodoStore, TodoWidget, WidgetError};
