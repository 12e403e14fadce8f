//! The mounted widget: a store, a config and a renderer.
//!
//! Each handler maps one user interaction to one `send`, then redraws.

use crate::config::TodoConfig;
use crate::filter::Filter;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TaskId, TodoAction, TodoState};
use crate::view::{Render, TodoView};
use tasklist_runtime::{Store, StoreConfig, StoreError};
use thiserror::Error;

/// Store specialised for the widget
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Errors raised while handling a widget event
#[derive(Error, Debug)]
pub enum WidgetError {
    /// The store rejected the action
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The renderer could not draw
    #[error("Render failed: {0}")]
    Render(#[from] std::io::Error),

    /// A row number that is not on screen
    #[error("No task on row {0}")]
    NoSuchRow(usize),
}

/// A to-do widget bound to a renderer
///
/// # Example
///
/// ```
/// use todo_widget::{TodoConfig, TodoEnvironment, TodoView, TodoWidget};
///
/// # async fn example() -> Result<(), todo_widget::WidgetError> {
/// let mut widget = TodoWidget::new(
///     TodoEnvironment::production(),
///     TodoConfig::default(),
///     Vec::<TodoView>::new(),
/// );
///
/// widget.add("Buy milk").await?;
/// let view = widget.view().await;
/// assert_eq!(view.row_texts(), vec!["Buy milk"]);
/// assert_eq!(view.remaining_label(), "1 items left");
/// # Ok(())
/// # }
/// ```
pub struct TodoWidget<V> {
    store: TodoStore,
    config: TodoConfig,
    renderer: V,
}

impl<V: Render> TodoWidget<V> {
    /// Creates a widget with an empty list
    #[must_use]
    pub fn new(environment: TodoEnvironment, config: TodoConfig, renderer: V) -> Self {
        Self::with_store_config(environment, config, renderer, StoreConfig::default())
    }

    /// Creates a widget with custom store settings
    #[must_use]
    pub fn with_store_config(
        environment: TodoEnvironment,
        config: TodoConfig,
        renderer: V,
        store_config: StoreConfig,
    ) -> Self {
        Self {
            store: Store::with_config(TodoState::new(), TodoReducer::new(), environment, store_config),
            config,
            renderer,
        }
    }

    /// The underlying store (for subscribing to events)
    #[must_use]
    pub const fn store(&self) -> &TodoStore {
        &self.store
    }

    /// The renderer
    #[must_use]
    pub const fn renderer(&self) -> &V {
        &self.renderer
    }

    /// Draws the initial view
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Render`] if drawing fails.
    pub async fn mount(&mut self) -> Result<TodoView, WidgetError> {
        self.redraw().await
    }

    /// The user edited the input
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the store or the renderer fails.
    pub async fn type_text(&mut self, text: impl Into<String>) -> Result<TodoView, WidgetError> {
        self.handle(TodoAction::InputChanged { text: text.into() }).await
    }

    /// The user submitted the form
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the store or the renderer fails.
    pub async fn submit(&mut self) -> Result<TodoView, WidgetError> {
        self.handle(TodoAction::Submit).await
    }

    /// Types `text` into the input, then submits
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the store or the renderer fails.
    pub async fn add(&mut self, text: impl Into<String>) -> Result<TodoView, WidgetError> {
        self.type_text(text).await?;
        self.submit().await
    }

    /// The user clicked the checkbox of task `id`
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the store or the renderer fails.
    pub async fn toggle(&mut self, id: TaskId) -> Result<TodoView, WidgetError> {
        self.handle(TodoAction::ToggleTask { id }).await
    }

    /// The user clicked the checkbox on 1-based visible row `row`
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::NoSuchRow`] if the row is not on screen,
    /// otherwise as [`TodoWidget::toggle`].
    pub async fn toggle_row(&mut self, row: usize) -> Result<TodoView, WidgetError> {
        let id = self.view().await.row_id(row).ok_or(WidgetError::NoSuchRow(row))?;
        self.toggle(id).await
    }

    /// The user clicked a filter button
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the store or the renderer fails.
    pub async fn select_filter(&mut self, filter: Filter) -> Result<TodoView, WidgetError> {
        self.handle(TodoAction::SetFilter { filter }).await
    }

    /// The user clicked "Clear Completed"
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the store or the renderer fails.
    pub async fn clear_completed(&mut self) -> Result<TodoView, WidgetError> {
        self.handle(TodoAction::ClearCompleted).await
    }

    /// Current view, without drawing it
    pub async fn view(&self) -> TodoView {
        self.store.state(|s| TodoView::build(s, &self.config)).await
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> TodoState {
        self.store.state(Clone::clone).await
    }

    async fn handle(&mut self, action: TodoAction) -> Result<TodoView, WidgetError> {
        tracing::debug!(action = action.name(), "Handling widget event");
        // A failed chain may still have changed state, so draw first
        let sent = self.store.send(action).await;
        let view = self.redraw().await?;
        sent?;
        Ok(view)
    }

    async fn redraw(&mut self) -> Result<TodoView, WidgetError> {
        let view = self.view().await;
        self.renderer.render(&view)?;
        Ok(view)
    }
}
