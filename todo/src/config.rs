//! Widget configuration (labels shown by the view).

/// Labels and text of the widget
///
/// # Example
///
/// ```
/// use todo_widget::TodoConfig;
///
/// let config = TodoConfig::default().with_title("Groceries");
/// assert_eq!(config.title(), "Groceries");
/// assert_eq!(config.placeholder(), "What needs to be done?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Heading above the form
    title: String,

    /// Shown in the input while it is empty
    placeholder: String,

    /// Submit button label
    submit_label: String,

    /// Clear-completed button label
    clear_label: String,
}

impl TodoConfig {
    /// Create a configuration with default settings
    ///
    /// Defaults:
    /// - `title`: "ToDo App"
    /// - `placeholder`: "What needs to be done?"
    /// - `submit_label`: "Add Task"
    /// - `clear_label`: "Clear Completed"
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "ToDo App".to_string(),
            placeholder: "What needs to be done?".to_string(),
            submit_label: "Add Task".to_string(),
            clear_label: "Clear Completed".to_string(),
        }
    }

    /// Set the heading
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Heading
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Input placeholder
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Submit button label
    #[must_use]
    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    /// Clear-completed button label
    #[must_use]
    pub fn clear_label(&self) -> &str {
        &self.clear_label
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self::new()
    }
}
