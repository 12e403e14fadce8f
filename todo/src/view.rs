//! View model and renderers.
//!
//! `TodoView` is everything a front end needs to draw the widget, computed
//! fresh from `TodoState` after every handled event. The visible rows and
//! the remaining count are derived here and never stored.

use crate::config::TodoConfig;
use crate::filter::Filter;
use crate::types::{Task, TaskId, TodoState};
use std::fmt;
use std::io::Write;

/// One visible task row (checkbox + text)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Task behind the checkbox
    pub id: TaskId,
    /// Text shown next to the checkbox
    pub text: String,
    /// Checkbox state
    pub completed: bool,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id(),
            text: task.text().to_string(),
            completed: task.completed(),
        }
    }

    /// CSS class of the row
    #[must_use]
    pub const fn class(&self) -> &'static str {
        if self.completed { "card completed" } else { "card" }
    }
}

/// One filter button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterButton {
    /// Filter selected by this button
    pub filter: Filter,
    /// Whether this is the selected filter
    pub selected: bool,
}

impl FilterButton {
    /// Button text
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.filter.label()
    }

    /// CSS class of the button
    #[must_use]
    pub const fn class(&self) -> &'static str {
        if self.selected { "active" } else { "" }
    }
}

/// Everything needed to draw the widget once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    /// Heading
    pub title: String,
    /// Input contents
    pub input: String,
    /// Input placeholder
    pub placeholder: String,
    /// Validation message next to the input
    pub error: Option<String>,
    /// Submit button label
    pub submit_label: String,
    /// Visible tasks, in insertion order
    pub rows: Vec<TaskRow>,
    /// Incomplete tasks across the whole list
    pub remaining: usize,
    /// Filter buttons, in display order
    pub filters: [FilterButton; 3],
    /// Clear-completed button label
    pub clear_label: String,
}

impl TodoView {
    /// Derive the view from state
    #[must_use]
    pub fn build(state: &TodoState, config: &TodoConfig) -> Self {
        Self {
            title: config.title().to_string(),
            input: state.form.input().to_string(),
            placeholder: config.placeholder().to_string(),
            error: state.form.error().map(|error| error.to_string()),
            submit_label: config.submit_label().to_string(),
            rows: state.visible().iter().map(TaskRow::from_task).collect(),
            remaining: state.remaining_count(),
            filters: Filter::ALL.map(|filter| FilterButton {
                filter,
                selected: filter == state.filter,
            }),
            clear_label: config.clear_label().to_string(),
        }
    }

    /// The counter readout
    #[must_use]
    pub fn remaining_label(&self) -> String {
        format!("{} items left", self.remaining)
    }

    /// The currently selected filter
    #[must_use]
    pub fn selected_filter(&self) -> Filter {
        self.filters
            .iter()
            .find(|button| button.selected)
            .map_or(Filter::All, |button| button.filter)
    }

    /// Id of the task on 1-based visible row `row`
    #[must_use]
    pub fn row_id(&self, row: usize) -> Option<TaskId> {
        row.checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .map(|r| r.id)
    }

    /// Texts of the visible rows
    #[must_use]
    pub fn row_texts(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.text.as_str()).collect()
    }
}

/// Plain-text rendering used by the terminal front end
impl fmt::Display for TodoView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;

        if self.input.is_empty() {
            writeln!(f, "> ({})  [{}]", self.placeholder, self.submit_label)?;
        } else {
            writeln!(f, "> {}  [{}]", self.input, self.submit_label)?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "  ! {error}")?;
        }

        for (index, row) in self.rows.iter().enumerate() {
            let mark = if row.completed { 'x' } else { ' ' };
            writeln!(f, "  {}. [{mark}] {}", index + 1, row.text)?;
        }

        write!(f, "{} |", self.remaining_label())?;
        for button in &self.filters {
            if button.selected {
                write!(f, " <{}>", button.label())?;
            } else {
                write!(f, " {}", button.label())?;
            }
        }
        writeln!(f, " | [{}]", self.clear_label)
    }
}

/// Something that can draw a `TodoView`
pub trait Render {
    /// Draw the view, replacing whatever was drawn before
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    fn render(&mut self, view: &TodoView) -> std::io::Result<()>;
}

/// Keeps every rendered view, oldest first
impl Render for Vec<TodoView> {
    fn render(&mut self, view: &TodoView) -> std::io::Result<()> {
        self.push(view.clone());
        Ok(())
    }
}

/// Writes each view as text, separated by a blank line
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into `out`
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    fn render(&mut self, view: &TodoView) -> std::io::Result<()> {
        writeln!(self.out, "{view}")?;
        self.out.flush()
    }
}
