//! The new-task input form.
//!
//! Two states: `Idle` (no message) and `Invalid` (message shown next to
//! the input). A failed submission moves to `Invalid`; from there every
//! edit is re-validated and valid text clears the message at once.

use crate::reducer::TodoEnvironment;
use crate::types::TodoAction;
use serde::{Deserialize, Serialize};
use tasklist_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use thiserror::Error;

/// Why a submission was rejected
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormError {
    /// Input was empty or only whitespace
    #[error("Task is required")]
    TaskRequired,
}

/// Validation state of the form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormStatus {
    /// No pending error
    #[default]
    Idle,
    /// Last submission failed; the error is displayed
    Invalid(FormError),
}

/// Input field contents plus validation state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    input: String,
    status: FormStatus,
}

impl FormState {
    /// Empty, idle form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input text
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current validation state
    #[must_use]
    pub const fn status(&self) -> FormStatus {
        self.status
    }

    /// Error to display, if any
    #[must_use]
    pub const fn error(&self) -> Option<FormError> {
        match self.status {
            FormStatus::Idle => None,
            FormStatus::Invalid(error) => Some(error),
        }
    }
}

/// Checks raw input for submission
///
/// # Errors
///
/// Returns [`FormError::TaskRequired`] if `raw` is empty or whitespace-only.
pub fn validate(raw: &str) -> Result<(), FormError> {
    if raw.trim().is_empty() {
        Err(FormError::TaskRequired)
    } else {
        Ok(())
    }
}

/// Reducer for the input form
#[derive(Clone, Copy, Debug, Default)]
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        form: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::InputChanged { text } => {
                form.input = text;
                if matches!(form.status, FormStatus::Invalid(_)) && validate(&form.input).is_ok() {
                    tracing::debug!("Input valid again, error cleared");
                    form.status = FormStatus::Idle;
                }
                SmallVec::new()
            },

            TodoAction::Submit => match validate(&form.input) {
                Err(error) => {
                    tracing::debug!(%error, "Submission rejected");
                    form.status = FormStatus::Invalid(error);
                    smallvec![Effect::dispatch(TodoAction::ValidationFailed { error })]
                },
                Ok(()) => {
                    let text = std::mem::take(&mut form.input);
                    form.status = FormStatus::Idle;
                    smallvec![Effect::dispatch(TodoAction::AddTask { text })]
                },
            },

            _ => SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::environment::CounterIds;
    use tasklist_testing::{ReducerTest, assertions, test_clock};

    fn form_test() -> ReducerTest<FormReducer, FormState, TodoAction, TodoEnvironment> {
        ReducerTest::new(FormReducer)
            .with_env(TodoEnvironment::new(test_clock(), CounterIds::new()))
            .given_state(FormState::new())
    }

    fn typed(text: &str) -> TodoAction {
        TodoAction::InputChanged {
            text: text.to_string(),
        }
    }

    #[test]
    fn validate_rejects_blank() {
        assert_eq!(validate(""), Err(FormError::TaskRequired));
        assert_eq!(validate(" \t\n"), Err(FormError::TaskRequired));
        assert_eq!(validate(" x "), Ok(()));
        assert_eq!(FormError::TaskRequired.to_string(), "Task is required");
    }

    #[test]
    fn valid_submit_dispatches_raw_text_and_clears() {
        form_test()
            .when_action(typed("  Buy milk "))
            .when_action(TodoAction::Submit)
            .then_state(|form| {
                assert_eq!(form.input(), "");
                assert_eq!(form.status(), FormStatus::Idle);
            })
            .then_effects(|effects| {
                assert_eq!(
                    assertions::dispatched_actions(effects),
                    vec![&TodoAction::AddTask {
                        text: "  Buy milk ".to_string()
                    }]
                );
            })
            .run();
    }

    #[test]
    fn blank_submit_goes_invalid_and_keeps_input() {
        form_test()
            .when_action(typed("   "))
            .when_action(TodoAction::Submit)
            .then_state(|form| {
                assert_eq!(form.input(), "   ");
                assert_eq!(form.error(), Some(FormError::TaskRequired));
            })
            .then_effects(|effects| {
                assert_eq!(
                    assertions::dispatched_actions(effects),
                    vec![&TodoAction::ValidationFailed {
                        error: FormError::TaskRequired
                    }]
                );
            })
            .run();
    }

    #[test]
    fn typing_valid_text_clears_error() {
        form_test()
            .when_action(TodoAction::Submit)
            .when_action(typed("B"))
            .then_state(|form| {
                assert_eq!(form.status(), FormStatus::Idle);
                assert_eq!(form.input(), "B");
            })
            .run();
    }

    #[test]
    fn typing_blank_text_keeps_error() {
        form_test()
            .when_action(TodoAction::Submit)
            .when_action(typed(" "))
            .then_state(|form| assert_eq!(form.error(), Some(FormError::TaskRequired)))
            .run();
    }

    #[test]
    fn idle_form_never_errors_while_typing() {
        form_test()
            .when_action(typed("a"))
            .when_action(typed(""))
            .then_state(|form| assert_eq!(form.status(), FormStatus::Idle))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn valid_submit_after_error_returns_to_idle() {
        form_test()
            .when_action(TodoAction::Submit)
            .when_action(typed("C"))
            .when_action(TodoAction::Submit)
            .then_state(|form| {
                assert_eq!(form.error(), None);
                assert_eq!(form.input(), "");
            })
            .run();
    }
}
