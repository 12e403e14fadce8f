//! Line commands for the terminal front end.

use crate::filter::{Filter, ParseFilterError};
use crate::view::Render;
use crate::widget::{TodoWidget, WidgetError};
use std::str::FromStr;
use thiserror::Error;

/// Help text printed by `help`
pub const HELP: &str = "\
Commands:
  add <text>        type <text> into the input and submit it
  type <text>       replace the input text
  submit            submit the input
  toggle <n>        toggle the task on visible row n
  filter <name>     show all, active or completed tasks
  clear             remove completed tasks
  export            print the widget state as JSON
  help              show this text
  quit              exit";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type the text, then submit
    Add(String),
    /// Replace the input text
    Type(String),
    /// Submit the form
    Submit,
    /// Toggle the task on a 1-based visible row
    Toggle(usize),
    /// Select a filter
    Filter(Filter),
    /// Clear completed tasks
    Clear,
    /// Print state as JSON
    Export,
    /// Print help
    Help,
    /// Exit
    Quit,
}

/// A line that is not a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    /// Nothing but whitespace
    #[error("Empty command")]
    Empty,

    /// Unknown first word
    #[error("Unknown command `{0}` (try `help`)")]
    Unknown(String),

    /// Command needs an argument
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    /// Row is not a positive number
    #[error("Invalid row `{0}`")]
    InvalidRow(String),

    /// Filter name not recognised
    #[error(transparent)]
    Filter(#[from] ParseFilterError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Text after `add`/`type` is taken verbatim (minus the one separating
    /// whitespace character)
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "add" => Ok(Self::Add(rest.to_string())),
            "type" => Ok(Self::Type(rest.to_string())),
            "submit" => Ok(Self::Submit),
            "toggle" => {
                let rest = rest.trim();
                if rest.is_empty() {
                    return Err(ParseCommandError::MissingArgument("toggle"));
                }
                match rest.parse::<usize>() {
                    Ok(row) if row > 0 => Ok(Self::Toggle(row)),
                    _ => Err(ParseCommandError::InvalidRow(rest.to_string())),
                }
            },
            "filter" => {
                if rest.trim().is_empty() {
                    return Err(ParseCommandError::MissingArgument("filter"));
                }
                Ok(Self::Filter(rest.parse()?))
            },
            "clear" => Ok(Self::Clear),
            "export" => Ok(Self::Export),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

/// What the front end should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Widget was redrawn; read the next line
    Continue,
    /// Print this text, then read the next line
    Print(String),
    /// Stop reading
    Quit,
}

/// Errors while executing a command
#[derive(Error, Debug)]
pub enum ExecuteError {
    /// The widget failed to handle the event
    #[error(transparent)]
    Widget(#[from] WidgetError),

    /// State could not be serialized
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

/// Runs one command against the widget
///
/// # Errors
///
/// Returns an [`ExecuteError`] if the widget or the export fails. The
/// widget stays usable.
pub async fn execute<V: Render>(
    widget: &mut TodoWidget<V>,
    command: Command,
) -> Result<Outcome, ExecuteError> {
    match command {
        Command::Add(text) => {
            widget.add(text).await?;
        },
        Command::Type(text) => {
            widget.type_text(text).await?;
        },
        Command::Submit => {
            widget.submit().await?;
        },
        Command::Toggle(row) => {
            widget.toggle_row(row).await?;
        },
        Command::Filter(filter) => {
            widget.select_filter(filter).await?;
        },
        Command::Clear => {
            widget.clear_completed().await?;
        },
        Command::Export => {
            let json = serde_json::to_string_pretty(&widget.snapshot().await)?;
            return Ok(Outcome::Print(json));
        },
        Command::Help => return Ok(Outcome::Print(HELP.to_string())),
        Command::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TodoConfig;
    use crate::reducer::TodoEnvironment;
    use crate::view::TodoView;
    use tasklist_core::environment::CounterIds;
    use tasklist_testing::test_clock;

    #[test]
    fn parse_commands() {
        assert_eq!("add Buy milk".parse(), Ok(Command::Add("Buy milk".into())));
        assert_eq!("add".parse(), Ok(Command::Add(String::new())));
        assert_eq!("add   ".parse(), Ok(Command::Add("  ".into())));
        assert_eq!("type  x ".parse(), Ok(Command::Type(" x ".into())));
        assert_eq!("add\tmilk".parse(), Ok(Command::Add("milk".into())));
        assert_eq!("toggle\t3".parse(), Ok(Command::Toggle(3)));
        assert_eq!("SUBMIT".parse(), Ok(Command::Submit));
        assert_eq!("toggle 2".parse(), Ok(Command::Toggle(2)));
        assert_eq!("filter active".parse(), Ok(Command::Filter(Filter::Active)));
        assert_eq!("clear\r\n".parse(), Ok(Command::Clear));
        assert_eq!("  export".parse(), Ok(Command::Export));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!("   ".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "remove 1".parse::<Command>(),
            Err(ParseCommandError::Unknown("remove".into()))
        );
        assert_eq!(
            "toggle".parse::<Command>(),
            Err(ParseCommandError::MissingArgument("toggle"))
        );
        assert_eq!(
            "toggle 0".parse::<Command>(),
            Err(ParseCommandError::InvalidRow("0".into()))
        );
        assert_eq!(
            "toggle two".parse::<Command>(),
            Err(ParseCommandError::InvalidRow("two".into()))
        );
        assert!(matches!(
            "filter done".parse::<Command>(),
            Err(ParseCommandError::Filter(_))
        ));
    }

    #[tokio::test]
    async fn execute_runs_against_widget() {
        let mut widget = TodoWidget::new(
            TodoEnvironment::new(test_clock(), CounterIds::new()),
            TodoConfig::default(),
            Vec::<TodoView>::new(),
        );

        assert_eq!(
            execute(&mut widget, Command::Add("A".into())).await.unwrap(),
            Outcome::Continue
        );
        assert_eq!(
            execute(&mut widget, Command::Toggle(1)).await.unwrap(),
            Outcome::Continue
        );

        let Outcome::Print(json) = execute(&mut widget, Command::Export).await.unwrap() else {
            panic!("export should print");
        };
        let exported: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(exported["tasks"][0]["text"], "A");
        assert_eq!(exported["tasks"][0]["completed"], true);
        assert_eq!(exported["filter"], "all");

        assert!(matches!(
            execute(&mut widget, Command::Toggle(5)).await,
            Err(ExecuteError::Widget(WidgetError::NoSuchRow(5)))
        ));
        assert_eq!(
            execute(&mut widget, Command::Quit).await.unwrap(),
            Outcome::Quit
        );
    }
}
