//! Terminal front end for the to-do widget.
//!
//! Reads one command per line from stdin and redraws the widget on stdout
//! after each one. Logs go to stderr; set `RUST_LOG` to change the filter.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use todo_widget::cli::{self, Command, Outcome};
use todo_widget::{TerminalRenderer, TodoAction, TodoConfig, TodoEnvironment, TodoWidget};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_widget=info,tasklist_runtime=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut widget = TodoWidget::new(
        TodoEnvironment::production(),
        TodoConfig::default(),
        TerminalRenderer::new(std::io::stdout()),
    );

    let mut events = widget.store().subscribe_actions();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(action) if action.is_event() => log_event(&action),
                Ok(_) => {},
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event observer lagged");
                },
                Err(RecvError::Closed) => break,
            }
        }
    });

    widget.mount().await.context("failed to draw widget")?;
    eprintln!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(cli::ParseCommandError::Empty) => continue,
            Err(error) => {
                eprintln!("{error}");
                continue;
            },
        };

        match cli::execute(&mut widget, command).await {
            Ok(Outcome::Continue) => {},
            Ok(Outcome::Print(text)) => println!("{text}"),
            Ok(Outcome::Quit) => break,
            Err(error) => {
                tracing::warn!(%error, "Command failed");
                eprintln!("{error}");
            },
        }
    }

    Ok(())
}

fn log_event(action: &TodoAction) {
    match action {
        TodoAction::TaskAdded { task } => {
            tracing::info!(id = %task.id(), text = task.text(), "Task added");
        },
        TodoAction::TaskToggled { task } => {
            tracing::info!(id = %task.id(), completed = task.completed(), "Task toggled");
        },
        TodoAction::CompletedCleared { removed } => {
            tracing::info!(count = removed.len(), "Completed tasks cleared");
        },
        other => tracing::info!(event = other.name(), "Event"),
    }
}
