//! Integration tests for the to-do widget with a Store
//!
//! These drive the widget the way a user would and check what ends up on
//! screen and in the broadcast event stream.

use tasklist_core::environment::{Clock, CounterIds};
use tasklist_runtime::{Store, StoreConfig, StoreError};
use tasklist_testing::test_clock;
use todo_widget::{
    Filter, FormError, TaskId, TodoAction, TodoConfig, TodoEnvironment, TodoReducer, TodoState,
    TodoView, TodoWidget, WidgetError,
};

fn env() -> TodoEnvironment {
    TodoEnvironment::new(test_clock(), CounterIds::new())
}

fn widget() -> TodoWidget<Vec<TodoView>> {
    TodoWidget::new(env(), TodoConfig::default(), Vec::new())
}

#[tokio::test]
async fn test_end_to_end_walkthrough() {
    let mut widget = widget();
    widget.mount().await.unwrap();

    widget.add("A").await.unwrap();
    widget.add("B").await.unwrap();
    widget.toggle_row(1).await.unwrap();

    let view = widget.select_filter(Filter::Active).await.unwrap();
    assert_eq!(view.row_texts(), vec!["B"]);
    assert_eq!(view.remaining_label(), "1 items left");

    let view = widget.clear_completed().await.unwrap();
    assert_eq!(view.row_texts(), vec!["B"]);
    assert_eq!(view.remaining, 1);

    let state = widget.snapshot().await;
    assert_eq!(state.tasks.texts(), vec!["B"]);
    assert_eq!(state.filter, Filter::Active);
}

#[tokio::test]
async fn test_submit_buy_milk() {
    let mut widget = widget();

    let view = widget.add("Buy milk").await.unwrap();

    let state = widget.snapshot().await;
    assert_eq!(state.tasks.len(), 1);
    let task = &state.tasks.as_slice()[0];
    assert_eq!(task.text(), "Buy milk");
    assert!(!task.completed());
    assert_eq!(task.created_at(), test_clock().now());
    assert_eq!(state.form.input(), "");
    assert_eq!(view.error, None);
}

#[tokio::test]
async fn test_blank_submissions_are_rejected() {
    let mut widget = widget();

    for blank in ["", " ", "\t\n"] {
        let view = widget.add(blank).await.unwrap();
        assert!(view.rows.is_empty());
        assert_eq!(view.error.as_deref(), Some("Task is required"));
    }

    // Typing valid text clears the message, submitting adds the task
    let view = widget.type_text("Walk dog").await.unwrap();
    assert_eq!(view.error, None);
    let view = widget.submit().await.unwrap();
    assert_eq!(view.row_texts(), vec!["Walk dog"]);
}

#[tokio::test]
async fn test_text_is_stored_as_typed() {
    let mut widget = widget();

    widget.add("  padded  ").await.unwrap();

    assert_eq!(widget.snapshot().await.tasks.texts(), vec!["  padded  "]);
}

#[tokio::test]
async fn test_toggle_changes_only_that_task() {
    let mut widget = widget();
    for text in ["A", "B", "C"] {
        widget.add(text).await.unwrap();
    }
    let before = widget.snapshot().await.tasks;

    widget.toggle(TaskId::new(2)).await.unwrap();
    let after = widget.snapshot().await.tasks;

    assert_eq!(after.texts(), vec!["A", "B", "C"]);
    for (old, new) in before.iter().zip(after.iter()) {
        if old.id() == TaskId::new(2) {
            assert_eq!(*new, old.toggled());
        } else {
            assert_eq!(new, old);
        }
    }

    // Toggling back restores the original list
    widget.toggle(TaskId::new(2)).await.unwrap();
    assert_eq!(widget.snapshot().await.tasks, before);
}

#[tokio::test]
async fn test_filters_show_matching_subset_in_order() {
    let mut widget = widget();
    for text in ["A", "B", "C", "D"] {
        widget.add(text).await.unwrap();
    }
    widget.toggle(TaskId::new(1)).await.unwrap();
    widget.toggle(TaskId::new(3)).await.unwrap();

    let all = widget.select_filter(Filter::All).await.unwrap();
    assert_eq!(all.row_texts(), vec!["A", "B", "C", "D"]);

    let active = widget.select_filter(Filter::Active).await.unwrap();
    assert_eq!(active.row_texts(), vec!["B", "D"]);

    let completed = widget.select_filter(Filter::Completed).await.unwrap();
    assert_eq!(completed.row_texts(), vec!["A", "C"]);
    assert_eq!(completed.remaining, 2);
}

#[tokio::test]
async fn test_clear_completed_is_idempotent() {
    let mut widget = widget();
    for text in ["A", "B", "C"] {
        widget.add(text).await.unwrap();
    }
    widget.toggle(TaskId::new(1)).await.unwrap();
    widget.toggle(TaskId::new(3)).await.unwrap();

    let once = widget.clear_completed().await.unwrap();
    let twice = widget.clear_completed().await.unwrap();

    assert_eq!(once.row_texts(), vec!["B"]);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_back_to_back_adds_get_unique_ids() {
    let mut widget = widget();

    for _ in 0..5 {
        widget.add("same").await.unwrap();
    }

    let state = widget.snapshot().await;
    let ids: Vec<u64> = state.tasks.iter().map(|t| t.id().get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_events_are_broadcast_in_order() {
    let mut widget = widget();
    let mut events = widget.store().subscribe_actions();

    widget.add("A").await.unwrap();
    widget.add("").await.unwrap();
    widget.toggle(TaskId::new(1)).await.unwrap();
    widget.clear_completed().await.unwrap();

    let task = widget_task(TaskId::new(1));
    let expected = vec![
        TodoAction::AddTask { text: "A".into() },
        TodoAction::TaskAdded { task: task.clone() },
        TodoAction::ValidationFailed {
            error: FormError::TaskRequired,
        },
        TodoAction::TaskToggled {
            task: task.toggled(),
        },
        TodoAction::CompletedCleared {
            removed: vec![TaskId::new(1)],
        },
    ];

    let mut received = Vec::new();
    while let Ok(action) = events.try_recv() {
        received.push(action);
    }
    assert_eq!(received, expected);
}

#[tokio::test]
async fn test_store_counts_dispatch_chain() {
    let store = Store::new(TodoState::new(), TodoReducer::new(), env());

    let typed = store
        .send(TodoAction::InputChanged { text: "A".into() })
        .await
        .unwrap();
    let submitted = store.send(TodoAction::Submit).await.unwrap();

    // InputChanged alone; Submit -> AddTask -> TaskAdded
    assert_eq!(typed, 1);
    assert_eq!(submitted, 3);
    assert_eq!(store.state(TodoState::remaining_count).await, 1);
}

#[tokio::test]
async fn test_dispatch_limit_surfaces_as_widget_error() {
    let mut widget = TodoWidget::with_store_config(
        env(),
        TodoConfig::default(),
        Vec::<TodoView>::new(),
        StoreConfig::default().with_max_dispatch_depth(2),
    );
    widget.type_text("A").await.unwrap();

    let result = widget.submit().await;

    assert!(matches!(
        result,
        Err(WidgetError::Store(StoreError::DispatchLimitExceeded(2)))
    ));
    // Actions reduced before the limit stay applied and are on screen
    let current = widget.view().await;
    assert_eq!(current.row_texts(), vec!["A"]);
    assert_eq!(current.input, "");
    assert_eq!(widget.renderer().last(), Some(&current));
    // The widget keeps working after the error
    assert!(widget.select_filter(Filter::Active).await.is_ok());
}

#[tokio::test]
async fn test_concurrent_adds_through_store() {
    let store = Store::new(TodoState::new(), TodoReducer::new(), env());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let _ = store
                    .send(TodoAction::AddTask {
                        text: format!("task {i}"),
                    })
                    .await;
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let state = store.state(Clone::clone).await;
    assert_eq!(state.tasks.len(), 10);
    let mut ids: Vec<u64> = state.tasks.iter().map(|t| t.id().get()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

fn widget_task(id: TaskId) -> todo_widget::Task {
    todo_widget::Task::new(id, "A".to_string(), test_clock().now())
}
