//! Lightweight interaction telemetry, recorded through `tracing` so a
//! `--log` run can be inspected without disturbing the terminal UI.

use anyhow::{Context, Result};

use crate::model::TaskId;

#[derive(Debug, Clone)]
pub enum Event {
    AppStarted,
    TaskAdded { id: TaskId },
    DuplicateRejected { title: String },
    TaskToggled { id: TaskId, done: bool },
    TaskRemoved { id: TaskId },
    RemovalDeclined { id: TaskId },
    EditCommitted { id: TaskId },
    EditRejected { title: String },
    EditCancelled { id: TaskId },
}

pub fn record(event: Event) {
    match &event {
        Event::AppStarted => tracing::debug!("app started"),
        Event::TaskAdded { id } => tracing::debug!(task_id = id, "task added"),
        Event::DuplicateRejected { title } => {
            tracing::debug!(title = title.as_str(), "duplicate title rejected")
        }
        Event::TaskToggled { id, done } => tracing::debug!(task_id = id, done, "task toggled"),
        Event::TaskRemoved { id } => tracing::debug!(task_id = id, "task removed"),
        Event::RemovalDeclined { id } => tracing::debug!(task_id = id, "removal declined"),
        Event::EditCommitted { id } => tracing::debug!(task_id = id, "edit committed"),
        Event::EditRejected { title } => {
            tracing::debug!(title = title.as_str(), "edit rejected as duplicate")
        }
        Event::EditCancelled { id } => tracing::debug!(task_id = id, "edit cancelled"),
    }
}

/// Install a stderr fmt subscriber when a `--log` level was given.
/// The alternate screen keeps stdout for the UI, so logs go to stderr and
/// are only useful when redirected.
pub fn init(level: Option<&str>) -> Result<()> {
    let Some(level) = level else {
        return Ok(());
    };
    let level: tracing::Level = level
        .parse()
        .with_context(|| format!("unknown log level '{level}'"))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
