use chrono::Utc;
use serde::Serialize;

/// Task identifier. Assigned at creation from the Unix-epoch millisecond
/// timestamp and never reused within a store.
pub type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}

/// Hands out creation-timestamp ids, bumping past the previous one when two
/// adds land in the same millisecond.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdGenerator {
    last: TaskId,
}

impl IdGenerator {
    pub(crate) fn next(&mut self) -> TaskId {
        let now = Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }
}
