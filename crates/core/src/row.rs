//! Per-row edit-mode state machine.
//!
//! A [`RowEditor`] manages one task row's transient interaction state,
//! independent of the store: toggling edit mode, buffering the draft title,
//! and committing or cancelling the rename through the host's
//! [`TaskActions`] callbacks.

use crate::model::{Task, TaskId};
use crate::screen::TaskActions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing,
}

/// Focus side effect requested by a mode transition, emitted exactly once
/// per transition. The frontend applies it to its input widget; entering
/// edit mode gains focus, leaving it blurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Gained,
    Lost,
}

#[derive(Debug, Clone)]
pub struct RowEditor {
    task_id: TaskId,
    title: String,
    draft: String,
    mode: RowMode,
}

impl RowEditor {
    pub fn new(task: &Task) -> Self {
        Self {
            task_id: task.id,
            title: task.title.clone(),
            draft: task.title.clone(),
            mode: RowMode::Viewing,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The row's remove action is disabled while the title is being edited.
    /// Toggling done is not gated here: it stays available regardless of
    /// mode, since the whole row is the toggle target, edit and remove
    /// actions aside.
    pub fn remove_enabled(&self) -> bool {
        !self.is_editing()
    }

    /// `Viewing -> Editing`: capture the current title into the draft
    /// buffer and request focus. Already editing is a no-op.
    pub fn begin_edit(&mut self) -> Option<FocusChange> {
        if self.is_editing() {
            return None;
        }
        self.draft = self.title.clone();
        self.mode = RowMode::Editing;
        Some(FocusChange::Gained)
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.is_editing() {
            self.draft = text.into();
        }
    }

    /// `Editing -> Viewing` via submit: hand the draft to
    /// [`TaskActions::edit_task`]. On failure the draft resets to the
    /// original title; either way the row returns to viewing and blurs.
    pub fn commit(&mut self, actions: &mut dyn TaskActions) -> Option<FocusChange> {
        if !self.is_editing() {
            return None;
        }
        let edited = actions.edit_task(self.task_id, &self.draft);
        if edited {
            self.title = self.draft.clone();
        } else {
            self.draft = self.title.clone();
        }
        self.mode = RowMode::Viewing;
        Some(FocusChange::Lost)
    }

    /// `Editing -> Viewing` via cancel: discard the draft, no store
    /// mutation, blur.
    pub fn cancel(&mut self) -> Option<FocusChange> {
        if !self.is_editing() {
            return None;
        }
        self.draft = self.title.clone();
        self.mode = RowMode::Viewing;
        Some(FocusChange::Lost)
    }
}
