use std::time::Instant;

use ratatui::style::{Color, Style};
use ratatui::widgets::ListState;

use super::buffer::TextBuffer;
use super::constants::*;
use crate::config::RunOptions;
use crate::model::{Task, TaskId};
use crate::row::{FocusChange, RowEditor};
use crate::screen::{ConfirmChoice, HomeScreen, Prompt, RemovalRequest, TaskActions};
use crate::telemetry::{self, Event};

mod input;
mod render;
#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Add,
    Edit,
    ConfirmRemove,
    Help,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Info,
    Error,
}

/// Prompt surface backed by the TUI. The confirm dialog is rendered as a
/// modal over several key events, so by the time the screen's removal
/// callback asks for a choice the user has already answered; the answer is
/// staged here and consumed through the prompt seam. Warnings queue up and
/// are drained into status messages.
#[derive(Debug, Default)]
struct StatusPrompt {
    staged: Option<ConfirmChoice>,
    warnings: Vec<String>,
}

impl StatusPrompt {
    fn stage(&mut self, choice: ConfirmChoice) {
        self.staged = Some(choice);
    }

    fn take_warning(&mut self) -> Option<String> {
        if self.warnings.is_empty() {
            None
        } else {
            Some(self.warnings.remove(0))
        }
    }
}

impl Prompt for StatusPrompt {
    fn warn_duplicate_title(&mut self, title: &str) {
        self.warnings.push(title.to_string());
    }

    fn confirm_removal(&mut self, _request: &RemovalRequest) -> ConfirmChoice {
        self.staged.take().unwrap_or(ConfirmChoice::No)
    }
}

#[derive(Debug, Clone)]
struct PendingRemoval {
    id: TaskId,
    title: String,
}

pub(crate) struct App {
    screen: HomeScreen<StatusPrompt>,
    selected: usize,
    list_state: ListState,
    input_mode: InputMode,
    input: TextBuffer,
    input_focused: bool,
    editor: Option<RowEditor>,
    pending_removal: Option<PendingRemoval>,
    confirm_choice: ConfirmChoice,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(options: &RunOptions) -> Self {
        let mut app = Self {
            screen: HomeScreen::new(StatusPrompt::default()),
            selected: 0,
            list_state: ListState::default(),
            input_mode: InputMode::Normal,
            input: TextBuffer::new(),
            input_focused: false,
            editor: None,
            pending_removal: None,
            confirm_choice: ConfirmChoice::No,
            status: None,
            should_quit: false,
        };
        if options.demo {
            for title in DEMO_TASKS {
                app.screen.add_task(title);
            }
        }
        app.sync_selection();
        telemetry::record(Event::AppStarted);
        app
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn on_tick(&mut self) {
        if let Some(status) = &self.status {
            if status.created_at.elapsed() > STATUS_LIFETIME {
                self.status = None;
            }
        }
    }

    fn tasks(&self) -> &[Task] {
        self.screen.tasks()
    }

    fn selected_task(&self) -> Option<&Task> {
        self.tasks().get(self.selected)
    }

    fn sync_selection(&mut self) {
        let len = self.screen.tasks_counter();
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            if self.selected >= len {
                self.selected = len - 1;
            }
            self.list_state.select(Some(self.selected));
        }
    }

    fn select_next(&mut self) {
        if self.tasks().is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.tasks().len() - 1);
        self.list_state.select(Some(self.selected));
    }

    fn select_prev(&mut self) {
        if self.tasks().is_empty() {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.list_state.select(Some(self.selected));
    }

    fn select_first(&mut self) {
        if !self.tasks().is_empty() {
            self.selected = 0;
            self.list_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        if !self.tasks().is_empty() {
            self.selected = self.tasks().len() - 1;
            self.list_state.select(Some(self.selected));
        }
    }

    fn apply_focus(&mut self, focus: FocusChange) {
        self.input_focused = match focus {
            FocusChange::Gained => true,
            FocusChange::Lost => false,
        };
    }

    fn take_duplicate_warning(&mut self) -> Option<String> {
        self.screen.prompt_mut().take_warning()
    }

    fn enter_add(&mut self) {
        self.input_mode = InputMode::Add;
        self.input.clear();
        self.input_focused = true;
        self.set_status_info(STATUS_ENTER_ADD);
    }

    fn submit_add(&mut self) {
        let title = self.input.as_str().trim().to_string();
        if title.is_empty() {
            self.set_status_error(STATUS_EMPTY_TITLE);
            return;
        }

        self.screen.add_task(&title);
        if let Some(rejected) = self.take_duplicate_warning() {
            telemetry::record(Event::DuplicateRejected { title: rejected });
            // Stay in add mode so the title can be fixed up.
            self.set_status_error(WARN_DUPLICATE_TITLE);
            return;
        }

        if let Some(task) = self.tasks().last() {
            telemetry::record(Event::TaskAdded { id: task.id });
        }
        self.input.clear();
        self.input_focused = false;
        self.input_mode = InputMode::Normal;
        self.select_last();
        self.set_status_info(format!("Added \"{title}\""));
    }

    fn cancel_add(&mut self) {
        self.input.clear();
        self.input_focused = false;
        self.input_mode = InputMode::Normal;
        self.status = None;
    }

    fn toggle_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            self.set_status_info("Nothing to toggle");
            return;
        };
        let id = task.id;
        self.screen.toggle_task_done(id);
        let done = self
            .tasks()
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.done)
            .unwrap_or(false);
        telemetry::record(Event::TaskToggled { id, done });
        if done {
            self.set_status_info("Marked task done");
        } else {
            self.set_status_info("Marked task active");
        }
    }

    fn start_edit(&mut self) {
        let Some(task) = self.selected_task().cloned() else {
            self.set_status_info("Nothing to edit");
            return;
        };

        let mut editor = RowEditor::new(&task);
        if let Some(focus) = editor.begin_edit() {
            self.apply_focus(focus);
        }
        self.input.set(editor.draft());
        self.editor = Some(editor);
        self.input_mode = InputMode::Edit;
        self.set_status_info(STATUS_ENTER_EDIT);
    }

    fn submit_edit(&mut self) {
        let Some(mut editor) = self.editor.take() else {
            self.input_mode = InputMode::Normal;
            return;
        };

        let draft = self.input.as_str().trim().to_string();
        if draft.is_empty() {
            self.set_status_error(STATUS_EMPTY_TITLE);
            self.editor = Some(editor);
            return;
        }

        editor.set_draft(draft);
        let id = editor.task_id();
        if let Some(focus) = editor.commit(&mut self.screen) {
            self.apply_focus(focus);
        }
        self.input.clear();
        self.input_mode = InputMode::Normal;

        if let Some(rejected) = self.take_duplicate_warning() {
            telemetry::record(Event::EditRejected { title: rejected });
            self.set_status_error(WARN_DUPLICATE_TITLE);
        } else {
            telemetry::record(Event::EditCommitted { id });
            self.set_status_info("Task renamed");
        }
    }

    fn cancel_edit(&mut self) {
        if let Some(mut editor) = self.editor.take() {
            if let Some(focus) = editor.cancel() {
                self.apply_focus(focus);
            }
            telemetry::record(Event::EditCancelled {
                id: editor.task_id(),
            });
        }
        self.input.clear();
        self.input_mode = InputMode::Normal;
        self.status = None;
    }

    fn prompt_remove(&mut self) {
        let Some(task) = self.selected_task() else {
            self.set_status_info("Nothing to remove");
            return;
        };
        let pending = PendingRemoval {
            id: task.id,
            title: task.title.clone(),
        };
        self.pending_removal = Some(pending);
        // Declining is the safe default.
        self.confirm_choice = ConfirmChoice::No;
        self.input_mode = InputMode::ConfirmRemove;
        self.set_status_info(STATUS_CONFIRM_REMOVE);
    }

    fn resolve_remove(&mut self, choice: ConfirmChoice) {
        let Some(pending) = self.pending_removal.take() else {
            self.input_mode = InputMode::Normal;
            return;
        };

        self.screen.prompt_mut().stage(choice);
        self.screen.remove_task(pending.id);
        self.input_mode = InputMode::Normal;

        match choice {
            ConfirmChoice::Yes => {
                telemetry::record(Event::TaskRemoved { id: pending.id });
                self.sync_selection();
                self.set_status_info(format!("Removed \"{}\"", pending.title));
            }
            ConfirmChoice::No => {
                telemetry::record(Event::RemovalDeclined { id: pending.id });
                self.set_status_info(STATUS_REMOVAL_CANCELLED);
            }
        }
    }

    fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
        self.set_status_info(STATUS_HELP);
    }

    fn set_status_info<T: Into<String>>(&mut self, message: T) {
        self.status = Some(StatusMessage::new(message, StatusKind::Info));
    }

    fn set_status_error<T: Into<String>>(&mut self, message: T) {
        self.status = Some(StatusMessage::new(message, StatusKind::Error));
    }
}
