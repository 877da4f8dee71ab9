//! The list-owning screen and its boundary contracts.
//!
//! [`TaskActions`] is the four-callback contract the screen hands down to
//! each task row; [`Prompt`] abstracts the user-facing warning and
//! confirmation dialogs so the control flow stays testable without a UI.

use crate::model::{Task, TaskId};
use crate::store::{StoreError, TaskStore};

/// Callback contract between the list screen and its rows. This is the
/// entire interface the row component depends on from its host.
pub trait TaskActions {
    /// Append a task, surfacing a duplicate-title warning instead when one
    /// already exists.
    fn add_task(&mut self, title: &str);

    fn toggle_task_done(&mut self, id: TaskId);

    /// Present the removal confirmation first; declining is a no-op.
    fn remove_task(&mut self, id: TaskId);

    /// Returns whether the edit succeeded; a duplicate title surfaces the
    /// same warning as [`TaskActions::add_task`].
    fn edit_task(&mut self, id: TaskId, new_title: &str) -> bool;
}

/// The two choices offered by the removal confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Yes,
    No,
}

impl ConfirmChoice {
    pub fn toggle(self) -> Self {
        match self {
            ConfirmChoice::Yes => ConfirmChoice::No,
            ConfirmChoice::No => ConfirmChoice::Yes,
        }
    }
}

/// What the removal confirmation is about. The title is absent when the id
/// no longer matches a task; the dialog is presented regardless and a
/// confirmed removal then falls through to the store's no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRequest {
    pub id: TaskId,
    pub title: Option<String>,
}

/// Synchronous prompt surface. Each dialog runs to completion inside the
/// calling operation; [`ConfirmChoice::No`] must leave all state untouched.
pub trait Prompt {
    /// Modal warning shown when an add or edit is rejected for reusing an
    /// existing title.
    fn warn_duplicate_title(&mut self, title: &str);

    /// Two-option removal confirmation.
    fn confirm_removal(&mut self, request: &RemovalRequest) -> ConfirmChoice;
}

/// The screen that owns the task list for its lifetime. The store starts
/// empty on construction and is dropped with the screen; rows interact with
/// it only through the [`TaskActions`] impl below.
#[derive(Debug)]
pub struct HomeScreen<P> {
    store: TaskStore,
    prompt: P,
}

impl<P: Prompt> HomeScreen<P> {
    pub fn new(prompt: P) -> Self {
        Self {
            store: TaskStore::new(),
            prompt,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Header counter: how many tasks are currently registered.
    pub fn tasks_counter(&self) -> usize {
        self.store.len()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }
}

impl<P: Prompt> TaskActions for HomeScreen<P> {
    fn add_task(&mut self, title: &str) {
        if let Err(StoreError::DuplicateTitle) = self.store.add(title) {
            self.prompt.warn_duplicate_title(title);
        }
    }

    fn toggle_task_done(&mut self, id: TaskId) {
        self.store.toggle(id);
    }

    fn remove_task(&mut self, id: TaskId) {
        let request = RemovalRequest {
            id,
            title: self.store.get(id).map(|task| task.title.clone()),
        };
        if self.prompt.confirm_removal(&request) == ConfirmChoice::Yes {
            self.store.remove(id);
        }
    }

    fn edit_task(&mut self, id: TaskId, new_title: &str) -> bool {
        match self.store.edit(id, new_title) {
            Ok(edited) => edited,
            Err(StoreError::DuplicateTitle) => {
                self.prompt.warn_duplicate_title(new_title);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Records every dialog and answers confirmations from a fixed choice.
    struct RecordingPrompt {
        answer: ConfirmChoice,
        warnings: Vec<String>,
        confirmations: Vec<RemovalRequest>,
    }

    impl RecordingPrompt {
        fn answering(answer: ConfirmChoice) -> Self {
            Self {
                answer,
                warnings: Vec::new(),
                confirmations: Vec::new(),
            }
        }
    }

    impl Prompt for RecordingPrompt {
        fn warn_duplicate_title(&mut self, title: &str) {
            self.warnings.push(title.to_string());
        }

        fn confirm_removal(&mut self, request: &RemovalRequest) -> ConfirmChoice {
            self.confirmations.push(request.clone());
            self.answer
        }
    }

    fn screen(answer: ConfirmChoice) -> HomeScreen<RecordingPrompt> {
        HomeScreen::new(RecordingPrompt::answering(answer))
    }

    #[test]
    fn starts_empty() {
        let screen = screen(ConfirmChoice::No);
        assert_eq!(screen.tasks_counter(), 0);
        assert!(screen.tasks().is_empty());
    }

    #[test]
    fn duplicate_add_warns_and_keeps_store_unchanged() {
        let mut screen = screen(ConfirmChoice::No);
        screen.add_task("Buy milk");
        screen.add_task("Buy milk");

        assert_eq!(screen.tasks_counter(), 1);
        assert_eq!(screen.prompt_mut().warnings, vec!["Buy milk".to_string()]);
    }

    #[test]
    fn toggle_forwards_to_the_store() {
        let mut screen = screen(ConfirmChoice::No);
        screen.add_task("Buy milk");
        let id = screen.tasks()[0].id;

        screen.toggle_task_done(id);
        assert!(screen.tasks()[0].done);
        // Unknown id: silent no-op.
        screen.toggle_task_done(-1);
        assert!(screen.tasks()[0].done);
    }

    #[rstest]
    #[case(ConfirmChoice::Yes, 0)]
    #[case(ConfirmChoice::No, 1)]
    fn removal_requires_confirmation(#[case] answer: ConfirmChoice, #[case] remaining: usize) {
        let mut screen = screen(answer);
        screen.add_task("Buy milk");
        let id = screen.tasks()[0].id;

        screen.remove_task(id);

        assert_eq!(screen.tasks_counter(), remaining);
        let prompt = screen.prompt_mut();
        assert_eq!(
            prompt.confirmations,
            vec![RemovalRequest {
                id,
                title: Some("Buy milk".to_string()),
            }]
        );
    }

    #[test]
    fn removal_of_unknown_id_still_prompts_then_noops() {
        let mut screen = screen(ConfirmChoice::Yes);
        screen.add_task("Buy milk");

        screen.remove_task(-1);

        assert_eq!(screen.tasks_counter(), 1);
        assert_eq!(
            screen.prompt_mut().confirmations,
            vec![RemovalRequest {
                id: -1,
                title: None,
            }]
        );
    }

    #[test]
    fn edit_reports_success_and_routes_duplicates_to_the_warning() {
        let mut screen = screen(ConfirmChoice::No);
        screen.add_task("Buy milk");
        screen.add_task("Water plants");
        let id = screen.tasks()[0].id;

        assert!(screen.edit_task(id, "Buy oat milk"));
        assert_eq!(screen.tasks()[0].title, "Buy oat milk");

        assert!(!screen.edit_task(id, "Water plants"));
        assert_eq!(screen.tasks()[0].title, "Buy oat milk");
        assert_eq!(
            screen.prompt_mut().warnings,
            vec!["Water plants".to_string()]
        );
    }

    #[test]
    fn edit_of_unknown_id_fails_without_warning() {
        let mut screen = screen(ConfirmChoice::No);
        screen.add_task("Buy milk");

        assert!(!screen.edit_task(-1, "fresh title"));
        assert!(screen.prompt_mut().warnings.is_empty());
    }
}
