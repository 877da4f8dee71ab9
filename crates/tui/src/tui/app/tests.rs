use crossterm::event::{KeyCode, KeyEvent};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::config::RunOptions;

use super::{App, InputMode, StatusKind};

fn app() -> App {
    App::new(&RunOptions::default())
}

fn demo_app() -> App {
    App::new(&RunOptions { demo: true })
}

fn key(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::from(code));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        key(app, KeyCode::Char(ch));
    }
}

fn add_task(app: &mut App, title: &str) {
    key(app, KeyCode::Char('a'));
    type_text(app, title);
    key(app, KeyCode::Enter);
}

fn clear_input(app: &mut App) {
    key(app, KeyCode::End);
    for _ in 0..app.input.as_str().chars().count() {
        key(app, KeyCode::Backspace);
    }
}

fn titles(app: &App) -> Vec<&str> {
    app.tasks().iter().map(|task| task.title.as_str()).collect()
}

fn status_is_error(app: &App) -> bool {
    matches!(
        app.status.as_ref().map(|status| status.kind),
        Some(StatusKind::Error)
    )
}

#[test]
fn starts_empty_without_demo_tasks() {
    let app = app();
    assert!(app.tasks().is_empty());
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn adds_a_task_via_keys() {
    let mut app = app();
    add_task(&mut app, "Buy milk");

    assert_eq!(titles(&app), vec!["Buy milk"]);
    assert!(!app.tasks()[0].done);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.input_focused);
}

#[test]
fn duplicate_add_warns_and_stays_in_add_mode() {
    let mut app = app();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Buy milk");

    assert_eq!(titles(&app), vec!["Buy milk"]);
    assert_eq!(app.input_mode, InputMode::Add);
    assert!(status_is_error(&app));
    // The rejected title stays in the input so it can be fixed up.
    assert_eq!(app.input.as_str(), "Buy milk");
}

#[test]
fn blank_add_is_refused() {
    let mut app = app();
    key(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "   ");
    key(&mut app, KeyCode::Enter);

    assert!(app.tasks().is_empty());
    assert_eq!(app.input_mode, InputMode::Add);
    assert!(status_is_error(&app));
}

#[test]
fn space_toggles_the_selected_task_both_ways() {
    let mut app = demo_app();
    key(&mut app, KeyCode::Char(' '));
    assert!(app.tasks()[0].done);
    assert!(!app.tasks()[1].done);

    key(&mut app, KeyCode::Char(' '));
    assert!(!app.tasks()[0].done);
}

#[rstest]
#[case(KeyCode::Char('j'), 1)]
#[case(KeyCode::Down, 1)]
#[case(KeyCode::End, 2)]
fn selection_follows_navigation_keys(#[case] code: KeyCode, #[case] expected: usize) {
    let mut app = demo_app();
    key(&mut app, code);
    assert_eq!(app.selected, expected);
}

#[test]
fn entering_edit_focuses_the_input_with_the_current_title() {
    let mut app = demo_app();
    key(&mut app, KeyCode::Char('e'));

    assert_eq!(app.input_mode, InputMode::Edit);
    assert!(app.input_focused);
    assert_eq!(app.input.as_str(), "Buy groceries");
}

#[test]
fn committing_an_edit_renames_and_blurs() {
    let mut app = demo_app();
    key(&mut app, KeyCode::Char('e'));
    clear_input(&mut app);
    type_text(&mut app, "Buy oat milk");
    key(&mut app, KeyCode::Enter);

    assert_eq!(
        titles(&app),
        vec!["Buy oat milk", "Water the plants", "Reply to Ana"]
    );
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.input_focused);
}

#[test]
fn duplicate_edit_is_rejected_and_leaves_the_title_alone() {
    let mut app = demo_app();
    key(&mut app, KeyCode::Char('e'));
    clear_input(&mut app);
    type_text(&mut app, "Water the plants");
    key(&mut app, KeyCode::Enter);

    assert_eq!(
        titles(&app),
        vec!["Buy groceries", "Water the plants", "Reply to Ana"]
    );
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(status_is_error(&app));
}

#[test]
fn resubmitting_the_unchanged_title_collides_with_itself() {
    let mut app = demo_app();
    key(&mut app, KeyCode::Char('e'));
    key(&mut app, KeyCode::Enter);

    assert_eq!(app.tasks()[0].title, "Buy groceries");
    assert!(status_is_error(&app));
}

#[test]
fn escape_cancels_an_edit_without_mutation() {
    let mut app = demo_app();
    key(&mut app, KeyCode::Char('e'));
    type_text(&mut app, " scribbles");
    key(&mut app, KeyCode::Esc);

    assert_eq!(app.tasks()[0].title, "Buy groceries");
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.input_focused);
}

#[test]
fn remove_asks_for_confirmation_and_defaults_to_no() {
    let mut app = demo_app();
    key(&mut app, KeyCode::Char('x'));
    assert_eq!(app.input_mode, InputMode::ConfirmRemove);

    key(&mut app, KeyCode::Enter);
    assert_eq!(app.tasks().len(), 3);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn confirming_removal_deletes_the_selected_task() {
    let mut app = demo_app();
    key(&mut app, KeyCode::Char('x'));
    key(&mut app, KeyCode::Left);
    key(&mut app, KeyCode::Enter);

    assert_eq!(titles(&app), vec!["Water the plants", "Reply to Ana"]);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn escape_declines_removal() {
    let mut app = demo_app();
    key(&mut app, KeyCode::Char('x'));
    key(&mut app, KeyCode::Esc);

    assert_eq!(app.tasks().len(), 3);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn removing_the_last_task_clamps_the_selection() {
    let mut app = demo_app();
    key(&mut app, KeyCode::End);
    key(&mut app, KeyCode::Char('x'));
    key(&mut app, KeyCode::Left);
    key(&mut app, KeyCode::Enter);

    assert_eq!(app.tasks().len(), 2);
    assert_eq!(app.selected, 1);
}

#[test]
fn help_overlay_opens_and_closes() {
    let mut app = app();
    key(&mut app, KeyCode::Char('h'));
    assert_eq!(app.input_mode, InputMode::Help);

    key(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
}
