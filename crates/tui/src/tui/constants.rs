use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(200);
pub(crate) const STATUS_LIFETIME: Duration = Duration::from_secs(5);

/// Mirrors the warning text of the duplicate-title alert.
pub(crate) const WARN_DUPLICATE_TITLE: &str =
    "Task already registered — you can not register a task with the same name";

pub(crate) const STATUS_ENTER_ADD: &str = "Type a task title • Enter to add • Esc to cancel";
pub(crate) const STATUS_ENTER_EDIT: &str = "Rename the task • Enter to save • Esc to cancel";
pub(crate) const STATUS_CONFIRM_REMOVE: &str =
    "Remove this task? ←/→ choose • Enter confirms • Esc cancels";
pub(crate) const STATUS_REMOVAL_CANCELLED: &str = "Removal cancelled";
pub(crate) const STATUS_EMPTY_TITLE: &str = "Enter a title first";
pub(crate) const STATUS_HELP: &str = "Keyboard reference • Enter/Esc to close";

pub(crate) const DEMO_TASKS: &[&str] = &["Buy groceries", "Water the plants", "Reply to Ana"];
