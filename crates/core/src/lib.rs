pub mod model;
pub mod row;
pub mod screen;
pub mod store;

pub use model::{Task, TaskId};
pub use row::{FocusChange, RowEditor, RowMode};
pub use screen::{ConfirmChoice, HomeScreen, Prompt, RemovalRequest, TaskActions};
pub use store::{StoreError, TaskStore};
