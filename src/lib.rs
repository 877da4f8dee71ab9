pub use taskpad_tui::cli;
pub use taskpad_tui::config;
pub use taskpad_tui::telemetry;
pub use taskpad_tui::tui;
pub use taskpad_tui::RunOptions;

pub use taskpad_core as core;
pub use taskpad_core::model;
pub use taskpad_core::row;
pub use taskpad_core::screen;
pub use taskpad_core::store;
