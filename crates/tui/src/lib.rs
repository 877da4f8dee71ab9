pub mod cli;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use taskpad_core as core;
pub use taskpad_core::model;
pub use taskpad_core::row;
pub use taskpad_core::screen;
pub use taskpad_core::store;

pub use config::RunOptions;
