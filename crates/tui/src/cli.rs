use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "taskpad",
    version,
    about = "A tiny keyboard-first to-do list that lives in your terminal.",
    after_help = "Examples:\n  taskpad             Launch with an empty list\n  taskpad --demo      Launch with a few sample tasks\n  taskpad --log debug 2>taskpad.log"
)]
pub struct Cli {
    /// Start with a few sample tasks already registered
    #[arg(long)]
    pub demo: bool,

    /// Enable diagnostic logging to stderr (error, warn, info, debug, trace)
    #[arg(long = "log", value_name = "LEVEL")]
    pub log_level: Option<String>,
}
