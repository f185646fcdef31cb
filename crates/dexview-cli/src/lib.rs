mod args;
mod commands;
mod handlers;
mod logging;
pub mod views;

pub use args::{Cli, Commands, ConfigCommand, FilterArgs, LogLevel, OutputFormat};
pub use commands::run;
