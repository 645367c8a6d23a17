//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{Cli, Commands, ExportFormat, WeekArgs};
pub use output::{format_habit_list, format_week_grid};
