//! CLI command definitions

use crate::domain::{iso_date, TimeReference, WeekWindow};
use crate::error::{DisciplineError, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "discipline")]
#[command(about = "Weekly habit tracking grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Selects the visible week
#[derive(Args, Debug, Clone, Default)]
pub struct WeekArgs {
    /// Any day inside the week (e.g., today, last week, 2024-01-03)
    #[arg(long, value_name = "TIME_REF")]
    pub week: Option<String>,

    /// Move the selected week by this many weeks (negative goes back)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub shift: i64,
}

impl WeekArgs {
    /// Resolve to a Monday-start window, relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> Result<WeekWindow> {
        let reference = match &self.week {
            Some(time_ref) => TimeReference::parse(time_ref)?.resolve(today),
            None => today,
        };

        WeekWindow::containing(reference)
            .and_then(|week| week.shifted(self.shift))
            .ok_or_else(|| {
                DisciplineError::InvalidTimeReference(format!(
                    "{} weeks from {}",
                    self.shift,
                    iso_date(reference)
                ))
            })
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One week as a CSV grid
    Csv,
    /// Full snapshot of all habits and marks
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start tracking in a directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show the week grid with totals
    Show {
        #[command(flatten)]
        week: WeekArgs,
    },

    /// List habits with their positions and ids
    List,

    /// Add a habit
    Add {
        /// Habit name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Rename a habit
    Rename {
        /// Position, id or exact name of the habit
        habit: String,

        /// New name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Delete a habit and its marks
    Remove {
        /// Position, id or exact name of the habit
        habit: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Mark or unmark a habit for a day
    Toggle {
        /// Position, id or exact name of the habit
        habit: String,

        /// Day to toggle (e.g., today, yesterday, monday, 2024-01-03)
        #[arg(default_value = "today")]
        day: String,
    },

    /// Export the week as CSV or everything as JSON
    Export {
        #[arg(value_enum)]
        format: ExportFormat,

        #[command(flatten)]
        week: WeekArgs,

        /// Directory to write into (default: export_dir from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all data with a JSON export
    Import {
        /// JSON file written by 'discipline export json'
        file: PathBuf,
    },

    /// Delete all habits and marks
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
