// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::{ActivityDraft, ActivityId, ActivityPatch};

/// Command-line arguments for `construplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "construplan",
    version,
    about = "Plan construction activities as a dependency graph and print their timeline.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Construplan.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Path to the activities JSON file. Overrides `[storage].data_file`.
    #[arg(long, value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CONSTRUPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all activities in stored order.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Add an activity.
    Add(AddArgs),
    /// Update fields of an existing activity.
    Update(UpdateArgs),
    /// Remove an activity. References to it from other activities are kept.
    Remove {
        id: ActivityId,
    },
    /// Resolve effective start dates and print the timeline.
    Schedule {
        /// Print JSON instead of the timeline chart.
        #[arg(long)]
        json: bool,
    },
    /// Report duplicate ids, one-sided edges, dangling references and cycles.
    Check,
    /// Print the timeline again whenever the data file changes.
    Watch,
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: Option<String>,

    /// Declared start date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,

    /// Duration in days.
    #[arg(long, value_name = "DAYS", allow_negative_numbers = true)]
    pub duration: Option<i64>,

    /// Predecessor id (repeatable).
    #[arg(long = "after", value_name = "ID")]
    pub predecessors: Vec<ActivityId>,

    /// Successor id (repeatable).
    #[arg(long = "before", value_name = "ID")]
    pub successors: Vec<ActivityId>,
}

impl From<AddArgs> for ActivityDraft {
    fn from(args: AddArgs) -> Self {
        Self {
            title: args.title,
            start: args.start,
            duration: args.duration,
            predecessors: Some(args.predecessors),
            successors: Some(args.successors),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    pub id: ActivityId,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,

    #[arg(long, value_name = "DAYS", allow_negative_numbers = true)]
    pub duration: Option<i64>,

    /// Replace the predecessor set with these ids (repeatable).
    #[arg(long = "after", value_name = "ID", conflicts_with = "clear_after")]
    pub predecessors: Vec<ActivityId>,

    /// Remove all predecessors.
    #[arg(long)]
    pub clear_after: bool,

    /// Replace the successor set with these ids (repeatable).
    #[arg(long = "before", value_name = "ID", conflicts_with = "clear_before")]
    pub successors: Vec<ActivityId>,

    /// Remove all successors.
    #[arg(long)]
    pub clear_before: bool,
}

impl From<UpdateArgs> for ActivityPatch {
    fn from(args: UpdateArgs) -> Self {
        Self {
            title: args.title,
            start: args.start,
            duration: args.duration,
            predecessors: id_list(args.predecessors, args.clear_after),
            successors: id_list(args.successors, args.clear_before),
        }
    }
}

/// `None` leaves the list untouched; `--clear-*` yields an empty list.
fn id_list(ids: Vec<ActivityId>, clear: bool) -> Option<Vec<ActivityId>> {
    if clear {
        Some(Vec::new())
    } else if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
