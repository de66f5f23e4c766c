//! Command-line interface for taskmaster
//!
//! This module defines the CLI structure using clap derive macros.
//! Task mutations live in the `task` submodule, derived statistics in
//! `stats`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::manager::TaskManager;
use crate::store::TaskStore;

mod stats;
mod task;

/// taskmaster - Task tracking from the command line
///
/// Keeps one collection of tasks with due dates, priorities, and
/// completion state in a JSON file, and derives dashboard statistics
/// from it.
#[derive(Parser, Debug)]
#[command(name = "taskmaster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding tasks.json and taskmaster.toml
    #[arg(long, global = true, env = "TASKMASTER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task to the collection
    Add {
        /// Task title
        title: String,

        /// Due date as YYYY-MM-DD
        #[arg(long)]
        due: String,

        /// Longer free-form description
        #[arg(long)]
        description: Option<String>,

        /// Priority: low, medium, high (defaults to tasks.default_priority)
        #[arg(long)]
        priority: Option<String>,
    },

    /// Edit fields of an existing task
    Edit {
        /// Task id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New due date as YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,

        /// New description (pass "" to clear it)
        #[arg(long)]
        description: Option<String>,

        /// New priority: low, medium, high
        #[arg(long)]
        priority: Option<String>,
    },

    /// Flip a task between pending and completed
    Toggle {
        /// Task id
        id: String,
    },

    /// Remove a task from the collection
    Rm {
        /// Task id
        id: String,
    },

    /// List tasks
    List {
        /// Filter by priority: all, low, medium, high
        #[arg(long, default_value = "all")]
        priority: String,

        /// Filter by status: all, completed, pending
        #[arg(long, default_value = "all")]
        status: String,

        /// Maximum tasks to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Dashboard counts plus the next due tasks
    Stats {
        /// How many upcoming tasks to show (defaults to dashboard.upcoming)
        #[arg(long)]
        upcoming: Option<usize>,
    },

    /// Priority and completion tallies over every task
    Report,
}

/// Everything a command needs: the effective config and the collection
/// manager, rehydrated from the resolved data directory.
struct CliContext {
    config: Config,
    manager: TaskManager,
}

fn load_context(data_dir: Option<PathBuf>) -> Result<CliContext> {
    let data_dir = resolve_data_dir(data_dir)?;
    let config = Config::load_from_dir(&data_dir);
    let manager = TaskManager::open(TaskStore::new(data_dir));
    Ok(CliContext { config, manager })
}

/// Data directory precedence: `--data-dir` (or TASKMASTER_DATA_DIR via
/// clap) first, then the platform data dir.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    directories::ProjectDirs::from("com", "taskmaster", "taskmaster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            Error::OperationFailed(
                "no home directory to derive a data directory from; pass --data-dir".to_string(),
            )
        })
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add {
                title,
                due,
                description,
                priority,
            } => task::run_add(task::AddOptions {
                title,
                due,
                description,
                priority,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Edit {
                id,
                title,
                due,
                description,
                priority,
            } => task::run_edit(task::EditOptions {
                id,
                title,
                due,
                description,
                priority,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Toggle { id } => task::run_toggle(task::ToggleOptions {
                id,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Rm { id } => task::run_rm(task::RmOptions {
                id,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List {
                priority,
                status,
                limit,
            } => task::run_list(task::ListOptions {
                priority,
                status,
                limit,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Stats { upcoming } => stats::run_stats(stats::StatsOptions {
                upcoming,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Report => stats::run_report(stats::ReportOptions {
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
