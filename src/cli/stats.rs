//! Derived statistics commands: the dashboard and the full report.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::stats;

use super::load_context;

pub struct StatsOptions {
    pub upcoming: Option<usize>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ReportOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run_stats(options: StatsOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let limit = match options.upcoming {
        Some(value) if value < 1 => {
            return Err(Error::InvalidArgument("upcoming must be >= 1".to_string()));
        }
        Some(value) => value,
        None => ctx.config.dashboard.upcoming,
    };

    let summary = stats::dashboard(ctx.manager.tasks(), limit);

    let mut human = HumanOutput::new("Dashboard");
    human.push_summary("Total", summary.total.to_string());
    human.push_summary("Completed", summary.completed.to_string());
    human.push_summary("Upcoming", summary.upcoming.len().to_string());
    for task in &summary.upcoming {
        human.push_detail(format!(
            "{} {} (due {})",
            task.id, task.title, task.due_date
        ));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "stats",
        &summary,
        Some(&human),
    )
}

pub fn run_report(options: ReportOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let report = stats::report(ctx.manager.tasks());

    let mut human = HumanOutput::new("Task report");
    for (label, count) in report.priorities.entries() {
        human.push_summary(label, count.to_string());
    }
    for (label, count) in report.completion.entries() {
        human.push_summary(label, count.to_string());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "report",
        &report,
        Some(&human),
    )
}
