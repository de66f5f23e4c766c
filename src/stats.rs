//! Derived, read-only statistics over the task collection.
//!
//! Everything here is a pure function over a borrowed task slice; the
//! canonical collection and the store are never touched. The breakdown
//! structs serialize straight into command output.

use serde::Serialize;

use crate::task::{Priority, Task};

/// Tasks tallied per priority, reported in fixed high/medium/low order.
#[derive(Debug, Clone, Serialize)]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityBreakdown {
    /// Labelled counts in reporting order.
    pub fn entries(&self) -> [(&'static str, usize); 3] {
        [
            ("High", self.high),
            ("Medium", self.medium),
            ("Low", self.low),
        ]
    }
}

/// Tasks tallied by completion state.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionBreakdown {
    pub completed: usize,
    pub pending: usize,
}

impl CompletionBreakdown {
    pub fn entries(&self) -> [(&'static str, usize); 2] {
        [("Completed", self.completed), ("Pending", self.pending)]
    }
}

/// The numbers behind the dashboard: totals plus the next deadlines.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub completed: usize,
    pub upcoming: Vec<Task>,
}

/// Both report tallies in one serializable bundle.
#[derive(Debug, Clone, Serialize)]
pub struct TaskReport {
    pub priorities: PriorityBreakdown,
    pub completion: CompletionBreakdown,
}

pub fn total_count(tasks: &[Task]) -> usize {
    tasks.len()
}

pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| task.completed).count()
}

/// The incomplete tasks closest to their due date.
///
/// Sorted ascending by due date with a stable sort, so tasks sharing a
/// date keep their insertion order, then truncated to `limit`.
pub fn upcoming(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut pending: Vec<Task> = tasks
        .iter()
        .filter(|task| !task.completed)
        .cloned()
        .collect();
    pending.sort_by_key(|task| task.due_date);
    pending.truncate(limit);
    pending
}

pub fn priority_breakdown(tasks: &[Task]) -> PriorityBreakdown {
    let mut breakdown = PriorityBreakdown {
        high: 0,
        medium: 0,
        low: 0,
    };
    for task in tasks {
        match task.priority {
            Priority::High => breakdown.high += 1,
            Priority::Medium => breakdown.medium += 1,
            Priority::Low => breakdown.low += 1,
        }
    }
    breakdown
}

pub fn completion_breakdown(tasks: &[Task]) -> CompletionBreakdown {
    let completed = completed_count(tasks);
    CompletionBreakdown {
        completed,
        pending: tasks.len() - completed,
    }
}

pub fn dashboard(tasks: &[Task], upcoming_limit: usize) -> DashboardSummary {
    DashboardSummary {
        total: total_count(tasks),
        completed: completed_count(tasks),
        upcoming: upcoming(tasks, upcoming_limit),
    }
}

pub fn report(tasks: &[Task]) -> TaskReport {
    TaskReport {
        priorities: priority_breakdown(tasks),
        completion: completion_breakdown(tasks),
    }
}
