//! Display-only filters for task listings.
//!
//! Filters narrow a copy of the collection for presentation; they never
//! touch the canonical collection or the store.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::task::{Priority, Task};

/// Completion-state filter for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Completed,
    Pending,
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Completed => "completed",
            StatusFilter::Pending => "pending",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "completed" => Ok(StatusFilter::Completed),
            "pending" => Ok(StatusFilter::Pending),
            other => Err(Error::InvalidArgument(format!(
                "unknown status filter '{other}' (expected all, completed, or pending)"
            ))),
        }
    }
}

/// Combined listing filter; both facets must match.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFilter {
    pub priority: Option<Priority>,
    pub status: StatusFilter,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Completed => task.completed,
            StatusFilter::Pending => !task.completed,
        }
    }

    /// Retain only matching tasks. The caller hands in a copy of the
    /// collection; insertion order is preserved.
    pub fn apply(&self, tasks: &mut Vec<Task>) {
        tasks.retain(|task| self.matches(task));
    }

    pub fn is_unfiltered(&self) -> bool {
        self.priority.is_none() && self.status == StatusFilter::All
    }
}
