//! Task entity and the intents that feed the collection manager.
//!
//! The stored JSON keeps the camelCase field names of the dashboard
//! schema, so `due_date` serializes as `dueDate` and a blank
//! description is omitted entirely.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Task ids are millisecond timestamps at heart, kept as plain integers
/// in the stored JSON.
pub type TaskId = u64;

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Capitalized form used in report output.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(Error::InvalidArgument(format!(
                "unknown priority '{other}' (expected low, medium, or high)"
            ))),
        }
    }
}

/// A single trackable unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    pub created: DateTime<Utc>,
}

/// Caller-supplied fields for creating or editing a task. Never carries
/// `id`, `completed`, or `created`; the manager owns those.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTaskData {
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub priority: Priority,
}

impl NewTaskData {
    /// Trim and check the boundary invariants. A task never enters the
    /// collection without a non-empty title; blank descriptions collapse
    /// to `None` so the stored JSON omits the field.
    pub fn normalize(self) -> Result<NewTaskData> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::Validation("title must not be empty".to_string()));
        }
        let description = self
            .description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        Ok(NewTaskData {
            title,
            description,
            due_date: self.due_date,
            priority: self.priority,
        })
    }
}

/// A request to the collection manager: create a new task, or overlay
/// edited fields onto an existing one.
#[derive(Debug, Clone)]
pub enum TaskIntent {
    Create(NewTaskData),
    Edit { id: TaskId, fields: NewTaskData },
}

pub fn parse_due_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("due date must not be empty".to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT).map_err(|_| {
        Error::Validation(format!("invalid due date '{trimmed}' (expected YYYY-MM-DD)"))
    })
}

pub fn parse_task_id(value: &str) -> Result<TaskId> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument("task id cannot be empty".to_string()));
    }
    trimmed
        .parse::<TaskId>()
        .map_err(|_| Error::InvalidArgument(format!("invalid task id '{trimmed}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> NewTaskData {
        NewTaskData {
            title: "Buy milk".to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("date"),
            priority: Priority::Low,
        }
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>().expect("parse"), Priority::High);
        assert_eq!(" medium ".parse::<Priority>().expect("parse"), Priority::Medium);
    }

    #[test]
    fn priority_rejects_unknown_values() {
        let err = "urgent".parse::<Priority>().expect_err("reject");
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn normalize_trims_title() {
        let data = NewTaskData {
            title: "  Buy milk  ".to_string(),
            ..sample_data()
        };
        let normalized = data.normalize().expect("normalize");
        assert_eq!(normalized.title, "Buy milk");
    }

    #[test]
    fn normalize_rejects_blank_title() {
        let data = NewTaskData {
            title: "   ".to_string(),
            ..sample_data()
        };
        let err = data.normalize().expect_err("reject");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn normalize_collapses_blank_description() {
        let data = NewTaskData {
            description: Some("   ".to_string()),
            ..sample_data()
        };
        let normalized = data.normalize().expect("normalize");
        assert_eq!(normalized.description, None);
    }

    #[test]
    fn task_serializes_with_camel_case_keys() {
        let task = Task {
            id: 1748771234567,
            title: "Buy milk".to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("date"),
            priority: Priority::Low,
            completed: false,
            created: Utc::now(),
        };
        let json = serde_json::to_value(&task).expect("serialize");
        assert_eq!(json["dueDate"], "2025-06-01");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["completed"], false);
        assert!(json.get("description").is_none());
        assert!(json.get("due_date").is_none());

        let back: Task = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, task);
    }

    #[test]
    fn task_deserializes_without_completed_flag() {
        let json = serde_json::json!({
            "id": 7,
            "title": "Water plants",
            "dueDate": "2025-02-15",
            "priority": "medium",
            "created": "2025-01-01T00:00:00Z",
        });
        let task: Task = serde_json::from_value(json).expect("deserialize");
        assert!(!task.completed);
        assert_eq!(task.description, None);
    }

    #[test]
    fn parse_due_date_accepts_iso_dates() {
        let date = parse_due_date("2025-06-01").expect("parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1).expect("date"));
    }

    #[test]
    fn parse_due_date_rejects_blank_and_garbage() {
        assert!(matches!(
            parse_due_date("   ").expect_err("blank"),
            Error::Validation(_)
        ));
        assert!(matches!(
            parse_due_date("June 1st").expect_err("garbage"),
            Error::Validation(_)
        ));
    }

    #[test]
    fn parse_task_id_rejects_non_numeric_input() {
        let err = parse_task_id("abc").expect_err("reject");
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(parse_task_id(" 42 ").expect("parse"), 42);
    }
}
