//! taskmaster task command implementations.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::filter::TaskFilter;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{parse_due_date, parse_task_id, NewTaskData, Priority, Task, TaskId, TaskIntent};

use super::load_context;

pub struct AddOptions {
    pub title: String,
    pub due: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct EditOptions {
    pub id: String,
    pub title: Option<String>,
    pub due: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ToggleOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct RmOptions {
    pub id: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ListOptions {
    pub priority: String,
    pub status: String,
    pub limit: Option<usize>,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run_add(options: AddOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir)?;
    let due_date = parse_due_date(&options.due)?;
    let priority = match options.priority.as_deref() {
        Some(value) => value.parse()?,
        None => ctx.config.tasks.default_priority(),
    };

    let task = ctx.manager.submit(TaskIntent::Create(NewTaskData {
        title: options.title,
        description: options.description,
        due_date,
        priority,
    }))?;

    let mut human = HumanOutput::new("Task added");
    human.push_summary("Id", task.id.to_string());
    human.push_summary("Title", task.title.clone());
    human.push_summary("Due", task.due_date.to_string());
    human.push_summary("Priority", task.priority.label());

    let output = TaskAddedOutput { task };
    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &output,
        Some(&human),
    )
}

pub fn run_edit(options: EditOptions) -> Result<()> {
    if options.title.is_none()
        && options.due.is_none()
        && options.description.is_none()
        && options.priority.is_none()
    {
        return Err(Error::InvalidArgument(
            "edit requires at least one of --title, --due, --description, --priority".to_string(),
        ));
    }

    let mut ctx = load_context(options.data_dir)?;
    let id = parse_task_id(&options.id)?;
    let current = ctx
        .manager
        .task(id)
        .cloned()
        .ok_or(Error::TaskNotFound(id))?;

    let due_date = match options.due.as_deref() {
        Some(value) => parse_due_date(value)?,
        None => current.due_date,
    };
    let priority = match options.priority.as_deref() {
        Some(value) => value.parse()?,
        None => current.priority,
    };
    // A present but blank --description clears the field downstream.
    let cleared = options
        .description
        .as_deref()
        .map(|text| text.trim().is_empty())
        .unwrap_or(false);
    let fields = NewTaskData {
        title: options.title.unwrap_or_else(|| current.title.clone()),
        description: options
            .description
            .or_else(|| current.description.clone()),
        due_date,
        priority,
    };

    let task = ctx.manager.submit(TaskIntent::Edit { id, fields })?;

    let mut human = HumanOutput::new("Task updated");
    human.push_summary("Id", task.id.to_string());
    human.push_summary("Title", task.title.clone());
    human.push_summary("Due", task.due_date.to_string());
    human.push_summary("Priority", task.priority.label());
    if cleared {
        human.push_summary("Description", "(cleared)");
    }

    let output = TaskEditedOutput { task };
    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "edit",
        &output,
        Some(&human),
    )
}

pub fn run_toggle(options: ToggleOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir)?;
    let id = parse_task_id(&options.id)?;
    ctx.manager.toggle_complete(id)?;
    // toggle_complete only succeeds when the id exists
    let task = ctx
        .manager
        .task(id)
        .cloned()
        .ok_or(Error::TaskNotFound(id))?;

    let state = if task.completed { "completed" } else { "pending" };
    let mut human = HumanOutput::new("Task toggled");
    human.push_summary("Id", task.id.to_string());
    human.push_summary("Title", task.title.clone());
    human.push_summary("Now", state);

    let output = TaskToggledOutput {
        id: task.id,
        completed: task.completed,
    };
    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "toggle",
        &output,
        Some(&human),
    )
}

pub fn run_rm(options: RmOptions) -> Result<()> {
    let mut ctx = load_context(options.data_dir)?;
    let id = parse_task_id(&options.id)?;
    let removed = ctx.manager.task(id).is_some();
    ctx.manager.delete(id)?;

    let header = if removed {
        "Task removed"
    } else {
        "Task already absent"
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("Id", id.to_string());
    if !removed {
        human.push_warning(format!("no task had id {id}; nothing to remove"));
    }

    let output = TaskRemovedOutput { id, removed };
    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "rm",
        &output,
        Some(&human),
    )
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let ctx = load_context(options.data_dir)?;
    let filter = TaskFilter {
        priority: parse_priority_filter(&options.priority)?,
        status: options.status.parse()?,
    };

    let mut tasks = ctx.manager.tasks().to_vec();
    filter.apply(&mut tasks);
    apply_limit(&mut tasks, options.limit)?;

    let output = TaskListOutput {
        total: tasks.len(),
        tasks: tasks.clone(),
    };

    let mut human = HumanOutput::new("Tasks");
    human.push_summary("Total", tasks.len().to_string());
    if !filter.is_unfiltered() {
        human.push_summary("Filter", describe_filter(&filter));
    }
    for task in &tasks {
        human.push_detail(format_task_line(task));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &output,
        Some(&human),
    )
}

/// `all` lifts the priority facet entirely; anything else must be a
/// valid priority.
fn parse_priority_filter(value: &str) -> Result<Option<Priority>> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Ok(Some(value.parse()?))
}

fn apply_limit(tasks: &mut Vec<Task>, limit: Option<usize>) -> Result<()> {
    let Some(limit) = limit else {
        return Ok(());
    };
    if limit < 1 {
        return Err(Error::InvalidArgument("limit must be >= 1".to_string()));
    }
    tasks.truncate(limit);
    Ok(())
}

fn describe_filter(filter: &TaskFilter) -> String {
    let priority = filter
        .priority
        .map(|p| p.to_string())
        .unwrap_or_else(|| "all".to_string());
    format!("priority={priority} status={}", filter.status)
}

fn format_task_line(task: &Task) -> String {
    let mark = if task.completed { 'x' } else { ' ' };
    let mut line = format!(
        "[{mark}][{}] {} {} (due {})",
        task.priority, task.id, task.title, task.due_date
    );
    if let Some(description) = task.description.as_deref() {
        line.push_str(&format!(" - {description}"));
    }
    line
}

#[derive(serde::Serialize)]
struct TaskAddedOutput {
    task: Task,
}

#[derive(serde::Serialize)]
struct TaskEditedOutput {
    task: Task,
}

#[derive(serde::Serialize)]
struct TaskToggledOutput {
    id: TaskId,
    completed: bool,
}

#[derive(serde::Serialize)]
struct TaskRemovedOutput {
    id: TaskId,
    removed: bool,
}

#[derive(serde::Serialize)]
struct TaskListOutput {
    total: usize,
    tasks: Vec<Task>,
}
