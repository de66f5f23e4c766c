//! The canonical task collection and its mutation operations.
//!
//! `TaskManager` owns the in-memory `Vec<Task>` plus the store it was
//! rehydrated from. Every mutation recomputes the collection, persists
//! the whole of it through the store, and only then returns, so the
//! durable file always holds the last completed operation. Collection
//! order is insertion order; nothing here sorts.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::store::TaskStore;
use crate::task::{NewTaskData, Task, TaskId, TaskIntent};

#[derive(Debug)]
pub struct TaskManager {
    tasks: Vec<Task>,
    store: TaskStore,
}

impl TaskManager {
    /// Rehydrate the collection from the given store.
    ///
    /// Never fails: a missing or corrupt store file comes back as an
    /// empty collection (the store logs the latter).
    pub fn open(store: TaskStore) -> Self {
        let tasks = store.load();
        Self { tasks, store }
    }

    /// The canonical collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Route an intent to the matching operation.
    ///
    /// `Create` adds a new task; `Edit` overlays the supplied fields onto
    /// the task with that id. Both return the affected task as stored.
    pub fn submit(&mut self, intent: TaskIntent) -> Result<Task> {
        match intent {
            TaskIntent::Create(data) => self.add(data),
            TaskIntent::Edit { id, fields } => {
                self.update(id, fields)?;
                // update guarantees the id is present
                self.task(id).cloned().ok_or(Error::TaskNotFound(id))
            }
        }
    }

    /// Create a task and append it to the collection.
    ///
    /// Validates before anything else: a blank title fails with
    /// `Error::Validation` and neither the collection nor the store is
    /// touched. The new task gets a fresh id, `completed = false`, and
    /// `created = now`.
    pub fn add(&mut self, data: NewTaskData) -> Result<Task> {
        let data = data.normalize()?;
        let task = Task {
            id: next_available_id(&self.tasks, now_millis()),
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            priority: data.priority,
            completed: false,
            created: Utc::now(),
        };
        self.tasks.push(task.clone());
        self.store.save(&self.tasks)?;
        Ok(task)
    }

    /// Replace the mutable fields of the task with the given id.
    ///
    /// `id`, `created`, `completed`, and the task's position all pass
    /// through untouched. Fails with `Error::TaskNotFound` if no task has
    /// that id, leaving the collection as it was.
    pub fn update(&mut self, id: TaskId, data: NewTaskData) -> Result<&[Task]> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        let data = data.normalize()?;

        let task = &mut self.tasks[index];
        task.title = data.title;
        task.description = data.description;
        task.due_date = data.due_date;
        task.priority = data.priority;

        self.store.save(&self.tasks)?;
        Ok(&self.tasks)
    }

    /// Remove the task with the given id.
    ///
    /// Deleting an id that is not present is a silent no-op; the
    /// (unchanged) collection is still persisted.
    pub fn delete(&mut self, id: TaskId) -> Result<&[Task]> {
        self.tasks.retain(|task| task.id != id);
        self.store.save(&self.tasks)?;
        Ok(&self.tasks)
    }

    /// Flip the completed flag of the task with the given id.
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<&[Task]> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        task.completed = !task.completed;

        self.store.save(&self.tasks)?;
        Ok(&self.tasks)
    }
}

fn now_millis() -> TaskId {
    Utc::now().timestamp_millis().max(0) as TaskId
}

/// Smallest id >= `seed` that no existing task holds.
///
/// Ids are seeded from the wall clock in milliseconds; bumping past
/// collisions keeps two creations in the same millisecond distinct.
fn next_available_id(tasks: &[Task], seed: TaskId) -> TaskId {
    let mut candidate = seed;
    while tasks.iter().any(|task| task.id == candidate) {
        candidate += 1;
    }
    candidate
}
