//! In-memory task collection owner.
//!
//! # Responsibility
//! - Validate and apply every task mutation.
//! - Derive the sorted read view consumed by presentation layers.
//!
//! # Invariants
//! - `completed` is the only field mutated after insertion.
//! - Failed validation leaves the collection untouched.
//! - Completion edges are reported only on false→true transitions.

use crate::model::task::{Effort, Task, TaskId, TaskValidationError};
use chrono::NaiveDateTime;
use std::cmp::Ordering;

/// Owner of the task collection.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a store from previously persisted tasks.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Raw collection in insertion order, for persistence snapshots.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by stable ID.
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Appends a new incomplete task with a fresh stable ID.
    ///
    /// Returns a snapshot of the created task.
    ///
    /// # Errors
    /// - `NameLength` when the name falls outside 2..=32 characters; the
    ///   collection is unchanged in that case.
    pub fn add_task(
        &mut self,
        name: impl Into<String>,
        effort: Effort,
        deadline: Option<NaiveDateTime>,
    ) -> Result<Task, TaskValidationError> {
        let task = Task::new(name, effort, deadline)?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Sets the completion flag of one task.
    ///
    /// Returns `true` only for a false→true transition (a completion edge);
    /// the caller is responsible for deriving flowers from it. Unknown IDs
    /// and every other transition report no edge.
    pub fn set_completion(&mut self, id: TaskId, completed: bool) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                let edge = !task.completed && completed;
                task.completed = completed;
                edge
            }
            None => false,
        }
    }

    /// Removes one task by ID; no-op when absent.
    pub fn remove_task(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
    }

    /// Removes every completed task.
    pub fn remove_completed(&mut self) {
        self.tasks.retain(|task| !task.completed);
    }

    /// Resets every completion flag to false.
    ///
    /// A bulk reset never reports completion edges, so no flowers spawn.
    pub fn uncheck_all(&mut self) {
        for task in &mut self.tasks {
            task.completed = false;
        }
    }

    /// Count of tasks still waiting to be completed.
    pub fn uncompleted_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    /// Sorted snapshot: incomplete before completed, then ascending priority
    /// level for the priority variant.
    ///
    /// The sort is stable, so quantity tasks (which have no secondary key)
    /// keep their original relative order.
    pub fn sorted_view(&self) -> Vec<Task> {
        let mut view = self.tasks.clone();
        view.sort_by(|a, b| {
            a.completed.cmp(&b.completed).then_with(|| {
                match (a.effort.priority_level(), b.effort.priority_level()) {
                    (Some(left), Some(right)) => left.cmp(&right),
                    _ => Ordering::Equal,
                }
            })
        });
        view
    }
}
