//! Garden use-case service.
//!
//! # Responsibility
//! - Expose the collaborator-facing surface consumed by presentation layers.
//! - Persist a fresh snapshot after every successful mutation.
//!
//! # Invariants
//! - Construction performs the one-time restoration before any save runs.
//! - Flowers are derived only on false→true completion edges; bulk resets
//!   never spawn any.

use crate::bloom::engine::derive;
use crate::bloom::random::RandomSource;
use crate::model::daily_note::DailyNote;
use crate::model::flower::Flower;
use crate::model::task::{Effort, Task, TaskId, TaskValidationError};
use crate::persist::state_manager::{PersistError, PersistResult, StateManager};
use crate::repo::blob_repo::BlobRepository;
use crate::store::flower_store::FlowerStore;
use crate::store::task_store::TaskStore;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure reported by a garden use-case call.
#[derive(Debug)]
pub enum ServiceError {
    Validation(TaskValidationError),
    Persist(PersistError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for ServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PersistError> for ServiceError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Single entry point for everything the presentation layer may do.
pub struct GardenService<R: BlobRepository, S: RandomSource> {
    tasks: TaskStore,
    flowers: FlowerStore,
    daily_note: Option<DailyNote>,
    state: StateManager<R>,
    random: S,
}

impl<R: BlobRepository, S: RandomSource> GardenService<R, S> {
    /// Restores persisted state and returns a ready-to-use service.
    pub fn open(repo: R, random: S) -> Self {
        Self::open_on(repo, random, Local::now().date_naive())
    }

    /// Restoration pinned to an explicit calendar date.
    ///
    /// The date only affects the daily-note fence; tests use this to model
    /// date rollover.
    pub fn open_on(repo: R, random: S, today: NaiveDate) -> Self {
        let mut state = StateManager::new(repo);
        let restored = state.load(today);
        Self {
            tasks: TaskStore::from_tasks(restored.tasks),
            flowers: FlowerStore::from_flowers(restored.flowers),
            daily_note: restored.daily_note,
            state,
            random,
        }
    }

    /// Adds a new incomplete task and persists the collection.
    ///
    /// # Errors
    /// - `Validation` when the name falls outside 2..=32 characters; state
    ///   and storage are unchanged in that case.
    pub fn add_task(
        &mut self,
        name: impl Into<String>,
        effort: Effort,
        deadline: Option<NaiveDateTime>,
    ) -> ServiceResult<Task> {
        let task = self.tasks.add_task(name, effort, deadline)?;
        self.state.save_tasks(self.tasks.tasks())?;
        Ok(task)
    }

    /// Sets one task's completion flag; a false→true edge blooms flowers.
    ///
    /// Returns whether an edge fired. Unknown IDs are a persisted no-op.
    pub fn set_completion(&mut self, id: TaskId, completed: bool) -> ServiceResult<bool> {
        let edge = self.tasks.set_completion(id, completed);
        self.state.save_tasks(self.tasks.tasks())?;

        if edge {
            if let Some(effort) = self.tasks.find(id).map(|task| task.effort.clone()) {
                let specs = derive(&effort, &mut self.random);
                self.flowers.append_specs(specs);
                self.state.save_flowers(self.flowers.flowers())?;
            }
        }

        Ok(edge)
    }

    /// Removes one task by ID and persists the collection.
    pub fn remove_task(&mut self, id: TaskId) -> PersistResult<()> {
        self.tasks.remove_task(id);
        self.state.save_tasks(self.tasks.tasks())
    }

    /// Removes every completed task and persists the collection.
    pub fn remove_completed(&mut self) -> PersistResult<()> {
        self.tasks.remove_completed();
        self.state.save_tasks(self.tasks.tasks())
    }

    /// Resets every completion flag without spawning flowers.
    pub fn uncheck_all(&mut self) -> PersistResult<()> {
        self.tasks.uncheck_all();
        self.state.save_tasks(self.tasks.tasks())
    }

    /// Empties the garden (behind a presentation-side confirmation).
    pub fn clear_all_flowers(&mut self) -> PersistResult<()> {
        self.flowers.clear_all();
        self.state.save_flowers(self.flowers.flowers())
    }

    /// Sorted task snapshot for rendering.
    pub fn sorted_view(&self) -> Vec<Task> {
        self.tasks.sorted_view()
    }

    /// Count of tasks still waiting to be completed.
    pub fn uncompleted_count(&self) -> usize {
        self.tasks.uncompleted_count()
    }

    /// Spawned flowers in spawn order.
    pub fn flowers(&self) -> &[Flower] {
        self.flowers.flowers()
    }

    /// Records today's daily-note value and persists it.
    pub fn set_today_value(&mut self, value: impl Into<String>) -> PersistResult<()> {
        self.set_value_on(value, Local::now().date_naive())
    }

    /// Records the daily-note value under an explicit date.
    pub fn set_value_on(
        &mut self,
        value: impl Into<String>,
        date: NaiveDate,
    ) -> PersistResult<()> {
        let note = DailyNote::for_date(value, date);
        self.state.save_daily_note(&note)?;
        self.daily_note = Some(note);
        Ok(())
    }

    /// Today's daily-note value, if recorded today.
    pub fn today_value(&self) -> Option<&str> {
        self.value_on(Local::now().date_naive())
    }

    /// The daily-note value as seen from an explicit date.
    pub fn value_on(&self, today: NaiveDate) -> Option<&str> {
        self.daily_note
            .as_ref()
            .and_then(|note| note.value_on(today))
    }
}
