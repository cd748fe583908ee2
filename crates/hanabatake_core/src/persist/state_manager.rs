//! Scoped load/save of garden state documents.
//!
//! # Responsibility
//! - Restore the three persisted documents exactly once at process start.
//! - Overwrite each document with a fresh snapshot after mutations.
//!
//! # Invariants
//! - Unreadable or malformed documents degrade to documented defaults and
//!   are logged, never surfaced to callers.
//! - Saves are rejected until `load` has completed, so empty initial state
//!   can never clobber durable state.

use crate::model::daily_note::DailyNote;
use crate::model::flower::Flower;
use crate::model::task::{Effort, Task};
use crate::repo::blob_repo::{BlobRepository, RepoError};
use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Document key for the task collection.
pub const TASKS_KEY: &str = "tasks_v2";
/// Document key for the flower collection.
pub const FLOWERS_KEY: &str = "flowers_v2";
/// Document key for the daily note.
pub const DAILY_NOTE_KEY: &str = "daily_note_v1";

pub type PersistResult<T> = Result<T, PersistError>;

/// Failure modes of the save path. The load path never fails.
#[derive(Debug)]
pub enum PersistError {
    /// Save attempted before the one-time restoration finished.
    NotLoaded,
    Serialize(serde_json::Error),
    Repo(RepoError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotLoaded => write!(f, "state save attempted before restoration completed"),
            Self::Serialize(err) => write!(f, "failed to serialize state snapshot: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotLoaded => None,
            Self::Serialize(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for PersistError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Snapshot restored from the durable store at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct RestoredState {
    pub tasks: Vec<Task>,
    pub flowers: Vec<Flower>,
    pub daily_note: Option<DailyNote>,
}

/// Load/save coordinator over a blob repository.
pub struct StateManager<R: BlobRepository> {
    repo: R,
    loaded: bool,
}

impl<R: BlobRepository> StateManager<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            loaded: false,
        }
    }

    /// Reads all three documents and marks the manager loaded.
    ///
    /// Per-document fallbacks:
    /// - tasks: absent, empty, or unreadable → the builtin starter list;
    /// - flowers: absent or unreadable → empty garden;
    /// - daily note: absent or unreadable → none; recorded under a date
    ///   other than `today` → none (date fence).
    pub fn load(&mut self, today: NaiveDate) -> RestoredState {
        let tasks = match self.read_document::<Vec<Task>>(TASKS_KEY) {
            Some(tasks) if !tasks.is_empty() => tasks,
            _ => {
                info!("event=state_load module=persist status=seeded key={TASKS_KEY}");
                seed_tasks()
            }
        };

        let flowers = self
            .read_document::<Vec<Flower>>(FLOWERS_KEY)
            .unwrap_or_default();

        let daily_note = self
            .read_document::<DailyNote>(DAILY_NOTE_KEY)
            .filter(|note| {
                let fresh = note.recorded_date == today;
                if !fresh {
                    info!(
                        "event=state_load module=persist status=stale key={DAILY_NOTE_KEY} recorded_date={}",
                        note.recorded_date
                    );
                }
                fresh
            });

        self.loaded = true;
        info!(
            "event=state_load module=persist status=ok tasks={} flowers={} daily_note={}",
            tasks.len(),
            flowers.len(),
            daily_note.is_some()
        );

        RestoredState {
            tasks,
            flowers,
            daily_note,
        }
    }

    /// Overwrites the task document with a fresh snapshot.
    pub fn save_tasks(&self, tasks: &[Task]) -> PersistResult<()> {
        self.write_document(TASKS_KEY, &tasks)
    }

    /// Overwrites the flower document with a fresh snapshot.
    pub fn save_flowers(&self, flowers: &[Flower]) -> PersistResult<()> {
        self.write_document(FLOWERS_KEY, &flowers)
    }

    /// Overwrites the daily-note document.
    pub fn save_daily_note(&self, note: &DailyNote) -> PersistResult<()> {
        self.write_document(DAILY_NOTE_KEY, note)
    }

    fn read_document<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let blob = match self.repo.read_blob(key) {
            Ok(blob) => blob?,
            Err(err) => {
                warn!("event=state_load module=persist status=read_error key={key} error={err}");
                return None;
            }
        };

        match serde_json::from_str(&blob) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("event=state_load module=persist status=parse_error key={key} error={err}");
                None
            }
        }
    }

    fn write_document<T: Serialize>(&self, key: &str, value: &T) -> PersistResult<()> {
        if !self.loaded {
            warn!("event=state_save module=persist status=rejected key={key} reason=not_loaded");
            return Err(PersistError::NotLoaded);
        }

        let json = serde_json::to_string(value)?;
        self.repo.write_blob(key, &json)?;
        Ok(())
    }
}

/// The starter tasks shipped on first launch (or after a wiped task
/// document), matching the original app's seed list.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: Uuid::new_v4(),
            name: "解析2の宿題".to_string(),
            completed: false,
            effort: Effort::Priority { level: 2 },
            deadline: date_time(2025, 11, 2, 17, 30),
        },
        Task {
            id: Uuid::new_v4(),
            name: "TypeScriptの勉強 (復習)".to_string(),
            completed: true,
            effort: Effort::Priority { level: 3 },
            deadline: None,
        },
        Task {
            id: Uuid::new_v4(),
            name: "基礎物理学3の宿題".to_string(),
            completed: false,
            effort: Effort::Priority { level: 1 },
            deadline: date_time(2025, 11, 11, 0, 0),
        },
    ]
}

fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|date| date.and_hms_opt(hour, minute, 0))
}
