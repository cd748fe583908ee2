//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its effort descriptor.
//! - Enforce the task-name length rule at creation time.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `name` holds 2..=32 characters whenever a task exists.
//! - `completed` is the only field mutated after creation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Minimum task-name length in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Maximum task-name length in characters.
pub const NAME_MAX_CHARS: usize = 32;

/// Measurement unit for the quantity effort variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    /// Repetition-counted work (e.g. push-ups).
    Reps,
    /// Duration-counted work (e.g. planks).
    Seconds,
}

/// Declared effort of a task.
///
/// A deployment uses one variant consistently; the bloom engine matches on
/// it exhaustively, so new variants cannot be forgotten downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effort {
    /// Coarse urgency level, 1 (most urgent) through 3.
    Priority { level: u8 },
    /// Free-text amount plus set count. Leading integers are extracted at
    /// derivation time; unparsable text degrades to a default, never an error.
    Quantity {
        amount_text: String,
        unit: QuantityUnit,
        sets_text: String,
    },
}

impl Effort {
    /// Returns the priority level for the priority variant.
    ///
    /// The sorted task view uses this as its secondary key; quantity tasks
    /// return `None` and keep their original relative order.
    pub fn priority_level(&self) -> Option<u8> {
        match self {
            Self::Priority { level } => Some(*level),
            Self::Quantity { .. } => None,
        }
    }
}

/// Validation failure reported by task creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Name length outside the 2..=32 character range.
    NameLength { chars: usize },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameLength { chars } => write!(
                f,
                "task name must be {NAME_MIN_CHARS} to {NAME_MAX_CHARS} characters, got {chars}"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical record for a trackable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for mutation targeting and persistence.
    pub id: TaskId,
    /// Display name, always 2..=32 characters.
    pub name: String,
    /// Completion flag; the false→true transition spawns flowers.
    pub completed: bool,
    /// Declared effort driving flower derivation.
    pub effort: Effort,
    /// Optional due timestamp, serialized as an ISO-like string.
    pub deadline: Option<NaiveDateTime>,
}

impl Task {
    /// Creates an incomplete task with a generated stable ID.
    ///
    /// # Errors
    /// - `NameLength` when the name is shorter than 2 or longer than 32
    ///   characters; nothing is allocated into a collection on failure.
    pub fn new(
        name: impl Into<String>,
        effort: Effort,
        deadline: Option<NaiveDateTime>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), name, effort, deadline)
    }

    /// Creates an incomplete task with a caller-provided stable ID.
    ///
    /// Used by restore paths where identity already exists in storage.
    pub fn with_id(
        id: TaskId,
        name: impl Into<String>,
        effort: Effort,
        deadline: Option<NaiveDateTime>,
    ) -> Result<Self, TaskValidationError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id,
            name,
            completed: false,
            effort,
            deadline,
        })
    }
}

/// Checks the task-name length rule.
pub fn validate_name(name: &str) -> Result<(), TaskValidationError> {
    let chars = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Err(TaskValidationError::NameLength { chars });
    }
    Ok(())
}
