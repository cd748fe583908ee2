//! Date-fenced daily note.
//!
//! A single per-day scalar value (e.g. today's weight or step count). The
//! stored value is meaningful only for the calendar date it was recorded
//! under; any other date treats it as absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-day scalar note, valid only on `recorded_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyNote {
    /// Free-form value entered by the user.
    pub value: String,
    /// Calendar date the value was recorded under, serialized `YYYY-MM-DD`.
    pub recorded_date: NaiveDate,
}

impl DailyNote {
    /// Creates a note recorded under the given date.
    pub fn for_date(value: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            value: value.into(),
            recorded_date: date,
        }
    }

    /// Returns the value only when it was recorded on `today`.
    pub fn value_on(&self, today: NaiveDate) -> Option<&str> {
        (self.recorded_date == today).then_some(self.value.as_str())
    }
}
