use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::{TimeOfDay, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    #[default]
    Planned,
    Done,
    Skipped,
}

/// A scheduled activity on the day timeline.
///
/// The core never writes derived layout data back onto an activity; lane
/// indices live in a side mapping keyed by `id` (see [`crate::lanes`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub start: TimeOfDay,
    #[serde(default)]
    pub end: TimeOfDay,
    /// Weekdays this activity applies to. Empty means every day.
    #[serde(default)]
    pub days: Vec<Weekday>,
    #[serde(default)]
    pub status: ActivityStatus,
    #[serde(default)]
    pub notes: String,
}

impl Activity {
    pub fn new(title: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            start,
            end,
            days: Vec::new(),
            status: ActivityStatus::Planned,
            notes: String::new(),
        }
    }

    /// The day filter: an empty day set applies to every day.
    pub fn applies_on(&self, day: Weekday) -> bool {
        self.days.is_empty() || self.days.contains(&day)
    }

    /// Signed duration in minutes. Zero-length and inverted intervals are
    /// allowed; lane assignment places them under the ordinary rule.
    pub fn duration_minutes(&self) -> i32 {
        i32::from(self.end.minutes()) - i32::from(self.start.minutes())
    }
}
