use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::activity::{Activity, ActivityStatus};
use crate::error::{CoreError, Result};

/// The activity store boundary. The timeline core only ever reads the
/// activity list; edits go through the few methods here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    pub name: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Schedule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
        }
    }

    pub fn activity(&self, id: Uuid) -> Result<&Activity> {
        self.activities
            .iter()
            .find(|a| a.id == id)
            .ok_or(CoreError::ActivityNotFound(id))
    }

    pub fn set_status(&mut self, id: Uuid, status: ActivityStatus) -> Result<()> {
        let activity = self
            .activities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CoreError::ActivityNotFound(id))?;
        activity.status = status;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let schedule: Self = serde_json::from_str(&json)?;
        log::info!(
            "loaded schedule {:?} with {} activities",
            schedule.name,
            schedule.activities.len()
        );
        Ok(schedule)
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
