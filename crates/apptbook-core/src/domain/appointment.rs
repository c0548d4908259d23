use crate::error::CoreError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub name: String,
    pub start: NaiveDateTime,
    #[serde(default)]
    pub duration_minutes: u32,
    /// Names of the persons attending.
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl Appointment {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyAppointmentName);
        }
        Ok(())
    }
}
