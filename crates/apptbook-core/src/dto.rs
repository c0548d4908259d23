use crate::display::sorted_for_display;
use crate::domain::{Appointment, Person, TagKind};
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDto {
    pub name: String,
    pub kind: TagKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonDto {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// In display order.
    pub tags: Vec<TagDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentDto {
    pub name: String,
    pub start: NaiveDateTime,
    pub duration_minutes: u32,
    pub attendees: Vec<String>,
}

impl From<&Person> for PersonDto {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            phone: person.phone.clone(),
            email: person.email.clone(),
            address: person.address.clone(),
            tags: sorted_for_display(&person.tags)
                .into_iter()
                .map(|tag| TagDto {
                    name: tag.name.as_str().to_string(),
                    kind: tag.kind,
                })
                .collect(),
        }
    }
}

impl From<&Appointment> for AppointmentDto {
    fn from(appointment: &Appointment) -> Self {
        Self {
            name: appointment.name.clone(),
            start: appointment.start,
            duration_minutes: appointment.duration_minutes,
            attendees: appointment.attendees.clone(),
        }
    }
}

/// Outcome of a command as printed with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutputDto {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons: Option<Vec<PersonDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointments: Option<Vec<AppointmentDto>>,
}
