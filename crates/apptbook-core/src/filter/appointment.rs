use crate::domain::Appointment;
use crate::filter::{Keywords, Predicate};
use crate::text::contains_phrase_ignore_case;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentPredicate {
    /// A keyword may span several words; it matches a contiguous run of
    /// tokens in the appointment name.
    NameContains(Keywords),
    ShowAll,
}

impl AppointmentPredicate {
    pub fn test(&self, appointment: &Appointment) -> bool {
        match self {
            AppointmentPredicate::NameContains(keywords) => keywords
                .iter()
                .any(|keyword| contains_phrase_ignore_case(&appointment.name, keyword)),
            AppointmentPredicate::ShowAll => true,
        }
    }
}

impl Predicate<Appointment> for AppointmentPredicate {
    fn test(&self, item: &Appointment) -> bool {
        AppointmentPredicate::test(self, item)
    }
}
