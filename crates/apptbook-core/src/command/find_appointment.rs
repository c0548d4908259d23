use crate::command::{CommandResult, ListView, MESSAGE_APPOINTMENTS_LISTED};
use crate::filter::AppointmentPredicate;
use crate::model::Model;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindAppointmentCommand {
    predicate: AppointmentPredicate,
}

impl FindAppointmentCommand {
    pub const USAGE: &'static str = "findappt: Finds all appointments whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: [o/n] KEYWORD [MORE_KEYWORDS]... or o/n n/NAME [n/MORE_NAMES]...\n\
Examples:\n\
findappt math\n\
findappt o/n n/Math Lesson n/English";

    pub fn new(predicate: AppointmentPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandResult {
        model.update_filtered_appointment_list(self.predicate.clone());
        let count = model.filtered_appointment_list().len();
        CommandResult::new(
            format!("{} {}", count, MESSAGE_APPOINTMENTS_LISTED),
            ListView::Appointments,
        )
    }
}
