mod find;
mod find_appointment;

use crate::filter::{AppointmentPredicate, PersonPredicate};
use crate::model::Model;
use crate::parser::{parse_find, parse_find_appointment, ParseError};

pub use find::FindCommand;
pub use find_appointment::FindAppointmentCommand;

pub const MESSAGE_PERSONS_LISTED: &str = "persons listed!";
pub const MESSAGE_APPOINTMENTS_LISTED: &str = "appointments listed!";
pub const MESSAGE_LIST_ALL: &str = "Listed all persons";
pub const MESSAGE_LIST_ALL_APPOINTMENTS: &str = "Listed all appointments";
pub const MESSAGE_EXIT: &str = "Exiting address book as requested ...";

pub const HELP_USAGE: &str = "Commands:\n\
    find [o/OPTION] KEYWORD [MORE_KEYWORDS]...\n\
    findappt [o/n] KEYWORD [MORE_KEYWORDS]...\n\
    list\n\
    listappt\n\
    exit";

/// Which list a command result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Persons,
    Appointments,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub view: ListView,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>, view: ListView) -> Self {
        Self {
            feedback: feedback.into(),
            view,
            exit: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Find(FindCommand),
    FindAppointment(FindAppointmentCommand),
    List,
    ListAppointments,
    Exit,
}

impl Command {
    pub const FIND: &'static str = "find";
    pub const FIND_APPOINTMENT: &'static str = "findappt";
    pub const LIST: &'static str = "list";
    pub const LIST_APPOINTMENTS: &'static str = "listappt";
    pub const EXIT: &'static str = "exit";

    pub fn execute(&self, model: &mut dyn Model) -> CommandResult {
        match self {
            Command::Find(command) => command.execute(model),
            Command::FindAppointment(command) => command.execute(model),
            Command::List => {
                model.update_filtered_person_list(PersonPredicate::ShowAll);
                CommandResult::new(MESSAGE_LIST_ALL, ListView::Persons)
            }
            Command::ListAppointments => {
                model.update_filtered_appointment_list(AppointmentPredicate::ShowAll);
                CommandResult::new(MESSAGE_LIST_ALL_APPOINTMENTS, ListView::Appointments)
            }
            Command::Exit => CommandResult {
                exit: true,
                ..CommandResult::new(MESSAGE_EXIT, ListView::Persons)
            },
        }
    }
}

/// Splits a full command line into its command word and arguments and
/// builds the matching command.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::invalid_format(HELP_USAGE));
    }

    let (word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    match word {
        Command::FIND => parse_find(args).map(Command::Find),
        Command::FIND_APPOINTMENT => parse_find_appointment(args).map(Command::FindAppointment),
        Command::LIST => Ok(Command::List),
        Command::LIST_APPOINTMENTS => Ok(Command::ListAppointments),
        Command::EXIT => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}
