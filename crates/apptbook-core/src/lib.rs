pub mod command;
pub mod display;
pub mod domain;
pub mod dto;
pub mod error;
pub mod filter;
pub mod model;
pub mod parser;
pub mod text;

pub use command::{parse_command, Command, CommandResult};
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use filter::{AppointmentPredicate, Keywords, PersonPredicate};
pub use model::{AddressBook, Model};
pub use parser::ParseError;
