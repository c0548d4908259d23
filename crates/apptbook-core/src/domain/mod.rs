pub mod appointment;
pub mod person;
pub mod tag;

pub use appointment::Appointment;
pub use person::Person;
pub use tag::{Tag, TagKind, TagName};
