mod appointment;
mod keywords;
mod person;

pub use appointment::AppointmentPredicate;
pub use keywords::Keywords;
pub use person::PersonPredicate;

/// A reusable boolean test over a record.
pub trait Predicate<T> {
    fn test(&self, item: &T) -> bool;
}
