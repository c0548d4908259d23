use crate::domain::{Appointment, Person};
use crate::error::CoreError;
use crate::filter::{AppointmentPredicate, PersonPredicate, Predicate};
use serde::{Deserialize, Serialize};

/// The state commands operate on. Commands only change which records are
/// visible; they never modify the records themselves.
pub trait Model {
    fn update_filtered_person_list(&mut self, predicate: PersonPredicate);
    fn filtered_person_list(&self) -> Vec<&Person>;
    fn update_filtered_appointment_list(&mut self, predicate: AppointmentPredicate);
    fn filtered_appointment_list(&self) -> Vec<&Appointment>;
}

/// A fixed collection plus the predicate currently selecting its visible
/// part. No predicate means everything is visible.
#[derive(Debug, Clone)]
pub struct FilteredList<T, P> {
    items: Vec<T>,
    predicate: Option<P>,
}

impl<T, P: Predicate<T>> FilteredList<T, P> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            predicate: None,
        }
    }

    pub fn set_predicate(&mut self, predicate: P) {
        self.predicate = Some(predicate);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn visible(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| {
                self.predicate
                    .as_ref()
                    .map_or(true, |predicate| predicate.test(item))
            })
            .collect()
    }
}

/// On-disk shape of an address book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookData {
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone)]
pub struct AddressBook {
    persons: FilteredList<Person, PersonPredicate>,
    appointments: FilteredList<Appointment, AppointmentPredicate>,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl AddressBook {
    pub fn new(persons: Vec<Person>, appointments: Vec<Appointment>) -> Self {
        Self {
            persons: FilteredList::new(persons),
            appointments: FilteredList::new(appointments),
        }
    }

    pub fn from_data(data: AddressBookData) -> Result<Self, CoreError> {
        for person in &data.persons {
            person.validate()?;
        }
        for appointment in &data.appointments {
            appointment.validate()?;
        }
        Ok(Self::new(data.persons, data.appointments))
    }

    pub fn persons(&self) -> &[Person] {
        self.persons.items()
    }

    pub fn appointments(&self) -> &[Appointment] {
        self.appointments.items()
    }
}

impl Model for AddressBook {
    fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        self.persons.set_predicate(predicate);
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.persons.visible()
    }

    fn update_filtered_appointment_list(&mut self, predicate: AppointmentPredicate) {
        self.appointments.set_predicate(predicate);
    }

    fn filtered_appointment_list(&self) -> Vec<&Appointment> {
        self.appointments.visible()
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressBook, AddressBookData, Model};
    use crate::domain::Person;
    use crate::error::CoreError;
    use crate::filter::{Keywords, PersonPredicate};

    fn person(name: &str) -> Person {
        Person {
            name: name.to_string(),
            phone: "98765432".to_string(),
            email: "someone@example.com".to_string(),
            address: "311, Clementi Ave 2".to_string(),
            tags: Default::default(),
        }
    }

    #[test]
    fn everything_visible_until_filtered() {
        let mut book = AddressBook::new(vec![person("Alice"), person("Bob")], Vec::new());
        assert_eq!(book.filtered_person_list().len(), 2);

        let keywords: Keywords = ["bob"].into_iter().collect();
        book.update_filtered_person_list(PersonPredicate::NameContains(keywords));
        let visible = book.filtered_person_list();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Bob");
        assert_eq!(book.persons().len(), 2);

        book.update_filtered_person_list(PersonPredicate::ShowAll);
        assert_eq!(book.filtered_person_list().len(), 2);
    }

    #[test]
    fn from_data_validates_records() {
        let data = AddressBookData {
            persons: vec![person("  ")],
            appointments: Vec::new(),
        };
        assert_eq!(
            AddressBook::from_data(data).unwrap_err(),
            CoreError::EmptyPersonName
        );
    }
}
