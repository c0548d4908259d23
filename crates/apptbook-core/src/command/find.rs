use crate::command::{CommandResult, ListView, MESSAGE_PERSONS_LISTED};
use crate::filter::PersonPredicate;
use crate::model::Model;

/// Narrows the visible person list to the persons matching a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: PersonPredicate,
}

impl FindCommand {
    pub const USAGE: &'static str = "find: Finds all persons whose names contain any of the \
specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
the Option o/t can be used to find all persons that match at least one of the tags.\n\
Parameters: [o/OPTION] KEYWORD [MORE_KEYWORDS]...\n\
Option: n (name), a (address), p (phone), e (email), t (to find by tags)\n\
Examples:\n\
find alice bob charlie\n\
find o/t t/math t/science t/primary";

    pub fn new(predicate: PersonPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandResult {
        model.update_filtered_person_list(self.predicate.clone());
        let count = model.filtered_person_list().len();
        CommandResult::new(
            format!("{} {}", count, MESSAGE_PERSONS_LISTED),
            ListView::Persons,
        )
    }
}
