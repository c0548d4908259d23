use crate::domain::{Person, Tag};
use crate::filter::{Keywords, Predicate};
use crate::text::contains_word_ignore_case;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonPredicate {
    NameContains(Keywords),
    AddressContains(Keywords),
    PhoneContains(Keywords),
    EmailContains(Keywords),
    /// Name, address, phone or email contains a keyword.
    AnyContains(Keywords),
    /// The person carries a tag named like one of these, child or plain.
    TagsMatch(HashSet<Tag>),
    ShowAll,
}

impl PersonPredicate {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            PersonPredicate::NameContains(keywords) => any_word(&person.name, keywords),
            PersonPredicate::AddressContains(keywords) => any_word(&person.address, keywords),
            PersonPredicate::PhoneContains(keywords) => any_word(&person.phone, keywords),
            PersonPredicate::EmailContains(keywords) => any_word(&person.email, keywords),
            PersonPredicate::AnyContains(keywords) => [
                &person.name,
                &person.address,
                &person.phone,
                &person.email,
            ]
            .into_iter()
            .any(|field| any_word(field, keywords)),
            PersonPredicate::TagsMatch(tags) => person
                .tags
                .iter()
                .any(|owned| tags.iter().any(|wanted| wanted.name == owned.name)),
            PersonPredicate::ShowAll => true,
        }
    }
}

impl Predicate<Person> for PersonPredicate {
    fn test(&self, item: &Person) -> bool {
        PersonPredicate::test(self, item)
    }
}

fn any_word(field: &str, keywords: &Keywords) -> bool {
    keywords
        .iter()
        .any(|keyword| contains_word_ignore_case(field, keyword))
}
