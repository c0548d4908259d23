mod find;
mod find_appointment;
mod option;
mod tokenizer;

use crate::error::CoreError;
use thiserror::Error;

pub use find::parse_find;
pub use find_appointment::parse_find_appointment;
pub use option::FindOption;
pub use tokenizer::{tokenize, ArgumentMultimap, Prefix};

pub const PREFIX_OPTION: Prefix = Prefix("o/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_NAME: Prefix = Prefix("n/");

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: &'static str },
    #[error("{0}")]
    InvalidTag(CoreError),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl ParseError {
    pub fn invalid_format(usage: &'static str) -> Self {
        ParseError::InvalidCommandFormat { usage }
    }
}

/// Splits an option marker value into the option token and the arguments
/// that follow it. Both parts must be present.
fn split_option(value: &str) -> Option<(&str, &str)> {
    let value = value.trim();
    let (token, rest) = value.split_once(char::is_whitespace)?;
    let rest = rest.trim();
    if token.is_empty() || rest.is_empty() {
        return None;
    }
    Some((token, rest))
}

#[cfg(test)]
mod tests {
    use super::split_option;

    #[test]
    fn split_option_takes_first_token() {
        assert_eq!(split_option("t t/math  t/science"), Some(("t", "t/math  t/science")));
        assert_eq!(split_option("n \t alice"), Some(("n", "alice")));
    }

    #[test]
    fn split_option_requires_both_parts() {
        assert_eq!(split_option("n"), None);
        assert_eq!(split_option("n   "), None);
        assert_eq!(split_option(""), None);
    }
}
