use crate::command::FindCommand;
use crate::domain::{Tag, TagName};
use crate::filter::{Keywords, PersonPredicate};
use crate::parser::{split_option, tokenize, FindOption, ParseError, PREFIX_OPTION, PREFIX_TAG};
use std::collections::HashSet;

/// Parses the arguments following the `find` command word.
///
/// Without an option marker every keyword is matched against all fields.
/// With `o/OPTION` the remaining arguments are matched against that field
/// only; `o/t` expects one or more `t/TAG` values.
pub fn parse_find(args: &str) -> Result<FindCommand, ParseError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(invalid_format());
    }

    let multimap = tokenize(trimmed, &[PREFIX_OPTION]);
    match multimap.value(PREFIX_OPTION) {
        Some(value) => {
            if !multimap.preamble().is_empty() {
                return Err(invalid_format());
            }
            let (token, option_args) = split_option(value).ok_or_else(invalid_format)?;
            let option = FindOption::resolve(token).ok_or_else(invalid_format)?;
            parse_find_option(option, option_args)
        }
        None => Ok(FindCommand::new(PersonPredicate::AnyContains(
            Keywords::split(trimmed),
        ))),
    }
}

fn parse_find_option(option: FindOption, option_args: &str) -> Result<FindCommand, ParseError> {
    let predicate = match option {
        FindOption::Name => PersonPredicate::NameContains(Keywords::split(option_args)),
        FindOption::Address => PersonPredicate::AddressContains(Keywords::split(option_args)),
        FindOption::Phone => PersonPredicate::PhoneContains(Keywords::split(option_args)),
        FindOption::Email => PersonPredicate::EmailContains(Keywords::split(option_args)),
        FindOption::Tag => PersonPredicate::TagsMatch(parse_tag_set(option_args)?),
    };
    Ok(FindCommand::new(predicate))
}

fn parse_tag_set(option_args: &str) -> Result<HashSet<Tag>, ParseError> {
    let multimap = tokenize(option_args, &[PREFIX_TAG]);
    let values = multimap.all_values(PREFIX_TAG);
    if !multimap.preamble().is_empty() || values.is_empty() {
        return Err(invalid_format());
    }

    values
        .iter()
        .map(|raw| {
            TagName::new(raw)
                .map(Tag::plain)
                .map_err(ParseError::InvalidTag)
        })
        .collect()
}

fn invalid_format() -> ParseError {
    ParseError::invalid_format(FindCommand::USAGE)
}
