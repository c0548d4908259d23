use crate::command::FindAppointmentCommand;
use crate::filter::{AppointmentPredicate, Keywords};
use crate::parser::{split_option, tokenize, ParseError, PREFIX_NAME, PREFIX_OPTION};

const OPTION_NAME: &str = "n";

/// Parses the arguments following the `findappt` command word.
///
/// Appointments can only be searched by name, so `o/n` and the bare keyword
/// form build the same predicate. After `o/n`, repeated `n/NAME` values are
/// taken as whole (possibly multi-word) keywords.
pub fn parse_find_appointment(args: &str) -> Result<FindAppointmentCommand, ParseError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(invalid_format());
    }

    let multimap = tokenize(trimmed, &[PREFIX_OPTION]);
    let Some(value) = multimap.value(PREFIX_OPTION) else {
        return Ok(by_name(Keywords::split(trimmed)));
    };
    if !multimap.preamble().is_empty() {
        return Err(invalid_format());
    }

    let (option, option_args) = split_option(value).ok_or_else(invalid_format)?;
    if option != OPTION_NAME {
        return Err(invalid_format());
    }

    let names = tokenize(option_args, &[PREFIX_NAME]);
    let values = names.all_values(PREFIX_NAME);
    if values.is_empty() {
        return Ok(by_name(Keywords::split(option_args)));
    }
    if !names.preamble().is_empty() || values.iter().any(|value| value.is_empty()) {
        return Err(invalid_format());
    }
    Ok(by_name(Keywords::new(values.to_vec())))
}

fn by_name(keywords: Keywords) -> FindAppointmentCommand {
    FindAppointmentCommand::new(AppointmentPredicate::NameContains(keywords))
}

fn invalid_format() -> ParseError {
    ParseError::invalid_format(FindAppointmentCommand::USAGE)
}
