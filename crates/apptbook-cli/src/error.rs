use anyhow::Error;
use apptbook_config::ConfigError;
use apptbook_core::{CoreError, ParseError};
use std::process::ExitCode;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if cause.downcast_ref::<ParseError>().is_some()
            || cause.downcast_ref::<CoreError>().is_some()
            || cause.downcast_ref::<serde_json::Error>().is_some()
        {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir | ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::InvalidDataPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidColor(_)
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
