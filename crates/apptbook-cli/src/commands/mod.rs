use anyhow::Result;
use apptbook_config::UiConfig;
use apptbook_core::command::ListView;
use apptbook_core::dto::{AppointmentDto, CommandOutputDto, PersonDto};
use apptbook_core::{AddressBook, Command, CommandResult, Model};
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

use crate::render::{render_appointment, render_person};

pub mod completions;
pub mod find;
pub mod list;
pub mod shell;

pub struct Context {
    pub book: AddressBook,
    pub json: bool,
    pub ui: UiConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Executes a parsed command against the address book and prints the
/// result together with the list it refers to.
pub fn run_command(ctx: &mut Context, command: &Command) -> Result<CommandResult> {
    debug!(?command, "executing command");
    let result = command.execute(&mut ctx.book);
    print_result(ctx, &result)?;
    Ok(result)
}

fn print_result(ctx: &Context, result: &CommandResult) -> Result<()> {
    if ctx.json {
        let mut output = CommandOutputDto {
            message: result.feedback.clone(),
            persons: None,
            appointments: None,
        };
        if !result.exit {
            match result.view {
                ListView::Persons => {
                    output.persons = Some(
                        ctx.book
                            .filtered_person_list()
                            .into_iter()
                            .map(PersonDto::from)
                            .collect(),
                    );
                }
                ListView::Appointments => {
                    output.appointments = Some(
                        ctx.book
                            .filtered_appointment_list()
                            .into_iter()
                            .map(AppointmentDto::from)
                            .collect(),
                    );
                }
            }
        }
        return print_json(&output);
    }

    println!("{}", result.feedback);
    if result.exit {
        return Ok(());
    }
    match result.view {
        ListView::Persons => {
            for (index, person) in ctx.book.filtered_person_list().into_iter().enumerate() {
                println!("{}", render_person(index + 1, person, &ctx.ui));
            }
        }
        ListView::Appointments => {
            for (index, appointment) in ctx
                .book
                .filtered_appointment_list()
                .into_iter()
                .enumerate()
            {
                println!("{}", render_appointment(index + 1, appointment));
            }
        }
    }
    Ok(())
}
