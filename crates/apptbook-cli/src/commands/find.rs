use crate::commands::{run_command, Context};
use anyhow::Result;
use apptbook_core::parser::{parse_find, parse_find_appointment};
use apptbook_core::Command;
use clap::Args;

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Keywords, optionally preceded by o/OPTION
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub fn find_persons(ctx: &mut Context, args: FindArgs) -> Result<()> {
    let command = parse_find(&args.args.join(" "))?;
    run_command(ctx, &Command::Find(command))?;
    Ok(())
}

pub fn find_appointments(ctx: &mut Context, args: FindArgs) -> Result<()> {
    let command = parse_find_appointment(&args.args.join(" "))?;
    run_command(ctx, &Command::FindAppointment(command))?;
    Ok(())
}
