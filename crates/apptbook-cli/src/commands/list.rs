use crate::commands::{run_command, Context};
use anyhow::Result;
use apptbook_core::Command;

pub fn list_persons(ctx: &mut Context) -> Result<()> {
    run_command(ctx, &Command::List)?;
    Ok(())
}

pub fn list_appointments(ctx: &mut Context) -> Result<()> {
    run_command(ctx, &Command::ListAppointments)?;
    Ok(())
}
