use crate::commands::{run_command, Context};
use anyhow::Result;
use apptbook_core::parse_command;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

/// Reads one command per line from stdin. Input errors are reported and the
/// loop carries on; `exit` or end of input stops it.
pub fn run_shell(ctx: &mut Context) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                if run_command(ctx, &command)?.exit {
                    break;
                }
            }
            Err(err) => {
                debug!(input = %line, "rejected command");
                eprintln!("{}", err);
            }
        }
    }
    Ok(())
}
