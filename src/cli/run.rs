//! Main entry point for the duosite CLI.
//!
//! Dispatches to the appropriate command handler based on the parsed
//! arguments.

use std::fs;

use anyhow::Result;

use super::args::{Arguments, Command, InitCommand};
use super::commands::{CommandResult, CommandSummary, InitSummary};
use super::commands::{env::env, parity::parity};
use crate::envfile::{ENV_EXAMPLE_FILE_NAME, example_template};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Parity(cmd)) => parity(cmd),
        Some(Command::Env(cmd)) => env(cmd),
        Some(Command::Init(cmd)) => {
            init(&cmd)?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary { created: true }),
                error_count: 0,
                exit_on_errors: true,
            })
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init(cmd: &InitCommand) -> Result<()> {
    let path = cmd.common.root.join(ENV_EXAMPLE_FILE_NAME);
    if path.exists() {
        anyhow::bail!("{} already exists", ENV_EXAMPLE_FILE_NAME);
    }

    fs::write(path, example_template())?;
    Ok(())
}
