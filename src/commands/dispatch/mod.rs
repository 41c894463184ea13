//! Command dispatch logic for roadgraph

use std::time::Instant;

use crate::cli::Cli;
use roadgraph_core::error::Result;

pub(crate) mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
