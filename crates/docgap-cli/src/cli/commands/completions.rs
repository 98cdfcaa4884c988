//! `docgap completions <shell>` – emit a completion script.

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

pub fn run_completions<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "docgap", out);
    Ok(())
}
