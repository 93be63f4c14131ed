use anyhow::{Context, Result};
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

/// Write the completion script for `shell` to stdout
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    let stdout = io::stdout();
    write_script(shell, cmd, &mut stdout.lock())
}

/// Generate the script under the command's own name, so installing it for
/// `teetime` completes `teetime` and not the test harness binary.
pub fn write_script(shell: Shell, cmd: &mut Command, out: &mut dyn Write) -> Result<()> {
    let bin_name = cmd.get_name().to_string();
    tracing::debug!("Generating {} completions for {}", shell, bin_name);

    generate(shell, cmd, bin_name, out);
    out.flush().context("Failed to write completion script")?;
    Ok(())
}
