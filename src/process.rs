use crate::error::{ReleaseError, Result};
use std::path::Path;
use std::process::Command;

/// Runs a command to completion in the current directory and returns its
/// trimmed stdout. A non-zero exit becomes [ReleaseError::Subprocess] with
/// the captured stderr; nothing is retried.
pub fn run(command: &str, args: &[&str]) -> Result<String> {
    run_with(Command::new(command).args(args), command, args)
}

/// Same as [run], but with an explicit working directory
pub fn run_in(dir: &Path, command: &str, args: &[&str]) -> Result<String> {
    run_with(
        Command::new(command).args(args).current_dir(dir),
        command,
        args,
    )
}

fn run_with(prepared: &mut Command, command: &str, args: &[&str]) -> Result<String> {
    let output = prepared.output()?;

    if !output.status.success() {
        return Err(ReleaseError::Subprocess {
            command: command.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
