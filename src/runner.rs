//! Thin wrappers around `std::process::Command` for external tools.
//!
//! Long-running tools (apt-get, certbot) inherit stdio so the operator
//! sees their output live; short queries capture it. Non-zero exits map
//! to `Error::ToolInvocation`.

use crate::error::{Error, Result};
use log::debug;
use std::process::{Command, Stdio};

fn display(cmd: &str, args: &[&str]) -> String {
    if args.is_empty() {
        cmd.to_string()
    } else {
        format!("{} {}", cmd, args.join(" "))
    }
}

fn spawn_error(cmd: &str, args: &[&str], e: &std::io::Error) -> Error {
    Error::ToolInvocation {
        tool: display(cmd, args),
        code: None,
        stderr: e.to_string(),
    }
}

/// Run a command with inherited stdio, failing on non-zero exit.
pub fn run_checked(cmd: &str, args: &[&str]) -> Result<()> {
    run_checked_env(cmd, args, &[])
}

/// Same, with extra environment variables for the child.
pub fn run_checked_env(cmd: &str, args: &[&str], envs: &[(&str, &str)]) -> Result<()> {
    debug!("exec: {}", display(cmd, args));

    let mut command = Command::new(cmd);
    command
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    for (key, value) in envs {
        command.env(key, value);
    }

    let status = command
        .status()
        .map_err(|e| spawn_error(cmd, args, &e))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::ToolInvocation {
            tool: display(cmd, args),
            code: status.code(),
            stderr: String::new(),
        })
    }
}

/// Run a command and capture stdout; a non-zero exit carries trimmed
/// stderr in the error.
pub fn run_capture(cmd: &str, args: &[&str]) -> Result<String> {
    debug!("exec: {}", display(cmd, args));

    let output = Command::new(cmd)
        .args(args)
        .output()
        .map_err(|e| spawn_error(cmd, args, &e))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(Error::ToolInvocation {
            tool: display(cmd, args),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Check if a command exists on PATH.
pub fn command_exists(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}
