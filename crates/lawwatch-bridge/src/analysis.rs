//! Launching the external analysis viewer.

use std::io;
use std::process::{Command, Stdio};

/// Spawn the configured viewer command, detached.
///
/// The command line is split on whitespace: the first token is the program,
/// the rest are its arguments. The child is not awaited; only a failed spawn
/// is an error.
pub fn spawn_viewer(command_line: &str) -> io::Result<()> {
    let mut parts = command_line.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "empty viewer command",
        ));
    };
    Command::new(program)
        .args(parts)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_an_error() {
        assert!(spawn_viewer("   ").is_err());
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        assert!(spawn_viewer("definitely-not-a-real-program-xyz").is_err());
    }
}
