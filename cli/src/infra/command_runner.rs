//! Infrastructure implementation of the `ProcessRunner` port.
//!
//! `StdProcessRunner` is the production implementation. Standard output and
//! standard error share one anonymous pipe so the captured bytes keep the
//! order the tool wrote them in.

use std::io::Read;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::application::ports::{CommandOutput, ProcessRunner};
use crate::domain::CommandSpec;

/// Production `ProcessRunner` — blocking `std::process` execution with the
/// parent's environment inherited and stdin closed.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdProcessRunner;

impl ProcessRunner for StdProcessRunner {
    fn run_combined(&self, cmd: &CommandSpec) -> std::io::Result<CommandOutput> {
        let (mut reader, writer) = std::io::pipe()?;

        let mut command = Command::new(&cmd.program);
        command
            .args(&cmd.args)
            .current_dir(&cmd.cwd)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);
        let mut child = command.spawn()?;
        // The command still owns both write ends; the read below only sees
        // EOF once every writer outside the child is closed.
        drop(command);

        let mut combined = Vec::new();
        let read = reader.read_to_end(&mut combined);
        let status = child.wait()?;
        read?;

        debug!(program = %cmd.program, %status, bytes = combined.len(), "process exited");
        Ok(CommandOutput { status, combined })
    }
}
