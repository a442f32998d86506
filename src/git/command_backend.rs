use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;
use tracing::info;

use super::{RepoInitializer, ToolError};

/// Runs an external program to completion.
///
/// The child inherits stdin/stdout/stderr; only the outcome is reported.
pub trait ProcessRunner {
    fn run(&self, program: &OsStr, args: &[&OsStr]) -> Result<(), ToolError>;
}

/// [`ProcessRunner`] backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &OsStr, args: &[&OsStr]) -> Result<(), ToolError> {
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| ToolError::Spawn {
                program: program.to_string_lossy().into_owned(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(ToolError::Status {
                program: program.to_string_lossy().into_owned(),
                code: status.code(),
            })
        }
    }
}

/// `git init <dir>` through a [`ProcessRunner`].
#[derive(Debug, Clone)]
pub struct GitCommand<R = SystemRunner> {
    program: OsString,
    runner: R,
}

impl GitCommand<SystemRunner> {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self::with_runner(program, SystemRunner)
    }
}

impl<R: ProcessRunner> GitCommand<R> {
    pub fn with_runner(program: impl Into<OsString>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }
}

impl<R: ProcessRunner> RepoInitializer for GitCommand<R> {
    fn init(&self, dir: &Path) -> Result<(), ToolError> {
        info!(program = ?self.program, dir = %dir.display(), "running git init");
        self.runner
            .run(&self.program, &[OsStr::new("init"), dir.as_os_str()])
    }
}
