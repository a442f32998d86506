//! Git integration layer.
//!
//! Repository creation is hidden behind [`RepoInitializer`] so the bootstrap
//! logic does not care whether `git init` runs as a child process
//! ([`GitCommand`]) or in-process through libgit2 ([`Libgit2`]).

mod command_backend;
mod git2_backend;

use std::io;
use std::path::Path;
use thiserror::Error;

pub use command_backend::{GitCommand, ProcessRunner, SystemRunner};
pub use git2_backend::Libgit2;

/// Creates an empty repository rooted at a directory.
pub trait RepoInitializer {
    fn init(&self, dir: &Path) -> Result<(), ToolError>;
}

impl<T: RepoInitializer + ?Sized> RepoInitializer for &T {
    fn init(&self, dir: &Path) -> Result<(), ToolError> {
        (**self).init(dir)
    }
}

impl<T: RepoInitializer + ?Sized> RepoInitializer for Box<T> {
    fn init(&self, dir: &Path) -> Result<(), ToolError> {
        (**self).init(dir)
    }
}

/// Why the external repository tool failed.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {}", exit_code(*code))]
    Status { program: String, code: Option<i32> },

    #[error(transparent)]
    Git2(#[from] git2::Error),
}

fn exit_code(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
