use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::git::ToolError;

/// Failures produced while resolving a vault and bootstrapping its repository.
#[derive(Debug, Error)]
pub enum QuartzError {
    /// The raw path matched none of `.`, `./<path>` or `/<path>`.
    #[error("unrecognizable path: {path}")]
    UnrecognizablePath { path: String },

    /// The candidate directory has no openable `.obsidian` directory.
    ///
    /// A missing marker, a permission error and a marker that is a plain file
    /// all land here.
    #[error("specified path is not an obsidian vault: {}", path.display())]
    NotAVault {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("your vault already has a git repo: {}", path.display())]
    AlreadyInitialized { path: PathBuf },

    #[error("repository init failed")]
    ExternalTool(#[from] ToolError),

    #[error("cannot read current directory")]
    WorkingDir(#[source] io::Error),
}
