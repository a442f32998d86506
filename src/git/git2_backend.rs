use git2::Repository;
use std::path::Path;
use tracing::info;

use super::{RepoInitializer, ToolError};

/// In-process `git init` using libgit2.
#[derive(Debug, Default, Clone, Copy)]
pub struct Libgit2;

impl RepoInitializer for Libgit2 {
    fn init(&self, dir: &Path) -> Result<(), ToolError> {
        info!(dir = %dir.display(), "initializing repository with libgit2");
        Repository::init(dir)?;
        Ok(())
    }
}
