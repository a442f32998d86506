use std::path::Path;
use tracing::{debug, info};

use crate::error::QuartzError;
use crate::git::RepoInitializer;
use crate::paths::{REPO_DIR, REPO_INFO, probe_dir};
use crate::vault::VaultPath;

/// Whether `dir` already carries an openable `.git/info` directory.
pub fn has_repo(dir: &Path) -> bool {
    let marker = dir.join(REPO_DIR).join(REPO_INFO);
    let found = probe_dir(&marker).is_ok();
    debug!(marker = %marker.display(), found, "probing repository marker");
    found
}

/// Create a git repository at a verified vault unless one is already there.
///
/// `git` is invoked at most once, and never when the repository marker
/// exists. There is no lock between the check and the init.
///
/// # Errors
/// - [`QuartzError::AlreadyInitialized`] if `.git/info` is present.
/// - [`QuartzError::ExternalTool`] if the initializer fails.
pub fn bootstrap(vault: &VaultPath, git: &dyn RepoInitializer) -> Result<(), QuartzError> {
    let dir = vault.dir();
    if has_repo(dir) {
        return Err(QuartzError::AlreadyInitialized {
            path: dir.to_path_buf(),
        });
    }

    git.init(dir)?;
    info!(dir = %dir.display(), "repository initialized");
    Ok(())
}
