use anyhow::Result;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

/// Directory Obsidian keeps its per-vault settings in.
pub const VAULT_MARKER: &str = ".obsidian";

/// Git metadata directory and the entry that marks an initialized repository.
pub const REPO_DIR: &str = ".git";
pub const REPO_INFO: &str = "info";

/// Files quartz reads from its configuration directory.
pub struct Paths {
    pub config: PathBuf,
}

/// Configuration directory: `$XDG_CONFIG_HOME/quartz`, else `$HOME/.config/quartz`.
pub fn quartz_home() -> Result<PathBuf> {
    let xdg = env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty());
    let base = xdg
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env::var_os("HOME").unwrap_or_default()).join(".config"));
    Ok(base.join("quartz"))
}

pub fn paths() -> Result<Paths> {
    let home = quartz_home()?;
    Ok(Paths {
        config: home.join("config.toml"),
    })
}

/// Opens `dir` as a directory and closes it again.
///
/// Succeeds only if `dir` exists, is a directory, and is readable. The handle
/// never outlives this call.
pub fn probe_dir(dir: &Path) -> io::Result<()> {
    fs::read_dir(dir).map(drop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn probe_dir_accepts_directory() {
        let td = tempdir().unwrap();
        assert!(probe_dir(td.path()).is_ok());
    }

    #[test]
    fn probe_dir_rejects_missing_and_plain_file() {
        let td = tempdir().unwrap();
        assert!(probe_dir(&td.path().join("nope")).is_err());

        let file = td.path().join("file");
        fs::write(&file, "").unwrap();
        assert!(probe_dir(&file).is_err());
    }

    #[test]
    #[serial]
    fn quartz_home_prefers_xdg_config_home() {
        let td = tempdir().unwrap();
        let saved = env::var_os("XDG_CONFIG_HOME");
        unsafe { env::set_var("XDG_CONFIG_HOME", td.path()) };

        let home = quartz_home().unwrap();

        match saved {
            Some(v) => unsafe { env::set_var("XDG_CONFIG_HOME", v) },
            None => unsafe { env::remove_var("XDG_CONFIG_HOME") },
        }
        assert_eq!(home, td.path().join("quartz"));
    }

    #[test]
    #[serial]
    fn quartz_home_falls_back_to_home_dot_config() {
        let td = tempdir().unwrap();
        let saved_xdg = env::var_os("XDG_CONFIG_HOME");
        let saved_home = env::var_os("HOME");
        unsafe {
            env::remove_var("XDG_CONFIG_HOME");
            env::set_var("HOME", td.path());
        }

        let p = paths().unwrap();

        unsafe {
            if let Some(v) = saved_xdg {
                env::set_var("XDG_CONFIG_HOME", v);
            }
            match saved_home {
                Some(v) => env::set_var("HOME", v),
                None => env::remove_var("HOME"),
            }
        }
        assert_eq!(p.config, td.path().join(".config/quartz/config.toml"));
    }
}
