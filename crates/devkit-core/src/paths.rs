use crate::error::{DevError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File name constants
// ---------------------------------------------------------------------------

pub const SSH_DIR: &str = ".ssh";
pub const KNOWN_HOSTS_FILE: &str = "known_hosts";
pub const KNOWN_HOSTS_DB_FILE: &str = "known_hosts.db";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Resolve the current user's home directory (`$HOME` on unix).
pub fn home_dir() -> Result<PathBuf> {
    home::home_dir()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(DevError::HomeNotFound)
}

pub fn ssh_dir(home: &Path) -> PathBuf {
    home.join(SSH_DIR)
}

/// The live file consulted by the ssh client.
pub fn known_hosts_path(home: &Path) -> PathBuf {
    ssh_dir(home).join(KNOWN_HOSTS_FILE)
}

/// The curated baseline of vetted hosts.
pub fn known_hosts_db_path(home: &Path) -> PathBuf {
    ssh_dir(home).join(KNOWN_HOSTS_DB_FILE)
}

// ---------------------------------------------------------------------------
// KnownHostsPaths
// ---------------------------------------------------------------------------

/// The active/trusted file pair operated on by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownHostsPaths {
    pub active: PathBuf,
    pub trusted: PathBuf,
}

impl KnownHostsPaths {
    pub fn from_home(home: &Path) -> Self {
        Self {
            active: known_hosts_path(home),
            trusted: known_hosts_db_path(home),
        }
    }

    pub fn resolve() -> Result<Self> {
        Ok(Self::from_home(&home_dir()?))
    }
}
