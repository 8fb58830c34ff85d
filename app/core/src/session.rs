//! Client Session Manager
//!
//! Durable record of the current login: the bearer token and a small
//! profile snapshot, kept as two entries in a session directory and always
//! removed together. The authenticated signal is computed once from storage
//! at construction and then maintained in memory, so reads never touch the
//! filesystem.
//!
//! Failure policy: a storage read that fails means "not authenticated" -
//! the app falls open to the login screen, it never crashes over a corrupt
//! session file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::ClientResult;

const TOKEN_FILE: &str = "token";
const PROFILE_FILE: &str = "profile.json";

/// Profile snapshot captured at login time
///
/// May go stale relative to the server record; nothing refreshes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Session manager over a durable session directory
pub struct SessionManager {
    dir: PathBuf,
    authenticated: AtomicBool,
}

impl SessionManager {
    /// Open a session manager over an explicit directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let authenticated = AtomicBool::new(read_token(&dir).is_some());
        Self { dir, authenticated }
    }

    /// Open the per-user default session directory
    pub fn open_default() -> ClientResult<Self> {
        let dirs = directories::ProjectDirs::from("com", "driveguard", "driveguard")
            .ok_or_else(|| io::Error::other("no home directory available"))?;
        Ok(Self::new(dirs.data_dir().join("session")))
    }

    /// The persisted bearer token, if any. Read failures are `None`.
    pub fn token(&self) -> Option<String> {
        read_token(&self.dir)
    }

    /// The persisted profile snapshot, if any. Read failures are `None`.
    pub fn profile(&self) -> Option<Profile> {
        let bytes = fs::read(self.dir.join(PROFILE_FILE)).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// In-memory authenticated signal; no storage I/O
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    /// Persist a fresh session.
    ///
    /// If either entry fails to write, both are removed before the error
    /// returns - the store never holds half a session.
    pub fn set_session(&self, token: &str, profile: &Profile) -> ClientResult<()> {
        if let Err(e) = self.write_entries(token, profile) {
            self.remove_entries();
            self.authenticated.store(false, Ordering::SeqCst);
            return Err(e);
        }
        self.authenticated.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Remove both entries. Safe to call on an already-cleared session.
    pub fn clear_session(&self) {
        self.remove_entries();
        self.authenticated.store(false, Ordering::SeqCst);
    }

    fn write_entries(&self, token: &str, profile: &Profile) -> ClientResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(TOKEN_FILE), token)?;
        let json = serde_json::to_vec(profile)?;
        fs::write(self.dir.join(PROFILE_FILE), json)?;
        Ok(())
    }

    fn remove_entries(&self) {
        for name in [TOKEN_FILE, PROFILE_FILE] {
            if let Err(e) = fs::remove_file(self.dir.join(name)) {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(entry = name, error = %e, "Failed to remove session entry");
                }
            }
        }
    }
}

fn read_token(dir: &Path) -> Option<String> {
    let token = fs::read_to_string(dir.join(TOKEN_FILE)).ok()?;
    if token.is_empty() { None } else { Some(token) }
}
