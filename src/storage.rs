//!
//! # Durable session storage
//!
//! Two fixed slots under the state directory: the opaque auth token and the
//! serialized user record. They are always written together and removed
//! together; `store` and `clear` are the only mutators. No versioning and
//! no client-side expiry; the backend decides when a token stops working.

use std::fs;
use std::io;
use std::path::PathBuf;

use log::warn;

/// File name of the opaque auth token slot.
pub const TOKEN_FILE: &str = "auth_token";
/// File name of the serialized user record slot.
pub const USER_FILE: &str = "user.json";

/// Durable storage for the session credentials.
#[derive(Debug)]
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    /// Reads the stored token. Returns `None` when no session is persisted.
    pub fn load_token(&self) -> Option<String> {
        let raw = fs::read_to_string(self.token_path()).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    /// Reads the serialized user record, if present.
    pub fn load_user_json(&self) -> Option<String> {
        fs::read_to_string(self.user_path()).ok()
    }

    /// Persists token and user record together.
    ///
    /// The two writes are issued back-to-back with no suspension between
    /// them; a process crash in the middle is an accepted residual risk.
    pub fn store(&self, token: &str, user_json: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.token_path(), token)?;
        fs::write(self.user_path(), user_json)?;
        Ok(())
    }

    /// Removes both slots. Idempotent: missing files are not an error.
    pub fn clear(&self) {
        for path in [self.token_path(), self.user_path()] {
            if let Err(err) = fs::remove_file(&path) {
                if err.kind() != io::ErrorKind::NotFound {
                    warn!("failed to remove {}: {}", path.display(), err);
                }
            }
        }
    }

    /// True when both slots are present.
    pub fn has_session(&self) -> bool {
        self.token_path().exists() && self.user_path().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in_temp_dir() -> (CredentialStore, TempDir) {
        let dir = TempDir::new().unwrap();
        (CredentialStore::new(dir.path().to_path_buf()), dir)
    }

    #[test]
    fn test_store_and_load_round_trip() {
        let (store, _dir) = store_in_temp_dir();

        store.store("abc123", r#"{"id":3}"#).unwrap();

        assert_eq!(store.load_token().as_deref(), Some("abc123"));
        assert_eq!(store.load_user_json().as_deref(), Some(r#"{"id":3}"#));
        assert!(store.has_session());
    }

    #[test]
    fn test_load_from_empty_dir() {
        let (store, _dir) = store_in_temp_dir();

        assert!(store.load_token().is_none());
        assert!(store.load_user_json().is_none());
        assert!(!store.has_session());
    }

    #[test]
    fn test_clear_removes_both_slots() {
        let (store, _dir) = store_in_temp_dir();

        store.store("abc123", r#"{"id":3}"#).unwrap();
        store.clear();

        assert!(store.load_token().is_none());
        assert!(store.load_user_json().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (store, _dir) = store_in_temp_dir();

        store.clear();
        store.clear();

        assert!(!store.has_session());
    }

    #[test]
    fn test_blank_token_reads_as_absent() {
        let (store, dir) = store_in_temp_dir();

        fs::write(dir.path().join(TOKEN_FILE), "\n").unwrap();

        assert!(store.load_token().is_none());
    }
}
