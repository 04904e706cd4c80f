//! Score persistence
//!
//! Storage is best-effort: a failed read loads as 0-0 and a failed write is
//! logged by the caller. Backends:
//! - `LocalStorageStore`: browser LocalStorage (wasm32)
//! - `FileStore`: JSON file in a directory (native)
//! - `MemoryStore`: in-memory, for tests

use thiserror::Error;

use crate::engine::ScoreRecord;

/// Key the score record is stored under
pub const SCORE_KEY: &str = "roshambo_score";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("failed to serialize score: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("write rejected: {0}")]
    Write(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value backend for the score record
pub trait ScoreStore {
    /// Read the stored record. `None` when nothing has been stored yet or
    /// the backend can't be reached; malformed payloads decode leniently.
    fn load(&self) -> Option<ScoreRecord>;

    /// Overwrite the stored record
    fn save(&mut self, score: &ScoreRecord) -> Result<(), StorageError>;
}

/// In-memory store holding the raw serialized payload
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    payload: Option<String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw payload (may be malformed)
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            fail_writes: false,
        }
    }

    /// Make every subsequent `save` fail
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Option<ScoreRecord> {
        self.payload.as_deref().map(ScoreRecord::from_json_lossy)
    }

    fn save(&mut self, score: &ScoreRecord) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("memory store is read-only".into()));
        }
        self.payload = Some(score.to_json()?);
        Ok(())
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn load(&self) -> Option<ScoreRecord> {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, score not loaded");
            return None;
        };
        let json = match storage.get_item(SCORE_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read {}: {:?}", SCORE_KEY, e);
                return None;
            }
        };
        let score = ScoreRecord::from_json_lossy(&json);
        log::info!(
            "Loaded score {}-{}",
            score.player_score,
            score.opponent_score
        );
        Some(score)
    }

    fn save(&mut self, score: &ScoreRecord) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        let json = score.to_json()?;
        storage
            .set_item(SCORE_KEY, &json)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// JSON file named after the key, inside a directory
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn in_dir(dir: impl AsRef<std::path::Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SCORE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScoreStore for FileStore {
    fn load(&self) -> Option<ScoreRecord> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Some(ScoreRecord::from_json_lossy(&json)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&mut self, score: &ScoreRecord) -> Result<(), StorageError> {
        // Full overwrite via temp file + rename
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, score.to_json()?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_store_loads_none() {
        assert_eq!(MemoryStore::new().load(), None);
    }

    #[test]
    fn test_malformed_payload_loads_zero() {
        let store = MemoryStore::with_payload(r#"{"playerScore":"x","opponentScore":-4}"#);
        assert_eq!(store.load(), Some(ScoreRecord::default()));
        let store = MemoryStore::with_payload(r#"{"playerScore":7,"opponentScore":-1}"#);
        assert_eq!(store.load(), Some(ScoreRecord::default()));
    }

    #[test]
    fn test_failed_write_keeps_old_payload() {
        let mut store = MemoryStore::with_payload(r#"{"playerScore":1,"opponentScore":1}"#)
            .fail_writes();
        assert!(store.save(&ScoreRecord::new(9, 9)).is_err());
        assert_eq!(store.load(), Some(ScoreRecord::new(1, 1)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("roshambo-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut store = FileStore::in_dir(&dir);
        let _ = std::fs::remove_file(store.path());

        assert_eq!(store.load(), None);
        store.save(&ScoreRecord::new(3, 8)).unwrap();
        assert_eq!(store.load(), Some(ScoreRecord::new(3, 8)));

        std::fs::write(store.path(), "garbage").unwrap();
        assert_eq!(store.load(), Some(ScoreRecord::default()));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_read_failure_loads_none() {
        // A directory where the file should be: the read fails with something other than NotFound
        let dir = std::env::temp_dir().join(format!("roshambo-unreadable-{}", std::process::id()));
        let store = FileStore::in_dir(&dir);
        std::fs::create_dir_all(store.path()).unwrap();

        assert_eq!(store.load(), None);

        let _ = std::fs::remove_dir_all(&dir);
    }

    proptest! {
        #[test]
        fn save_then_load_returns_equal(p in any::<u32>(), o in any::<u32>()) {
            let mut store = MemoryStore::new();
            let score = ScoreRecord::new(p, o);
            store.save(&score).unwrap();
            prop_assert_eq!(store.load(), Some(score));
        }
    }
}
