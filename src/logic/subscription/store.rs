//! Subscription Store - append-only JSONL log
//!
//! One JSON object per line. The file is opened lazily on the first write
//! and kept open; writes are serialized by the lock.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::types::Subscription;
use crate::error::{FloodError, Result};

/// Somewhere subscriptions can be recorded
pub trait SubscriptionStore: Send + Sync {
    fn save(&self, subscription: &Subscription) -> Result<()>;
}

pub struct JsonlSubscriptionStore {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl JsonlSubscriptionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FloodError::Persistence(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| FloodError::Persistence(format!("cannot open {}: {}", self.path.display(), e)))
    }

    /// Read every stored subscription, in write order
    pub fn load_all(&self) -> Result<Vec<Subscription>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| FloodError::Persistence(format!("cannot open {}: {}", self.path.display(), e)))?;

        let mut subscriptions = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| FloodError::Persistence(e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            subscriptions.push(serde_json::from_str(&line)?);
        }
        Ok(subscriptions)
    }
}

impl SubscriptionStore for JsonlSubscriptionStore {
    fn save(&self, subscription: &Subscription) -> Result<()> {
        subscription.validate()?;
        let line = serde_json::to_string(subscription)?;

        let mut guard = self.file.lock();
        if guard.is_none() {
            *guard = Some(self.open()?);
        }

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", line)
                .and_then(|_| file.flush())
                .map_err(|e| {
                    FloodError::Persistence(format!("cannot write {}: {}", self.path.display(), e))
                })?;
        }

        log::info!("Subscription recorded for {}", subscription.location);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlSubscriptionStore::new(dir.path().join("nested").join("subs.jsonl"));

        store.save(&Subscription::new("a@example.com", "Dhaka").unwrap()).unwrap();
        store.save(&Subscription::new("b@example.com", "Khulna").unwrap()).unwrap();

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].location, "Khulna");

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw.lines().next().unwrap(), r#"{"email":"a@example.com","location":"Dhaka"}"#);
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subs.jsonl");

        JsonlSubscriptionStore::new(&path)
            .save(&Subscription::new("a@example.com", "Dhaka").unwrap())
            .unwrap();
        JsonlSubscriptionStore::new(&path)
            .save(&Subscription::new("b@example.com", "Bogra").unwrap())
            .unwrap();

        assert_eq!(JsonlSubscriptionStore::new(&path).load_all().unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_record_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlSubscriptionStore::new(dir.path().join("subs.jsonl"));
        let bad = Subscription {
            email: "not-an-email".to_string(),
            location: "Dhaka".to_string(),
        };

        assert!(matches!(store.save(&bad), Err(FloodError::InvalidInput(_))));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_unwritable_location_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();

        // Parent is a regular file, so the directory cannot be created
        let store = JsonlSubscriptionStore::new(blocker.join("subs.jsonl"));
        let err = store.save(&Subscription::new("a@example.com", "Dhaka").unwrap()).unwrap_err();
        assert!(matches!(err, FloodError::Persistence(_)));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlSubscriptionStore::new(dir.path().join("none.jsonl"));
        assert!(store.load_all().unwrap().is_empty());
    }
}
