use std::{
    cell::RefCell,
    fs,
    path::PathBuf,
};

use crate::core::SuhwaError;

const APP_NAME: &str = "suhwa";
const PROGRESS_FILE: &str = "word_progress.json";

/// Storage for the serialized progress map. Implementations move opaque
/// payloads; the store owns the JSON layout. Injected so tests and embedders
/// can swap the file for any key-value backend.
pub trait ProgressBackend {
    /// The persisted payload, or None if nothing has been saved yet.
    fn read(&self) -> Result<Option<String>, SuhwaError>;
    fn write(&self, payload: &str) -> Result<(), SuhwaError>;
    fn clear(&self) -> Result<(), SuhwaError>;
}

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// Progress persisted as a JSON file under the app data directory.
pub struct FileBackend {
    file_path: PathBuf,
}

impl FileBackend {
    pub fn new() -> Self {
        Self { file_path: get_app_data_dir().join(PROGRESS_FILE) }
    }

    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBackend for FileBackend {
    fn read(&self) -> Result<Option<String>, SuhwaError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.file_path)?))
    }

    fn write(&self, payload: &str) -> Result<(), SuhwaError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.file_path, payload)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SuhwaError> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)?;
        }
        Ok(())
    }
}

/// In-memory backend for tests and embedders that handle durability
/// themselves. Single-threaded by design, like the session that drives it.
#[derive(Default)]
pub struct MemoryBackend {
    payload: RefCell<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded backend, as if `payload` had been saved by a prior session.
    pub fn with_payload(payload: &str) -> Self {
        Self { payload: RefCell::new(Some(payload.to_string())) }
    }
}

impl ProgressBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, SuhwaError> {
        Ok(self.payload.borrow().clone())
    }

    fn write(&self, payload: &str) -> Result<(), SuhwaError> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SuhwaError> {
        *self.payload.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backend_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::with_path(dir.path().join("progress.json"));

        assert!(backend.read().unwrap().is_none());

        backend.write("{\"hi\":1}").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("{\"hi\":1}"));

        backend.clear().unwrap();
        assert!(backend.read().unwrap().is_none());
    }

    #[test]
    fn clear_is_idempotent_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::with_path(dir.path().join("progress.json"));
        backend.clear().unwrap();
        backend.clear().unwrap();
    }

    #[test]
    fn memory_backend_matches_file_backend_behavior() {
        let backend = MemoryBackend::new();
        assert!(backend.read().unwrap().is_none());

        backend.write("payload").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("payload"));

        backend.clear().unwrap();
        assert!(backend.read().unwrap().is_none());
    }
}
