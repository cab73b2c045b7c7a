//! Durable scroll position: a single key remembered across sessions.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::error::Result;

/// Storage for the last known scroll offset. The value is the raw offset
/// written as a decimal string, matching what gets persisted on shutdown.
pub trait PositionStore {
    fn load(&self) -> Result<Option<u32>>;
    fn save(&mut self, offset: u32) -> Result<()>;
}

/// File-backed store: one small file holding the offset string.
pub struct FilePositionStore {
    path: PathBuf,
}

impl FilePositionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pagescroll")
            .join("scrollpos")
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PositionStore for FilePositionStore {
    fn load(&self) -> Result<Option<u32>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        match content.trim().parse::<u32>() {
            Ok(offset) => Ok(Some(offset)),
            Err(_) => {
                // Garbage degrades to "nothing to restore".
                warn!(path = %self.path.display(), "ignoring malformed scroll position");
                Ok(None)
            }
        }
    }

    fn save(&mut self, offset: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, offset.to_string())?;
        Ok(())
    }
}

/// In-memory store for tests and embedders that do not want persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryPositionStore {
    offset: Option<u32>,
}

impl MemoryPositionStore {
    pub fn new(offset: Option<u32>) -> Self {
        Self { offset }
    }

    pub fn get(&self) -> Option<u32> {
        self.offset
    }
}

impl PositionStore for MemoryPositionStore {
    fn load(&self) -> Result<Option<u32>> {
        Ok(self.offset)
    }

    fn save(&mut self, offset: u32) -> Result<()> {
        self.offset = Some(offset);
        Ok(())
    }
}
