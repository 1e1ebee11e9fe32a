// Cache store for the locally mirrored database text.
// Freshness comes from the file modification time; writes are atomic.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};

use crate::error::Result;

/// A cached copy is reused for one day before it must be refreshed.
pub const CACHE_EXPIRY: Duration = Duration::from_secs(86_400);

/// Storage for one cached copy of the database text.
///
/// Implementations report the age of the stored copy so callers can decide
/// whether it is still usable without touching the network.
pub trait CacheStorage {
    /// The cached text, or `None` if nothing has been stored yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored text in full.
    fn write(&self, text: &str) -> Result<()>;

    /// Age of the stored copy, or `None` if nothing has been stored yet.
    fn age(&self) -> Result<Option<Duration>>;
}

/// File-backed cache: one file holding the full database text, its mtime
/// serving as the freshness timestamp.
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CacheStorage for FileCache {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        Ok(Some(contents))
    }

    fn write(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(text.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    fn age(&self) -> Result<Option<Duration>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let modified = fs::metadata(&self.path)?.modified()?;
        tracing::debug!(
            path = %self.path.display(),
            written_at = %DateTime::<Utc>::from(modified),
            "cache file found"
        );

        // A file stamped in the future counts as brand new.
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);
        Ok(Some(age))
    }
}
