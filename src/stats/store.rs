//! Key-value blob storage for the statistics record

use directories::ProjectDirs;
use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed name the statistics blob is stored under
pub const STATS_FILE_NAME: &str = "wordle_stats.json";

/// Storage capability for the serialized statistics blob
pub trait StatsStore {
    /// Stored bytes, `None` if nothing was saved yet
    ///
    /// # Errors
    /// Returns an I/O error if the storage exists but cannot be read.
    fn load(&self) -> io::Result<Option<Vec<u8>>>;

    /// Replace the stored bytes
    ///
    /// Either the new bytes are stored completely or the previous ones stay.
    ///
    /// # Errors
    /// Returns an I/O error if the bytes could not be stored.
    fn save(&self, bytes: &[u8]) -> io::Result<()>;
}

/// Statistics kept in a JSON file
#[derive(Debug, Clone)]
pub struct FileStatsStore {
    path: PathBuf,
}

impl FileStatsStore {
    /// Store under the platform data directory
    #[must_use]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "wordle_tiers") {
            pd.data_dir().join(STATS_FILE_NAME)
        } else {
            PathBuf::from(STATS_FILE_NAME)
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for FileStatsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsStore for FileStatsStore {
    fn load(&self) -> io::Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        // Write aside, then swap in
        let temp = self.temp_path();
        fs::write(&temp, bytes)?;
        fs::rename(&temp, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&temp);
        })
    }
}

/// In-process store, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStatsStore {
    bytes: RefCell<Option<Vec<u8>>>,
    fail_saves: Cell<bool>,
}

impl MemoryStatsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `bytes`
    #[must_use]
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: RefCell::new(Some(bytes.into())),
            fail_saves: Cell::new(false),
        }
    }

    /// Make subsequent saves fail, leaving the stored bytes alone
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Copy of the stored bytes
    #[must_use]
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.bytes.borrow().clone()
    }
}

impl StatsStore for MemoryStatsStore {
    fn load(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.bytes())
    }

    fn save(&self, bytes: &[u8]) -> io::Result<()> {
        if self.fail_saves.get() {
            return Err(io::Error::other("storage unavailable"));
        }
        *self.bytes.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }
}
