//! Storage layer for BudgetBuddy
//!
//! Datafiles are plain text files named `<name>.txt`. The wizard only needs
//! to ask whether a datafile exists and to write one; reading is used by the
//! read-only `show` command.

pub mod datafile;
pub mod file_io;

pub use datafile::{SavedCategory, SavedDatafile, SavedLine};
pub use file_io::{read_text, write_text_atomic};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{BuddyError, BuddyResult};

/// Extension appended to every datafile base name
pub const DATAFILE_EXTENSION: &str = "txt";

/// Persistence gateway for named datafiles
pub trait DatafileStore {
    /// Whether a datafile with this base name exists
    fn exists(&self, name: &str) -> bool;

    /// Create or replace a datafile
    fn write(&self, name: &str, content: &str) -> BuddyResult<()>;

    /// Read a datafile's full content
    fn read(&self, name: &str) -> BuddyResult<String>;
}

impl<T: DatafileStore + ?Sized> DatafileStore for &T {
    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn write(&self, name: &str, content: &str) -> BuddyResult<()> {
        (**self).write(name, content)
    }

    fn read(&self, name: &str) -> BuddyResult<String> {
        (**self).read(name)
    }
}

/// Datafiles stored as `<name>.txt` inside one directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the datafiles
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path for a datafile base name
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, DATAFILE_EXTENSION))
    }
}

impl DatafileStore for FileStore {
    fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    fn write(&self, name: &str, content: &str) -> BuddyResult<()> {
        write_text_atomic(self.path_for(name), content)
    }

    fn read(&self, name: &str) -> BuddyResult<String> {
        read_text(self.path_for(name)).map_err(|e| match e {
            BuddyError::FileNotFound(_) => BuddyError::FileNotFound(name.to_string()),
            other => other,
        })
    }
}

/// In-memory store, useful for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored datafiles
    pub fn len(&self) -> usize {
        self.files.read().map(|files| files.len()).unwrap_or(0)
    }

    /// Whether nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DatafileStore for MemoryStore {
    fn exists(&self, name: &str) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(name))
            .unwrap_or(false)
    }

    fn write(&self, name: &str, content: &str) -> BuddyResult<()> {
        let mut files = self
            .files
            .write()
            .map_err(|e| BuddyError::Io(format!("Failed to acquire write lock: {}", e)))?;
        files.insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn read(&self, name: &str) -> BuddyResult<String> {
        let files = self
            .files
            .read()
            .map_err(|e| BuddyError::Io(format!("Failed to acquire read lock: {}", e)))?;
        files
            .get(name)
            .cloned()
            .ok_or_else(|| BuddyError::FileNotFound(name.to_string()))
    }
}
