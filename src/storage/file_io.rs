//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::BuddyError;

/// Read a whole text file, reporting a missing file as `FileNotFound`
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, BuddyError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(BuddyError::FileNotFound(path.display().to_string()));
    }

    fs::read_to_string(path)
        .map_err(|e| BuddyError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely replaced or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, content: &str) -> Result<(), BuddyError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                BuddyError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| BuddyError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .map_err(|e| BuddyError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| BuddyError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BuddyError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BuddyError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_is_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, BuddyError::FileNotFound(_)));
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.txt");

        write_text_atomic(&path, "Food\nGroceries : $102.00\n\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "Food\nGroceries : $102.00\n\n");
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.txt");

        write_text_atomic(&path, "old content that is longer\n").unwrap();
        write_text_atomic(&path, "new\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.txt");
        let temp_path = temp_dir.path().join("budget.txt.tmp");

        write_text_atomic(&path, "").unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("budget.txt");

        write_text_atomic(&path, "Rent\n\n").unwrap();
        assert!(path.exists());
    }
}
