use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("state directory missing or not writable: {0}")]
    StateDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the state directory exists; create if missing.
pub fn ensure_state_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::StateDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::StateDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::StateDir(e.to_string()))?;
    }
    Ok(())
}

/// Atomically write content to `{dir}/{filename}` by writing a temp file then renaming.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_state_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_state_dir() {
        let temp = TempDir::new().unwrap();
        let new_dir = temp.path().join("state");
        assert!(!new_dir.exists());
        ensure_state_dir(&new_dir).unwrap();
        assert!(new_dir.is_dir());
    }

    #[test]
    fn atomic_write_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let writer = AtomicFileWriter::new(temp.path().to_path_buf());

        let first = writer.write("state.ron", "hello").unwrap();
        assert_eq!(first.file_name().unwrap(), "state.ron");
        assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

        let second = writer.write("state.ron", "world").unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), "world");
    }

    #[test]
    fn file_in_place_of_dir_is_rejected() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("not_a_dir");
        fs::write(&file_path, "x").unwrap();

        let writer = AtomicFileWriter::new(file_path.clone());
        assert!(matches!(
            writer.write("state.ron", "data"),
            Err(PersistError::StateDir(_))
        ));
    }
}
