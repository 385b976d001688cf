use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("destination directory missing or not writable: {0}")]
    DestDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Writes `content` to `{dir}/{filename}` through a temp file and rename, so
/// a crash mid-write never leaves a truncated CSV or settings file behind.
/// An existing file under the same name is replaced. Creates `dir` if needed.
pub fn write_atomic(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(PersistError::DestDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::DestDir(e.to_string()))?;
    }

    let target = dir.join(filename);
    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| PersistError::DestDir(e.to_string()))?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::write_atomic;

    #[test]
    fn write_creates_directory_and_replaces_existing_file() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("downloads");

        let path = write_atomic(&dir, "results.csv", b"first").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"first");

        let path = write_atomic(&dir, "results.csv", b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn file_in_place_of_directory_is_rejected() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("downloads");
        std::fs::write(&blocker, b"not a dir").unwrap();

        let err = write_atomic(&blocker, "results.csv", b"x").unwrap_err();
        assert!(matches!(err, super::PersistError::DestDir(_)));
    }
}
