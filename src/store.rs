//! Persistence of the last session summary.
//!
//! A single plain-text file holds exactly the summary string of the most
//! recently completed session, so it can be shown at the next start.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::StoreError;

/// Loads the last stored summary.
///
/// Returns None if the file does not exist or holds only whitespace.
pub fn load_last_summary<P: AsRef<Path>>(path: P) -> Result<Option<String>, StoreError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(None),
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::CannotRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Stores `summary`, replacing any previous one.
pub fn save_last_summary<P: AsRef<Path>>(path: P, summary: &str) -> Result<(), StoreError> {
    let path = path.as_ref();

    fs::write(path, summary).map_err(|source| StoreError::CannotWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_session.txt");
        assert_eq!(load_last_summary(&path).unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_session.txt");

        save_last_summary(&path, "100 2x8, 120 5").unwrap();
        assert_eq!(
            load_last_summary(&path).unwrap().as_deref(),
            Some("100 2x8, 120 5")
        );

        // Stored verbatim, no trailing newline
        assert_eq!(fs::read_to_string(&path).unwrap(), "100 2x8, 120 5");
    }

    #[test]
    fn test_save_replaces_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_session.txt");

        save_last_summary(&path, "100 8").unwrap();
        save_last_summary(&path, "60 3x12").unwrap();
        assert_eq!(load_last_summary(&path).unwrap().as_deref(), Some("60 3x12"));
    }

    #[test]
    fn test_blank_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_session.txt");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(load_last_summary(&path).unwrap(), None);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("last_session.txt");
        let err = save_last_summary(&path, "100 8").unwrap_err();
        assert!(matches!(err, StoreError::CannotWrite { .. }));
    }

    #[test]
    fn test_reading_a_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_last_summary(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::CannotRead { .. }));
    }
}
