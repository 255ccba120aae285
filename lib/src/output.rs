use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::AsciiError;

/// Default output location, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "out/ascii.txt";

/// Write rendered text to `path`, creating parent directories as needed
///
/// The text goes to a temporary file next to `path`, is synced to disk and
/// then renamed over the target, so `path` holds either the complete text or
/// its previous contents.
///
/// # Returns
/// Number of bytes written
pub fn write_text(path: &Path, text: &str) -> Result<usize, AsciiError> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|e| AsciiError::io(dir, e))?;
            dir
        }
        None => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| AsciiError::io(dir, e))?;
    file.write_all(text.as_bytes())
        .and_then(|()| file.as_file().sync_all())
        .map_err(|e| AsciiError::io(file.path(), e))?;
    file.persist(path)
        .map_err(|e| AsciiError::io(path, e.error))?;

    Ok(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/ascii.txt");

        let written = write_text(&path, "``@@\n").unwrap();

        assert_eq!(written, 5);
        assert_eq!(fs::read_to_string(&path).unwrap(), "``@@\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ascii.txt");
        fs::write(&path, "old contents that are longer").unwrap();

        write_text(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ascii.txt");

        write_text(&path, "``\n").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("ascii.txt")]);
    }

    #[test]
    fn test_failed_write_keeps_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ascii.txt");
        fs::write(&path, "previous\n").unwrap();

        // Renaming a file over a directory fails after the text was written
        let target = dir.path().join("taken");
        fs::create_dir(&target).unwrap();
        assert!(write_text(&target, "new\n").is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), "previous\n");
        assert!(target.is_dir());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = write_text(&blocker.join("ascii.txt"), "x").unwrap_err();
        assert!(matches!(err, AsciiError::Io { .. }));
    }
}
