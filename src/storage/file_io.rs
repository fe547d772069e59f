//! File I/O utilities with atomic writes
//!
//! Provides line-oriented reads and safe writes that won't corrupt the ledger
//! file on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Line terminator used when writing the ledger file
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Read all lines of a text file
///
/// Returns `Ok(None)` when the file is missing, is a directory, or cannot be
/// opened. Bytes that are not valid UTF-8 are replaced rather than rejected,
/// so one damaged line never hides the rest of the file. A read failure
/// part-way through the file is an error.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>, TrackerError> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Ok(None),
    };
    if file.metadata().map(|m| m.is_dir()).unwrap_or(false) {
        return Ok(None);
    }

    let reader = BufReader::new(file);
    let mut lines = Vec::new();

    for (line_num, line) in reader.split(b'\n').enumerate() {
        let mut line = line.map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to read {} at line {}: {}",
                path.display(),
                line_num + 1,
                e
            ))
        })?;
        if line.ends_with(b"\r") {
            line.pop();
        }
        lines.push(String::from_utf8_lossy(&line).into_owned());
    }

    Ok(Some(lines))
}

/// Write lines to a file atomically (write to temp, then rename)
///
/// Each line is followed by [`LINE_ENDING`]. The target is either replaced
/// with the complete content or left untouched.
///
/// Unlike truncating in place, the rename gives the path a new regular file:
/// a symlink at `path` is replaced rather than followed, and the old file's
/// permissions are not carried over.
pub fn write_lines_atomic<P, I, S>(path: P, lines: I) -> Result<(), TrackerError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let result = write_temp(&temp_path, lines).and_then(|_| {
        fs::rename(&temp_path, path)
            .map_err(|e| TrackerError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_temp<I, S>(temp_path: &Path, lines: I) -> Result<(), TrackerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .and_then(|_| writer.write_all(LINE_ENDING.as_bytes()))
            .map_err(|e| TrackerError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        assert!(read_lines(&path).unwrap().is_none());
    }

    #[test]
    fn test_read_directory_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.txt");
        fs::create_dir(&path).unwrap();

        assert!(read_lines(&path).unwrap().is_none());
    }

    #[test]
    fn test_read_replaces_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.txt");
        fs::write(&path, b"Rent,950.0\nCaf\xE9,4.5\r\nBook,12.0\n").unwrap();

        let lines = read_lines(&path).unwrap().unwrap();
        assert_eq!(lines, vec!["Rent,950.0", "Caf\u{FFFD},4.5", "Book,12.0"]);
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.txt");

        write_lines_atomic(&path, ["Coffee,3.5", "Book,12.0"]).unwrap();

        let lines = read_lines(&path).unwrap().unwrap();
        assert_eq!(lines, vec!["Coffee,3.5", "Book,12.0"]);

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, format!("Coffee,3.5{0}Book,12.0{0}", LINE_ENDING));
    }

    #[test]
    fn test_write_truncates_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.txt");

        write_lines_atomic(&path, ["a,1.0", "b,2.0", "c,3.0"]).unwrap();
        write_lines_atomic(&path, ["z,9.0"]).unwrap();

        assert_eq!(read_lines(&path).unwrap().unwrap(), vec!["z,9.0"]);
    }

    #[test]
    fn test_write_empty_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.txt");

        write_lines_atomic(&path, Vec::<String>::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.txt");

        write_lines_atomic(&path, ["x,1.0"]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("ledger.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("ledger.txt");

        write_lines_atomic(&path, ["x,1.0"]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = write_lines_atomic(blocker.join("ledger.txt"), ["x,1.0"]);
        assert!(matches!(result, Err(TrackerError::Storage(_))));
    }
}
