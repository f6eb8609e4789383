use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{map_io_err, ResectionResult};

/// Read a whole file as UTF-8 text
///
/// Invalid UTF-8 surfaces as an `InvalidData` IO error.
pub fn read_file_to_string(path: impl AsRef<Path>) -> ResectionResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    let content = fs::read_to_string(path).map_err(map_io_err(path))?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Replace the contents of a file in full (truncate and write)
pub fn write_file_sync(path: impl AsRef<Path>, content: &str) -> ResectionResult<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to {}", content.len(), path.display());

    fs::write(path, content).map_err(map_io_err(path))
}

/// Check if a file exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_file()
}

/// Short name used in user-facing messages: the file name when there is one
pub fn display_name(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResectionError;
    use tempfile::tempdir;

    #[test]
    fn test_file_operations() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("scores.html");

        fs::write(&file_path, "a much longer original body").unwrap();
        assert!(file_exists(&file_path));

        write_file_sync(&file_path, "short").unwrap();
        assert_eq!(read_file_to_string(&file_path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.html");

        let err = read_file_to_string(&file_path).unwrap_err();
        match err {
            ResectionError::Io { source, path } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
                assert_eq!(path, Some(file_path));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary.html");
        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_file_to_string(&file_path).unwrap_err();
        assert!(matches!(
            err,
            ResectionError::Io { ref source, .. } if source.kind() == std::io::ErrorKind::InvalidData
        ));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nope").join("scores.html");
        assert!(write_file_sync(&file_path, "x").is_err());
        assert!(!file_exists(&file_path));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("frontend-deploy/scores.html"), "scores.html");
        assert_eq!(display_name("scores.html"), "scores.html");
    }
}
