//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Expand a leading `~` and make the path absolute against the current directory.
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).to_string());
    if expanded.is_absolute() {
        return expanded;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(expanded),
        Err(_) => expanded,
    }
}

/// Read a whole source file.
///
/// A missing file is reported as `input.not_found` rather than a generic IO
/// error so callers can tell the user which path was wrong.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::input_not_found(path.display().to_string()));
    }
    read_file(path, &format!("read {}", path.display()))
}

/// Read file contents with standardized error handling.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file atomically (write to .tmp, then rename).
///
/// Readers see either the old content or the new content, never a partial write.
pub fn write_file_atomic(path: &Path, content: &str, operation: &str) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let filename = path.file_name().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let tmp_path = parent.join(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("{} (write temp)", operation))))?;

    fs::rename(&tmp_path, path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("{} (rename)", operation))))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_source_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "public class Foo").unwrap();

        let content = read_source(temp.path()).unwrap();
        assert!(content.contains("public class Foo"));
    }

    #[test]
    fn read_source_reports_missing_input() {
        let err = read_source(Path::new("/nonexistent/Foo.cs")).unwrap_err();
        assert_eq!(err.code.as_str(), "input.not_found");
    }

    #[test]
    fn read_file_returns_io_error_for_missing_file() {
        let err = read_file(Path::new("/nonexistent/path.txt"), "test read").unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn write_file_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Foo.swift");
        fs::write(&path, "old").unwrap();

        write_file_atomic(&path, "new content", "test write").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
        assert!(!dir.path().join("Foo.swift.tmp").exists());
    }

    #[test]
    fn write_file_atomic_fails_for_missing_dir() {
        let result = write_file_atomic(
            Path::new("/nonexistent/dir/file.txt"),
            "content",
            "test write",
        );
        assert_eq!(result.unwrap_err().code.as_str(), "internal.io_error");
    }

    #[test]
    fn expand_path_makes_relative_absolute() {
        assert!(expand_path("Foo.cs").is_absolute());
        assert_eq!(expand_path("/tmp/Foo.cs"), PathBuf::from("/tmp/Foo.cs"));
    }
}
