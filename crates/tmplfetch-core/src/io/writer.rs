//! Directory creation and file writes with explicit permission bits.
//!
//! Modes are applied at creation time and are subject to the process umask.
//! On non-Unix targets the mode argument is ignored.

use std::fs::DirBuilder;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Read;
use std::io::Write;
use std::io::{self};
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::DirBuilderExt;
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

use crate::copy::CopyBuffer;
use crate::copy::copy_exact;

/// Opens `path` for writing, creating or truncating it with `mode`.
///
/// # Errors
///
/// Returns any error from the underlying `open(2)`.
pub fn create_with_mode(path: &Path, mode: u32) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(mode);
    #[cfg(not(unix))]
    let _ = mode;
    options.open(path)
}

/// Creates `dir` and every missing ancestor, applying `mode` to each newly
/// created directory. Existing directories are left as they are.
///
/// # Errors
///
/// Fails if a component exists as a non-directory or cannot be created.
pub fn mkdir_chain(dir: &Path, mode: u32) -> io::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(mode);
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(dir)
}

/// Writes exactly `size` bytes from `reader` into `path` with `mode`.
///
/// The file handle is closed before returning, on success and on error.
///
/// # Errors
///
/// Returns `UnexpectedEof` on a short read, or any open/write error.
pub fn write_file<R: Read>(
    path: &Path,
    mode: u32,
    reader: &mut R,
    size: u64,
    buffer: &mut CopyBuffer,
) -> io::Result<u64> {
    let mut file = create_with_mode(path, mode)?;
    let written = copy_exact(reader, &mut file, size, buffer)?;
    file.flush()?;
    Ok(written)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_mkdir_chain_creates_ancestors() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/c");
        mkdir_chain(&dir, 0o755).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_mkdir_chain_existing_is_ok() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("exists");
        fs::create_dir(&dir).unwrap();
        mkdir_chain(&dir, 0o755).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_mkdir_chain_over_file_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "file").unwrap();
        assert!(mkdir_chain(&blocker.join("child"), 0o755).is_err());
    }

    #[test]
    fn test_mkdir_chain_empty_path_is_noop() {
        mkdir_chain(Path::new(""), 0o755).unwrap();
    }

    #[test]
    fn test_write_file_exact_size() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("handler.go");
        let mut reader = Cursor::new(b"package function\ntrailing".to_vec());
        let mut buffer = CopyBuffer::new();

        let written = write_file(&path, 0o644, &mut reader, 16, &mut buffer).unwrap();
        assert_eq!(written, 16);
        assert_eq!(fs::read(&path).unwrap(), b"package function");
    }

    #[test]
    fn test_write_file_truncates_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("handler.js");
        fs::write(&path, "a much longer previous content").unwrap();
        let mut reader = Cursor::new(b"new".to_vec());
        let mut buffer = CopyBuffer::new();

        write_file(&path, 0o644, &mut reader, 3, &mut buffer).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_file_short_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("short.txt");
        let mut reader = Cursor::new(b"abc".to_vec());
        let mut buffer = CopyBuffer::new();

        let err = write_file(&path, 0o644, &mut reader, 100, &mut buffer).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_applies_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.sh");
        let mut reader = Cursor::new(b"#!/bin/sh\n".to_vec());
        let mut buffer = CopyBuffer::new();

        write_file(&path, 0o755, &mut reader, 10, &mut buffer).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[cfg(unix)]
    #[test]
    fn test_create_with_mode_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("master.zip");
        create_with_mode(&path, 0o700).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
