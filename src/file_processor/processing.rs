//! Reading, transforming and writing back individual files.

use notefix_lib::transforms::{Transform, TransformError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The transformation produced the file's current text
    Unchanged,
    /// The file was rewritten
    Modified,
    /// The file would be rewritten (`--check`)
    WouldModify,
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error("Failed to process {path}: {source}")]
    Transform { path: String, source: TransformError },
}

/// Decode UTF-8, dropping any invalid byte sequences.
pub fn decode_lenient(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Apply `transform` to already-decoded text, normalizing line endings first.
pub fn transform_text<T: Transform + ?Sized>(text: &str, transform: &T) -> Result<String, TransformError> {
    transform.apply(&normalize_newlines(text))
}

/// Transform one file in place, or only report whether it would change.
pub fn process_file<T: Transform + ?Sized>(
    path: &Path,
    transform: &T,
    check: bool,
) -> Result<FileOutcome, ProcessError> {
    let display_path = path.display().to_string();
    let bytes = fs::read(path).map_err(|source| ProcessError::Read {
        path: display_path.clone(),
        source,
    })?;
    let original = decode_lenient(&bytes);

    let modified = transform_text(&original, transform).map_err(|source| ProcessError::Transform {
        path: display_path.clone(),
        source,
    })?;

    if modified == original {
        log::debug!("[notefix-process] {display_path} unchanged");
        return Ok(FileOutcome::Unchanged);
    }
    if check {
        return Ok(FileOutcome::WouldModify);
    }

    fs::write(path, modified).map_err(|source| ProcessError::Write {
        path: display_path,
        source,
    })?;
    Ok(FileOutcome::Modified)
}

/// Process every file, in parallel when the `parallel` feature is enabled.
///
/// Results come back in the order of `paths`.
pub fn process_files<T: Transform + Sync + ?Sized>(
    paths: &[PathBuf],
    transform: &T,
    check: bool,
) -> Vec<(PathBuf, Result<FileOutcome, ProcessError>)> {
    #[cfg(feature = "parallel")]
    let iter = paths.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = paths.iter();

    iter.map(|path| (path.clone(), process_file(path, transform, check)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notefix_lib::transforms::BackslashStripper;
    use tempfile::tempdir;

    #[test]
    fn test_decode_lenient_drops_invalid_bytes() {
        assert_eq!(decode_lenient(b"ok\xff\xfe text"), "ok text");
        assert_eq!(decode_lenient("héllo".as_bytes()), "héllo");
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_newlines("plain\n"), "plain\n");
    }

    #[test]
    fn test_process_file_rewrites_only_when_changed() {
        let dir = tempdir().unwrap();
        let dirty = dir.path().join("dirty.md");
        let clean = dir.path().join("clean.md");
        fs::write(&dirty, "```\n\\<p\\>\n```\n").unwrap();
        fs::write(&clean, "```\n<p>\n```\n").unwrap();

        let stripper = BackslashStripper::new();
        assert_eq!(process_file(&dirty, &stripper, false).unwrap(), FileOutcome::Modified);
        assert_eq!(fs::read_to_string(&dirty).unwrap(), "```\n<p>\n```\n");
        assert_eq!(process_file(&clean, &stripper, false).unwrap(), FileOutcome::Unchanged);
    }

    #[test]
    fn test_check_mode_leaves_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, "```\n\\<p\\>\n```\n").unwrap();

        let outcome = process_file(&path, &BackslashStripper::new(), true).unwrap();
        assert_eq!(outcome, FileOutcome::WouldModify);
        assert_eq!(fs::read_to_string(&path).unwrap(), "```\n\\<p\\>\n```\n");
    }

    #[test]
    fn test_crlf_file_is_normalized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, "line\r\n```\r\n<p>\r\n```\r\n").unwrap();

        assert_eq!(
            process_file(&path, &BackslashStripper::new(), false).unwrap(),
            FileOutcome::Modified
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "line\n```\n<p>\n```\n");
    }

    #[test]
    fn test_process_files_keeps_order_and_reports_errors() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.md");
        let missing = dir.path().join("missing.md");
        fs::write(&a, "text\n").unwrap();

        let results = process_files(&[a.clone(), missing.clone()], &BackslashStripper::new(), false);
        assert_eq!(results[0].0, a);
        assert_eq!(*results[0].1.as_ref().unwrap(), FileOutcome::Unchanged);
        assert_eq!(results[1].0, missing);
        assert!(matches!(results[1].1, Err(ProcessError::Read { .. })));
    }
}
