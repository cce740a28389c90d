//! Asset copying.
//!
//! Assets are copied byte-for-byte, preserving their path relative to the
//! post folder. Existing files are overwritten unconditionally; the whole
//! site is regenerated on every build.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
#[error("failed to copy {src} to {dest}: {source}")]
pub struct CopyError {
    pub src: PathBuf,
    pub dest: PathBuf,
    pub source: std::io::Error,
}

/// Copy `files` (paths relative to `src_dir`) into `dest_dir`, creating
/// parent directories as needed. Returns the number of files copied.
pub fn copy_assets(
    src_dir: &Path,
    files: &[PathBuf],
    dest_dir: &Path,
) -> Result<usize, CopyError> {
    for rel in files {
        let src = src_dir.join(rel);
        let dest = dest_dir.join(rel);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| CopyError {
                src: src.clone(),
                dest: dest.clone(),
                source: e,
            })?;
        }

        fs::copy(&src, &dest).map_err(|e| CopyError {
            src: src.clone(),
            dest: dest.clone(),
            source: e,
        })?;
    }

    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_preserves_bytes_and_structure() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();

        let bytes: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x00, 0xff];
        fs::create_dir_all(src.path().join("img")).unwrap();
        fs::write(src.path().join("img/cat.png"), bytes).unwrap();
        fs::write(src.path().join("notes.txt"), "hello").unwrap();

        let files = vec![PathBuf::from("img/cat.png"), PathBuf::from("notes.txt")];
        let copied = copy_assets(src.path(), &files, dest.path()).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read(dest.path().join("img/cat.png")).unwrap(), bytes);
        assert_eq!(
            fs::read_to_string(dest.path().join("notes.txt")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_copy_overwrites_existing() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();

        fs::write(src.path().join("a.txt"), "new").unwrap();
        fs::write(dest.path().join("a.txt"), "old").unwrap();

        copy_assets(src.path(), &[PathBuf::from("a.txt")], dest.path()).unwrap();

        assert_eq!(fs::read_to_string(dest.path().join("a.txt")).unwrap(), "new");
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();

        let result = copy_assets(src.path(), &[PathBuf::from("gone.png")], dest.path());
        assert!(result.is_err());
    }
}
