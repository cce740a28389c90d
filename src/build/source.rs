//! Post discovery.
//!
//! Each immediate subdirectory of the posts root is one post. A post
//! folder holds exactly one markdown file plus any number of asset files;
//! a post's own subfolders are assets, never further posts.

use std::path::{Path, PathBuf};

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum DiscoveryError {
    #[error("posts directory does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("posts path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(thiserror::Error, Debug)]
#[error("no markdown file in post folder: {0}")]
pub struct MissingContentError(pub PathBuf);

// =============================================================================
// Posts
// =============================================================================

/// One blog post, located in its source folder.
///
/// Created at discovery time and immutable for the duration of one build.
#[derive(Debug, Clone)]
pub struct Post {
    /// The post's name, taken from its folder name (e.g. "hello-world")
    pub name: String,
    /// The post's source folder
    pub dir: PathBuf,
    /// Absolute path to the post's markdown file
    pub markdown: PathBuf,
    /// Asset files, relative to the post folder
    pub assets: Vec<PathBuf>,
}

/// List the post folders under the posts root.
///
/// Only immediate subdirectories count; hidden folders are skipped. The
/// result is sorted by name so builds are deterministic.
pub fn discover_posts(posts_root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !posts_root.exists() {
        return Err(DiscoveryError::PathNotFound(posts_root.to_path_buf()));
    }
    if !posts_root.is_dir() {
        return Err(DiscoveryError::NotADirectory(posts_root.to_path_buf()));
    }

    let entries = std::fs::read_dir(posts_root).map_err(|e| DiscoveryError::ReadDir {
        path: posts_root.to_path_buf(),
        source: e,
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::ReadEntry {
            path: posts_root.to_path_buf(),
            source: e,
        })?;

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// List every file in a post folder, recursively, as post-relative paths.
///
/// Hidden files are skipped. The result is sorted so markdown selection
/// and asset copying are deterministic.
pub fn walk_post_dir(dir: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut files = Vec::new();
    walk_directory(dir, &PathBuf::new(), &mut files)?;
    files.sort();
    Ok(files)
}

fn walk_directory(
    dir: &Path,
    relative_path: &Path,
    files: &mut Vec<PathBuf>,
) -> Result<(), DiscoveryError> {
    let entries = std::fs::read_dir(dir).map_err(|e| DiscoveryError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::ReadEntry {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let file_name = entry.file_name();
        if file_name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        let entry_relative_path = relative_path.join(&file_name);

        if path.is_dir() {
            walk_directory(&path, &entry_relative_path, files)?;
        } else if path.is_file() {
            files.push(entry_relative_path);
        }
    }

    Ok(())
}

fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref(),
        Some("md" | "markdown")
    )
}

impl Post {
    /// Split a post folder's files into the markdown source and its assets.
    ///
    /// `files` are post-relative paths as returned by [`walk_post_dir`].
    /// Only root-level files of the post folder are content candidates; a
    /// post's subfolders hold assets, so a nested markdown file is copied
    /// verbatim like any other asset. A folder with no root-level markdown
    /// file is a `MissingContentError`. A folder with several takes the
    /// first in sorted order and warns about the rest.
    pub fn from_files(dir: &Path, files: Vec<PathBuf>) -> Result<Self, MissingContentError> {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "post".to_string());

        let (markdown_files, assets): (Vec<PathBuf>, Vec<PathBuf>) = files
            .into_iter()
            .partition(|f| f.parent() == Some(Path::new("")) && is_markdown(f));

        let Some(markdown) = markdown_files.first() else {
            return Err(MissingContentError(dir.to_path_buf()));
        };
        if markdown_files.len() > 1 {
            eprintln!(
                "Warning: post '{}' has {} markdown files, using {}",
                name,
                markdown_files.len(),
                markdown.display()
            );
        }

        Ok(Self {
            name,
            dir: dir.to_path_buf(),
            markdown: dir.join(markdown),
            assets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_posts_immediate_subdirs_only() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("b-post/nested")).unwrap();
        fs::create_dir(root.path().join("a-post")).unwrap();
        fs::create_dir(root.path().join(".hidden")).unwrap();
        fs::write(root.path().join("stray.txt"), "not a post").unwrap();

        let dirs = discover_posts(root.path()).unwrap();

        let names: Vec<_> = dirs
            .iter()
            .map(|d| d.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a-post", "b-post"]);
    }

    #[test]
    fn test_discover_posts_missing_root() {
        let root = tempfile::tempdir().unwrap();
        let result = discover_posts(&root.path().join("nope"));
        assert!(matches!(result, Err(DiscoveryError::PathNotFound(_))));
    }

    #[test]
    fn test_discover_posts_root_is_a_file() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("posts");
        fs::write(&file, "").unwrap();

        let result = discover_posts(&file);
        assert!(matches!(result, Err(DiscoveryError::NotADirectory(_))));
    }

    #[test]
    fn test_post_from_files_splits_markdown_and_assets() {
        let dir = tempfile::tempdir().unwrap();
        let post_dir = dir.path().join("hello-world");
        fs::create_dir_all(post_dir.join("img")).unwrap();
        fs::write(post_dir.join("index.md"), "# Hi").unwrap();
        fs::write(post_dir.join("cat.png"), [1u8, 2, 3]).unwrap();
        fs::write(post_dir.join("img/dog.png"), [4u8]).unwrap();

        let files = walk_post_dir(&post_dir).unwrap();
        let post = Post::from_files(&post_dir, files).unwrap();

        assert_eq!(post.name, "hello-world");
        assert_eq!(post.markdown, post_dir.join("index.md"));
        assert_eq!(
            post.assets,
            vec![PathBuf::from("cat.png"), PathBuf::from("img/dog.png")]
        );
    }

    #[test]
    fn test_nested_markdown_is_an_asset() {
        let dir = tempfile::tempdir().unwrap();
        let post_dir = dir.path().join("hello");
        fs::create_dir_all(post_dir.join("attachments")).unwrap();
        fs::write(post_dir.join("index.md"), "# Root Content").unwrap();
        // Sorts before "index.md" but lives in a subfolder, so it must
        // not become the post's content.
        fs::write(post_dir.join("attachments/extra.md"), "# Nested Asset").unwrap();

        let files = walk_post_dir(&post_dir).unwrap();
        let post = Post::from_files(&post_dir, files).unwrap();

        assert_eq!(post.markdown, post_dir.join("index.md"));
        assert_eq!(post.assets, vec![PathBuf::from("attachments/extra.md")]);
    }

    #[test]
    fn test_only_nested_markdown_is_missing_content() {
        let dir = tempfile::tempdir().unwrap();
        let post_dir = dir.path().join("hollow");
        fs::create_dir_all(post_dir.join("notes")).unwrap();
        fs::write(post_dir.join("notes/draft.md"), "draft").unwrap();

        let files = walk_post_dir(&post_dir).unwrap();
        let result = Post::from_files(&post_dir, files);
        assert!(result.is_err());
    }

    #[test]
    fn test_post_without_markdown_is_missing_content() {
        let dir = tempfile::tempdir().unwrap();
        let post_dir = dir.path().join("empty");
        fs::create_dir(&post_dir).unwrap();
        fs::write(post_dir.join("cat.png"), [1u8]).unwrap();

        let files = walk_post_dir(&post_dir).unwrap();
        let result = Post::from_files(&post_dir, files);
        assert!(result.is_err());
    }

    #[test]
    fn test_post_with_multiple_markdown_takes_first_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let post_dir = dir.path().join("dup");
        fs::create_dir(&post_dir).unwrap();
        fs::write(post_dir.join("b.md"), "b").unwrap();
        fs::write(post_dir.join("a.md"), "a").unwrap();

        let files = walk_post_dir(&post_dir).unwrap();
        let post = Post::from_files(&post_dir, files).unwrap();

        assert_eq!(post.markdown, post_dir.join("a.md"));
        assert!(post.assets.is_empty());
    }
}
