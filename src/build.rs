//! The build pipeline.
//!
//! A build is a single synchronous pass:
//! 1. Validate the source tree and load the templates
//! 2. Discover posts (one folder each) under `<source>/posts`
//! 3. Per post: locate markdown, parse front matter, convert to HTML,
//!    render the post template, write `<out>/<name>/index.html`, copy
//!    the post's assets
//! 4. Render the homepage from the built posts' previews
//! 5. Copy site-level static files to the output root
//!
//! A failing post is reported and skipped; the rest of the build
//! proceeds, and `build` returns `BuildError::PostsFailed` at the end so
//! the process still exits non-zero. Errors outside the per-post loop
//! (bad source root, missing templates, homepage) abort the whole build.

mod assets;
mod frontmatter;
mod markdown;
mod render;
mod source;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::util::title_case;

pub use assets::{CopyError, copy_assets};
pub use frontmatter::{FrontMatter, ParsedContent, parse_front_matter};
pub use markdown::{ConversionError, render_markdown};
pub use render::{IndexContext, PostContext, PostPreview, RenderError, Renderer, SiteContext};
pub use source::{DiscoveryError, MissingContentError, Post, discover_posts, walk_post_dir};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("{0}")]
    MissingContent(#[from] MissingContentError),

    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("copy error: {0}")]
    Copy(#[from] CopyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{failed} of {total} post(s) failed to build")]
    PostsFailed { failed: usize, total: usize },
}

impl BuildError {
    /// The pipeline stage this error belongs to, for diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            BuildError::Discovery(_) => "discovery",
            BuildError::MissingContent(_) => "content",
            BuildError::Conversion(_) => "conversion",
            BuildError::Render(_) => "render",
            BuildError::Copy(_) => "copy",
            BuildError::Io(_) => "io",
            BuildError::PostsFailed { .. } => "build",
        }
    }
}

/// Summary of a completed build.
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub posts_built: usize,
    pub assets_copied: usize,
}

pub struct Builder {
    config: SiteConfig,
    /// Base path for resolving relative paths (the config file's directory)
    base_path: PathBuf,
}

impl Builder {
    pub fn new(config: SiteConfig, base_path: PathBuf) -> Self {
        Self { config, base_path }
    }

    /// The resolved source directory.
    pub fn source_dir(&self) -> PathBuf {
        self.config.source_dir(&self.base_path)
    }

    /// The resolved output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.config.output_dir(&self.base_path)
    }

    /// Run the build pass.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let source_dir = self.source_dir();
        if !source_dir.is_dir() {
            return Err(DiscoveryError::PathNotFound(source_dir).into());
        }

        let renderer = Renderer::new(&source_dir.join("templates"))?;

        let output_dir = self.output_dir();
        fs::create_dir_all(&output_dir)?;

        let post_dirs = discover_posts(&source_dir.join("posts"))?;
        println!("Found {} post(s)", post_dirs.len());

        let site = SiteContext {
            name: self.config.name.clone(),
            url: self.config.url.clone(),
        };

        let mut previews: Vec<PostPreview> = Vec::new();
        let mut assets_copied = 0;
        let mut failed = 0;
        for post_dir in &post_dirs {
            let name = post_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "post".to_string());

            match self.build_post(post_dir, &output_dir, &renderer, &site) {
                Ok((preview, copied)) => {
                    previews.push(preview);
                    assets_copied += copied;
                }
                Err(err) => {
                    eprintln!("post '{}' failed at {} stage: {}", name, err.stage(), err);
                    failed += 1;
                }
            }
        }

        // Homepage: previews sorted by date, lexically (ISO dates order
        // correctly).
        previews.sort_by(|a, b| a.date.cmp(&b.date));
        let index_html = renderer.render_index(&IndexContext {
            site,
            posts: previews.clone(),
        })?;
        fs::write(output_dir.join("index.html"), index_html)?;

        // Site-level static files (e.g. a stylesheet) land at the output
        // root, next to index.html.
        let site_files = self.site_static_files(&source_dir)?;
        assets_copied += copy_assets(&source_dir, &site_files, &output_dir)?;

        println!(
            "Wrote {} post(s) and {} asset(s) to {}",
            previews.len(),
            assets_copied,
            output_dir.display()
        );

        if failed > 0 {
            return Err(BuildError::PostsFailed {
                failed,
                total: post_dirs.len(),
            });
        }

        Ok(BuildReport {
            output_dir,
            posts_built: previews.len(),
            assets_copied,
        })
    }

    /// Build one post end to end. Nothing is written before the markdown
    /// file has been located, so a post that fails early leaves no output
    /// folder behind.
    fn build_post(
        &self,
        post_dir: &Path,
        output_dir: &Path,
        renderer: &Renderer,
        site: &SiteContext,
    ) -> Result<(PostPreview, usize), BuildError> {
        let files = walk_post_dir(post_dir)?;
        let post = Post::from_files(post_dir, files)?;

        let raw = fs::read_to_string(&post.markdown)?;
        let parsed = parse_front_matter(&raw);

        let content = render_markdown(&parsed.content, &self.config.markdown)?;

        let title = parsed
            .front_matter
            .title
            .clone()
            .unwrap_or_else(|| title_case(&post.name));
        let date = parsed.front_matter.date.clone().unwrap_or_default();

        let html = renderer.render_post(&PostContext {
            site: site.clone(),
            title: title.clone(),
            date: date.clone(),
            description: parsed.front_matter.description.clone().unwrap_or_default(),
            image: parsed.front_matter.image.clone().unwrap_or_default(),
            content,
        })?;

        let dest = output_dir.join(&post.name);
        fs::create_dir_all(&dest)?;
        fs::write(dest.join("index.html"), html)?;

        let copied = copy_assets(&post.dir, &post.assets, &dest)?;

        Ok((
            PostPreview {
                title,
                date,
                url: format!("{}/", post.name),
            },
            copied,
        ))
    }

    /// Regular files in the source root, minus the config file. Folders
    /// (`templates/`, `posts/`, the output directory) are never copied
    /// from the root, and hidden files are skipped.
    fn site_static_files(&self, source_dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
        let mut files = Vec::new();
        for entry in fs::read_dir(source_dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.starts_with('.') || name == "hellfire.yaml" {
                continue;
            }
            if entry.path().is_file() {
                files.push(PathBuf::from(file_name));
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
