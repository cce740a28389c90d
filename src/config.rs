//! Site configuration.
//!
//! A site is described by an optional `hellfire.yaml` next to its content.
//! Every path the pipeline touches (source directory, template directory,
//! output directory) is derived from this config plus the config file's
//! location, so nothing depends on ambient working-directory state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),
}

/// The site configuration, deserialized from `hellfire.yaml`.
///
/// Every field has a default, so a config file is optional and may set
/// only the fields it cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, available to templates as `site.name`
    pub name: String,
    /// Canonical site URL, available to templates as `site.url`
    pub url: Option<String>,
    /// The site source directory, relative to the config file
    pub source: PathBuf,
    /// The output directory, relative to the source directory
    pub output: PathBuf,
    /// Markdown processing configuration
    pub markdown: MarkdownConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "A hellfire site".to_string(),
            url: None,
            source: PathBuf::from("."),
            output: PathBuf::from("dist"),
            markdown: MarkdownConfig::default(),
        }
    }
}

/// Markdown processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// pulldown-cmark extensions to enable
    pub extensions: Vec<String>,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["gfm".to_string()],
        }
    }
}

impl SiteConfig {
    /// Load the config named on the command line, falling back to
    /// `hellfire.yaml` in the current directory.
    ///
    /// Returns the config together with the absolute path it was (or would
    /// have been) loaded from, which callers use as the base for resolving
    /// relative paths. An explicitly named file must exist; the implicit
    /// `hellfire.yaml` may be absent, in which case defaults apply.
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let explicit = config_file.is_some();
        let config_path = config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("hellfire.yaml"));
        let config_path = if config_path.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_path)
        } else {
            config_path
        };

        if !explicit && !config_path.exists() {
            return Ok((Self::default(), config_path));
        }

        let config = Self::load_from_file(&config_path)?;
        Ok((config, config_path))
    }

    /// Load the config from a file path.
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// The absolute source directory, resolved against `base`.
    pub fn source_dir(&self, base: &Path) -> PathBuf {
        if self.source.is_relative() {
            base.join(&self.source)
        } else {
            self.source.clone()
        }
    }

    /// The absolute output directory. A relative output resolves against
    /// the source directory.
    pub fn output_dir(&self, base: &Path) -> PathBuf {
        if self.output.is_relative() {
            self.source_dir(base).join(&self.output)
        } else {
            self.output.clone()
        }
    }
}
