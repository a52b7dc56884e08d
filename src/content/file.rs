//! A single content file with a lazily read, memoized parse

use crate::core::frontmatter::{self, Frontmatter};
use crate::error::Result;
use crate::io::{read_file, ReaderConfig};
use serde_yaml::Value;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};

/// A file on disk split into frontmatter and content.
///
/// The file is read and parsed at most once per instance, on first access.
/// Nothing is ever invalidated: create a new instance to see changes on disk.
#[derive(Debug, Clone)]
pub struct ContentFile {
    path: PathBuf,
    config: ReaderConfig,
    text: OnceCell<String>,
    parsed: OnceCell<Frontmatter>,
}

impl ContentFile {
    /// Wrap `path` with the default reader limits
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, ReaderConfig::default())
    }

    /// Wrap `path` with custom reader limits
    pub fn with_config(path: impl Into<PathBuf>, config: ReaderConfig) -> Self {
        Self {
            path: path.into(),
            config,
            text: OnceCell::new(),
            parsed: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full untouched contents of the file
    pub fn read(&self) -> Result<&str> {
        if let Some(text) = self.text.get() {
            return Ok(text);
        }
        let text = read_file(&self.path, &self.config)?;
        Ok(self.text.get_or_init(|| text))
    }

    /// The parsed file, computed on first call
    pub fn parsed(&self) -> Result<&Frontmatter> {
        if let Some(parsed) = self.parsed.get() {
            return Ok(parsed);
        }
        let parsed = frontmatter::parse(self.read()?)?;
        Ok(self.parsed.get_or_init(|| parsed))
    }

    /// Everything after the frontmatter, or the whole file without one
    pub fn content(&self) -> Result<&str> {
        Ok(self.parsed()?.body())
    }

    /// The frontmatter data, `None` when the file has none
    pub fn frontmatter(&self) -> Result<Option<&Value>> {
        Ok(self.parsed()?.data())
    }

    /// Whether the file has a frontmatter block at all
    pub fn has_frontmatter(&self) -> Result<bool> {
        Ok(self.parsed()?.has_frontmatter())
    }

    /// Whether the frontmatter has `key`
    pub fn has_frontmatter_key(&self, key: &str) -> Result<bool> {
        Ok(self.parsed()?.has_key(key))
    }
}
