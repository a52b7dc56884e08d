//! A directory of content files with an optional extension
//!
//! [`Collection`] lists, finds and globs regular files under its root
//! directory. Patterns use shell glob syntax relative to the root: `*` stays
//! inside one path segment, `**/` spans any number of directories and
//! `{a,b}` picks alternatives. Like a shell, names starting with `.` are only
//! matched when the pattern itself names a dot segment, unless hidden files
//! are explicitly included.

use crate::core::{ExtensionMatcher, ExtensionSpec};
use crate::error::{DecantError, Result};
use globset::{GlobBuilder, GlobMatcher};
use log::{debug, trace, warn};
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Root directory plus extension specifier.
///
/// Construction never touches the filesystem; a missing root directory simply
/// yields no files.
#[derive(Debug, Clone)]
pub struct Collection {
    dir: PathBuf,
    matcher: ExtensionMatcher,
    follow_links: bool,
    include_hidden: bool,
}

impl Collection {
    /// Create a collection, compiling `ext` up front.
    pub fn new(dir: impl Into<PathBuf>, ext: Option<&str>) -> Result<Self> {
        Ok(Self {
            dir: dir.into(),
            matcher: ExtensionMatcher::compile(&ExtensionSpec::new(ext))?,
            follow_links: false,
            include_hidden: false,
        })
    }

    /// Follow symbolic links while walking the root directory
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Match dot-files and dot-directories with every pattern
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// The root directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Replace the root directory
    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) {
        self.dir = dir.into();
    }

    /// The normalized extension
    pub fn ext(&self) -> &ExtensionSpec {
        self.matcher.spec()
    }

    /// Replace the extension, recompiling the matcher.
    ///
    /// On error the previous extension is kept.
    pub fn set_ext(&mut self, ext: Option<&str>) -> Result<()> {
        self.matcher = ExtensionMatcher::compile(&ExtensionSpec::new(ext))?;
        Ok(())
    }

    /// The compiled extension matcher
    pub fn matcher(&self) -> &ExtensionMatcher {
        &self.matcher
    }

    /// Every file under the root that carries the extension, or every file
    /// when there is no extension.
    pub fn entries(&self) -> Result<Vec<PathBuf>> {
        let pattern = format!("**/*{}", self.ext());
        Ok(self.matching_files(&pattern)?.collect())
    }

    /// The first file matching `pattern` with the extension appended.
    ///
    /// Which file wins when several match follows directory traversal order.
    pub fn find(&self, pattern: &str) -> Result<Option<PathBuf>> {
        let pattern = format!("{pattern}{}", self.ext());
        Ok(self.matching_files(&pattern)?.next())
    }

    /// Every file matching `pattern` as given; the extension is not appended.
    pub fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        Ok(self.matching_files(pattern)?.collect())
    }

    /// `path` relative to the root, with `/` separators
    pub fn relative_path_for(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.dir).unwrap_or(path);
        relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// The relative path with the extension stripped
    pub fn slug_for(&self, path: &Path) -> String {
        let relative = self.relative_path_for(path);
        self.matcher.strip(&relative).to_string()
    }

    fn matching_files<'a>(
        &'a self,
        pattern: &str,
    ) -> Result<impl Iterator<Item = PathBuf> + 'a> {
        let glob = compile_glob(pattern)?;
        let include_hidden = self.include_hidden || names_dot_segment(pattern);
        trace!("Globbing {:?} under {}", pattern, self.dir.display());

        let walker = if self.dir.is_dir() {
            Some(
                WalkDir::new(&self.dir)
                    .follow_links(self.follow_links)
                    .min_depth(1),
            )
        } else {
            debug!("Collection root {} does not exist", self.dir.display());
            None
        };

        Ok(walker
            .into_iter()
            .flat_map(move |walker| {
                walker
                    .into_iter()
                    .filter_entry(move |entry| include_hidden || !is_hidden(entry))
            })
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(is_file)
            .map(DirEntry::into_path)
            .filter(move |path| glob.is_match(self.relative_path_for(path))))
    }
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|err| DecantError::invalid_pattern(pattern, err))
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn names_dot_segment(pattern: &str) -> bool {
    pattern.split('/').any(|segment| segment.starts_with('.'))
}
