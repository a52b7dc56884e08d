//! Error types for the decant library
//!
//! Every fallible operation in the crate returns [`DecantError`]. Malformed
//! frontmatter delimiters are not errors (the file simply has no header), but
//! a well-delimited header that fails to deserialize is.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum DecantError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Regular expression errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Directory traversal errors
    #[error("Traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A lookup by pattern matched no file in the collection
    #[error("Couldn't find \"{pattern}\" in \"{}\"", .dir.display())]
    FileNotFound { pattern: String, dir: PathBuf },

    /// Extension specifier could not be compiled
    #[error("Invalid extension specifier {spec:?}: {reason}")]
    InvalidExtension { spec: String, reason: String },

    /// Glob pattern could not be compiled
    #[error("Invalid glob pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The frontmatter block is delimited but is not valid YAML
    #[error("Invalid frontmatter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),

    /// The frontmatter contains a YAML tag outside the allow-list
    #[error("Disallowed frontmatter type tag {tag}")]
    DisallowedTag { tag: String },

    /// A field was read that the content type never declared
    #[error("Undeclared frontmatter field: {name}")]
    UndeclaredField { name: String },

    /// File exceeds the configured reader limit
    #[error("File too large: {} ({size} bytes, limit: {limit} bytes)", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DecantError>;

impl DecantError {
    /// Create a new file not found error
    pub fn file_not_found(pattern: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self::FileNotFound {
            pattern: pattern.into(),
            dir: dir.into(),
        }
    }

    /// Create a new invalid extension error
    pub fn invalid_extension(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidExtension {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid glob pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: globset::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a new disallowed tag error
    pub fn disallowed_tag(tag: impl Into<String>) -> Self {
        Self::DisallowedTag { tag: tag.into() }
    }

    /// Create a new undeclared field error
    pub fn undeclared_field(name: impl Into<String>) -> Self {
        Self::UndeclaredField { name: name.into() }
    }

    /// Whether the error came from reading the header block of a file
    pub fn is_frontmatter_error(&self) -> bool {
        matches!(self, Self::Frontmatter(_) | Self::DisallowedTag { .. })
    }
}
