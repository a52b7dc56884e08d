//! decant: treat a directory of text files as a typed collection of content
//!
//! Each file is split into a YAML frontmatter block and a body. A content
//! type binds a directory and an extension specifier, lists and finds the
//! files in it, and exposes declared frontmatter fields.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use decant::Result;
//!
//! fn main() -> Result<()> {
//!     // Given `content/about.md`:
//!     //
//!     // ---
//!     // title: About
//!     // ---
//!     // About Decant
//!     let pages = decant::define("content")
//!         .ext("md")
//!         .frontmatter(["title"])
//!         .build()?;
//!
//!     let about = pages.find("about")?;
//!     assert_eq!(about.content()?, "About Decant");
//!     assert_eq!(about.field("title")?.and_then(|v| v.as_str()), Some("About"));
//!     assert_eq!(about.slug(), "about");
//!
//!     for page in pages.all()? {
//!         println!("{}", page.slug());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Parsing text directly
//!
//! ```rust
//! let parsed = decant::convenience::parse("---\ntitle: Hi\n---\nBody\n").unwrap();
//! assert_eq!(parsed.get("title").and_then(|v| v.as_str()), Some("Hi"));
//! assert_eq!(parsed.body(), "Body\n");
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): frontmatter splitting and extension specifier compilation
//! - [`io`]: file reading and the [`Collection`] resolver
//! - [`content`]: content files, content types and their records
//! - [`error`]: the crate-wide error type

// Public API exports
pub use error::{DecantError, Result};

// Core types
pub use crate::core::{ExtensionMatcher, ExtensionSpec, Frontmatter, RawFrontmatter};

// IO types
pub use io::{Collection, ReaderConfig};

// Record types
pub use content::{Content, ContentFile, ContentType, ContentTypeBuilder};

pub mod content;
pub mod core;
pub mod error;
pub mod io;

/// Start defining a content type rooted at `dir`.
///
/// Shorthand for [`ContentType::builder`].
pub fn define(dir: impl Into<std::path::PathBuf>) -> ContentTypeBuilder {
    ContentType::builder(dir)
}

/// Convenience functions for one-off parsing
pub mod convenience {
    use crate::{ContentFile, Frontmatter, Result};
    use std::path::Path;

    /// Split and deserialize frontmatter from a string
    pub fn parse(content: &str) -> Result<Frontmatter> {
        crate::core::frontmatter::parse(content)
    }

    /// Read and parse a single file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Frontmatter> {
        let file = ContentFile::new(path.as_ref());
        file.parsed().cloned()
    }
}
