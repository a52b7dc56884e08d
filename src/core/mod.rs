//! Core parsing types: frontmatter splitting and extension matching
//!
//! - [`frontmatter`]: detect and excise the `---` delimited header block
//! - [`extension`]: compile extension specifiers into slug-stripping matchers

pub mod extension;
pub mod frontmatter;

pub use extension::{ExtensionMatcher, ExtensionSpec};
pub use frontmatter::{Frontmatter, RawFrontmatter};
