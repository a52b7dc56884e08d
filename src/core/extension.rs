//! Extension specifiers and the matcher compiled from them
//!
//! An extension specifier is a small shell-like pattern describing the
//! trailing part of a file name: `.md`, `.html.erb`, `.*` (any single final
//! extension) or `.{md,markdown}` (either one). The compiled
//! [`ExtensionMatcher`] strips a matching extension from a relative path to
//! produce its slug.

use crate::error::{DecantError, Result};
use regex::Regex;
use std::fmt;

/// Separator that starts every normalized extension
pub const SEPARATOR: char = '.';

/// A normalized extension specifier.
///
/// Either absent (no extension constraint) or a string starting with `.`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExtensionSpec(Option<String>);

impl ExtensionSpec {
    /// Normalize a raw specifier, prefixing the separator when missing.
    /// An empty string is treated the same as no specifier.
    pub fn new(spec: Option<&str>) -> Self {
        match spec {
            None | Some("") => Self(None),
            Some(s) if s.starts_with(SEPARATOR) => Self(Some(s.to_string())),
            Some(s) => Self(Some(format!("{SEPARATOR}{s}"))),
        }
    }

    /// The specifier without any extension constraint
    pub fn none() -> Self {
        Self(None)
    }

    /// The normalized specifier, if any
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether no extension is configured
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for ExtensionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(""))
    }
}

impl From<&str> for ExtensionSpec {
    fn from(spec: &str) -> Self {
        Self::new(Some(spec))
    }
}

/// End-anchored matcher compiled from an [`ExtensionSpec`].
#[derive(Debug, Clone)]
pub struct ExtensionMatcher {
    spec: ExtensionSpec,
    regex: Option<Regex>,
}

impl ExtensionMatcher {
    /// Compile a specifier. Unbalanced `{`/`}` is an error.
    pub fn compile(spec: &ExtensionSpec) -> Result<Self> {
        let regex = spec
            .as_str()
            .map(|pattern| Ok::<_, DecantError>(Regex::new(&translate(pattern)?)?))
            .transpose()?;

        Ok(Self {
            spec: spec.clone(),
            regex,
        })
    }

    /// The specifier this matcher was compiled from
    pub fn spec(&self) -> &ExtensionSpec {
        &self.spec
    }

    /// The compiled expression, `None` when there is no constraint
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    /// Whether the tail of `path` matches the extension.
    ///
    /// Always `false` without an extension constraint.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(path))
    }

    /// `path` with the matching extension removed, or `path` unchanged.
    pub fn strip<'a>(&self, path: &'a str) -> &'a str {
        match self.regex.as_ref().and_then(|re| re.find(path)) {
            Some(m) => &path[..m.start()],
            None => path,
        }
    }
}

/// Turn the specifier grammar into an end-anchored regular expression.
fn translate(pattern: &str) -> Result<String> {
    let mut regex = String::with_capacity(pattern.len() * 2 + 1);
    let mut depth = 0usize;

    for ch in pattern.chars() {
        match ch {
            '.' => regex.push_str(r"\."),
            '*' => regex.push_str(r"[^\./]+"),
            '{' => {
                depth += 1;
                regex.push_str("(?:");
            }
            ',' if depth > 0 => regex.push('|'),
            '}' => {
                if depth == 0 {
                    return Err(DecantError::invalid_extension(pattern, "unmatched `}`"));
                }
                depth -= 1;
                regex.push(')');
            }
            other => regex.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }

    if depth > 0 {
        return Err(DecantError::invalid_extension(pattern, "unclosed `{`"));
    }

    regex.push('$');
    Ok(regex)
}
