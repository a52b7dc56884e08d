//! Frontmatter detection and parsing
//!
//! A file has frontmatter when its very first line is `---` and a later line
//! is also exactly `---`. Everything between the two lines is YAML, everything
//! after the closing line is the body:
//!
//! ```text
//! ---
//! title: Frontmatter
//! ---
//! The rest of the content
//! ```
//!
//! Detection never fails. Input that does not open with `---\n`, or whose
//! header is never closed, is returned untouched as body. Only a properly
//! delimited header that is not valid YAML (or carries a YAML tag) is an error.

use crate::error::{DecantError, Result};
use log::trace;
use serde_yaml::{Mapping, Value};

/// Delimiter line that opens and closes the header block.
pub const DELIMITER: &str = "---";

const OPENING: &str = "---\n";

/// The undeserialized halves of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrontmatter<'a> {
    /// Text between the delimiter lines, or `None` when no header was detected
    pub header: Option<&'a str>,
    /// Everything after the closing delimiter line, or the whole input
    pub body: &'a str,
}

impl<'a> RawFrontmatter<'a> {
    fn absent(input: &'a str) -> Self {
        Self {
            header: None,
            body: input,
        }
    }
}

/// A parsed file: the deserialized header, if any, and the body text.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontmatter {
    data: Option<Value>,
    body: String,
}

impl Frontmatter {
    /// Create from already parsed parts
    pub fn new(data: Option<Value>, body: impl Into<String>) -> Self {
        Self {
            data,
            body: body.into(),
        }
    }

    /// The deserialized header, `None` when the input had no header block
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// The body text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether a header block was detected
    pub fn has_frontmatter(&self) -> bool {
        self.data.is_some()
    }

    /// Look up a top-level key.
    ///
    /// Returns `None` when there is no header, when the header is not a
    /// mapping, or when the key is missing.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(key))
    }

    /// Whether the header is a mapping that contains `key`
    pub fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Split into `(data, body)`
    pub fn into_parts(self) -> (Option<Value>, String) {
        (self.data, self.body)
    }
}

/// Separate the header block from the body without deserializing anything.
pub fn split(input: &str) -> RawFrontmatter<'_> {
    let Some(rest) = input.strip_prefix(OPENING) else {
        return RawFrontmatter::absent(input);
    };

    match find_closing_line(rest) {
        Some((start, end)) => RawFrontmatter {
            header: Some(&rest[..start]),
            body: &rest[end..],
        },
        None => {
            trace!("frontmatter opened but never closed, treating input as body");
            RawFrontmatter::absent(input)
        }
    }
}

/// Split `input` and deserialize its header.
pub fn parse(input: &str) -> Result<Frontmatter> {
    let raw = split(input);
    let data = raw.header.map(deserialize).transpose()?;
    Ok(Frontmatter::new(data, raw.body))
}

/// Deserialize a header span.
///
/// A blank header is an empty mapping. Tagged values are rejected anywhere in
/// the tree so that no type marker in a file decides what gets built.
pub fn deserialize(header: &str) -> Result<Value> {
    if header.trim().is_empty() {
        return Ok(Value::Mapping(Mapping::new()));
    }

    let value: Value = serde_yaml::from_str(header)?;
    reject_tags(&value)?;

    Ok(match value {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    })
}

/// Byte range `(line_start, after_line)` of the first line that is exactly
/// the delimiter.
fn find_closing_line(text: &str) -> Option<(usize, usize)> {
    let mut line_start = 0;
    loop {
        let newline = text[line_start..].find('\n').map(|i| line_start + i);
        let line_end = newline.unwrap_or(text.len());

        if &text[line_start..line_end] == DELIMITER {
            return Some((line_start, newline.map_or(text.len(), |i| i + 1)));
        }

        line_start = newline? + 1;
    }
}

fn reject_tags(value: &Value) -> Result<()> {
    match value {
        Value::Tagged(tagged) => Err(DecantError::disallowed_tag(tagged.tag.to_string())),
        Value::Sequence(items) => items.iter().try_for_each(reject_tags),
        Value::Mapping(map) => map.iter().try_for_each(|(k, v)| {
            reject_tags(k)?;
            reject_tags(v)
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_frontmatter_and_content() {
        let parsed = parse("---\nfoo: bar\n---\nContent\n").unwrap();
        assert_eq!(parsed.data(), Some(&yaml("foo: bar")));
        assert_eq!(parsed.body(), "Content\n");
    }

    #[test]
    fn test_content_with_horizontal_rule_is_kept() {
        let parsed = parse("---\nfoo: bar\n---\nContent\n---\nMore\n").unwrap();
        assert_eq!(parsed.data(), Some(&yaml("foo: bar")));
        assert_eq!(parsed.body(), "Content\n---\nMore\n");
    }

    #[test]
    fn test_frontmatter_without_content() {
        let parsed = parse("---\nfoo: bar\n---\n").unwrap();
        assert_eq!(parsed.get("foo"), Some(&Value::from("bar")));
        assert_eq!(parsed.body(), "");
    }

    #[test]
    fn test_sequence_frontmatter_is_valid() {
        let parsed = parse("---\n- foo\n- bar\n---\n").unwrap();
        assert_eq!(parsed.data(), Some(&yaml("[foo, bar]")));
        assert_eq!(parsed.get("foo"), None);
        assert_eq!(parsed.body(), "");
    }

    #[test]
    fn test_empty_frontmatter_is_empty_mapping() {
        let parsed = parse("---\n---\nContent\n").unwrap();
        assert_eq!(parsed.data(), Some(&Value::Mapping(Mapping::new())));
        assert_eq!(parsed.body(), "Content\n");

        let parsed = parse("---\n---").unwrap();
        assert_eq!(parsed.data(), Some(&Value::Mapping(Mapping::new())));
        assert_eq!(parsed.body(), "");

        let parsed = parse("---\n\n---\ncontent").unwrap();
        assert!(parsed.has_frontmatter());
        assert!(!parsed.has_key("title"));
    }

    #[test]
    fn test_no_frontmatter() {
        for input in [
            "Content",
            "--- Content",
            "",
            "Foo\n---\nBar\n---\nBaz\n",
            "foo: bar\n---\nContent\n",
            "---\nfoo: bar\n",
            "---\n",
            "---",
            "---\r\nfoo: bar\r\n---\r\n",
        ] {
            let raw = split(input);
            assert_eq!(raw.header, None, "input: {input:?}");
            assert_eq!(raw.body, input);

            let parsed = parse(input).unwrap();
            assert!(!parsed.has_frontmatter());
            assert_eq!(parsed.body(), input);
        }
    }

    #[test]
    fn test_split_spans() {
        let raw = split("---\ntitle: Hi\ntags: [a]\n---\nbody\n---\n");
        assert_eq!(raw.header, Some("title: Hi\ntags: [a]\n"));
        assert_eq!(raw.body, "body\n---\n");
    }

    #[test]
    fn test_closing_line_must_be_exact() {
        let raw = split("---\na: 1\n----\n--- \n---\nbody");
        assert_eq!(raw.header, Some("a: 1\n----\n--- \n"));
        assert_eq!(raw.body, "body");
    }

    #[test]
    fn test_body_preserves_line_endings() {
        let raw = split("---\na: 1\n---\r\nbody\r\n");
        // `---\r` is not a delimiter line
        assert_eq!(raw.header, None);

        let raw = split("---\na: 1\n---\nline\r\n\r\nend");
        assert_eq!(raw.body, "line\r\n\r\nend");
    }

    #[test]
    fn test_resplitting_body_finds_no_header() {
        for input in [
            "---\nfoo: bar\n---\nContent\n---\nMore\n",
            "---\n---\n",
            "---\na: 1\n---\nx\n",
        ] {
            let first = split(input);
            assert!(first.header.is_some());
            assert_eq!(split(first.body).header, None);
        }

        // unless the body independently opens a header
        let first = split("---\na: 1\n---\n---\nb: 2\n---\n");
        assert_eq!(split(first.body).header, Some("b: 2\n"));
    }

    #[test]
    fn test_permitted_value_types() {
        let input = "---
array:
- a
- b
- c
boolean_false: false
boolean_true: true
date: 2025-08-14
float: 2.5
hash:
  foo:
    bar: baz
integer: 123
nil: null
string: hello
time: 2025-08-14T20:27:36+01:00
---
";
        let parsed = parse(input).unwrap();
        assert_eq!(parsed.get("array"), Some(&yaml("[a, b, c]")));
        assert_eq!(parsed.get("boolean_false"), Some(&Value::Bool(false)));
        assert_eq!(parsed.get("boolean_true"), Some(&Value::Bool(true)));
        assert_eq!(parsed.get("date"), Some(&Value::from("2025-08-14")));
        assert_eq!(parsed.get("float"), Some(&Value::from(2.5)));
        assert_eq!(parsed.get("hash"), Some(&yaml("foo: {bar: baz}")));
        assert_eq!(parsed.get("integer"), Some(&Value::from(123)));
        assert_eq!(parsed.get("nil"), Some(&Value::Null));
        assert_eq!(parsed.get("string"), Some(&Value::from("hello")));
        assert_eq!(
            parsed.get("time"),
            Some(&Value::from("2025-08-14T20:27:36+01:00"))
        );
    }

    #[test]
    fn test_tagged_value_is_rejected() {
        let input = "---\nrange: !custom/range\n  begin: 0\n  end: 42\n  excl: false\n---\n";
        let err = parse(input).unwrap_err();
        assert!(matches!(err, DecantError::DisallowedTag { .. }));

        let nested = "---\nitems:\n  - !custom 1\n---\n";
        assert!(matches!(
            parse(nested).unwrap_err(),
            DecantError::DisallowedTag { .. }
        ));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let err = parse("---\nfoo: [bar\n---\nbody").unwrap_err();
        assert!(matches!(err, DecantError::Frontmatter(_)));
    }

    #[test]
    fn test_deserialize_is_deterministic() {
        let header = "b: 2\na: 1\n";
        assert_eq!(deserialize(header).unwrap(), deserialize(header).unwrap());
    }
}
