//! Content types bound to a collection, and the records they produce
//!
//! ```rust,no_run
//! use decant::{Content, ContentType, Result};
//!
//! trait Shouty {
//!     fn shouty(&self) -> Result<Option<String>>;
//! }
//!
//! impl Shouty for Content {
//!     fn shouty(&self) -> Result<Option<String>> {
//!         let title = self.field("title")?.and_then(|v| v.as_str());
//!         Ok(title.map(|t| format!("{}!!!", t.to_uppercase())))
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let pages = ContentType::builder("content")
//!         .ext("md")
//!         .frontmatter(["title"])
//!         .build()?;
//!
//!     let about = pages.find("about")?;
//!     println!("{} {:?}", about.slug(), about.shouty()?);
//!     Ok(())
//! }
//! ```

use crate::content::file::ContentFile;
use crate::error::{DecantError, Result};
use crate::io::{Collection, ReaderConfig};
use log::debug;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
struct Definition {
    collection: Collection,
    fields: Vec<String>,
    reader: ReaderConfig,
}

/// A kind of content: a [`Collection`] plus the frontmatter fields records
/// of this type expose.
///
/// Cloning is cheap; every record keeps a handle to its type.
#[derive(Debug, Clone)]
pub struct ContentType {
    definition: Arc<Definition>,
}

/// Configuration for a [`ContentType`]
#[derive(Debug, Clone)]
pub struct ContentTypeBuilder {
    dir: PathBuf,
    ext: Option<String>,
    fields: Vec<String>,
    follow_links: bool,
    include_hidden: bool,
    reader: ReaderConfig,
}

impl ContentTypeBuilder {
    fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ext: None,
            fields: Vec::new(),
            follow_links: false,
            include_hidden: false,
            reader: ReaderConfig::default(),
        }
    }

    /// Extension specifier, e.g. `md`, `.html.erb` or `.{md,markdown}`
    pub fn ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }

    /// Declare frontmatter fields readable through [`Content::field`]
    pub fn frontmatter<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn reader_config(mut self, reader: ReaderConfig) -> Self {
        self.reader = reader;
        self
    }

    /// Compile the extension and create the content type
    pub fn build(self) -> Result<ContentType> {
        let collection = Collection::new(self.dir, self.ext.as_deref())?
            .with_follow_links(self.follow_links)
            .with_hidden(self.include_hidden);

        let mut fields = Vec::with_capacity(self.fields.len());
        for field in self.fields {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }

        Ok(ContentType {
            definition: Arc::new(Definition {
                collection,
                fields,
                reader: self.reader,
            }),
        })
    }
}

impl ContentType {
    /// Start configuring a content type rooted at `dir`
    pub fn builder(dir: impl Into<PathBuf>) -> ContentTypeBuilder {
        ContentTypeBuilder::new(dir)
    }

    /// A content type without declared fields
    pub fn new(dir: impl Into<PathBuf>, ext: Option<&str>) -> Result<Self> {
        let builder = Self::builder(dir);
        match ext {
            Some(ext) => builder.ext(ext).build(),
            None => builder.build(),
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.definition.collection
    }

    /// Declared frontmatter fields, in declaration order
    pub fn fields(&self) -> &[String] {
        &self.definition.fields
    }

    /// Every record in the collection
    pub fn all(&self) -> Result<Vec<Content>> {
        let entries = self.collection().entries()?;
        debug!(
            "Found {} entries in {}",
            entries.len(),
            self.collection().dir().display()
        );
        Ok(entries.into_iter().map(|path| self.record(path)).collect())
    }

    /// The record whose path matches `pattern` (extension appended).
    ///
    /// ```rust,no_run
    /// # fn main() -> decant::Result<()> {
    /// let pages = decant::ContentType::new("content", Some("md"))?;
    /// // content/features/nesting.md
    /// let page = pages.find("features/nesting")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn find(&self, pattern: &str) -> Result<Content> {
        match self.collection().find(pattern)? {
            Some(path) => Ok(self.record(path)),
            None => Err(DecantError::file_not_found(
                pattern,
                self.collection().dir(),
            )),
        }
    }

    /// Wrap an arbitrary path as a record of this type
    pub fn record(&self, path: impl Into<PathBuf>) -> Content {
        Content {
            file: ContentFile::with_config(path, self.definition.reader.clone()),
            definition: Arc::clone(&self.definition),
        }
    }
}

/// One content file read through its [`ContentType`].
#[derive(Debug, Clone)]
pub struct Content {
    file: ContentFile,
    definition: Arc<Definition>,
}

impl Content {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// The underlying file
    pub fn file(&self) -> &ContentFile {
        &self.file
    }

    /// The type this record belongs to
    pub fn content_type(&self) -> ContentType {
        ContentType {
            definition: Arc::clone(&self.definition),
        }
    }

    /// Path relative to the collection root, e.g. `features/slugs.md`
    pub fn relative_path(&self) -> String {
        self.definition.collection.relative_path_for(self.path())
    }

    /// Relative path without its extension, e.g. `features/slugs`
    pub fn slug(&self) -> String {
        self.definition.collection.slug_for(self.path())
    }

    pub fn read(&self) -> Result<&str> {
        self.file.read()
    }

    pub fn content(&self) -> Result<&str> {
        self.file.content()
    }

    pub fn frontmatter(&self) -> Result<Option<&Value>> {
        self.file.frontmatter()
    }

    pub fn has_frontmatter(&self) -> Result<bool> {
        self.file.has_frontmatter()
    }

    pub fn has_frontmatter_key(&self, key: &str) -> Result<bool> {
        self.file.has_frontmatter_key(key)
    }

    /// Read a declared frontmatter field.
    ///
    /// A missing header, a non-mapping header or a missing key is `Ok(None)`.
    /// Reading a field the type never declared is an error.
    pub fn field(&self, name: &str) -> Result<Option<&Value>> {
        if !self.definition.fields.iter().any(|field| field == name) {
            return Err(DecantError::undeclared_field(name));
        }
        Ok(self.file.parsed()?.get(name))
    }

    /// Every declared field with its value, in declaration order
    pub fn fields(&self) -> Result<Vec<(&str, Option<&Value>)>> {
        let parsed = self.file.parsed()?;
        Ok(self
            .definition
            .fields
            .iter()
            .map(|name| (name.as_str(), parsed.get(name)))
            .collect())
    }

    /// Deserialize the whole frontmatter into `T`, `None` without a header
    pub fn frontmatter_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        self.frontmatter()?
            .map(|value| serde_yaml::from_value(value.clone()).map_err(DecantError::from))
            .transpose()
    }
}
