//! Records: content files read through a content type

pub mod definition;
pub mod file;

pub use definition::{Content, ContentType, ContentTypeBuilder};
pub use file::ContentFile;
