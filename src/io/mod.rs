pub mod collection;
pub mod fs;

pub use collection::Collection;
pub use fs::{read_file, ReaderConfig};
