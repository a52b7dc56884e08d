use crate::error::{DecantError, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Limits applied when reading content files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Maximum file size to read (in bytes)
    pub max_file_size: Option<u64>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: Some(10 * 1024 * 1024), // 10MB default limit
        }
    }
}

impl ReaderConfig {
    /// A config without any size limit
    pub fn unlimited() -> Self {
        Self {
            max_file_size: None,
        }
    }
}

/// Read a whole file as UTF-8, honouring the size limit.
pub fn read_file(path: &Path, config: &ReaderConfig) -> Result<String> {
    if let Some(limit) = config.max_file_size {
        let size = fs::metadata(path)?.len();
        if size > limit {
            return Err(DecantError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    debug!("Reading file: {}", path.display());
    Ok(fs::read_to_string(path)?)
}
