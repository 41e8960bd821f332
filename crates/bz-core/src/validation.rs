use serde::{Deserialize, Serialize};

use crate::accept::AcceptList;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// What the widget knows about a candidate file before reading it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    /// Browser-reported MIME type; empty when the browser could not tell.
    #[serde(default)]
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("File size must be less than {max_size_mb}MB")]
    TooLarge { max_size_mb: f64 },
    #[error("Invalid file type")]
    InvalidType,
}

/// Size ceiling and accepted types for one upload widget.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRules {
    pub accept: AcceptList,
    pub max_size_mb: f64,
}

impl Default for UploadRules {
    fn default() -> Self {
        Self {
            accept: AcceptList::parse("image/*"),
            max_size_mb: 10.0,
        }
    }
}

impl UploadRules {
    pub fn new(accept: &str, max_size_mb: f64) -> Self {
        Self {
            accept: AcceptList::parse(accept),
            max_size_mb,
        }
    }

    pub fn max_size_bytes(&self) -> f64 {
        self.max_size_mb * BYTES_PER_MB
    }

    /// Size is checked before type, so an oversized file of the wrong type
    /// reports the size message.
    pub fn validate(&self, file: &FileMeta) -> Result<(), ValidationError> {
        if file.size as f64 > self.max_size_bytes() {
            return Err(ValidationError::TooLarge {
                max_size_mb: self.max_size_mb,
            });
        }
        if !self.accept.accepts(&file.name, &file.mime) {
            return Err(ValidationError::InvalidType);
        }
        Ok(())
    }
}
