//! Named in-memory files sent alongside a message

use std::path::Path;

use tracing::debug;

use crate::Result;

/// A file part of an outgoing message. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    name: String,
    content: Vec<u8>,
}

impl Attachment {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read a file fully into memory, named after its final path segment.
    ///
    /// Read errors are returned unchanged.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        debug!(name = %name, bytes = content.len(), "attachment loaded");
        Ok(Self::new(name, content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.name, self.content)
    }
}
