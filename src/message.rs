//! Assemble the outbound message
//!
//! Text longer than [`MAX_CHARACTERS`] cannot be posted as a plain message,
//! so it moves into a `message.txt` attachment. An explicit file is always
//! appended after that overflow attachment.

use std::path::Path;

use tracing::{debug, info};

use crate::attachment::Attachment;
use crate::config::{MAX_CHARACTERS, MAX_SIZE, OVERFLOW_FILE_NAME};
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    text: String,
    attachments: Vec<Attachment>,
}

impl Message {
    /// Route `text` by size and attach the file at `file`, if any.
    /// An empty path counts as no file.
    ///
    /// Fails before anything is sent when the text exceeds [`MAX_SIZE`] bytes
    /// or the file cannot be read.
    pub fn assemble(text: String, file: Option<&Path>) -> Result<Self> {
        let mut message = Self::default();

        let chars = text.chars().count();
        if chars > MAX_CHARACTERS {
            if text.len() > MAX_SIZE {
                return Err(Error::MessageTooBig {
                    bytes: text.len(),
                    limit: MAX_SIZE,
                });
            }
            info!(chars, "message too long, sending as {}", OVERFLOW_FILE_NAME);
            message
                .attachments
                .push(Attachment::new(OVERFLOW_FILE_NAME, text.into_bytes()));
        } else {
            message.text = text;
        }

        if let Some(path) = file.filter(|p| !p.as_os_str().is_empty()) {
            message.attachments.push(Attachment::from_path(path)?);
        }

        debug!(
            text_chars = message.text.chars().count(),
            attachments = message.attachments.len(),
            "message assembled"
        );
        Ok(message)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<Attachment>) {
        (self.text, self.attachments)
    }
}
