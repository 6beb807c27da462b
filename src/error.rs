//! Error types for decho

use reqwest::StatusCode;
use thiserror::Error;

/// Coarse classification of every [`Error`], so callers can branch
/// without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or unusable configuration (no webhook).
    Config,
    /// Unreadable stdin or file, or a message that cannot be sent at all.
    Input,
    /// Network failure or a non-204 answer from the webhook.
    Transport,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("no webhook provided")]
    NoWebhook,

    #[error("message too big to send: {bytes} bytes exceeds the {limit} byte limit")]
    MessageTooBig { bytes: usize, limit: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("request failed")]
    Http(#[from] reqwest::Error),

    #[error("Discord returned status: {status}, message: {body}")]
    Status { status: StatusCode, body: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoWebhook => ErrorKind::Config,
            Error::MessageTooBig { .. } | Error::Io(_) => ErrorKind::Input,
            Error::Http(_) | Error::Status { .. } => ErrorKind::Transport,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
