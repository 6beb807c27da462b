//! decho library
//!
//! Echo text into a Discord channel through an incoming webhook:
//! - Collect text from piped stdin (color codes stripped) and arguments
//! - Move text over Discord's 2000 character limit into `message.txt`
//! - Attach a local file
//! - Post as JSON or multipart depending on attachments

pub mod attachment;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod message;
pub mod webhook;

// Re-export common types
pub use attachment::Attachment;
pub use error::{Error, ErrorKind, Result};
pub use message::Message;
pub use webhook::WebhookClient;
