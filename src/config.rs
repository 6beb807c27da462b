//! Limits and webhook resolution
//!
//! Discord caps a plain message at 2000 characters and an upload at 8 MiB;
//! the webhook comes from `-w` or from the environment.

use std::env;

use tracing::debug;

use crate::{Error, Result};

/// Discord message limit, in characters.
pub const MAX_CHARACTERS: usize = 2000;

/// Discord file limit, in bytes.
pub const MAX_SIZE: usize = 8 * 1024 * 1024;

/// Name the webhook posts under.
pub const USERNAME: &str = "decho";

/// Attachment name used when the text is too long for a plain message.
pub const OVERFLOW_FILE_NAME: &str = "message.txt";

/// Fallback source for the webhook URL.
pub const WEBHOOK_ENV: &str = "DECHO_DISCORD_WEBHOOK";

/// Resolve the webhook URL: explicit argument first, then `DECHO_DISCORD_WEBHOOK`.
///
/// The URL is not validated here; a malformed one fails at send time.
pub fn resolve_webhook(webhook_from_arg: Option<&str>) -> Result<String> {
    resolve_webhook_with(webhook_from_arg, |key| env::var(key).ok())
}

/// Same as [`resolve_webhook`] with an injectable environment lookup.
pub fn resolve_webhook_with<F>(webhook_from_arg: Option<&str>, lookup: F) -> Result<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    if let Some(webhook) = webhook_from_arg.filter(|w| !w.is_empty()) {
        debug!("webhook taken from argument");
        return Ok(webhook.to_string());
    }

    match lookup(WEBHOOK_ENV).filter(|w| !w.is_empty()) {
        Some(webhook) => {
            debug!(var = WEBHOOK_ENV, "webhook taken from environment");
            Ok(webhook)
        }
        None => Err(Error::NoWebhook),
    }
}
