//! Discord incoming-webhook client
//!
//! A message without attachments is posted as JSON; anything with
//! attachments goes out as `multipart/form-data`. Discord answers a
//! successful webhook post with 204 No Content.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::USERNAME;
use crate::message::Message;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
    url: String,
}

#[derive(Debug, Serialize)]
struct TextPayload<'a> {
    username: &'a str,
    content: &'a str,
}

impl WebhookClient {
    pub fn new<S: Into<String>>(url: S) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("decho/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post `message` once, picking the encoding from its attachments.
    pub async fn send(&self, message: Message) -> Result<()> {
        if message.has_attachments() {
            self.send_with_files(message).await
        } else {
            self.send_text(message.text()).await
        }
    }

    /// JSON post of `{"username": "decho", "content": text}`.
    pub async fn send_text(&self, text: &str) -> Result<()> {
        info!(chars = text.chars().count(), "posting text message");

        let response = self
            .http
            .post(&self.url)
            .json(&TextPayload {
                username: USERNAME,
                content: text,
            })
            .send()
            .await?;

        check_status(response).await
    }

    /// Multipart post with a `content` field and one `file` part per attachment, in order.
    pub async fn send_with_files(&self, message: Message) -> Result<()> {
        let (text, attachments) = message.into_parts();
        info!(attachments = attachments.len(), "posting message with files");

        let mut form = Form::new().text("content", text);
        for attachment in attachments {
            let (name, content) = attachment.into_parts();
            let part = Part::bytes(content)
                .file_name(name)
                .mime_str("application/octet-stream")?;
            form = form.part("file", part);
        }

        let response = self.http.post(&self.url).multipart(form).send().await?;

        check_status(response).await
    }
}

async fn check_status(response: Response) -> Result<()> {
    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        return Ok(());
    }

    let body = response.text().await?;
    warn!(%status, "webhook rejected message");
    Err(Error::Status { status, body })
}
