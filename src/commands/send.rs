//! Post collected text and an optional file to the webhook

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use tracing::debug;

use crate::config::resolve_webhook;
use crate::input;
use crate::message::Message;
use crate::webhook::WebhookClient;
use crate::Result;

/// Everything the send pipeline needs from the command line.
#[derive(Debug, Clone, Default)]
pub struct SendArgs {
    /// File to attach.
    pub file: Option<PathBuf>,
    /// Webhook URL; falls back to `DECHO_DISCORD_WEBHOOK` when absent or empty.
    pub webhook: Option<String>,
    /// Trailing positional words, joined by spaces.
    pub text: Vec<String>,
}

/// Run against the process stdin, read only when it is piped.
pub async fn run(args: &SendArgs) -> Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        run_with_input(args, None::<io::StdinLock<'_>>).await
    } else {
        run_with_input(args, Some(stdin.lock())).await
    }
}

/// Resolve the webhook, assemble the message, then post it exactly once.
///
/// Nothing is sent unless every earlier step succeeded.
pub async fn run_with_input<R: BufRead>(args: &SendArgs, stdin: Option<R>) -> Result<()> {
    let webhook = resolve_webhook(args.webhook.as_deref())?;
    debug!(file = ?args.file, words = args.text.len(), "collecting message");

    let text = input::collect(stdin, &args.text)?;
    let message = Message::assemble(text, args.file.as_deref())?;

    let client = WebhookClient::new(webhook)?;
    client.send(message).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_CHARACTERS, MAX_SIZE};
    use crate::{Error, ErrorKind};
    use httpmock::prelude::*;
    use std::io::Cursor;

    fn args_for(server: &MockServer) -> SendArgs {
        SendArgs {
            webhook: Some(server.url("/hook")),
            ..SendArgs::default()
        }
    }

    #[tokio::test]
    async fn piped_line_is_posted_as_json_with_newline() {
        let server = MockServer::start_async().await;

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/hook")
                .json_body(serde_json::json!({"username": "decho", "content": "hi\n"}));
            then.status(204);
        });

        run_with_input(&args_for(&server), Some(Cursor::new("hi\n")))
            .await
            .expect("sent");

        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn arguments_follow_piped_text() {
        let server = MockServer::start_async().await;

        let mock = server.mock(|when, then| {
            when.method(POST).path("/hook").json_body(serde_json::json!({
                "username": "decho",
                "content": "build ok\ndeploy done"
            }));
            then.status(204);
        });

        let mut args = args_for(&server);
        args.text = vec!["deploy".to_string(), "done".to_string()];
        run_with_input(&args, Some(Cursor::new("\x1b[32mbuild ok\x1b[0m\n")))
            .await
            .expect("sent");

        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn bad_request_returns_status_and_body() {
        let server = MockServer::start_async().await;

        server.mock(|when, then| {
            when.method(POST).path("/hook");
            then.status(400).body("invalid webhook token");
        });

        let err = run_with_input(&args_for(&server), Some(Cursor::new("hi\n")))
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("invalid webhook token"));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn long_input_is_uploaded_as_file() {
        let server = MockServer::start_async().await;

        let mock = server.mock(|when, then| {
            when.method(POST).path("/hook").is_true(|req| {
                let body = String::from_utf8_lossy(req.body().as_ref());
                body.contains(r#"filename="message.txt""#)
            });
            then.status(204);
        });

        let input = format!("{}\n", "x".repeat(MAX_CHARACTERS));
        run_with_input(&args_for(&server), Some(Cursor::new(input)))
            .await
            .expect("sent");

        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn oversized_input_sends_nothing() {
        let server = MockServer::start_async().await;

        let mock = server.mock(|when, then| {
            when.method(POST).path("/hook");
            then.status(204);
        });

        let input = "y".repeat(MAX_SIZE + 1);
        let err = run_with_input(&args_for(&server), Some(Cursor::new(input)))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MessageTooBig { .. }));
        mock.assert_calls(0);
    }

    #[tokio::test]
    async fn missing_attachment_sends_nothing() {
        let server = MockServer::start_async().await;

        let mock = server.mock(|when, then| {
            when.method(POST).path("/hook");
            then.status(204);
        });

        let dir = tempfile::tempdir().unwrap();
        let mut args = args_for(&server);
        args.file = Some(dir.path().join("absent.png"));

        let err = run_with_input(&args, Some(Cursor::new("hi\n")))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Input);
        mock.assert_calls(0);
    }
}
