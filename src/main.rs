//! decho CLI - main entry point
//!
//! Pipes text (and optionally a file) into a Discord webhook.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use decho::commands::{self, SendArgs};
use decho::config::WEBHOOK_ENV;

#[derive(Parser)]
#[command(name = "decho")]
#[command(about = "Echo text and files into a Discord channel via webhook", long_about = None)]
#[command(version)]
#[command(after_help = "Usage: decho -f <file> -w <webhook> <text>\n\
Pipe Usage: <command> | decho -f <file> -w <webhook>")]
struct Cli {
    /// Path to file (empty means no file)
    #[arg(short, long)]
    file: Option<String>,

    /// Discord webhook URL
    #[arg(short, long, env = WEBHOOK_ENV, hide_env_values = true)]
    webhook: Option<String>,

    /// Message text, joined by spaces after any piped input
    #[arg(trailing_var_arg = true)]
    text: Vec<String>,
}

impl From<Cli> for SendArgs {
    fn from(cli: Cli) -> Self {
        SendArgs {
            file: cli.file.filter(|f| !f.is_empty()).map(PathBuf::from),
            webhook: cli.webhook,
            text: cli.text,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    // Initialize logging; stdout is left alone for pipelines
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("decho=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = SendArgs::from(Cli::parse());
    commands::send_run(&args).await?;

    Ok(())
}
