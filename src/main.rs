mod cli;
mod config;
mod document;
mod error;
mod fetch;
mod format;
mod onshape;
mod orchestrator;
mod translation;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use cli::Cli;
use config::ExporterConfig;
use document::DocumentReference;
use onshape::OnshapeClient;
use orchestrator::{ExportOptions, ExportOrchestrator};
use translation::PollPolicy;
use ui::ExportProgress;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        ui::print_error(&err.to_string());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ExporterConfig::load()?;
    if config.access_key.is_empty() || config.secret_key.is_empty() {
        bail!("Missing Onshape credentials: set ONSHAPE_ACCESS_KEY and ONSHAPE_SECRET_KEY");
    }

    let link = match cli.link {
        Some(link) => link,
        None => cli::prompt_link()?,
    };
    let doc = DocumentReference::parse(&link)?;
    let format = match cli.format {
        Some(arg) => arg.into(),
        None => cli::prompt_format()?,
    };

    let out_dir = cli.out.unwrap_or_else(|| config.out_dir.clone());
    let options = ExportOptions {
        format,
        out_dir: PathBuf::from(&out_dir),
        skip_default: cli.skip_default || config.skip_default,
        first_only: cli.first_only || config.first_only,
        poll: PollPolicy {
            interval: Duration::from_millis(config.poll_interval_ms),
            max_attempts: config.max_poll_attempts,
        },
    };

    let client = OnshapeClient::with_base_url(
        config.access_key.clone(),
        config.secret_key.clone(),
        config.base_url.clone(),
    );
    let orchestrator = ExportOrchestrator::new(client, options);

    let progress = ExportProgress::start();
    match orchestrator.run(&doc, &progress).await {
        Ok(artifacts) => {
            progress.finish(artifacts.len(), &out_dir);
            Ok(())
        }
        Err(err) => {
            progress.fail(&err.to_string());
            std::process::exit(1);
        }
    }
}
