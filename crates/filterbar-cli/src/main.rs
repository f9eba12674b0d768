//! Filterbar CLI
//!
//! Serve the record and collections, render the filter sidebar, export
//! analyses, and manage the configuration file.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use filterbar_cli::commands::{RenderSource, cmd_download, cmd_render, cmd_serve};
use filterbar_cli::config_handlers::handle_config_command;
use filterbar_cli::{Cli, Command, FilterbarConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Config { action } => handle_config_command(config_path, action)?,
        Command::Serve { port } => {
            let config = FilterbarConfig::load(config_path)?;
            cmd_serve(&config, port).await?;
        }
        Command::Render {
            dataset,
            url,
            policy,
            page,
        } => {
            let config = FilterbarConfig::load(config_path)?;
            let html = cmd_render(&config, RenderSource::from_args(dataset, url), policy, page)
                .await?;
            println!("{html}");
        }
        Command::Download {
            collection,
            url,
            out,
        } => {
            let config = FilterbarConfig::load(config_path)?;
            let saved = cmd_download(&config, &collection, url, out)
                .await
                .with_context(|| format!("Error downloading data for '{collection}'"))?;
            println!("{}", saved.location);
        }
    }

    Ok(())
}
