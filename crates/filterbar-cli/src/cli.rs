//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use filterbar_page::Sequencing;

/// Filterbar: resume-analysis filter sidebar, record server and export tool
#[derive(Parser, Debug)]
#[command(name = "filterbar", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FILTERBAR_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the rendered filter sidebar
    Render {
        /// Read the dataset from a JSON file
        #[arg(long, conflicts_with = "url")]
        dataset: Option<PathBuf>,

        /// Fetch the dataset from a running server
        #[arg(long)]
        url: Option<String>,

        /// Load/render order
        #[arg(long, default_value_t = Sequencing::default())]
        policy: Sequencing,

        /// Print the whole page instead of the sidebar only
        #[arg(long)]
        page: bool,
    },

    /// Export a collection's analysis to `<name>_analysis.json`
    Download {
        /// Collection to export
        #[arg(long)]
        collection: String,

        /// Server base URL (defaults to the configured one)
        #[arg(long)]
        url: Option<String>,

        /// Output directory (defaults to the configured one)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Configuration file helpers
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `filterbar config` actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a value by dotted key (e.g. `server.port`)
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
