//! Command-line arguments for the invidious-list binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse an Invidious instance from the terminal
#[derive(Debug, Parser)]
#[command(name = "invidious-list")]
#[command(about = "Search videos and channels through an Invidious instance", long_about = None)]
pub struct Cli {
    /// Instance URL, overrides the config file
    #[arg(short, long, global = true)]
    pub instance: Option<String>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print records as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Log requests at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search videos and channels, newest uploads first
    Search {
        /// Search terms
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// List the uploads of a channel
    Channel {
        /// Channel ID (UC...)
        channel_id: String,
    },
    /// Show a curated list such as `popular` or `trending`
    Special {
        /// List name
        name: String,
    },
    /// Dump the raw details of one video
    Video {
        /// Video ID
        video_id: String,
    },
}
