//! invidious-list - command-line front-end for the Invidious list client.
//!
//! Loads configuration, runs one request and prints the resulting records.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use invidious_list::config::Config;
use invidious_list::{InvidiousClient, ListItem};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let instance = cli.instance.as_deref().unwrap_or(&config.instance_url);
    let client = InvidiousClient::with_localizer(instance, config.string_table())
        .with_context(|| format!("Failed to create client for {}", instance))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let items = match &cli.command {
        Commands::Search { terms } => client
            .search(terms.as_slice())
            .with_context(|| format!("Search for {:?} failed", terms.join(" ")))?,
        Commands::Channel { channel_id } => client
            .fetch_channel_list(channel_id)
            .with_context(|| format!("Failed to fetch channel {}", channel_id))?,
        Commands::Special { name } => client
            .fetch_special_list(name)
            .with_context(|| format!("Failed to fetch list {}", name))?,
        Commands::Video { video_id } => {
            let details = client
                .fetch_video_information(video_id)
                .with_context(|| format!("Failed to fetch video {}", video_id))?;
            writeln!(out, "{}", serde_json::to_string_pretty(&details)?)?;
            return Ok(());
        }
    };

    let mut count = 0usize;
    for item in items {
        if cli.json {
            writeln!(out, "{}", serde_json::to_string(&item)?)?;
        } else {
            writeln!(out, "{}", render_item(&item))?;
        }
        count += 1;
    }
    tracing::info!(count, "listed records");

    Ok(())
}

/// Install the fmt subscriber, honouring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// One human-readable block per record.
fn render_item(item: &ListItem) -> String {
    match item {
        ListItem::Video(video) => format!(
            "[video] {}\n  {} | {} views | {}\n  id: {}\n  thumb: {}",
            video.title,
            video.author,
            video.format_views(),
            video.format_date(),
            video.video_id,
            video.thumbnail_url
        ),
        ListItem::Channel(channel) => format!(
            "[channel] {}{}\n  {} subscribers\n  id: {}\n  avatar: {}",
            channel.name,
            if channel.verified { " ✓" } else { "" },
            channel.format_subscribers(),
            channel.channel_id,
            channel.thumbnail_url
        ),
    }
}
