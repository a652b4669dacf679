//! Invidious list client.
//!
//! Fetches search results, channel uploads and curated lists from an
//! Invidious instance and flattens them into video and channel records.

pub mod config;
pub mod invidious;

pub use invidious::{ChannelItem, InvidiousClient, InvidiousError, ListItem, VideoItem};
