//! Invidious API integration module.
//!
//! Provides the client for search, channel and curated lists, and the flat
//! records those lists are parsed into.

pub mod client;
pub mod error;
pub mod locale;
pub mod models;
pub mod parse;

pub use client::InvidiousClient;
pub use error::InvidiousError;
pub use locale::{Localize, StringTable};
pub use models::{ChannelItem, ListItem, VideoItem};
pub use parse::ListItems;
