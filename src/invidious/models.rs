//! Invidious API models and list records.
//!
//! Contains the raw shapes of search, channel and special-list items as
//! Invidious returns them, and the flat records handed to the list view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Thumbnail quality picked for video entries.
///
/// "high" is roughly 480x360, which looks fine on a 1080p screen.
pub const PREFERRED_QUALITY: &str = "high";

/// A video entry ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoItem {
    /// Invidious/YouTube video ID
    pub video_id: String,
    /// Video title
    pub title: String,
    /// Channel name
    pub author: String,
    /// Video description, or the host's default text when absent
    pub description: String,
    /// Selected thumbnail URL
    pub thumbnail_url: String,
    /// View count
    pub view_count: u64,
    /// Publish time as unix seconds
    pub published: i64,
}

impl VideoItem {
    /// Published time as a UTC datetime, if the timestamp is in range.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.published, 0)
    }

    /// Format view count with K/M suffixes.
    ///
    /// # Returns
    /// * `String` - Formatted view count
    pub fn format_views(&self) -> String {
        format_count(self.view_count)
    }

    /// Format published date as a readable string.
    ///
    /// # Returns
    /// * `String` - Formatted date string (e.g., "Mon. 15.01.2024"), empty if out of range
    pub fn format_date(&self) -> String {
        self.published_at()
            .map(|d| d.format("%a. %d.%m.%Y").to_string())
            .unwrap_or_default()
    }
}

/// A channel entry ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelItem {
    /// Channel ID
    pub channel_id: String,
    /// Avatar URL, always absolute
    pub thumbnail_url: String,
    /// Channel name
    pub name: String,
    /// Channel description
    pub description: String,
    /// Whether the channel is verified
    pub verified: bool,
    /// Subscriber count
    pub sub_count: u64,
}

impl ChannelItem {
    pub fn format_subscribers(&self) -> String {
        format_count(self.sub_count)
    }
}

/// One record of a result list, tagged with its `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ListItem {
    Video(VideoItem),
    Channel(ChannelItem),
}

impl ListItem {
    /// The `type` tag of this record.
    pub fn kind(&self) -> &'static str {
        match self {
            ListItem::Video(_) => "video",
            ListItem::Channel(_) => "channel",
        }
    }
}

/// Video thumbnail descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiVideoThumbnail {
    /// Quality label ("maxres", "high", "medium", ...)
    pub quality: String,
    pub url: String,
}

/// Channel avatar descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiAuthorThumbnail {
    pub url: String,
    #[serde(default)]
    pub height: u32,
}

/// Raw `type: "video"` item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVideo {
    pub video_id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_thumbnails: Vec<ApiVideoThumbnail>,
    pub view_count: u64,
    pub published: i64,
}

/// Raw `type: "channel"` item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiChannel {
    pub author_id: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author_thumbnails: Vec<ApiAuthorThumbnail>,
    #[serde(default)]
    pub author_verified: bool,
    pub sub_count: u64,
}

/// Pick the thumbnail tagged with `PREFERRED_QUALITY`.
///
/// Falls back to the last entry, which is usually the lowest quality.
pub fn select_video_thumbnail(thumbnails: &[ApiVideoThumbnail]) -> Option<&str> {
    thumbnails
        .iter()
        .find(|t| t.quality == PREFERRED_QUALITY)
        .or_else(|| thumbnails.last())
        .map(|t| t.url.as_str())
}

/// Pick the tallest avatar and make its URL absolute.
///
/// Invidious usually tops out at 512x512. On equal heights the first one wins.
pub fn select_channel_avatar(thumbnails: &[ApiAuthorThumbnail]) -> Option<String> {
    let best = thumbnails
        .iter()
        .rev()
        .max_by_key(|t| t.height)?;
    Some(absolute_url(&best.url))
}

/// Prefix `https:` to scheme-relative URLs (`//host/path`).
pub fn absolute_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url.to_string()
    }
}

impl ApiVideo {
    /// Convert into a display record.
    ///
    /// # Arguments
    /// * `default_description` - Text used when the item has no description
    pub fn into_item(self, default_description: &str) -> VideoItem {
        let thumbnail_url = select_video_thumbnail(&self.video_thumbnails)
            .unwrap_or_default()
            .to_string();
        VideoItem {
            video_id: self.video_id,
            title: self.title,
            author: self.author,
            description: self
                .description
                .unwrap_or_else(|| default_description.to_string()),
            thumbnail_url,
            view_count: self.view_count,
            published: self.published,
        }
    }
}

impl From<ApiChannel> for ChannelItem {
    fn from(channel: ApiChannel) -> Self {
        let thumbnail_url = select_channel_avatar(&channel.author_thumbnails).unwrap_or_default();
        ChannelItem {
            channel_id: channel.author_id,
            thumbnail_url,
            name: channel.author,
            description: channel.description,
            verified: channel.author_verified,
            sub_count: channel.sub_count,
        }
    }
}

fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb(quality: &str, url: &str) -> ApiVideoThumbnail {
        ApiVideoThumbnail {
            quality: quality.to_string(),
            url: url.to_string(),
        }
    }

    fn avatar(height: u32, url: &str) -> ApiAuthorThumbnail {
        ApiAuthorThumbnail {
            url: url.to_string(),
            height,
        }
    }

    #[test]
    fn test_video_thumbnail_prefers_high() {
        let thumbs = vec![
            thumb("maxres", "https://i/maxres.jpg"),
            thumb("high", "https://i/high.jpg"),
            thumb("medium", "https://i/medium.jpg"),
            thumb("default", "https://i/default.jpg"),
        ];
        assert_eq!(select_video_thumbnail(&thumbs), Some("https://i/high.jpg"));
    }

    #[test]
    fn test_video_thumbnail_falls_back_to_last() {
        let thumbs = vec![
            thumb("maxres", "https://i/maxres.jpg"),
            thumb("medium", "https://i/medium.jpg"),
            thumb("start", "https://i/start.jpg"),
        ];
        assert_eq!(select_video_thumbnail(&thumbs), Some("https://i/start.jpg"));
        assert_eq!(select_video_thumbnail(&[]), None);
    }

    #[test]
    fn test_channel_avatar_tallest_and_absolute() {
        let avatars = vec![
            avatar(32, "//yt3.ggpht.com/a=s32"),
            avatar(512, "//yt3.ggpht.com/a=s512"),
            avatar(176, "//yt3.ggpht.com/a=s176"),
        ];
        assert_eq!(
            select_channel_avatar(&avatars).as_deref(),
            Some("https://yt3.ggpht.com/a=s512")
        );
    }

    #[test]
    fn test_channel_avatar_keeps_absolute_url() {
        let avatars = vec![avatar(100, "https://cdn.example/a.jpg")];
        assert_eq!(
            select_channel_avatar(&avatars).as_deref(),
            Some("https://cdn.example/a.jpg")
        );
        assert_eq!(select_channel_avatar(&[]), None);
    }

    #[test]
    fn test_channel_avatar_tie_takes_first() {
        let avatars = vec![avatar(88, "//a/first"), avatar(88, "//a/second")];
        assert_eq!(
            select_channel_avatar(&avatars).as_deref(),
            Some("https://a/first")
        );
    }

    #[test]
    fn test_video_uses_default_description() {
        let video = ApiVideo {
            video_id: "abc".to_string(),
            title: "Title".to_string(),
            author: "Author".to_string(),
            description: None,
            video_thumbnails: vec![thumb("high", "h.jpg")],
            view_count: 1500,
            published: 1_705_276_800,
        };
        let item = video.into_item("nothing here");
        assert_eq!(item.description, "nothing here");
        assert_eq!(item.thumbnail_url, "h.jpg");
        assert_eq!(item.format_views(), "1.5K");
        assert_eq!(item.format_date(), "Mon. 15.01.2024");
    }

    #[test]
    fn test_list_item_serializes_type_tag() {
        let item = ListItem::Channel(ChannelItem {
            channel_id: "UC1".to_string(),
            thumbnail_url: String::new(),
            name: "Chan".to_string(),
            description: String::new(),
            verified: true,
            sub_count: 2_500_000,
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "channel");
        assert_eq!(json["channel_id"], "UC1");
        assert_eq!(item.kind(), "channel");
        if let ListItem::Channel(c) = &item {
            assert_eq!(c.format_subscribers(), "2.5M");
        }
    }
}
