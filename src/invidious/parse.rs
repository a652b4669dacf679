//! Response dispatch on the `type` discriminator.

use crate::invidious::models::{ApiChannel, ApiVideo, ChannelItem, ListItem};
use serde_json::Value;

/// Lazy sequence of records parsed from one response.
///
/// Items are converted one at a time as the iterator is advanced.
#[derive(Debug)]
pub struct ListItems {
    raw: std::vec::IntoIter<Value>,
    default_description: String,
}

impl ListItems {
    /// Start parsing a decoded response body.
    ///
    /// # Arguments
    /// * `data` - JSON payload: a list of items, or an object wrapping one under `videos`
    /// * `default_description` - Description for videos that come without one
    ///
    /// # Details
    /// Channel pages wrap their videos in a `videos` entry; that list is
    /// unwrapped first. Any other payload shape yields nothing.
    pub fn new(data: Value, default_description: impl Into<String>) -> Self {
        let data = match data {
            Value::Object(mut map) if map.contains_key("videos") => {
                map.remove("videos").unwrap_or(Value::Null)
            }
            other => other,
        };

        let raw = match data {
            Value::Array(items) => items,
            other => {
                tracing::warn!(kind = json_kind(&other), "response is not a list of items");
                Vec::new()
            }
        };

        Self {
            raw: raw.into_iter(),
            default_description: default_description.into(),
        }
    }

    fn convert(&self, item: Value) -> Option<ListItem> {
        let kind = item.get("type").and_then(Value::as_str)?;
        match kind {
            "video" => match serde_json::from_value::<ApiVideo>(item) {
                Ok(video) => Some(ListItem::Video(video.into_item(&self.default_description))),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed video item");
                    None
                }
            },
            "channel" => match serde_json::from_value::<ApiChannel>(item) {
                Ok(channel) => Some(ListItem::Channel(ChannelItem::from(channel))),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed channel item");
                    None
                }
            },
            _ => None,
        }
    }
}

impl Iterator for ListItems {
    type Item = ListItem;

    fn next(&mut self) -> Option<ListItem> {
        loop {
            let item = self.raw.next()?;
            if let Some(parsed) = self.convert(item) {
                return Some(parsed);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.raw.size_hint().1)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
