// ABOUTME: Typed JSON Feed document model (Feed, Author, Hub, Item, Attachment).
// ABOUTME: Field names, null handling and omit rules follow the JSON Feed version 1 wire format.

use crate::wire::{null_as_default, serialize_date};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The only feed format version this crate reads and writes.
pub const VERSION: &str = "https://jsonfeed.org/version/1";

/// A JSON Feed document.
///
/// Encoding through [`crate::encode`] always stamps [`VERSION`] and validates
/// first. Serializing the struct directly with serde skips both steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub home_page_url: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub feed_url: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub user_comment: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub next_url: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub favicon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "std::ops::Not::not", deserialize_with = "null_as_default")]
    pub expired: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub hubs: Vec<Hub>,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
}

/// Author of a feed or of a single item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub avatar: String,
}

impl Author {
    /// True when name, url and avatar are all empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.url.is_empty() && self.avatar.is_empty()
    }
}

/// Real-time notification endpoint (e.g. WebSub) for a feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hub {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub hub_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// A single entry in a feed.
///
/// Deserializing an `Item` coerces a non-string `id` to its raw JSON text
/// and fills unset `date_published` / `date_modified` with the current time.
/// Unset dates are written as the zero timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "crate::codec::ItemFields")]
pub struct Item {
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub external_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_html: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub banner_image: String,
    #[serde(serialize_with = "serialize_date")]
    pub date_published: Option<DateTime<FixedOffset>>,
    #[serde(serialize_with = "serialize_date")]
    pub date_modified: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// A related resource (podcast audio, video, etc.) attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mime_type: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub size_in_bytes: u64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub duration_in_seconds: u64,
}

impl Attachment {
    /// Returns `duration_in_seconds` as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_in_seconds)
    }
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_duration_is_whole_seconds() {
        let a = Attachment {
            duration_in_seconds: 5,
            ..Default::default()
        };
        assert_eq!(a.duration(), Duration::from_secs(5));
        assert_eq!(Attachment::default().duration(), Duration::ZERO);
    }

    #[test]
    fn author_is_empty_only_when_all_fields_blank() {
        assert!(Author::default().is_empty());
        let a = Author {
            avatar: "https://example.org/a.png".to_string(),
            ..Default::default()
        };
        assert!(!a.is_empty());
    }

    #[test]
    fn optional_fields_are_omitted() {
        let att = Attachment {
            url: "https://example.org/a.mp3".to_string(),
            mime_type: "audio/mpeg".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&att).unwrap();
        assert_eq!(json, r#"{"url":"https://example.org/a.mp3","mime_type":"audio/mpeg"}"#);

        let hub = Hub {
            hub_type: "WebSub".to_string(),
            url: "https://hub.example.org/".to_string(),
        };
        let json = serde_json::to_string(&hub).unwrap();
        assert_eq!(json, r#"{"type":"WebSub","url":"https://hub.example.org/"}"#);
    }
}
