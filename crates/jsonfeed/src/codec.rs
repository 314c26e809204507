// ABOUTME: Validating encode/decode between JSON bytes and the feed model.
// ABOUTME: Applies id coercion and date defaulting on decode, version stamping on encode.

use crate::error::FeedError;
use crate::models::{Attachment, Author, Feed, Item, VERSION};
use crate::options::EncodeOptions;
use crate::validate::{validate_feed, validate_item, ValidationError};
use crate::wire::{is_zero_date, null_as_default};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use std::io;
use tracing::{debug, trace};

/// Decodes a JSON Feed and validates it.
///
/// # Returns
/// * `Ok(Feed)` - Well-formed, valid feed
/// * `Err(FeedError::Syntax)` - Malformed JSON or a field of the wrong type
/// * `Err(FeedError::Invalid)` - Well-formed but breaks a feed rule
pub fn decode(data: &[u8]) -> Result<Feed, FeedError> {
    let feed: Feed = serde_json::from_slice(data)?;
    check(validate_feed(&feed))?;
    debug!(items = feed.items.len(), hubs = feed.hubs.len(), "decoded feed");
    Ok(feed)
}

/// Same as [`decode`], for text input.
pub fn decode_str(data: &str) -> Result<Feed, FeedError> {
    decode(data.as_bytes())
}

/// Decodes and validates a single item outside of a feed.
pub fn decode_item(data: &[u8]) -> Result<Item, FeedError> {
    let item: Item = serde_json::from_slice(data)?;
    check(validate_item(&item))?;
    Ok(item)
}

/// Encodes a feed as compact JSON.
pub fn encode(feed: &Feed) -> Result<Vec<u8>, FeedError> {
    encode_with(feed, &EncodeOptions::default())
}

/// Encodes a feed as a compact JSON string.
pub fn encode_string(feed: &Feed) -> Result<String, FeedError> {
    let feed = prepare(feed)?;
    let out = serde_json::to_string(&feed)?;
    debug!(items = feed.items.len(), "encoded feed");
    Ok(out)
}

/// Encodes a feed with the given options.
pub fn encode_with(feed: &Feed, options: &EncodeOptions) -> Result<Vec<u8>, FeedError> {
    let mut out = Vec::new();
    encode_to_writer(&mut out, feed, options)?;
    Ok(out)
}

/// Encodes a feed into `writer`.
///
/// The caller's feed is never modified: the version is stamped on a copy,
/// and the copy is validated before any byte is written.
pub fn encode_to_writer<W: io::Write>(
    writer: W,
    feed: &Feed,
    options: &EncodeOptions,
) -> Result<(), FeedError> {
    let feed = prepare(feed)?;

    let written = if options.pretty {
        serde_json::to_writer_pretty(writer, &feed)
    } else {
        serde_json::to_writer(writer, &feed)
    };
    written.map_err(FeedError::from_write)?;

    debug!(items = feed.items.len(), pretty = options.pretty, "encoded feed");
    Ok(())
}

/// Copies the feed, stamps [`VERSION`] on the copy and validates it.
fn prepare(feed: &Feed) -> Result<Feed, FeedError> {
    let mut feed = feed.clone();
    feed.version = VERSION.to_string();
    check(validate_feed(&feed))?;
    Ok(feed)
}

fn check(result: Result<(), ValidationError>) -> Result<(), FeedError> {
    result.map_err(|err| {
        debug!(error = %err, "feed failed validation");
        FeedError::Invalid(err)
    })
}

/// Plain field-by-name shape of an [`Item`] on the wire.
///
/// Serde fills this first; the conversion into `Item` then applies the
/// date defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ItemFields {
    #[serde(deserialize_with = "crate::any_string::deserialize")]
    id: String,
    #[serde(deserialize_with = "null_as_default")]
    url: String,
    #[serde(deserialize_with = "null_as_default")]
    external_url: String,
    #[serde(deserialize_with = "null_as_default")]
    title: String,
    #[serde(deserialize_with = "null_as_default")]
    content_html: String,
    #[serde(deserialize_with = "null_as_default")]
    content_text: String,
    #[serde(deserialize_with = "null_as_default")]
    summary: String,
    #[serde(deserialize_with = "null_as_default")]
    image: String,
    #[serde(deserialize_with = "null_as_default")]
    banner_image: String,
    date_published: Option<DateTime<FixedOffset>>,
    date_modified: Option<DateTime<FixedOffset>>,
    author: Option<Author>,
    #[serde(deserialize_with = "null_as_default")]
    tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    attachments: Vec<Attachment>,
}

impl From<ItemFields> for Item {
    fn from(f: ItemFields) -> Self {
        let date_published = or_now(f.date_published, "date_published");
        let date_modified = or_now(f.date_modified, "date_modified");
        Item {
            id: f.id,
            url: f.url,
            external_url: f.external_url,
            title: f.title,
            content_html: f.content_html,
            content_text: f.content_text,
            summary: f.summary,
            image: f.image,
            banner_image: f.banner_image,
            date_published,
            date_modified,
            author: f.author,
            tags: f.tags,
            attachments: f.attachments,
        }
    }
}

/// Replaces an unset or zero timestamp with the current UTC time.
fn or_now(
    date: Option<DateTime<FixedOffset>>,
    field: &'static str,
) -> Option<DateTime<FixedOffset>> {
    match date {
        Some(dt) if !is_zero_date(&dt) => Some(dt),
        _ => {
            trace!(field, "defaulting unset date to now");
            Some(Utc::now().fixed_offset())
        }
    }
}
