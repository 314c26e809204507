// ABOUTME: Structural validation for JSON Feed version 1 documents.
// ABOUTME: Reports the first violated rule; sub-objects can be checked on their own.

use crate::models::{Attachment, Author, Feed, Hub, Item};
use std::collections::HashSet;
use thiserror::Error;

/// A single JSON Feed rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("jsonfeed: no version")]
    MissingVersion,

    #[error("jsonfeed: no title")]
    MissingTitle,

    #[error("jsonfeed: duplicate id {0}")]
    DuplicateId(String),

    #[error("jsonfeed: author has no name, url or avatar")]
    EmptyAuthor,

    #[error("jsonfeed: no type in hub")]
    HubMissingType,

    #[error("jsonfeed: no url in hub")]
    HubMissingUrl,

    #[error("jsonfeed: no id in item")]
    ItemMissingId,

    #[error("jsonfeed: no content_html or content_text in item {0}")]
    ItemMissingContent(String),

    #[error("jsonfeed: no url in attachment")]
    AttachmentMissingUrl,

    #[error("jsonfeed: no mime_type in attachment")]
    AttachmentMissingMimeType,
}

/// Checks a whole feed.
///
/// Hubs and items are checked before the feed's own fields, so a broken
/// item is reported ahead of a missing title.
pub fn validate_feed(feed: &Feed) -> Result<(), ValidationError> {
    for hub in &feed.hubs {
        validate_hub(hub)?;
    }
    for item in &feed.items {
        validate_item(item)?;
    }

    if feed.version.is_empty() {
        return Err(ValidationError::MissingVersion);
    }
    if feed.title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    let mut ids = HashSet::with_capacity(feed.items.len());
    for item in &feed.items {
        if !ids.insert(item.id.as_str()) {
            return Err(ValidationError::DuplicateId(item.id.clone()));
        }
    }

    if let Some(author) = &feed.author {
        validate_author(author)?;
    }
    Ok(())
}

pub fn validate_hub(hub: &Hub) -> Result<(), ValidationError> {
    if hub.hub_type.is_empty() {
        return Err(ValidationError::HubMissingType);
    }
    if hub.url.is_empty() {
        return Err(ValidationError::HubMissingUrl);
    }
    Ok(())
}

/// Checks one item, including its attachments and author.
pub fn validate_item(item: &Item) -> Result<(), ValidationError> {
    if item.id.is_empty() {
        return Err(ValidationError::ItemMissingId);
    }
    if item.content_html.is_empty() && item.content_text.is_empty() {
        return Err(ValidationError::ItemMissingContent(item.id.clone()));
    }
    for attachment in &item.attachments {
        validate_attachment(attachment)?;
    }
    if let Some(author) = &item.author {
        validate_author(author)?;
    }
    Ok(())
}

pub fn validate_attachment(attachment: &Attachment) -> Result<(), ValidationError> {
    if attachment.url.is_empty() {
        return Err(ValidationError::AttachmentMissingUrl);
    }
    if attachment.mime_type.is_empty() {
        return Err(ValidationError::AttachmentMissingMimeType);
    }
    Ok(())
}

/// An author must carry at least one of name, url or avatar.
pub fn validate_author(author: &Author) -> Result<(), ValidationError> {
    if author.is_empty() {
        return Err(ValidationError::EmptyAuthor);
    }
    Ok(())
}
