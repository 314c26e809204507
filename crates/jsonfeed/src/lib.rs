// ABOUTME: JSON Feed (version 1) document library.
// ABOUTME: Provides the typed feed model, validating encode/decode, and feed validation.

pub mod any_string;
pub mod codec;
pub mod error;
pub mod models;
pub mod options;
pub mod validate;
pub mod wire;

pub use codec::{
    decode, decode_item, decode_str, encode, encode_string, encode_to_writer, encode_with,
};
pub use error::FeedError;
pub use models::{Attachment, Author, Feed, Hub, Item, VERSION};
pub use options::EncodeOptions;
pub use validate::{
    validate_attachment, validate_author, validate_feed, validate_hub, validate_item,
    ValidationError,
};
