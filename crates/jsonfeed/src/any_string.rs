// ABOUTME: Lenient string coercion for JSON Feed item ids.
// ABOUTME: Accepts any JSON value; non-strings keep their raw source text verbatim.

use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use tracing::trace;

/// Deserializes any JSON value into a `String`.
///
/// A JSON string yields its unescaped contents and `null` yields an empty
/// string. Anything else (numbers, booleans, arrays, objects) yields the
/// value's raw text exactly as written, whitespace included.
///
/// Only works with `serde_json`'s own deserializers, since it relies on
/// [`RawValue`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    Ok(coerce(raw.get()))
}

/// Coerces one raw JSON value to a string.
pub fn coerce(raw: &str) -> String {
    match serde_json::from_str::<Option<String>>(raw) {
        Ok(Some(s)) => s,
        Ok(None) => String::new(),
        Err(_) => {
            trace!(raw, "id is not a JSON string, keeping raw text");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literal_is_unescaped() {
        assert_eq!(coerce(r#""s""#), "s");
        assert_eq!(coerce(r#""a\"b""#), "a\"b");
    }

    #[test]
    fn non_strings_keep_source_text() {
        assert_eq!(coerce("true"), "true");
        assert_eq!(coerce("12345"), "12345");
        assert_eq!(coerce("1.50"), "1.50");
        assert_eq!(coerce("[1, 2]"), "[1, 2]");
        assert_eq!(coerce(r#"{"a": 1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn null_is_empty() {
        assert_eq!(coerce("null"), "");
    }

    #[test]
    fn raw_text_survives_deserializer() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "deserialize")]
            id: String,
        }
        let w: Wrapper = serde_json::from_str(r#"{"id":   {"a":  [1,2]} }"#).unwrap();
        assert_eq!(w.id, r#"{"a":  [1,2]}"#);
    }
}
