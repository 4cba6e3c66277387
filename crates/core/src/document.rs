//! The on-disk todo document.
//!
//! A todo file is a JSON array of `{ "text": string, "done": bool }`
//! records, written pretty-printed. Files are read with a JSON5 parser so
//! hand edits may use comments and trailing commas. An empty or
//! whitespace-only file is an empty list.
//!
//! ```json
//! [
//!   {
//!     "text": "Buy milk",
//!     "done": false
//!   }
//! ]
//! ```

use jot_protocol::ChecklistItem;

use crate::error::DocumentError;

/// Parses a todo document.
///
/// # Errors
///
/// Returns an error if the bytes are not UTF-8 or are not an array of
/// well-formed items. Records with unknown fields are rejected.
///
/// # Examples
///
/// ```
/// use jot_core::document::decode;
///
/// let items = decode(br#"[{"text": "Buy milk", "done": true}]"#).unwrap();
/// assert_eq!(items.len(), 1);
/// assert!(items[0].done);
///
/// assert!(decode(b"").unwrap().is_empty());
/// ```
pub fn decode(bytes: &[u8]) -> Result<Vec<ChecklistItem>, DocumentError> {
    let text = std::str::from_utf8(bytes)?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json5::from_str(text)?)
}

/// Serializes items into a todo document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(items: &[ChecklistItem]) -> Result<Vec<u8>, DocumentError> {
    let mut bytes = serde_json::to_vec_pretty(items)?;
    bytes.push(b'\n');
    Ok(bytes)
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Whatever the item text (quotes and backslashes included), writing then reading gives back the same list.
        #[test]
        fn encode_decode_is_identity(
            items in prop::collection::vec(
                (r#"[a-zA-Z0-9 .,!?'"\\/é日本-]{0,24}"#, any::<bool>()).prop_map(|(text, done)| ChecklistItem { text, done }),
                0..8,
            )
        ) {
            let bytes = encode(&items).expect("encode");
            let decoded = decode(&bytes).expect("decode");
            prop_assert_eq!(decoded, items);
        }
    }
}
