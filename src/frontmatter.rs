//! Front-matter detection and splitting.
//!
//! A document may begin with a key/value block delimited by `---` lines:
//!
//! ```text
//! ---
//! name: Jane Doe
//! email: jane@example.com
//! ---
//! # Jane Doe
//! ```
//!
//! The block between the delimiters is decoded into a [`Properties`] map;
//! the rest of the text is the body. Splitting never fails: a missing
//! delimiter or an undecodable block degrades to an empty map with the
//! body still available for parsing.

use crate::model::Properties;

/// The front-matter delimiter line.
const DELIMITER: &str = "---";

/// Split optional front matter off the start of a document.
///
/// Returns the decoded properties and the trimmed remaining body. If the
/// first line is not exactly `---`, or no closing `---` line follows, the
/// whole input is treated as body and the properties map is empty. A block
/// that fails to decode also yields an empty map; the body is unaffected.
///
/// The returned body is a subslice of the input; no text is copied.
pub fn split_front_matter(text: &str) -> (Properties, &str) {
    let Some(after_open) = strip_delimiter_line(text) else {
        return (Properties::new(), text);
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == DELIMITER {
            let block = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return (decode_properties(block), body.trim());
        }
        offset += line.len();
    }

    // No closing delimiter: the whole input is body.
    (Properties::new(), text)
}

/// Strip an opening `---` line at position 0, returning the text after it.
fn strip_delimiter_line(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(DELIMITER)?;
    rest.strip_prefix('\n')
        .or_else(|| rest.strip_prefix("\r\n"))
}

/// Decode a front-matter block, degrading to an empty map on failure.
fn decode_properties(block: &str) -> Properties {
    match serde_yaml::from_str(block) {
        Ok(properties) => properties,
        Err(e) => {
            log::debug!("front matter did not decode, ignoring it: {}", e);
            Properties::new()
        }
    }
}
