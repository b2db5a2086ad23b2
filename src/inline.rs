//! Inline markup tokenization.
//!
//! Free-text fields of a CV (detail bullets, labels, role titles, contact
//! values) may carry two span kinds: hyperlinks `[text](url)` and emphasis
//! `**text**`. [`InlineScanner`] walks a string once, left to right, and
//! produces an ordered token sequence for a rendering consumer. Malformed
//! markup simply does not match and stays plain text; there is no error
//! path.
//!
//! # Example
//!
//! ```
//! use cvmark::inline::{tokenize, InlineToken};
//!
//! let tokens = tokenize("see [docs](https://example.com) for **details**");
//! assert_eq!(tokens.len(), 4);
//! assert!(matches!(&tokens[1], InlineToken::Link { .. }));
//! assert!(matches!(&tokens[3], InlineToken::Emphasis { .. }));
//! ```

use std::ops::Range;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A unit of styled text produced by scanning free text for markup spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineToken {
    /// Unstyled text between (or outside) markup spans
    Text {
        /// The text content
        text: String,
    },

    /// An emphasized span, `**text**` in the source
    Emphasis {
        /// The emphasized text, markers stripped
        text: String,
    },

    /// A hyperlink span, `[text](url)` in the source
    Link {
        /// Display text
        text: String,
        /// Target URL
        url: String,
    },
}

impl InlineToken {
    /// Create a plain-text token.
    pub fn text(text: impl Into<String>) -> Self {
        InlineToken::Text { text: text.into() }
    }

    /// Create an emphasis token.
    pub fn emphasis(text: impl Into<String>) -> Self {
        InlineToken::Emphasis { text: text.into() }
    }

    /// Create a link token.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        InlineToken::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    /// The display text of the token, styling dropped.
    pub fn display_text(&self) -> &str {
        match self {
            InlineToken::Text { text }
            | InlineToken::Emphasis { text }
            | InlineToken::Link { text, .. } => text,
        }
    }
}

/// Scanner for inline markup spans.
///
/// Holds the two compiled span patterns. At each scan position the
/// earliest-starting match wins; when both patterns could start at the same
/// position the link pattern wins, so `**` inside a bracketed span stays
/// part of the link text rather than becoming nested emphasis.
pub struct InlineScanner {
    link: Regex,
    emphasis: Regex,
}

impl InlineScanner {
    /// Create a new scanner with the two span patterns compiled.
    pub fn new() -> Self {
        Self {
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap(),
            emphasis: Regex::new(r"\*\*([^*]+)\*\*").unwrap(),
        }
    }

    /// Tokenize one free-text string.
    ///
    /// Text before each matched span is emitted as a plain-text token, the
    /// span as its own token, and scanning resumes after the span. Trailing
    /// unmatched text becomes a final plain-text token. An input with no
    /// matches yields a single plain-text token; empty input yields an
    /// empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<InlineToken> {
        let mut tokens = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            let Some((span, token)) = self.next_span(rest) else {
                tokens.push(InlineToken::text(rest));
                break;
            };
            if span.start > 0 {
                tokens.push(InlineToken::text(&rest[..span.start]));
            }
            tokens.push(token);
            rest = &rest[span.end..];
        }
        tokens
    }

    /// Find the earliest span of either pattern, link winning a tied start.
    fn next_span(&self, text: &str) -> Option<(Range<usize>, InlineToken)> {
        let link = self.link.captures(text).and_then(|caps| {
            let m = caps.get(0)?;
            Some((m.range(), InlineToken::link(&caps[1], &caps[2])))
        });
        let emphasis = self.emphasis.captures(text).and_then(|caps| {
            let m = caps.get(0)?;
            Some((m.range(), InlineToken::emphasis(&caps[1])))
        });
        match (link, emphasis) {
            (Some(l), Some(e)) if e.0.start < l.0.start => Some(e),
            (Some(l), _) => Some(l),
            (None, e) => e,
        }
    }
}

impl Default for InlineScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize one free-text string with a fresh scanner.
///
/// Convenience wrapper around [`InlineScanner::tokenize`]. Callers
/// tokenizing many fields should build one scanner and reuse it.
pub fn tokenize(text: &str) -> Vec<InlineToken> {
    InlineScanner::new().tokenize(text)
}

/// Flatten a token sequence to display text, dropping all styling.
///
/// Links contribute their display text, emphasis its inner text.
pub fn plain_text(tokens: &[InlineToken]) -> String {
    tokens.iter().map(InlineToken::display_text).collect()
}

/// Reassemble a token sequence into its source form.
///
/// The output reproduces the scanned input verbatim: emphasis regains its
/// `**` markers and links their `[text](url)` form.
pub fn to_source(tokens: &[InlineToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            InlineToken::Text { text } => out.push_str(text),
            InlineToken::Emphasis { text } => {
                out.push_str("**");
                out.push_str(text);
                out.push_str("**");
            }
            InlineToken::Link { text, url } => {
                out.push('[');
                out.push_str(text);
                out.push_str("](");
                out.push_str(url);
                out.push(')');
            }
        }
    }
    out
}
