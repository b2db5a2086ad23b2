//! # cvmark
//!
//! Markdown CV parsing library for Rust.
//!
//! This library parses a constrained Markdown dialect describing a
//! curriculum vitae into a structured document model, validates it, and
//! renders it to plain text or JSON.
//!
//! ## Quick Start
//!
//! ```
//! use cvmark::{parse_str, render, validate};
//!
//! fn main() -> cvmark::Result<()> {
//!     let doc = parse_str("# Jane Doe\n## Experience\n### Acme Corp | Remote\n- shipped things\n");
//!
//!     let validation = validate::validate(&doc);
//!     assert!(validation.is_valid);
//!
//!     let text = render::to_text(&doc, &render::RenderOptions::default())?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! ## Input grammar
//!
//! - Optional front matter: a leading `---` line, a key/value block, a
//!   closing `---` line. Values are scalar strings or string lists.
//! - `# Name` sets the contact name; `## Section` opens a section;
//!   `### Primary | Right` opens an item; `#### Role | Date` opens a role;
//!   `- ` or `* ` bullets attach detail strings to the innermost open scope.
//! - A `\break` marker inside a `##`/`###` heading requests a page break
//!   and is stripped from the stored title.
//! - Free text may carry `[text](url)` links and `**text**` emphasis,
//!   tokenized by [`inline`] for rendering consumers.
//!
//! Parsing is permissive: out-of-context constructs are dropped, never
//! reported, and every input yields a document. Use [`validate`] to judge
//! the result.

pub mod error;
pub mod frontmatter;
pub mod inline;
pub mod model;
pub mod parser;
pub mod render;
pub mod validate;

// Re-export commonly used types
pub use error::{Error, Result};
pub use frontmatter::split_front_matter;
pub use inline::{tokenize, InlineScanner, InlineToken};
pub use model::{ContactInfo, Document, Item, Properties, PropertyValue, Role, Section};
pub use parser::{CvParser, DuplicateNamePolicy, OrphanPolicy, ParseOptions};
pub use render::{to_json, to_text, JsonFormat, RenderOptions};
pub use validate::{validate_str, Validation};

use std::path::Path;

/// Parse CV text and return a structured document.
///
/// Parsing never fails: malformed constructs are dropped and the result
/// may be empty. Judge the result with [`validate::validate`].
///
/// # Example
///
/// ```
/// use cvmark::parse_str;
///
/// let doc = parse_str("# Jane Doe\n## Experience");
/// assert_eq!(doc.contact.name, "Jane Doe");
/// ```
pub fn parse_str(text: &str) -> Document {
    CvParser::new().parse(text)
}

/// Parse CV text with custom options.
///
/// # Example
///
/// ```
/// use cvmark::{parse_str_with_options, ParseOptions};
///
/// let options = ParseOptions::new().synthesize_orphan_items();
/// let doc = parse_str_with_options("### Acme Corp", options);
/// assert_eq!(doc.section_count(), 1);
/// ```
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Document {
    CvParser::with_options(options).parse(text)
}

/// Parse a CV file and return a structured document.
///
/// # Arguments
///
/// * `path` - Path to the Markdown CV file
///
/// # Returns
///
/// A `Result` containing the parsed `Document`, or an error if the file
/// could not be read.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_str(&text))
}

/// Parse a CV file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_str_with_options(&text, options))
}
