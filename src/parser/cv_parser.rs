//! Markdown CV parser and document assembler.
//!
//! The parser is a state machine over trimmed, non-blank lines. Heading
//! markers encode the document hierarchy: `#` names the person, `##` opens
//! a section, `###` opens an item within the section, `####` opens a role
//! within the item, and `-`/`*` bullets attach detail strings to whatever
//! is currently open. Constructs that appear out of context are dropped
//! rather than reported; any input yields a document and validity is
//! judged separately.

use crate::frontmatter::split_front_matter;
use crate::model::{Document, Item, Role, Section};

use super::options::{DuplicateNamePolicy, OrphanPolicy, ParseOptions};

/// Markdown CV parser.
///
/// # Example
///
/// ```
/// use cvmark::CvParser;
///
/// let doc = CvParser::new().parse("# Jane Doe\n## Experience\n### Acme | Remote\n- built things\n");
/// assert_eq!(doc.contact.name, "Jane Doe");
/// assert_eq!(doc.sections[0].title, "Experience");
/// ```
pub struct CvParser {
    options: ParseOptions,
}

/// Where in the growing tree new content attaches.
///
/// Indices into the document's section/item/role vectors, resolved on each
/// use. Holding indices instead of references keeps the assembler safe
/// while the underlying vectors grow.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    section: Option<usize>,
    item: Option<usize>,
    role: Option<usize>,
}

impl CvParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a document from text.
    ///
    /// Never fails; malformed constructs are dropped and an empty or
    /// partial input produces an empty or partial document. Use
    /// [`validate`](crate::validate::validate) to judge the result.
    pub fn parse(&self, text: &str) -> Document {
        let (properties, body) = split_front_matter(text);

        let mut doc = Document::new();
        let mut cursor = Cursor::default();
        let mut name_seen = false;

        for raw in body.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix("# ") {
                self.set_name(&mut doc, rest, &mut name_seen);
            } else if let Some(rest) = line.strip_prefix("## ") {
                self.open_section(&mut doc, &mut cursor, rest);
            } else if let Some(rest) = line.strip_prefix("### ") {
                self.open_item(&mut doc, &mut cursor, rest);
            } else if let Some(rest) = line.strip_prefix("#### ") {
                self.open_role(&mut doc, &mut cursor, rest);
            } else if let Some(rest) = bullet_text(line) {
                self.push_detail(&mut doc, &cursor, rest);
            } else {
                log::debug!("skipping unrecognized line: {:?}", line);
            }
        }

        doc.contact.fill_from_properties(&properties);
        doc.properties = properties;
        doc
    }

    /// Rule 1: a level-1 heading names the person. It never opens a
    /// section; a repeat is resolved by the duplicate-name policy.
    fn set_name(&self, doc: &mut Document, text: &str, name_seen: &mut bool) {
        if *name_seen && self.options.duplicate_name_policy == DuplicateNamePolicy::KeepFirst {
            log::debug!("ignoring repeated name heading: {:?}", text);
            return;
        }
        doc.contact.name = text.trim().to_string();
        *name_seen = true;
    }

    /// Rule 2: a level-2 heading opens a new section and resets the item
    /// and role cursors.
    fn open_section(&self, doc: &mut Document, cursor: &mut Cursor, text: &str) {
        let (title, page_break) = self.strip_break_marker(text);
        let mut section = Section::new(title);
        section.page_break = page_break;
        doc.sections.push(section);
        cursor.section = Some(doc.sections.len() - 1);
        cursor.item = None;
        cursor.role = None;
    }

    /// Rule 3: a level-3 heading opens a new item in the current section.
    /// With no section open the heading is dropped, unless the orphan
    /// policy synthesizes an untitled section for it.
    fn open_item(&self, doc: &mut Document, cursor: &mut Cursor, text: &str) {
        let section_idx = match cursor.section {
            Some(idx) => idx,
            None => match self.options.orphan_item_policy {
                OrphanPolicy::Drop => {
                    log::debug!("dropping item heading outside any section: {:?}", text);
                    return;
                }
                OrphanPolicy::Synthesize => {
                    doc.sections.push(Section::default());
                    let idx = doc.sections.len() - 1;
                    cursor.section = Some(idx);
                    idx
                }
            },
        };

        let (text, page_break) = self.strip_break_marker(text);
        let (primary, primary_right) = split_labels(&text);

        let mut item = Item::new();
        item.primary = primary;
        item.primary_right = primary_right;
        item.page_break = page_break;

        let section = &mut doc.sections[section_idx];
        section.items.push(item);
        cursor.item = Some(section.items.len() - 1);
        cursor.role = None;
    }

    /// Rule 4: a level-4 heading opens a new role in the current item.
    /// Dropped when no item is open.
    fn open_role(&self, doc: &mut Document, cursor: &mut Cursor, text: &str) {
        let (Some(section_idx), Some(item_idx)) = (cursor.section, cursor.item) else {
            log::debug!("dropping role heading outside any item: {:?}", text);
            return;
        };

        let (title, date) = match text.split_once('|') {
            Some((title, date)) => (title.trim(), date.trim()),
            None => (text.trim(), ""),
        };

        let item = &mut doc.sections[section_idx].items[item_idx];
        item.roles.push(Role::new(title, date));
        cursor.role = Some(item.roles.len() - 1);
    }

    /// Rule 5: a bullet attaches its detail to the innermost open scope:
    /// the current role, else the current item, else a fresh one-detail
    /// item in the current section. With nothing open it is dropped.
    fn push_detail(&self, doc: &mut Document, cursor: &Cursor, text: &str) {
        let detail = text.trim().to_string();
        match (cursor.section, cursor.item, cursor.role) {
            (Some(s), Some(i), Some(r)) => {
                doc.sections[s].items[i].roles[r].details.push(detail);
            }
            (Some(s), Some(i), None) => {
                doc.sections[s].items[i].details.push(detail);
            }
            (Some(s), None, _) => {
                doc.sections[s].items.push(Item::with_detail(detail));
            }
            (None, ..) => {
                log::debug!("dropping bullet outside any section: {:?}", detail);
            }
        }
    }

    /// Strip the page-break marker from heading text, if present.
    ///
    /// The first occurrence of the marker is removed and the surrounding
    /// whitespace trimmed; the returned flag records whether it was there.
    fn strip_break_marker(&self, text: &str) -> (String, bool) {
        let marker = &self.options.break_marker;
        if marker.is_empty() || !text.contains(marker.as_str()) {
            return (text.trim().to_string(), false);
        }
        (text.replacen(marker.as_str(), "", 1).trim().to_string(), true)
    }
}

impl Default for CvParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split level-3 heading text into primary and right-aligned labels.
fn split_labels(text: &str) -> (Option<String>, Option<String>) {
    match text.split_once(" | ") {
        Some((left, right)) => (non_empty(left), non_empty(right)),
        None => (non_empty(text), None),
    }
}

/// Strip a bullet marker, returning the detail text.
fn bullet_text(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
