//! Plain text rendering for parsed CV documents.

use crate::error::Result;
use crate::inline::{plain_text, InlineScanner};
use crate::model::{Document, Item, PropertyValue};

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Every free-text field is flattened through the inline tokenizer, so
/// `**emphasis**` loses its markers and `[text](url)` renders as its
/// display text.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = TextRenderer::new(options.clone());
    renderer.render(doc)
}

struct TextRenderer {
    options: RenderOptions,
    scanner: InlineScanner,
}

impl TextRenderer {
    fn new(options: RenderOptions) -> Self {
        Self {
            options,
            scanner: InlineScanner::new(),
        }
    }

    fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_properties && !doc.properties.is_empty() {
            self.render_properties(&mut output, doc);
            output.push('\n');
        }

        self.render_contact(&mut output, doc);

        for section in &doc.sections {
            output.push('\n');
            output.push_str(&self.flatten(&section.title));
            output.push('\n');

            for item in &section.items {
                self.render_item(&mut output, item);
            }
        }

        Ok(output.trim().to_string())
    }

    fn render_properties(&self, output: &mut String, doc: &Document) {
        for (key, value) in &doc.properties {
            match value {
                PropertyValue::Scalar(v) => {
                    output.push_str(&format!("{}: {}\n", key, v));
                }
                PropertyValue::List(values) => {
                    output.push_str(&format!("{}: {}\n", key, values.join(", ")));
                }
            }
        }
    }

    fn render_contact(&self, output: &mut String, doc: &Document) {
        if doc.contact.has_name() {
            output.push_str(&doc.contact.name);
            output.push('\n');
        }
        if let Some(title) = &doc.contact.title {
            output.push_str(&self.flatten(title));
            output.push('\n');
        }
        for (label, value) in &doc.contact.channels {
            output.push_str(&format!("{}: {}\n", label, self.flatten(value)));
        }
    }

    fn render_item(&self, output: &mut String, item: &Item) {
        match (&item.primary, &item.primary_right) {
            (Some(primary), Some(right)) => {
                output.push_str(&format!(
                    "{} | {}\n",
                    self.flatten(primary),
                    self.flatten(right)
                ));
            }
            (Some(primary), None) => {
                output.push_str(&self.flatten(primary));
                output.push('\n');
            }
            (None, Some(right)) => {
                output.push_str(&self.flatten(right));
                output.push('\n');
            }
            (None, None) => {}
        }

        for role in &item.roles {
            if role.has_date() {
                output.push_str(&format!(
                    "{} | {}\n",
                    self.flatten(&role.title),
                    role.date
                ));
            } else {
                output.push_str(&self.flatten(&role.title));
                output.push('\n');
            }
            for detail in &role.details {
                self.render_detail(output, detail);
            }
        }

        for detail in item.flat_details() {
            self.render_detail(output, detail);
        }
    }

    fn render_detail(&self, output: &mut String, detail: &str) {
        output.push(self.options.list_marker);
        output.push(' ');
        output.push_str(&self.flatten(detail));
        output.push('\n');
    }

    fn flatten(&self, text: &str) -> String {
        plain_text(&self.scanner.tokenize(text))
    }
}
