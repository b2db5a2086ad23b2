//! Document-level types.

use super::{Properties, PropertyValue, Section};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Property keys that feed the contact channel map when present as scalars.
const CHANNEL_KEYS: &[&str] = &["phone", "email", "website", "github", "linkedin", "location"];

/// A parsed CV document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Free-form front-matter properties, preserved verbatim
    pub properties: Properties,

    /// Contact block (name, optional title, contact channels)
    pub contact: ContactInfo,

    /// Ordered sections of the document
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            properties: Properties::new(),
            contact: ContactInfo::new(),
            sections: Vec::new(),
        }
    }

    /// Get the number of sections in the document.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Check if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// The contact block of a CV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Full name. Empty until a level-1 heading (or a `name` property)
    /// supplies one; a valid document has a non-empty name.
    pub name: String,

    /// Professional title, if any
    pub title: Option<String>,

    /// Contact channels, keyed by channel label (e.g. "phone", "email")
    pub channels: BTreeMap<String, String>,
}

impl ContactInfo {
    /// Create a new empty contact block.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            title: None,
            channels: BTreeMap::new(),
        }
    }

    /// Check if a name has been set.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Complete the contact block from front-matter properties.
    ///
    /// The body heading is authoritative for the name: the `name` property
    /// is used only when no heading supplied one. The `title` property and
    /// the conventional channel keys (`phone`, `email`, `website`, `github`,
    /// `linkedin`, `location`) are copied in when present as scalars.
    pub fn fill_from_properties(&mut self, properties: &Properties) {
        if self.name.is_empty() {
            if let Some(PropertyValue::Scalar(name)) = properties.get("name") {
                self.name = name.clone();
            }
        }
        if self.title.is_none() {
            if let Some(PropertyValue::Scalar(title)) = properties.get("title") {
                self.title = Some(title.clone());
            }
        }
        for key in CHANNEL_KEYS {
            if let Some(PropertyValue::Scalar(value)) = properties.get(*key) {
                self.channels.insert((*key).to_string(), value.clone());
            }
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.section_count(), 0);
        assert!(!doc.contact.has_name());
    }

    #[test]
    fn test_add_section() {
        let mut doc = Document::new();
        doc.add_section(Section::new("Experience"));
        assert_eq!(doc.section_count(), 1);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_fill_from_properties() {
        let mut props = Properties::new();
        props.insert("name".to_string(), PropertyValue::from("Jane Doe"));
        props.insert("title".to_string(), PropertyValue::from("Engineer"));
        props.insert("email".to_string(), PropertyValue::from("jane@example.com"));

        let mut contact = ContactInfo::new();
        contact.fill_from_properties(&props);
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.title.as_deref(), Some("Engineer"));
        assert_eq!(
            contact.channels.get("email").map(String::as_str),
            Some("jane@example.com")
        );
    }

    #[test]
    fn test_heading_name_wins_over_property() {
        let mut props = Properties::new();
        props.insert("name".to_string(), PropertyValue::from("Property Name"));

        let mut contact = ContactInfo::new();
        contact.name = "Heading Name".to_string();
        contact.fill_from_properties(&props);
        assert_eq!(contact.name, "Heading Name");
    }

    #[test]
    fn test_list_property_never_feeds_channels() {
        let mut props = Properties::new();
        props.insert(
            "email".to_string(),
            PropertyValue::from(vec!["a@x".to_string(), "b@x".to_string()]),
        );

        let mut contact = ContactInfo::new();
        contact.fill_from_properties(&props);
        assert!(contact.channels.is_empty());
    }
}
