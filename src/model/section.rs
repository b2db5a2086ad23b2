//! Section, item and role types.

use serde::{Deserialize, Serialize};

/// A top-level grouping of the CV (e.g. "Experience", "Education").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title, with any page-break marker already stripped
    pub title: String,

    /// Ordered items within the section
    pub items: Vec<Item>,

    /// Whether this section starts on a new page
    pub page_break: bool,
}

impl Section {
    /// Create a new section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            page_break: false,
        }
    }

    /// Add an item to the section.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Check if the section has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new("")
    }
}

/// One entry within a section: an employer, a school, a project.
///
/// An item either nests [`Role`]s or carries flat detail bullets. Both
/// fields may be populated transiently during parsing, but only one is
/// consumed downstream; [`Item::flat_details`] selects the right path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Primary label (e.g. the employer name)
    pub primary: Option<String>,

    /// Right-aligned companion label (e.g. a location)
    pub primary_right: Option<String>,

    /// Ordered roles held within this item
    pub roles: Vec<Role>,

    /// Detail bullets used only when no roles are present
    pub details: Vec<String>,

    /// Whether this item starts on a new page
    pub page_break: bool,
}

impl Item {
    /// Create a new empty item.
    pub fn new() -> Self {
        Self {
            primary: None,
            primary_right: None,
            roles: Vec::new(),
            details: Vec::new(),
            page_break: false,
        }
    }

    /// Create an item holding a single detail bullet and nothing else.
    pub fn with_detail(detail: impl Into<String>) -> Self {
        let mut item = Self::new();
        item.details.push(detail.into());
        item
    }

    /// Check if the item nests roles.
    pub fn has_roles(&self) -> bool {
        !self.roles.is_empty()
    }

    /// Detail bullets to render for this item.
    ///
    /// An item with roles renders through them; its own `details` field is
    /// ignored. Only role-less items expose their flat details.
    pub fn flat_details(&self) -> &[String] {
        if self.roles.is_empty() {
            &self.details
        } else {
            &[]
        }
    }

    /// Check if the item carries no labels, roles or details.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.primary_right.is_none()
            && self.roles.is_empty()
            && self.details.is_empty()
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

/// One position held within an item, with its own detail bullets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Role title (e.g. "Senior Engineer")
    pub title: String,

    /// Free-form date label; empty when absent. Never a parsed calendar
    /// value.
    pub date: String,

    /// Ordered detail bullets for this role
    pub details: Vec<String>,
}

impl Role {
    /// Create a new role with the given title and date label.
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            details: Vec::new(),
        }
    }

    /// Check if the role carries a date label.
    pub fn has_date(&self) -> bool {
        !self.date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_new() {
        let section = Section::new("Experience");
        assert_eq!(section.title, "Experience");
        assert!(section.is_empty());
        assert!(!section.page_break);
    }

    #[test]
    fn test_item_with_detail() {
        let item = Item::with_detail("shipped the thing");
        assert_eq!(item.details, vec!["shipped the thing"]);
        assert!(item.primary.is_none());
        assert!(!item.has_roles());
    }

    #[test]
    fn test_flat_details_ignored_with_roles() {
        let mut item = Item::new();
        item.details.push("transient".to_string());
        item.roles.push(Role::new("Engineer", "2020"));
        assert!(item.flat_details().is_empty());

        item.roles.clear();
        assert_eq!(item.flat_details(), ["transient".to_string()]);
    }

    #[test]
    fn test_role_date() {
        let role = Role::new("Engineer", "");
        assert!(!role.has_date());
        let role = Role::new("Engineer", "2020 - 2022");
        assert!(role.has_date());
    }
}
