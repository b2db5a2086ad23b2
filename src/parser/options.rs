//! Parsing options and configuration.

/// Default page-break marker recognized inside heading text.
const DEFAULT_BREAK_MARKER: &str = "\\break";

/// Options for parsing Markdown CV documents.
///
/// The defaults implement the canonical grammar; the policy knobs preserve
/// the behavior of the earlier, stricter-or-looser dialects for callers
/// that depend on it.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// What to do with an item heading that appears outside any section
    pub orphan_item_policy: OrphanPolicy,

    /// What to do when a second name heading appears
    pub duplicate_name_policy: DuplicateNamePolicy,

    /// Marker substring in heading text that requests a page break
    pub break_marker: String,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the orphan item policy.
    pub fn with_orphan_item_policy(mut self, policy: OrphanPolicy) -> Self {
        self.orphan_item_policy = policy;
        self
    }

    /// Synthesize an untitled section for item headings outside any section.
    pub fn synthesize_orphan_items(mut self) -> Self {
        self.orphan_item_policy = OrphanPolicy::Synthesize;
        self
    }

    /// Set the duplicate name policy.
    pub fn with_duplicate_name_policy(mut self, policy: DuplicateNamePolicy) -> Self {
        self.duplicate_name_policy = policy;
        self
    }

    /// Keep the first name heading instead of the last.
    pub fn keep_first_name(mut self) -> Self {
        self.duplicate_name_policy = DuplicateNamePolicy::KeepFirst;
        self
    }

    /// Set the page-break marker substring.
    pub fn with_break_marker(mut self, marker: impl Into<String>) -> Self {
        self.break_marker = marker.into();
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            orphan_item_policy: OrphanPolicy::Drop,
            duplicate_name_policy: DuplicateNamePolicy::Overwrite,
            break_marker: DEFAULT_BREAK_MARKER.to_string(),
        }
    }
}

/// How to treat an item heading with no open section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Drop the heading silently
    #[default]
    Drop,
    /// Open an implicit untitled section to hold it
    Synthesize,
}

/// How to treat a second name heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateNamePolicy {
    /// Last write wins
    #[default]
    Overwrite,
    /// Keep the first name seen
    KeepFirst,
}
