//! Rendering options and configuration.

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Character to use for detail bullet markers
    pub list_marker: char,

    /// Include the front-matter properties block in the output
    pub include_properties: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bullet marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable the properties block.
    pub fn with_properties(mut self, include: bool) -> Self {
        self.include_properties = include;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_marker: '-',
            include_properties: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_list_marker('*')
            .with_properties(true);

        assert_eq!(options.list_marker, '*');
        assert!(options.include_properties);
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.list_marker, '-');
        assert!(!options.include_properties);
    }
}
