//! Front-matter property types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form properties decoded from the front-matter block.
///
/// Keys are arbitrary strings; values are restricted to scalar strings or
/// ordered lists of strings. The map is preserved verbatim on the document.
pub type Properties = BTreeMap<String, PropertyValue>;

/// A single front-matter value: a scalar string or an ordered string list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A scalar string value.
    Scalar(String),

    /// An ordered list of string values.
    List(Vec<String>),
}

impl PropertyValue {
    /// Get the scalar value, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            PropertyValue::Scalar(s) => Some(s),
            PropertyValue::List(_) => None,
        }
    }

    /// Get the list values, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::Scalar(_) => None,
            PropertyValue::List(items) => Some(items),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Scalar(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Scalar(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(values: Vec<String>) -> Self {
        PropertyValue::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_accessors() {
        let value = PropertyValue::from("hello");
        assert_eq!(value.as_scalar(), Some("hello"));
        assert!(value.as_list().is_none());
    }

    #[test]
    fn test_list_accessors() {
        let value = PropertyValue::from(vec!["a".to_string(), "b".to_string()]);
        assert!(value.as_scalar().is_none());
        assert_eq!(value.as_list().map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_yaml_decoding() {
        let props: Properties =
            serde_yaml::from_str("name: Jane\nlinks:\n  - one\n  - two\n").unwrap();
        assert_eq!(props.get("name"), Some(&PropertyValue::from("Jane")));
        assert_eq!(
            props.get("links"),
            Some(&PropertyValue::from(vec![
                "one".to_string(),
                "two".to_string()
            ]))
        );
    }
}
