//! Configuration nodes and parameter documents.
//!
//! A document is a TOML file with one `[[parameter]]` table per parameter.
//! Every attribute is a string, exactly as it would appear in markup:
//!
//! ```toml
//! title = "Colour balance"
//!
//! [[parameter]]
//! kind = "float"
//! name = "Gamma"
//! min = "0"
//! max = "10"
//! default = "5"
//! savedValue = "7.5"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// Display label attribute.
pub const ATTR_NAME: &str = "name";
/// Lower bound attribute.
pub const ATTR_MIN: &str = "min";
/// Upper bound attribute.
pub const ATTR_MAX: &str = "max";
/// Default value attribute.
pub const ATTR_DEFAULT: &str = "default";
/// Persisted value attribute, written back on save.
pub const ATTR_SAVED_VALUE: &str = "savedValue";

/// Kind tag of a float parameter node.
pub const KIND_FLOAT: &str = "float";

/// String attributes of a single configuration element.
pub trait ConfigNode {
    fn attribute(&self, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, name: &str, value: String);

    /// Attribute text, or `fallback` when absent.
    fn attribute_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.attribute(name).unwrap_or(fallback)
    }
}

fn default_kind() -> String {
    KIND_FLOAT.to_string()
}

/// One `[[parameter]]` table of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterNode {
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl ParameterNode {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            attributes: BTreeMap::new(),
        }
    }

    /// Float node from its attribute texts.
    pub fn float(name: &str, min: &str, max: &str, default: &str) -> Self {
        Self::new(KIND_FLOAT)
            .with(ATTR_NAME, name)
            .with(ATTR_MIN, min)
            .with(ATTR_MAX, max)
            .with(ATTR_DEFAULT, default)
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn name(&self) -> &str {
        self.attribute_or(ATTR_NAME, "")
    }
}

impl ConfigNode for ParameterNode {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        self.attributes.insert(name.to_string(), value);
    }
}

/// A titled list of parameter nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterDocument {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "parameter", default)]
    pub parameters: Vec<ParameterNode>,
}

impl ParameterDocument {
    /// Load a document from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a document from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, DocumentError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the document to disk, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let write_err = |source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(write_err)?;
        log::debug!("saved parameter document to {}", path.display());
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&ParameterNode> {
        self.parameters.iter().find(|n| n.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ParameterNode> {
        self.parameters.iter_mut().find(|n| n.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
title = "Colour balance"

[[parameter]]
kind = "float"
name = "Gamma"
min = "0"
max = "10"
default = "5"
savedValue = "7.5"

[[parameter]]
name = "Offset"
min = "-1"
max = "1"
default = "0"
"#;

    #[test]
    fn parses_attributes_as_strings() {
        let doc = ParameterDocument::from_toml(DOC).unwrap();
        assert_eq!(doc.title, "Colour balance");
        assert_eq!(doc.parameters.len(), 2);

        let gamma = doc.find("Gamma").unwrap();
        assert_eq!(gamma.kind, KIND_FLOAT);
        assert_eq!(gamma.attribute(ATTR_SAVED_VALUE), Some("7.5"));

        let offset = doc.find("Offset").unwrap();
        assert_eq!(offset.kind, KIND_FLOAT, "kind defaults to float");
        assert_eq!(offset.attribute(ATTR_SAVED_VALUE), None);
        assert_eq!(offset.attribute_or(ATTR_SAVED_VALUE, "0"), "0");
    }

    #[test]
    fn set_attribute_survives_serialization() {
        let mut doc = ParameterDocument::from_toml(DOC).unwrap();
        doc.find_mut("Offset")
            .unwrap()
            .set_attribute(ATTR_SAVED_VALUE, "0.25".into());

        let text = doc.to_toml().unwrap();
        let reparsed = ParameterDocument::from_toml(&text).unwrap();
        assert_eq!(reparsed, doc);
        assert_eq!(
            reparsed.find("Offset").unwrap().attribute(ATTR_SAVED_VALUE),
            Some("0.25")
        );
    }

    #[test]
    fn non_string_attribute_is_a_parse_error() {
        let err = ParameterDocument::from_toml("[[parameter]]\nmin = 0\n").unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = ParameterDocument::from_file(Path::new("/nonexistent/doc.toml")).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }

    #[test]
    fn builder_sets_float_attributes() {
        let node = ParameterNode::float("Gain", "0", "2", "1").with(ATTR_SAVED_VALUE, "1.5");
        assert_eq!(node.name(), "Gain");
        assert_eq!(node.attribute(ATTR_MAX), Some("2"));
        assert_eq!(node.attribute(ATTR_SAVED_VALUE), Some("1.5"));
    }
}
