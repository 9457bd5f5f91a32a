//! Configuration for document output

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Configuration options for XML output
///
/// Can be loaded from TOML; missing keys keep their defaults:
///
/// ```toml
/// indent = 4
/// pretty_print = true
/// xml_declaration = false
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WriteConfig {
    /// Spaces per nesting level when pretty-printing
    pub indent: usize,

    /// Whether to put nested elements on their own indented lines
    pub pretty_print: bool,

    /// Whether to start with `<?xml version="1.0" encoding="utf-8"?>`
    pub xml_declaration: bool,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            pretty_print: true,
            xml_declaration: true,
        }
    }
}

impl WriteConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Set the indentation width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set whether to write the XML declaration
    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SvgError;

    #[test]
    fn test_default_config() {
        let config = WriteConfig::default();
        assert_eq!(config.indent, 2);
        assert!(config.pretty_print);
        assert!(config.xml_declaration);
    }

    #[test]
    fn test_builder_pattern() {
        let config = WriteConfig::new()
            .with_indent(4)
            .with_pretty_print(false)
            .with_xml_declaration(false);

        assert_eq!(config.indent, 4);
        assert!(!config.pretty_print);
        assert!(!config.xml_declaration);
    }

    #[test]
    fn test_parse_toml_partial() {
        let config = WriteConfig::from_str("indent = 4\n").expect("Should parse");
        assert_eq!(config, WriteConfig::default().with_indent(4));
    }

    #[test]
    fn test_parse_toml_empty() {
        let config = WriteConfig::from_str("").expect("Should parse");
        assert_eq!(config, WriteConfig::default());
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = WriteConfig::from_str("indent = \"wide\"");
        assert!(matches!(result, Err(SvgError::Config(_))));
    }

    #[test]
    fn test_missing_file_error() {
        let result = WriteConfig::from_file(Path::new("/nonexistent/svgast.toml"));
        assert!(matches!(result, Err(SvgError::Io(_))));
    }
}
