// Thu Oct 15 2026 - Alex

use crate::model::AccessorStyle;
use crate::model::signature::TypeClassifier;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_LIBRARY_TYPE_PATTERN: &str = r"^Q[A-Z][A-Za-z]+$";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid library type pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// A class name that the include resolver should recognise in rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownClass {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

impl KnownClass {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: None,
        }
    }

    pub fn in_namespace(name: &str, namespace: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: Some(namespace.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Types passed by value even though they are not built-ins.
    pub simple_types: Vec<String>,
    /// Qualified-name prefixes of enumerations, always passed by value.
    pub value_prefixes: Vec<String>,
    pub known_classes: Vec<KnownClass>,
    pub namespace: Option<String>,
    pub banner: bool,
    pub guard: bool,
    pub accessor_style: AccessorStyle,
    pub library_type_pattern: String,
    /// Token in the implementation -> system header it requires.
    pub include_triggers: IndexMap<String, String>,
    /// Type name -> header file, checked before the naming convention.
    pub header_overrides: IndexMap<String, String>,
    pub name_with_namespace: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let mut include_triggers = IndexMap::new();
        include_triggers.insert("qDebug".to_string(), "QDebug".to_string());

        Self {
            simple_types: Vec::new(),
            value_prefixes: vec!["Qt::".to_string()],
            known_classes: Vec::new(),
            namespace: None,
            banner: true,
            guard: true,
            accessor_style: AccessorStyle::default(),
            library_type_pattern: DEFAULT_LIBRARY_TYPE_PATTERN.to_string(),
            include_triggers,
            header_overrides: IndexMap::new(),
            name_with_namespace: false,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_simple_types(mut self, types: &[&str]) -> Self {
        self.simple_types.extend(types.iter().map(|t| t.to_string()));
        self
    }

    pub fn with_known_class(mut self, class: KnownClass) -> Self {
        self.add_known_class(class);
        self
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    pub fn with_accessor_style(mut self, style: AccessorStyle) -> Self {
        self.accessor_style = style;
        self
    }

    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    pub fn with_guard(mut self, guard: bool) -> Self {
        self.guard = guard;
        self
    }

    pub fn with_header_override(mut self, name: &str, header: &str) -> Self {
        self.header_overrides.insert(name.to_string(), header.to_string());
        self
    }

    /// Adds a known class, replacing an earlier entry with the same name.
    pub fn add_known_class(&mut self, class: KnownClass) {
        match self.known_classes.iter_mut().find(|k| k.name == class.name) {
            Some(existing) => {
                if class.namespace.is_some() {
                    *existing = class;
                }
            }
            None => self.known_classes.push(class),
        }
    }

    pub fn classifier(&self) -> TypeClassifier<'_> {
        TypeClassifier::new(&self.simple_types, &self.value_prefixes)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Regex::new(&self.library_type_pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: self.library_type_pattern.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

/// Style handed to the external formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormatStyle {
    pub based_on_style: String,
    pub pointer_alignment: String,
    pub indent_width: u32,
    pub column_limit: u32,
    pub access_modifier_offset: i32,
    pub allow_short_functions_on_a_single_line: bool,
    pub namespace_indentation: String,
    pub standard: String,
}

impl Default for FormatStyle {
    fn default() -> Self {
        Self {
            based_on_style: "llvm".to_string(),
            pointer_alignment: "Left".to_string(),
            indent_width: 4,
            column_limit: 100,
            access_modifier_offset: -4,
            allow_short_functions_on_a_single_line: false,
            namespace_indentation: "All".to_string(),
            standard: "Auto".to_string(),
        }
    }
}

impl FormatStyle {
    /// Inline form accepted by `clang-format -style`: the serialized style
    /// with the JSON quotes removed.
    pub fn inline(&self) -> Result<String, ConfigError> {
        let json = serde_json::to_string(self)?;
        Ok(json.replace("\":", ": ").replace(",\"", ", ").replace('"', ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert!(config.banner);
        assert!(config.guard);
        assert_eq!(config.include_triggers.get("qDebug").map(String::as_str), Some("QDebug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = GeneratorConfig::from_json_str(
            r#"{"simple_types": ["Bar"], "namespace": "app", "banner": false}"#,
        )
        .unwrap();
        assert_eq!(config.simple_types, vec!["Bar"]);
        assert_eq!(config.namespace.as_deref(), Some("app"));
        assert!(!config.banner);
        assert!(config.guard);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = GeneratorConfig::from_json_str(r#"{"library_type_pattern": "("}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn test_known_class_dedup() {
        let config = GeneratorConfig::new()
            .with_known_class(KnownClass::new("Foo"))
            .with_known_class(KnownClass::in_namespace("Foo", "app"));
        assert_eq!(config.known_classes.len(), 1);
        assert_eq!(config.known_classes[0].namespace.as_deref(), Some("app"));
    }

    #[test]
    fn test_format_style_inline() {
        let style = FormatStyle::default().inline().unwrap();
        assert_eq!(
            style,
            "{BasedOnStyle: llvm, PointerAlignment: Left, IndentWidth: 4, ColumnLimit: 100, \
             AccessModifierOffset: -4, AllowShortFunctionsOnASingleLine: false, \
             NamespaceIndentation: All, Standard: Auto}"
        );
        assert!(style.contains("AccessModifierOffset: -4"));
        assert!(style.contains("AllowShortFunctionsOnASingleLine: false"));

        let mut custom = FormatStyle::default();
        custom.column_limit = 80;
        assert!(custom.inline().unwrap().contains("ColumnLimit: 80,"));
    }
}
