// Thu Oct 15 2026 - Alex

use crate::config::{GeneratorConfig, DEFAULT_LIBRARY_TYPE_PATTERN};
use indexmap::IndexMap;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static DEFAULT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_LIBRARY_TYPE_PATTERN).unwrap());

/// Recognizes external library types and maps type names to header files.
pub trait LibraryNaming {
    fn is_library_type(&self, name: &str) -> bool;

    fn header_override(&self, _name: &str) -> Option<&str> {
        None
    }

    /// Library types are included by name, other class names as the
    /// lowercased name plus `.h`, anything else verbatim.
    fn file_name(&self, name: &str) -> String {
        if let Some(file) = self.header_override(name) {
            return file.to_string();
        }
        if self.is_library_type(name) {
            name.to_string()
        } else if name.chars().any(char::is_uppercase) {
            format!("{}.h", name.to_lowercase())
        } else {
            name.to_string()
        }
    }
}

/// Naming driven by a regular expression over the whole type name.
#[derive(Debug, Clone)]
pub struct PatternNaming {
    pattern: Regex,
    overrides: IndexMap<String, String>,
}

impl PatternNaming {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            overrides: IndexMap::new(),
        })
    }

    /// Uses the configured pattern and header overrides. An invalid pattern
    /// falls back to the default one.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut naming = Self::new(&config.library_type_pattern).unwrap_or_else(|e| {
            warn!(
                "Invalid library type pattern '{}': {}; using default",
                config.library_type_pattern, e
            );
            Self::default()
        });
        naming.overrides = config.header_overrides.clone();
        naming
    }

    pub fn with_override(mut self, name: &str, file: &str) -> Self {
        self.overrides.insert(name.to_string(), file.to_string());
        self
    }
}

impl Default for PatternNaming {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
            overrides: IndexMap::new(),
        }
    }
}

impl LibraryNaming for PatternNaming {
    fn is_library_type(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    fn header_override(&self, name: &str) -> Option<&str> {
        self.overrides.get(name).map(String::as_str)
    }
}
