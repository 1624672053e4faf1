// Thu Oct 15 2026 - Alex

use crate::model::ModelError;
use crate::parser::ParseError;
use crate::text::split_top_level;
use indexmap::IndexMap;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\s*$").unwrap());

const BUILTIN_VALUE_TYPES: [&str; 12] = [
    "void", "int", "double", "bool", "int8_t", "uint8_t", "int16_t", "uint16_t", "int32_t",
    "uint32_t", "int64_t", "uint64_t",
];

/// Decides whether a parameter type is passed by value or by const reference.
#[derive(Debug, Clone, Copy)]
pub struct TypeClassifier<'a> {
    simple_types: &'a [String],
    value_prefixes: &'a [String],
}

impl<'a> TypeClassifier<'a> {
    pub fn new(simple_types: &'a [String], value_prefixes: &'a [String]) -> Self {
        Self {
            simple_types,
            value_prefixes,
        }
    }

    /// Built-ins, pointers and references only.
    pub fn builtin() -> TypeClassifier<'static> {
        TypeClassifier {
            simple_types: &[],
            value_prefixes: &[],
        }
    }

    pub fn is_value_type(&self, ty: &str) -> bool {
        let ty = ty.trim();
        BUILTIN_VALUE_TYPES.contains(&ty)
            || ty.ends_with('*')
            || ty.ends_with('&')
            || self.value_prefixes.iter().any(|p| ty.starts_with(p.as_str()))
            || self.simple_types.iter().any(|s| s == ty)
    }

    pub fn parameter(&self, name: &str, ty: &str) -> String {
        if self.is_value_type(ty) {
            format!("{} {}", ty, name)
        } else {
            format!("const {}& {}", ty, name)
        }
    }

    /// Inverse of [`parameter`](Self::parameter) for the type part.
    fn unwrap_const_ref(&self, ty: &str) -> String {
        if let Some(inner) = ty.strip_prefix("const ").and_then(|t| t.strip_suffix('&')) {
            let inner = inner.trim();
            if !self.is_value_type(inner) {
                return inner.to_string();
            }
        }
        ty.to_string()
    }
}

/// Ordered parameter name -> type, plus defaults keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    types: IndexMap<String, String>,
    defaults: IndexMap<String, String>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: &str, ty: &str) -> Self {
        self.push(name, ty);
        self
    }

    pub fn with_default(mut self, name: &str, value: &str) -> Result<Self, ModelError> {
        self.set_default(name, value)?;
        Ok(self)
    }

    pub fn push(&mut self, name: &str, ty: &str) {
        self.types.insert(name.to_string(), ty.to_string());
    }

    pub fn set_default(&mut self, name: &str, value: &str) -> Result<(), ModelError> {
        if !self.types.contains_key(name) {
            return Err(ModelError::UnknownDefault {
                parameter: name.to_string(),
            });
        }
        self.defaults.insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn types(&self) -> &IndexMap<String, String> {
        &self.types
    }

    pub fn defaults(&self) -> &IndexMap<String, String> {
        &self.defaults
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn render(&self, classifier: &TypeClassifier<'_>, with_defaults: bool) -> String {
        self.types
            .iter()
            .map(|(name, ty)| {
                let param = classifier.parameter(name, ty);
                match self.defaults.get(name) {
                    Some(value) if with_defaults => format!("{} = {}", param, value),
                    _ => param,
                }
            })
            .join(", ")
    }

    /// Parses `type name [= default], ...` keeping types verbatim.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut params = Self::new();
        for segment in split_top_level(text) {
            let (declarator, default) = split_default(&segment);
            let (ty, name) = split_declarator(declarator)
                .ok_or_else(|| ParseError::InvalidParameter(segment.clone()))?;
            params.types.insert(name.to_string(), ty.to_string());
            if let Some(value) = default {
                params.defaults.insert(name.to_string(), value.to_string());
            }
        }
        Ok(params)
    }

    /// Parses text produced by [`render`](Self::render), turning
    /// `const T& name` back into `T` when `T` is passed by reference.
    pub fn parse_rendered(text: &str, classifier: &TypeClassifier<'_>) -> Result<Self, ParseError> {
        let mut params = Self::parse(text)?;
        for ty in params.types.values_mut() {
            *ty = classifier.unwrap_const_ref(ty);
        }
        Ok(params)
    }
}

fn split_default(segment: &str) -> (&str, Option<&str>) {
    match segment.split_once('=') {
        Some((declarator, value)) => (declarator.trim(), Some(value.trim())),
        None => (segment.trim(), None),
    }
}

fn parameter_name(declarator: &str) -> Option<&str> {
    split_declarator(declarator).map(|(_, name)| name)
}

/// Splits `type name` at the trailing identifier.
pub fn split_declarator(declarator: &str) -> Option<(&str, &str)> {
    let found = TRAILING_IDENTIFIER
        .captures(declarator)
        .and_then(|c| c.get(1))?;
    Some((declarator[..found.start()].trim(), found.as_str()))
}

/// Removes default values from a raw parameter list.
pub fn strip_defaults(raw: &str) -> String {
    split_top_level(raw)
        .iter()
        .map(|segment| split_default(segment).0.to_string())
        .join(", ")
}

/// Parameter names of a raw parameter list, skipping unnamed segments.
pub fn parameter_names(raw: &str) -> Vec<String> {
    split_top_level(raw)
        .iter()
        .filter_map(|segment| parameter_name(split_default(segment).0).map(str::to_string))
        .collect()
}

/// A parameter list: opaque text (parser origin) or structured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    Raw(String),
    Structured(Parameters),
}

impl Signature {
    pub fn empty() -> Self {
        Signature::Structured(Parameters::new())
    }

    pub fn raw(text: &str) -> Self {
        Signature::Raw(text.trim().to_string())
    }

    /// Parameter list for a declaration, defaults included.
    pub fn declaration(&self, classifier: &TypeClassifier<'_>) -> String {
        match self {
            Signature::Raw(text) => text.clone(),
            Signature::Structured(params) => params.render(classifier, true),
        }
    }

    /// Parameter list for a definition; C++ forbids repeating defaults here.
    pub fn implementation(&self, classifier: &TypeClassifier<'_>) -> String {
        match self {
            Signature::Raw(text) => strip_defaults(text),
            Signature::Structured(params) => params.render(classifier, false),
        }
    }

    pub fn names(&self) -> Vec<String> {
        match self {
            Signature::Raw(text) => parameter_names(text),
            Signature::Structured(params) => params.names().map(str::to_string).collect(),
        }
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Signature {
    fn from(text: &str) -> Self {
        Signature::raw(text)
    }
}

impl From<String> for Signature {
    fn from(text: String) -> Self {
        Signature::raw(&text)
    }
}

impl From<Parameters> for Signature {
    fn from(params: Parameters) -> Self {
        Signature::Structured(params)
    }
}
