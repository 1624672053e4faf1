// Thu Oct 15 2026 - Alex

use indexmap::IndexMap;

/// Where a passthrough fragment is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionScope {
    /// Declaration unit, outside any namespace.
    Global,
    /// Declaration unit, inside the namespace.
    Namespace,
    /// Public section of the class body.
    Class,
    /// Implementation unit, outside any namespace.
    ImplGlobal,
    /// Implementation unit, inside the namespace.
    ImplNamespace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    pub name: Option<String>,
    /// Bare identifier -> qualified identifier.
    pub values: IndexMap<String, String>,
}

/// Typedef, enum or forward declaration carried as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub value: String,
    pub scope: DefinitionScope,
    pub enumeration: Option<EnumDefinition>,
}

impl Definition {
    pub fn new(value: &str, scope: DefinitionScope) -> Self {
        Self {
            value: value.to_string(),
            scope,
            enumeration: None,
        }
    }

    pub fn in_scope(&self, scope: DefinitionScope) -> bool {
        self.scope == scope
    }
}
