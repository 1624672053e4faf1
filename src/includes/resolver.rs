// Thu Oct 15 2026 - Alex

use crate::config::KnownClass;
use crate::includes::scanner::{scan, Usage};
use crate::includes::LibraryNaming;
use crate::model::Include;
use indexmap::IndexMap;
use log::debug;

/// Which unit the scanned text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Declaration,
    Implementation,
}

/// Merges usages per name; any value usage makes the name a value usage.
pub fn collect_usages<'t>(
    text: &'t str,
    is_candidate: impl Fn(&str) -> bool,
) -> IndexMap<&'t str, Usage> {
    let mut usages = IndexMap::new();
    for found in scan(text).into_iter().filter(|u| is_candidate(u.name)) {
        let entry = usages.entry(found.name).or_insert(found.usage);
        if found.usage == Usage::Value {
            *entry = Usage::Value;
        }
    }
    usages
}

fn include_for(name: &str, usage: Usage, side: Side, system: bool, namespace: Option<&str>) -> Include {
    let mut include = match (side, usage) {
        (Side::Declaration, Usage::Indirect) => Include::forward(name, None),
        (Side::Declaration, Usage::Value) => Include::header(name, system),
        (Side::Implementation, _) => Include::implementation(name, system),
    };
    include.system = system;
    if let Some(ns) = namespace {
        include.in_namespace(ns);
    }
    include
}

/// Infers includes and forward declarations from rendered text.
pub struct IncludeResolver<'a> {
    naming: &'a dyn LibraryNaming,
    known_classes: Vec<KnownClass>,
    triggers: &'a IndexMap<String, String>,
    excluded: Vec<String>,
}

impl<'a> IncludeResolver<'a> {
    pub fn new(
        naming: &'a dyn LibraryNaming,
        known_classes: Vec<KnownClass>,
        triggers: &'a IndexMap<String, String>,
    ) -> Self {
        Self {
            naming,
            known_classes,
            triggers,
            excluded: Vec::new(),
        }
    }

    /// Never resolves `name`, e.g. the class being declared.
    pub fn excluding(mut self, name: &str) -> Self {
        self.excluded.push(name.to_string());
        self
    }

    /// Known classes first, then library types, then trigger headers.
    pub fn resolve(&self, text: &str, side: Side) -> Vec<Include> {
        let mut includes = Vec::new();

        let known = collect_usages(text, |name| self.is_known(name) && !self.is_excluded(name));
        for (name, usage) in known {
            debug!("{:?}: known class {} ({:?})", side, name, usage);
            let namespace = self
                .known_classes
                .iter()
                .find(|k| k.name == name)
                .and_then(|k| k.namespace.as_deref());
            includes.push(include_for(name, usage, side, false, namespace));
        }

        let library = collect_usages(text, |name| {
            self.naming.is_library_type(name) && !self.is_known(name) && !self.is_excluded(name)
        });
        for (name, usage) in library {
            debug!("{:?}: library type {} ({:?})", side, name, usage);
            includes.push(include_for(name, usage, side, true, None));
        }

        let tokens = scan(text);
        for (trigger, header) in self.triggers {
            if tokens.iter().any(|t| t.name == trigger) {
                debug!("{:?}: trigger {} adds {}", side, trigger, header);
                includes.push(Include::implementation(header, true));
            }
        }

        includes
    }

    fn is_known(&self, name: &str) -> bool {
        self.known_classes.iter().any(|k| k.name == name)
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.excluded.iter().any(|e| e == name)
    }
}

/// Union of both include lists keyed by name, declaration side first.
pub fn merge_includes(declaration: Vec<Include>, implementation: Vec<Include>) -> Vec<Include> {
    let mut merged = declaration;
    for include in implementation {
        if !merged.iter().any(|i| i.name == include.name) {
            merged.push(include);
        }
    }
    merged
}
