// Thu Oct 15 2026 - Alex

use crate::model::{Class, Member, TypeClassifier};

/// What an entity needs to know about the class it is rendered into.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub class_name: &'a str,
    pub classifier: TypeClassifier<'a>,
    pub members: &'a [Member],
}

impl<'a> RenderContext<'a> {
    pub fn new(class: &'a Class) -> Self {
        Self {
            class_name: &class.name,
            classifier: class.config.classifier(),
            members: &class.members,
        }
    }
}

/// Which blocks surround a rendered unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub banner: bool,
    pub guard: bool,
    pub namespace: bool,
    pub includes: bool,
}

impl RenderOptions {
    /// A unit written to its own header/source pair.
    pub fn standalone(banner: bool, guard: bool) -> Self {
        Self {
            banner,
            guard,
            namespace: true,
            includes: true,
        }
    }

    /// A class rendered inside an enclosing unit.
    pub fn embedded() -> Self {
        Self {
            banner: false,
            guard: false,
            namespace: false,
            includes: false,
        }
    }

    pub fn without_includes(mut self) -> Self {
        self.includes = false;
        self
    }
}

pub const BANNER: &str = "// DO NOT EDIT ** This file was generated by mugicpp ** DO NOT EDIT";

/// `FOO_H` for class `Foo`.
pub fn guard_variable(name: &str) -> String {
    format!("{}_H", name.to_uppercase())
}

/// Joins non-empty blocks with a blank line between them.
pub fn join_blocks<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = blocks
        .into_iter()
        .map(|b| b.as_ref().trim_end().to_string())
        .filter(|b| !b.trim().is_empty())
        .collect();
    parts.join("\n\n")
}
