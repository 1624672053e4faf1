// Thu Oct 15 2026 - Alex

use crate::model::AccessSpecifier;
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseClass {
    pub name: String,
    pub access: AccessSpecifier,
}

impl BaseClass {
    pub fn new(name: &str, access: AccessSpecifier) -> Self {
        Self {
            name: name.to_string(),
            access,
        }
    }
}

impl fmt::Display for BaseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.access, self.name)
    }
}

/// Base classes in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inheritance {
    pub bases: Vec<BaseClass>,
}

impl Inheritance {
    pub fn push(&mut self, name: &str, access: AccessSpecifier) {
        self.bases.push(BaseClass::new(name, access));
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// `: public Base, private Other`, or nothing.
    pub fn clause(&self) -> String {
        if self.bases.is_empty() {
            return String::new();
        }
        format!(": {}", self.bases.iter().join(", "))
    }
}
