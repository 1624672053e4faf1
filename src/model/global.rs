// Thu Oct 15 2026 - Alex

use crate::model::AccessLevel;

/// A static class member (`static T name;` in the class) or an extern
/// global (`extern T name;` after the class).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Global {
    pub name: String,
    pub ty: String,
    pub initialization: String,
    pub access: AccessLevel,
    pub is_static: bool,
}

impl Global {
    pub fn new(name: &str, ty: &str, initialization: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            initialization: initialization.to_string(),
            access: AccessLevel::Public,
            is_static: true,
        }
    }

    pub fn as_static(&mut self) -> &mut Self {
        self.is_static = true;
        self
    }

    pub fn as_extern(&mut self) -> &mut Self {
        self.is_static = false;
        self
    }

    pub fn with_access(&mut self, access: AccessLevel) -> &mut Self {
        self.access = access;
        self
    }
}
