// Thu Oct 15 2026 - Alex

use crate::model::{AccessLevel, AccessSpecifier, Signature, VOID};
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MethodFlags: u8 {
        const CONST = 1;
        const STATIC = 1 << 1;
        const VIRTUAL = 1 << 2;
        const PURE_VIRTUAL = 1 << 3;
    }
}

/// A member function, free function or operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub return_type: String,
    pub signature: Signature,
    pub body: String,
    pub access: AccessLevel,
    pub flags: MethodFlags,
}

impl Method {
    pub fn new(
        name: &str,
        return_type: &str,
        signature: impl Into<Signature>,
        body: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            return_type: return_type.to_string(),
            signature: signature.into(),
            body: body.to_string(),
            access: AccessLevel::Public,
            flags: MethodFlags::empty(),
        }
    }

    /// `operator+`, `operator==`, `operator bool`.
    pub fn operator(
        token: &str,
        return_type: &str,
        signature: impl Into<Signature>,
        body: &str,
    ) -> Self {
        Self::new(&operator_name(token), return_type, signature, body)
    }

    pub fn new_signal(name: &str, signature: impl Into<Signature>) -> Self {
        let mut method = Self::new(name, VOID, signature, "");
        method.signal();
        method
    }

    pub fn new_slot(name: &str, signature: impl Into<Signature>, body: &str) -> Self {
        let mut method = Self::new(name, VOID, signature, body);
        method.slot();
        method
    }

    pub fn with_flags(&mut self, flags: MethodFlags) -> &mut Self {
        self.flags |= flags;
        self
    }

    pub fn with_const(&mut self) -> &mut Self {
        self.with_flags(MethodFlags::CONST)
    }

    pub fn with_static(&mut self) -> &mut Self {
        self.with_flags(MethodFlags::STATIC)
    }

    pub fn with_virtual(&mut self) -> &mut Self {
        self.with_flags(MethodFlags::VIRTUAL)
    }

    pub fn with_pure_virtual(&mut self) -> &mut Self {
        self.with_flags(MethodFlags::PURE_VIRTUAL)
    }

    pub fn with_access(&mut self, access: AccessLevel) -> &mut Self {
        self.access = access;
        self
    }

    pub fn public(&mut self) -> &mut Self {
        self.access = self.access.with_specifier(AccessSpecifier::Public);
        self
    }

    pub fn protected(&mut self) -> &mut Self {
        self.access = self.access.with_specifier(AccessSpecifier::Protected);
        self
    }

    pub fn private(&mut self) -> &mut Self {
        self.access = self.access.with_specifier(AccessSpecifier::Private);
        self
    }

    pub fn signal(&mut self) -> &mut Self {
        self.access = AccessLevel::Signal;
        self
    }

    pub fn slot(&mut self) -> &mut Self {
        self.access = self.access.into_slot();
        self
    }

    pub fn is_const(&self) -> bool {
        self.flags.contains(MethodFlags::CONST)
    }

    pub fn is_static(&self) -> bool {
        self.flags.contains(MethodFlags::STATIC)
    }

    /// Pure virtual implies virtual.
    pub fn is_virtual(&self) -> bool {
        self.flags
            .intersects(MethodFlags::VIRTUAL | MethodFlags::PURE_VIRTUAL)
    }

    pub fn is_pure_virtual(&self) -> bool {
        self.flags.contains(MethodFlags::PURE_VIRTUAL)
    }

    pub fn is_signal(&self) -> bool {
        self.access.is_signal()
    }

    pub fn returns_void(&self) -> bool {
        self.return_type.trim() == VOID
    }

    /// Signals and pure virtual methods have no definition.
    pub fn has_implementation(&self) -> bool {
        !self.is_signal() && !self.is_pure_virtual()
    }
}

pub fn operator_name(token: &str) -> String {
    let token = token.trim();
    if token.starts_with(|c: char| c.is_alphabetic()) {
        format!("operator {}", token)
    } else {
        format!("operator{}", token)
    }
}

/// Drops `Class::` scope qualifiers that name the class itself, e.g.
/// `const Foo::Mode&` -> `const Mode&` inside `Foo`.
pub fn strip_class_scope(ty: &str, class_name: &str) -> String {
    let qualifier = format!("{}::", class_name);
    let mut result = String::with_capacity(ty.len());
    let mut rest = ty;

    while let Some(at) = rest.find(&qualifier) {
        result.push_str(&rest[..at]);
        let nested = result
            .chars()
            .last()
            .map_or(false, |c| c.is_alphanumeric() || c == '_' || c == ':');
        if nested {
            result.push_str(&qualifier);
        }
        rest = &rest[at + qualifier.len()..];
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_chain() {
        let mut method = Method::new("size", "int", "", "return 0;");
        method.with_const().with_virtual().protected();
        assert!(method.is_const());
        assert!(method.is_virtual());
        assert!(!method.is_static());
        assert_eq!(method.access, AccessLevel::Protected);
    }

    #[test]
    fn test_pure_virtual_has_no_implementation() {
        let mut method = Method::new("run", "void", "", "");
        method.with_pure_virtual();
        assert!(method.is_virtual());
        assert!(!method.has_implementation());
    }

    #[test]
    fn test_signal_and_slot_builders() {
        let signal = Method::new_signal("changed", "int value");
        assert!(signal.is_signal());
        assert!(!signal.has_implementation());

        let mut slot = Method::new_slot("onChanged", "int value", "");
        assert_eq!(slot.access, AccessLevel::SlotPublic);
        slot.private();
        assert_eq!(slot.access, AccessLevel::SlotPrivate);
    }

    #[test]
    fn test_operator_names() {
        assert_eq!(operator_name("+"), "operator+");
        assert_eq!(operator_name(" == "), "operator==");
        assert_eq!(operator_name("bool"), "operator bool");
    }

    #[test]
    fn test_strip_class_scope() {
        assert_eq!(strip_class_scope("Foo::Kind", "Foo"), "Kind");
        assert_eq!(strip_class_scope("Bar::Kind", "Foo"), "Bar::Kind");
        assert_eq!(strip_class_scope("ns::Foo::Kind", "Foo"), "ns::Foo::Kind");
        assert_eq!(strip_class_scope("int", "Foo"), "int");
        assert_eq!(strip_class_scope("const Foo::Mode&", "Foo"), "const Mode&");
        assert_eq!(strip_class_scope("QList<Foo::Item>", "Foo"), "QList<Item>");
        assert_eq!(strip_class_scope("BarFoo::Kind", "Foo"), "BarFoo::Kind");
    }
}
