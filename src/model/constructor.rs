// Thu Oct 15 2026 - Alex

use crate::model::{AccessLevel, AccessSpecifier, Member, Signature};
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub signature: Signature,
    /// Member or base name -> initializer expression, in source order.
    pub init: IndexMap<String, String>,
    pub body: String,
    pub access: AccessLevel,
    pub explicit: bool,
}

impl Constructor {
    pub fn new(signature: impl Into<Signature>, body: &str) -> Self {
        Self {
            signature: signature.into(),
            init: IndexMap::new(),
            body: body.to_string(),
            access: AccessLevel::Public,
            explicit: false,
        }
    }

    pub fn init(&mut self, name: &str, expression: &str) -> &mut Self {
        self.init.insert(name.to_string(), expression.to_string());
        self
    }

    pub fn explicit(&mut self) -> &mut Self {
        self.explicit = true;
        self
    }

    pub fn public(&mut self) -> &mut Self {
        self.access = AccessSpecifier::Public.into();
        self
    }

    pub fn protected(&mut self) -> &mut Self {
        self.access = AccessSpecifier::Protected.into();
        self
    }

    pub fn private(&mut self) -> &mut Self {
        self.access = AccessSpecifier::Private.into();
        self
    }

    /// Initializer list entries: explicit ones first, then members that
    /// match a parameter name, then members with a declared value.
    pub fn initializers(&self, members: &[Member]) -> Vec<String> {
        let params = self.signature.names();
        let mut result: Vec<String> = self
            .init
            .iter()
            .map(|(name, expr)| format!("{}({})", name, expr))
            .collect();

        for member in members {
            if self.init.contains_key(&member.name) {
                continue;
            }
            let plain = member.plain_name();
            if params.iter().any(|p| *p == plain) {
                result.push(format!("{}({})", member.name, plain));
            } else if let Some(value) = &member.value {
                result.push(format!("{}({})", member.name, value));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessorStyle, MemberOptions, Parameters};

    fn member(name: &str, value: Option<&str>) -> Member {
        Member::new(name, "int", value, &MemberOptions::new(), AccessorStyle::default())
    }

    #[test]
    fn test_auto_initialization_order() {
        let members = vec![member("mA", None), member("mB", Some("5")), member("mC", None)];
        let mut ctor = Constructor::new(Parameters::new().param("a", "int"), "");
        ctor.init("Base", "a");
        assert_eq!(ctor.initializers(&members), vec!["Base(a)", "mA(a)", "mB(5)"]);
    }

    #[test]
    fn test_explicit_init_wins_over_parameter() {
        let members = vec![member("mA", Some("1"))];
        let mut ctor = Constructor::new("int a", "");
        ctor.init("mA", "a * 2");
        assert_eq!(ctor.initializers(&members), vec!["mA(a * 2)"]);
    }

    #[test]
    fn test_no_initializers() {
        let ctor = Constructor::new(Signature::empty(), "");
        assert!(ctor.initializers(&[member("mA", None)]).is_empty());
    }
}
