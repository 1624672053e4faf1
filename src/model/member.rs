// Thu Oct 15 2026 - Alex

use crate::model::{AccessLevel, AccessSpecifier, Method, Parameters, VOID};
use crate::text::{getter_name, plain_name, setter_name};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Accessor naming. Without `SET_PREFIX` the setter is an overload of
    /// the getter name; with `GET_PREFIX` the getter is `getFoo`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AccessorStyle: u8 {
        const SET_PREFIX = 1;
        const GET_PREFIX = 1 << 1;
    }
}

impl Default for AccessorStyle {
    fn default() -> Self {
        AccessorStyle::SET_PREFIX
    }
}

/// Whether and how an accessor is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorSpec {
    Disabled,
    Enabled(AccessLevel),
    Custom { access: AccessLevel, body: String },
}

impl Default for AccessorSpec {
    fn default() -> Self {
        AccessorSpec::Enabled(AccessLevel::Public)
    }
}

impl AccessorSpec {
    fn parts(&self) -> Option<(AccessLevel, Option<&str>)> {
        match self {
            AccessorSpec::Disabled => None,
            AccessorSpec::Enabled(access) => Some((*access, None)),
            AccessorSpec::Custom { access, body } => Some((*access, Some(body.as_str()))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberOptions {
    pub getter: AccessorSpec,
    pub setter: AccessorSpec,
    pub access: AccessLevel,
    /// `None` uses the class-wide style.
    pub style: Option<AccessorStyle>,
}

impl Default for MemberOptions {
    fn default() -> Self {
        Self {
            getter: AccessorSpec::default(),
            setter: AccessorSpec::default(),
            access: AccessLevel::Protected,
            style: None,
        }
    }
}

impl MemberOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_accessors(mut self) -> Self {
        self.getter = AccessorSpec::Disabled;
        self.setter = AccessorSpec::Disabled;
        self
    }

    pub fn without_getter(mut self) -> Self {
        self.getter = AccessorSpec::Disabled;
        self
    }

    pub fn without_setter(mut self) -> Self {
        self.setter = AccessorSpec::Disabled;
        self
    }

    pub fn getter(mut self, spec: AccessorSpec) -> Self {
        self.getter = spec;
        self
    }

    pub fn setter(mut self, spec: AccessorSpec) -> Self {
        self.setter = spec;
        self
    }

    pub fn access(mut self, access: AccessLevel) -> Self {
        self.access = access;
        self
    }

    pub fn style(mut self, style: AccessorStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// A data member with optional generated getter and setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub ty: String,
    pub value: Option<String>,
    pub access: AccessLevel,
    pub getter: Option<Method>,
    pub setter: Option<Method>,
}

impl Member {
    pub fn new(
        name: &str,
        ty: &str,
        value: Option<&str>,
        options: &MemberOptions,
        class_style: AccessorStyle,
    ) -> Self {
        let style = options.style.unwrap_or(class_style);
        let getter = options
            .getter
            .parts()
            .map(|(access, body)| build_getter(name, ty, style, access, body));
        let setter = options
            .setter
            .parts()
            .map(|(access, body)| build_setter(name, ty, style, access, body));

        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            value: value.map(str::to_string),
            access: options.access,
            getter,
            setter,
        }
    }

    /// Field only, as recovered from a declaration.
    pub fn bare(name: &str, ty: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            value: None,
            access: AccessLevel::Private,
            getter: None,
            setter: None,
        }
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

    pub fn with_access(&mut self, access: AccessLevel) -> &mut Self {
        self.access = access;
        self
    }

    pub fn with_value(&mut self, value: &str) -> &mut Self {
        self.value = Some(value.to_string());
        self
    }

    /// Name without the leading marker; matched against constructor
    /// parameters for automatic initialization.
    pub fn plain_name(&self) -> String {
        plain_name(&self.name)
    }

    pub fn accessors(&self) -> impl Iterator<Item = &Method> {
        self.getter.iter().chain(self.setter.iter())
    }
}

fn build_getter(
    member: &str,
    ty: &str,
    style: AccessorStyle,
    access: AccessLevel,
    body: Option<&str>,
) -> Method {
    let name = if style.contains(AccessorStyle::GET_PREFIX) {
        getter_name(member)
    } else {
        plain_name(member)
    };
    let default_body = format!("return {};", member);
    let mut method = Method::new(&name, ty, Parameters::new(), body.unwrap_or(&default_body));
    method.with_const().with_access(access);
    method
}

fn build_setter(
    member: &str,
    ty: &str,
    style: AccessorStyle,
    access: AccessLevel,
    body: Option<&str>,
) -> Method {
    let name = if style.contains(AccessorStyle::SET_PREFIX) {
        setter_name(member)
    } else {
        plain_name(member)
    };
    let default_body = format!("{} = value;", member);
    let params = Parameters::new().param("value", ty);
    let mut method = Method::new(&name, VOID, params, body.unwrap_or(&default_body));
    method.with_access(access);
    method
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accessor_names() {
        let member = Member::new("mFoo", "int", None, &MemberOptions::new(), AccessorStyle::default());
        assert_eq!(member.getter.as_ref().map(|m| m.name.as_str()), Some("foo"));
        assert_eq!(member.setter.as_ref().map(|m| m.name.as_str()), Some("setFoo"));
        assert_eq!(member.access, AccessLevel::Protected);
        assert!(member.getter.as_ref().unwrap().is_const());
    }

    #[test]
    fn test_get_prefix_style() {
        let style = AccessorStyle::SET_PREFIX | AccessorStyle::GET_PREFIX;
        let member = Member::new("mFoo", "int", None, &MemberOptions::new(), style);
        assert_eq!(member.getter.unwrap().name, "getFoo");
        assert_eq!(member.setter.unwrap().name, "setFoo");
    }

    #[test]
    fn test_unprefixed_setter_overloads_getter() {
        let member = Member::new("mBar", "int", None, &MemberOptions::new(), AccessorStyle::empty());
        assert_eq!(member.getter.unwrap().name, "bar");
        assert_eq!(member.setter.unwrap().name, "bar");
    }

    #[test]
    fn test_custom_and_disabled_accessors() {
        let options = MemberOptions::new()
            .getter(AccessorSpec::Custom {
                access: AccessLevel::Protected,
                body: "return mName.trimmed();".to_string(),
            })
            .without_setter();
        let member = Member::new("mName", "QString", None, &options, AccessorStyle::default());
        let getter = member.getter.as_ref().unwrap();
        assert_eq!(getter.body, "return mName.trimmed();");
        assert_eq!(getter.access, AccessLevel::Protected);
        assert!(member.setter.is_none());
        assert_eq!(member.accessors().count(), 1);
    }

    #[test]
    fn test_bare_member_has_no_accessors() {
        let member = Member::bare("mCount", "int");
        assert_eq!(member.accessors().count(), 0);
        assert_eq!(member.plain_name(), "count");
    }
}
