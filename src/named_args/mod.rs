// Thu Oct 15 2026 - Alex

//! Implementation/proxy class pairs with a fluent forwarding API.

use crate::config::{GeneratorConfig, KnownClass};
use crate::model::{
    AccessLevel, AccessorStyle, Class, Member, MemberOptions, MemberSpec, Method, ModelError, Parameters, Signature, VOID,
};
use itertools::Itertools;
use log::debug;

const IMPL_MEMBER: &str = "mImpl";

/// Every member and method registered here lands in the implementation
/// class; the proxy forwards to it through `mImpl`.
#[derive(Debug, Clone)]
pub struct NamedArgs {
    pub implementation: Class,
    pub proxy: Class,
}

impl NamedArgs {
    /// Accessors are named after the member with no `get`/`set` prefix.
    pub fn new(impl_name: &str, proxy_name: &str) -> Self {
        let config = GeneratorConfig::default().with_accessor_style(AccessorStyle::empty());
        Self::with_config(impl_name, proxy_name, config)
    }

    pub fn with_config(impl_name: &str, proxy_name: &str, mut config: GeneratorConfig) -> Self {
        for name in [impl_name, proxy_name] {
            config.add_known_class(KnownClass::new(name));
        }

        let implementation = Class::new(impl_name, config.clone());
        let mut proxy = Class::new(proxy_name, config);

        let pointer = format!("{}*", impl_name);
        proxy.members.push({
            let mut member = Member::new(
                IMPL_MEMBER,
                &pointer,
                None,
                &MemberOptions::new().without_accessors(),
                AccessorStyle::empty(),
            );
            member.private();
            member
        });
        proxy.constructor(Parameters::new().param("impl", &pointer), "");

        Self {
            implementation,
            proxy,
        }
    }

    fn proxy_ref(&self) -> String {
        format!("{}&", self.proxy.name)
    }

    /// Member with default options, see [`NamedArgs::member_with`].
    pub fn member(&mut self, name: &str, ty: &str) -> Result<&mut Member, ModelError> {
        self.member_with(name, ty, None, MemberOptions::new())
    }

    /// Stores the member in the implementation and mirrors each of its
    /// accessors on the proxy. The proxy setter returns the proxy.
    pub fn member_with(
        &mut self,
        name: &str,
        ty: &str,
        value: Option<&str>,
        options: MemberOptions,
    ) -> Result<&mut Member, ModelError> {
        let mut spec = MemberSpec::new(name, ty).options(options);
        spec.value = value.map(str::to_string);
        let proxy_ref = self.proxy_ref();

        let member = self.implementation.insert_member(spec)?;
        if let Some(getter) = &member.getter {
            debug!("{}: forwarding getter {}", self.proxy.name, getter.name);
            self.proxy
                .method(
                    &getter.name,
                    ty,
                    Signature::empty(),
                    &format!("return {}->{}();", IMPL_MEMBER, getter.name),
                )
                .with_access(getter.access)
                .with_const();
        }
        if let Some(setter) = &member.setter {
            debug!("{}: forwarding setter {}", self.proxy.name, setter.name);
            self.proxy
                .method(
                    &setter.name,
                    &proxy_ref,
                    Parameters::new().param("value", ty),
                    &format!("{}->{}(value);\nreturn *this;", IMPL_MEMBER, setter.name),
                )
                .with_access(setter.access);
        }
        Ok(member)
    }

    /// Proxy method forwarding to the implementation. A `void` method
    /// returns the proxy instead. The implementation only gets a method
    /// when `body` is given.
    pub fn method(
        &mut self,
        name: &str,
        return_type: &str,
        signature: impl Into<Signature>,
        body: Option<&str>,
    ) -> NamedMethods<'_> {
        let signature = signature.into();
        let call = format!("{}->{}({})", IMPL_MEMBER, name, signature.names().iter().join(", "));
        let (proxy_type, forward) = if return_type == VOID {
            (self.proxy_ref(), format!("{};\nreturn *this;", call))
        } else {
            (return_type.to_string(), format!("return {};", call))
        };

        let proxy = self
            .proxy
            .method(name, &proxy_type, signature.clone(), &forward);
        let implementation = body.map(|body| {
            self.implementation
                .method(name, return_type, signature, body)
        });

        NamedMethods {
            proxy,
            implementation,
        }
    }

    pub fn classes(&self) -> [&Class; 2] {
        [&self.implementation, &self.proxy]
    }
}

/// Handle over the proxy method and its implementation counterpart;
/// modifiers apply to both.
pub struct NamedMethods<'a> {
    proxy: &'a mut Method,
    implementation: Option<&'a mut Method>,
}

impl<'a> NamedMethods<'a> {
    fn each(&mut self, apply: impl Fn(&mut Method)) -> &mut Self {
        apply(&mut *self.proxy);
        if let Some(method) = self.implementation.as_deref_mut() {
            apply(method);
        }
        self
    }

    pub fn with_const(&mut self) -> &mut Self {
        self.each(|m| {
            m.with_const();
        })
    }

    pub fn with_static(&mut self) -> &mut Self {
        self.each(|m| {
            m.with_static();
        })
    }

    pub fn with_virtual(&mut self) -> &mut Self {
        self.each(|m| {
            m.with_virtual();
        })
    }

    pub fn with_pure_virtual(&mut self) -> &mut Self {
        self.each(|m| {
            m.with_pure_virtual();
        })
    }

    pub fn with_access(&mut self, access: AccessLevel) -> &mut Self {
        self.each(|m| {
            m.with_access(access);
        })
    }

    pub fn public(&mut self) -> &mut Self {
        self.with_access(AccessLevel::Public)
    }

    pub fn protected(&mut self) -> &mut Self {
        self.with_access(AccessLevel::Protected)
    }

    pub fn private(&mut self) -> &mut Self {
        self.with_access(AccessLevel::Private)
    }

    pub fn proxy(&self) -> &Method {
        &*self.proxy
    }

    pub fn implementation(&self) -> Option<&Method> {
        self.implementation.as_deref()
    }
}
