// Thu Oct 15 2026 - Alex

use crate::model::method::strip_class_scope;
use crate::model::{
    AccessLevel, Constructor, Definition, DefinitionScope, Destructor, Global, Member, Method,
};
use crate::render::context::RenderContext;
use crate::text::block_body;
use itertools::Itertools;

/// Something that renders into a class declaration and its implementation.
pub trait ClassEntity {
    /// Declaration text when the entity belongs to the `access` section.
    fn declaration(&self, ctx: &RenderContext<'_>, access: AccessLevel) -> Option<String>;

    /// Out-of-class definition, if the entity has one.
    fn implementation(&self, ctx: &RenderContext<'_>) -> Option<String>;
}

/// How a method head is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form<'s> {
    /// Inside the class, defaults kept, own scope stripped from types.
    Declaration,
    /// Outside the class, qualified with the scope when there is one.
    Definition(Option<&'s str>),
}

pub fn method_head(method: &Method, ctx: &RenderContext<'_>, form: Form<'_>) -> String {
    let mut parts: Vec<String> = Vec::new();
    match form {
        Form::Declaration => {
            if method.is_static() {
                parts.push("static".to_string());
            }
            if method.is_virtual() {
                parts.push("virtual".to_string());
            }
            parts.push(strip_class_scope(&method.return_type, ctx.class_name));
            parts.push(format!(
                "{}({})",
                method.name,
                method.signature.declaration(&ctx.classifier)
            ));
        }
        Form::Definition(scope) => {
            parts.push(method.return_type.clone());
            let name = match scope {
                Some(scope) => format!("{}::{}", scope, method.name),
                None => method.name.clone(),
            };
            parts.push(format!(
                "{}({})",
                name,
                method.signature.implementation(&ctx.classifier)
            ));
        }
    }
    if method.is_const() {
        parts.push("const".to_string());
    }
    parts.iter().filter(|p| !p.is_empty()).join(" ")
}

/// `head {` + indented body + `}`.
pub fn function_body(head: &str, body: &str) -> String {
    let body = block_body(body);
    if body.is_empty() {
        format!("{} {{\n}}", head)
    } else {
        format!("{} {{\n{}\n}}", head, body)
    }
}

impl ClassEntity for Method {
    fn declaration(&self, ctx: &RenderContext<'_>, access: AccessLevel) -> Option<String> {
        if self.access != access {
            return None;
        }
        let head = method_head(self, ctx, Form::Declaration);
        if self.is_pure_virtual() {
            Some(format!("{} = 0;", head))
        } else {
            Some(format!("{};", head))
        }
    }

    fn implementation(&self, ctx: &RenderContext<'_>) -> Option<String> {
        if !self.has_implementation() {
            return None;
        }
        let head = method_head(self, ctx, Form::Definition(Some(ctx.class_name)));
        Some(function_body(&head, &self.body))
    }
}

/// Free function prototype; types keep their scope.
pub fn function_declaration(function: &Method, ctx: &RenderContext<'_>) -> String {
    let ty = &function.return_type;
    let head = format!(
        "{} {}({})",
        ty,
        function.name,
        function.signature.declaration(&ctx.classifier)
    );
    format!("{};", head.trim_start())
}

pub fn function_definition(function: &Method, ctx: &RenderContext<'_>) -> String {
    function_body(&method_head(function, ctx, Form::Definition(None)), &function.body)
}

impl ClassEntity for Member {
    fn declaration(&self, ctx: &RenderContext<'_>, access: AccessLevel) -> Option<String> {
        let mut lines: Vec<String> = self
            .accessors()
            .filter_map(|m| m.declaration(ctx, access))
            .collect();
        if self.access == access {
            lines.push(format!(
                "{} {};",
                strip_class_scope(&self.ty, ctx.class_name),
                self.name
            ));
        }
        (!lines.is_empty()).then(|| lines.join("\n"))
    }

    fn implementation(&self, ctx: &RenderContext<'_>) -> Option<String> {
        let bodies: Vec<String> = self
            .accessors()
            .filter_map(|m| m.implementation(ctx))
            .collect();
        (!bodies.is_empty()).then(|| bodies.join("\n\n"))
    }
}

impl ClassEntity for Constructor {
    fn declaration(&self, ctx: &RenderContext<'_>, access: AccessLevel) -> Option<String> {
        if self.access != access {
            return None;
        }
        let explicit = if self.explicit { "explicit " } else { "" };
        Some(format!(
            "{}{}({});",
            explicit,
            ctx.class_name,
            self.signature.declaration(&ctx.classifier)
        ))
    }

    fn implementation(&self, ctx: &RenderContext<'_>) -> Option<String> {
        let mut head = format!(
            "{0}::{0}({1})",
            ctx.class_name,
            self.signature.implementation(&ctx.classifier)
        );
        let initializers = self.initializers(ctx.members);
        if !initializers.is_empty() {
            head = format!("{} : {}", head, initializers.join(", "));
        }
        Some(function_body(&head, &self.body))
    }
}

impl ClassEntity for Destructor {
    fn declaration(&self, ctx: &RenderContext<'_>, access: AccessLevel) -> Option<String> {
        if access != AccessLevel::Public {
            return None;
        }
        let virtual_ = if self.is_virtual { "virtual " } else { "" };
        Some(format!("{}~{}();", virtual_, ctx.class_name))
    }

    fn implementation(&self, ctx: &RenderContext<'_>) -> Option<String> {
        let head = format!("{0}::~{0}()", ctx.class_name);
        Some(function_body(&head, &self.body))
    }
}

impl ClassEntity for Global {
    fn declaration(&self, _ctx: &RenderContext<'_>, access: AccessLevel) -> Option<String> {
        (self.is_static && self.access == access)
            .then(|| format!("static {} {};", self.ty, self.name))
    }

    fn implementation(&self, ctx: &RenderContext<'_>) -> Option<String> {
        let name = if self.is_static {
            format!("{}::{}", ctx.class_name, self.name)
        } else {
            self.name.clone()
        };
        if self.initialization.is_empty() {
            Some(format!("{} {};", self.ty, name))
        } else {
            Some(format!("{} {} = {};", self.ty, name, self.initialization))
        }
    }
}

/// `extern T name;` for a non-static global.
pub fn extern_declaration(global: &Global) -> Option<String> {
    (!global.is_static).then(|| format!("extern {} {};", global.ty, global.name))
}

impl ClassEntity for Definition {
    fn declaration(&self, _ctx: &RenderContext<'_>, access: AccessLevel) -> Option<String> {
        (access == AccessLevel::Public && self.in_scope(DefinitionScope::Class))
            .then(|| self.value.clone())
    }

    fn implementation(&self, _ctx: &RenderContext<'_>) -> Option<String> {
        None
    }
}

/// Definitions of one scope, one per line.
pub fn scoped_definitions(definitions: &[Definition], scope: DefinitionScope) -> String {
    definitions
        .iter()
        .filter(|d| d.in_scope(scope))
        .map(|d| d.value.as_str())
        .join("\n")
}
