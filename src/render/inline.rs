// Thu Oct 15 2026 - Alex

use crate::model::{AccessLevel, Class, Constructor, DefinitionScope, Member, Method};
use crate::render::context::RenderContext;
use crate::render::declaration::class_head;
use crate::render::entities::{function_body, method_head, ClassEntity, Form};
use crate::text::indent;
use itertools::Itertools;

fn inline_method(method: &Method, ctx: &RenderContext<'_>) -> String {
    if method.has_implementation() {
        function_body(&method_head(method, ctx, Form::Declaration), &method.body)
    } else {
        method
            .declaration(ctx, method.access)
            .unwrap_or_default()
    }
}

fn inline_constructor(constructor: &Constructor, ctx: &RenderContext<'_>) -> String {
    let explicit = if constructor.explicit { "explicit " } else { "" };
    let mut head = format!(
        "{}{}({})",
        explicit,
        ctx.class_name,
        constructor.signature.declaration(&ctx.classifier)
    );
    if !constructor.init.is_empty() {
        let init = constructor
            .init
            .iter()
            .map(|(name, expression)| format!("{}({})", name, expression))
            .join(", ");
        head = format!("{} : {}", head, init);
    }
    function_body(&head, &constructor.body)
}

fn inline_member(member: &Member, ctx: &RenderContext<'_>, access: AccessLevel) -> Vec<String> {
    let mut entries: Vec<String> = member
        .accessors()
        .filter(|m| m.access == access)
        .map(|m| inline_method(m, ctx))
        .collect();
    if member.access == access {
        match &member.value {
            Some(value) => entries.push(format!("{} {} = {};", member.ty, member.name, value)),
            None => entries.push(format!("{} {};", member.ty, member.name)),
        }
    }
    entries
}

fn section(class: &Class, ctx: &RenderContext<'_>, access: AccessLevel) -> Vec<String> {
    let mut entries = Vec::new();
    if access == AccessLevel::Public {
        entries.extend(
            class
                .definitions
                .iter()
                .filter(|d| d.in_scope(DefinitionScope::Class))
                .map(|d| d.value.clone()),
        );
    }
    entries.extend(class.globals.iter().filter_map(|g| g.declaration(ctx, access)));
    entries.extend(
        class
            .constructors
            .iter()
            .filter(|c| c.access == access)
            .map(|c| inline_constructor(c, ctx)),
    );
    if access == AccessLevel::Public {
        if let Some(destructor) = &class.destructor {
            let virtual_ = if destructor.is_virtual { "virtual " } else { "" };
            let head = format!("{}~{}()", virtual_, class.name);
            entries.push(function_body(&head, &destructor.body));
        }
    }
    entries.extend(
        class
            .methods
            .iter()
            .filter(|m| m.access == access)
            .map(|m| inline_method(m, ctx)),
    );
    for member in &class.members {
        entries.extend(inline_member(member, ctx, access));
    }
    entries
}

/// Renders a class as one body with inline definitions: the grammar the
/// parser reads back.
pub fn inline_class(class: &Class) -> String {
    let ctx = RenderContext::new(class);
    let mut lines = vec![class_head(class)];
    if let Some(marker) = &class.object_marker {
        lines.push(indent(marker, 4));
    }
    for access in AccessLevel::RENDER_ORDER {
        let entries = section(class, &ctx, access);
        if entries.is_empty() {
            continue;
        }
        lines.push(format!("{}:", access.label()));
        lines.extend(entries.iter().map(|e| indent(e, 4)));
    }
    lines.push("};".to_string());
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::model::{AccessSpecifier, MemberOptions};
    use crate::parser::parse_class;
    use crate::render::testing::{squash, without_comments};

    fn round_trip(source: &str) -> String {
        let class = parse_class(source, &GeneratorConfig::default()).unwrap();
        inline_class(&class)
    }

    #[test]
    fn test_round_trip_constructor_and_base() {
        let source = "class Foo : public Bar {
            public:
                Foo(int a, QString name = QString()) : Bar(a), mName(name) {
                    mCount = a * 2;
                }
            private:
                int mCount;
                QString mName;
            };";
        assert_eq!(squash(&round_trip(source)), squash(source));
    }

    #[test]
    fn test_round_trip_typed_enum() {
        let source = "class Palette {
            public:
                enum class Color : int { Red, Green = 2, Blue };
                Color color() const {
                    return mColor;
                }
            protected:
                Color mColor = Color::Red;
            };";
        assert_eq!(squash(&round_trip(source)), squash(source));
    }

    #[test]
    fn test_round_trip_const_method() {
        let source = "class Counter {
            public:
                int value() const {
                    if (mValue > 0) {
                        return mValue;
                    }
                    return 0;
                }
                static Counter* create() {
                    return new Counter();
                }
            private:
                int mValue;
            };";
        let rendered = round_trip(source);
        assert_eq!(squash(&rendered), squash(source));
        assert!(rendered.contains("        if (mValue > 0) {\n            return mValue;\n        }"));
    }

    #[test]
    fn test_round_trip_signals_and_comments() {
        let source = "class EXPORT Model : public QObject {
                Q_OBJECT
            public:
                // stays out of the model
                virtual ~Model() {
                }
                virtual void reload() = 0;
            signals:
                void changed(int row); /* block */
            public slots:
                void refresh() {
                    reload();
                }
            };";
        assert_eq!(squash(&round_trip(source)), squash(&without_comments(source)));
    }

    #[test]
    fn test_rendered_twice_is_stable() {
        let source = "class Foo { public: explicit Foo(int a) : mA(a) {} private: int mA; };";
        let once = round_trip(source);
        let twice = round_trip(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_authored_class_inlines_accessors() {
        let mut class = Class::new("Foo", GeneratorConfig::default());
        class.inherits("Base", AccessSpecifier::Public);
        class.member("mA", "int").unwrap();
        let squashed = squash(&inline_class(&class));
        assert_eq!(
            squashed,
            squash(
                "class Foo : public Base { public: int a() const { return mA; } \
                 void setA(int value) { mA = value; } protected: int mA; };"
            )
        );
    }

    #[test]
    fn test_member_value_with_call_reads_back() {
        let mut class = Class::new("Foo", GeneratorConfig::default());
        class
            .member_with("mItems", "QStringList", Some("QStringList()"), MemberOptions::new())
            .unwrap();
        let once = inline_class(&class);
        assert!(once.contains("QStringList mItems = QStringList();"));

        let parsed = parse_class(&once, &GeneratorConfig::default()).unwrap();
        let items = parsed.find_member("mItems").unwrap();
        assert_eq!(items.value.as_deref(), Some("QStringList()"));
        assert!(squash(&inline_class(&parsed)).contains(&squash("protected: QStringList mItems = QStringList();")));
    }
}
