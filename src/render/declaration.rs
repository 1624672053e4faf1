// Thu Oct 15 2026 - Alex

use crate::config::KnownClass;
use crate::includes::{IncludeResolver, LibraryNaming, PatternNaming, Side};
use crate::model::{AccessLevel, Class, DefinitionScope, Include};
use crate::render::context::{guard_variable, join_blocks, RenderContext, RenderOptions, BANNER};
use crate::render::entities::{
    extern_declaration, function_declaration, scoped_definitions, ClassEntity,
};
use crate::text::indent;
use itertools::Itertools;
use log::trace;

/// Header naming for a class; honors the namespaced file name of the class
/// itself.
pub fn class_naming(class: &Class) -> PatternNaming {
    let naming = PatternNaming::from_config(&class.config);
    match (&class.namespace, class.config.name_with_namespace) {
        (Some(ns), true) if naming.header_override(&class.name).is_none() => {
            let file = format!("{}_{}.h", ns.to_lowercase(), class.name.to_lowercase());
            naming.with_override(&class.name, &file)
        }
        _ => naming,
    }
}

/// Entities of a class body in section order.
pub fn section_entities(class: &Class) -> impl Iterator<Item = &dyn ClassEntity> {
    let definitions = class.definitions.iter().map(|e| e as &dyn ClassEntity);
    let globals = class.globals.iter().map(|e| e as &dyn ClassEntity);
    let constructors = class.constructors.iter().map(|e| e as &dyn ClassEntity);
    let destructor = class.destructor.iter().map(|e| e as &dyn ClassEntity);
    let methods = class.methods.iter().map(|e| e as &dyn ClassEntity);
    let members = class.members.iter().map(|e| e as &dyn ClassEntity);
    definitions
        .chain(globals)
        .chain(constructors)
        .chain(destructor)
        .chain(methods)
        .chain(members)
}

/// `class [storage ]Name[ : bases] {`
pub fn class_head(class: &Class) -> String {
    let mut head = String::from("class ");
    if let Some(storage) = &class.storage_class {
        head.push_str(storage);
        head.push(' ');
    }
    head.push_str(&class.name);
    if !class.inheritance.is_empty() {
        head.push(' ');
        head.push_str(&class.inheritance.clause());
    }
    head.push_str(" {");
    head
}

/// The class body with labeled access sections in render order. Empty
/// sections are omitted.
pub fn class_body(class: &Class, ctx: &RenderContext<'_>) -> String {
    let mut lines = vec![class_head(class)];
    if let Some(marker) = &class.object_marker {
        lines.push(indent(marker, 4));
    }

    for access in AccessLevel::RENDER_ORDER {
        let entries: Vec<String> = section_entities(class)
            .filter_map(|e| e.declaration(ctx, access))
            .collect();
        if entries.is_empty() {
            continue;
        }
        trace!("{} section of {}: {} entries", access, class.name, entries.len());
        lines.push(format!("{}:", access.label()));
        lines.extend(entries.iter().map(|e| indent(e, 4)));
    }

    lines.push("};".to_string());
    lines.join("\n")
}

fn namespace_head(class: &Class, options: RenderOptions) -> Option<String> {
    class
        .namespace
        .as_ref()
        .filter(|_| options.namespace)
        .map(|ns| format!("namespace {} {{", ns))
}

fn namespace_tail(class: &Class, options: RenderOptions) -> Option<String> {
    class
        .namespace
        .as_ref()
        .filter(|_| options.namespace)
        .map(|ns| format!("}} // namespace {}", ns))
}

/// Everything between the include block and the guard tail.
fn declaration_body(class: &Class, options: RenderOptions) -> Vec<String> {
    let ctx = RenderContext::new(class);
    let mut blocks = vec![scoped_definitions(&class.definitions, DefinitionScope::Global)];
    blocks.extend(namespace_head(class, options));
    blocks.push(scoped_definitions(&class.definitions, DefinitionScope::Namespace));
    if !class.is_free_unit() {
        blocks.push(class_body(class, &ctx));
    }
    blocks.push(
        class
            .functions
            .iter()
            .map(|f| function_declaration(f, &ctx))
            .join("\n"),
    );
    blocks.push(class.globals.iter().filter_map(extern_declaration).join("\n"));
    blocks.extend(class.metatype_marker.clone());
    blocks.extend(namespace_tail(class, options));
    blocks
}

/// Includes of the declaration unit: inferred from `text`, then the
/// explicitly added ones.
pub fn declaration_includes(class: &Class, text: &str, naming: &dyn LibraryNaming) -> Vec<Include> {
    let known: Vec<KnownClass> = class
        .config
        .known_classes
        .iter()
        .filter(|k| k.name != class.name)
        .cloned()
        .collect();
    let resolver = IncludeResolver::new(naming, known, &class.config.include_triggers)
        .excluding(&class.name);
    let mut includes = resolver.resolve(text, Side::Declaration);
    includes.extend(class.includes.iter().cloned());
    includes
}

pub fn declaration(class: &Class) -> String {
    let options = RenderOptions::standalone(class.config.banner, class.config.guard);
    declaration_with(class, options)
}

pub fn declaration_with(class: &Class, options: RenderOptions) -> String {
    let body = join_blocks(declaration_body(class, options));

    let includes = if options.includes {
        let naming = class_naming(class);
        declaration_includes(class, &body, &naming)
            .iter()
            .filter_map(|i| i.declaration_line(&naming))
            .unique()
            .join("\n")
    } else {
        String::new()
    };

    let guard = guard_variable(&class.name);
    let guarded = options.guard;
    join_blocks([
        if options.banner { BANNER.to_string() } else { String::new() },
        if guarded { format!("#ifndef {0}\n#define {0}", guard) } else { String::new() },
        includes,
        body,
        if guarded { format!("#endif // {}", guard) } else { String::new() },
    ]) + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::model::{AccessSpecifier, Parameters, Signature};
    use crate::render::testing::squash;

    #[test]
    fn test_method_scenario() {
        let mut class = Class::new("Foo", GeneratorConfig::default());
        class.method("foo", "int", Parameters::new().param("a", "int"), "return 10;");
        let text = declaration(&class);
        assert!(text.starts_with(BANNER));
        assert!(text.contains("#ifndef FOO_H\n#define FOO_H"));
        assert!(squash(&text).contains(&squash("class Foo { public: int foo(int a); };")));
        assert!(text.trim_end().ends_with("#endif // FOO_H"));
    }

    #[test]
    fn test_access_section_order() {
        let mut class = Class::new("Foo", GeneratorConfig::default().with_banner(false).with_guard(false));
        class.method("p", "void", "", "").private();
        class.signal("changed", Signature::empty());
        class.method("q", "void", "", "").protected().slot();
        class.method("a", "void", "", "");
        let text = declaration(&class);
        let labels: Vec<&str> = text
            .lines()
            .filter(|l| l.ends_with(':') && !l.starts_with(' '))
            .collect();
        assert_eq!(labels, vec!["public:", "signals:", "protected slots:", "private:"]);
    }

    #[test]
    fn test_entity_order_inside_section() {
        let mut class = Class::new("Foo", GeneratorConfig::default().with_banner(false).with_guard(false));
        class.member_with("mA", "int", None, Default::default()).unwrap().public();
        class.method("run", "void", "", "");
        class.destructor("");
        class.constructor(Signature::empty(), "");
        class.global("sCount", "int", "0");
        class.definition("typedef int Count;", DefinitionScope::Class);
        let squashed = squash(&declaration(&class));
        let expected = squash(
            "class Foo { public: typedef int Count; static int sCount; Foo(); ~Foo(); void run(); \
             int a() const; void setA(int value); int mA; };",
        );
        assert!(squashed.contains(&expected), "{}", squashed);
    }

    #[test]
    fn test_forward_declaration_for_pointer_usage() {
        let mut class = Class::new("Foo", GeneratorConfig::default());
        class.method("setText", "void", Parameters::new().param("text", "QString*"), "");
        let text = declaration(&class);
        assert!(text.contains("class QString;"));
        assert!(!text.contains("#include <QString>"));
    }

    #[test]
    fn test_surrounding_blocks() {
        let config = GeneratorConfig::default()
            .with_namespace("app")
            .with_banner(false);
        let mut class = Class::new("Foo", config);
        class.inherits("QObject", AccessSpecifier::Public).storage_class("EXPORT");
        class.qobject(true).metatype(true);
        class.definition("class Helper;", DefinitionScope::Namespace);
        class.definition("#define FOO_VERSION 2", DefinitionScope::Global);
        class.function("qHash", "uint", "const Foo& foo", "return 0;");
        class.global("gFoo", "Foo*", "nullptr").as_extern();

        let squashed = squash(&declaration(&class));
        let expected = squash(
            "#ifndef FOO_H #define FOO_H #include <QObject> #define FOO_VERSION 2 namespace app { class Helper; \
             class EXPORT Foo : public QObject { Q_OBJECT }; uint qHash(const Foo& foo); extern Foo* gFoo; \
             Q_DECLARE_METATYPE(Foo) } // namespace app #endif // FOO_H",
        );
        assert_eq!(squashed, expected);
    }

    #[test]
    fn test_free_unit_has_no_class_body() {
        let mut unit = Class::free_unit("Utils", GeneratorConfig::default().with_banner(false));
        unit.function("clamp", "int", "int v, int lo, int hi", "return v;");
        let text = declaration(&unit);
        assert!(!text.contains("class Utils"));
        assert!(text.contains("int clamp(int v, int lo, int hi);"));
        assert!(text.contains("#ifndef UTILS_H"));
    }
}
