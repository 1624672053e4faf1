// Thu Oct 15 2026 - Alex

use crate::config::GeneratorConfig;
use crate::model::{AccessSpecifier, Class, Definition, DefinitionScope};
use crate::parser::enums::parse_enum;
use crate::parser::members::{
    parse_constructor, parse_declaration, parse_destructor, parse_member, parse_method,
};
use crate::parser::statement::{statements, Statement};
use crate::parser::ParseError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bclass\s+(?:(\w+)\s+)?(\w+)\s*(?::([^{]*))?\{").unwrap()
});

static BASE_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(public|protected|private)\s+)?(\w+(?:::\w+)*)$").unwrap()
});

static METHOD_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^[^{]*\(.*\)[^{]*\{.*\}$").unwrap());

static DECLARATION_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^[^{]*\(.*\)[^{]*;$").unwrap());

static TYPEDEF_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^typedef\b").unwrap());

static ENUM_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^enum\b").unwrap());

/// Statement kinds of a class body, in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Constructor,
    Destructor,
    Method,
    Typedef,
    Enum,
    /// Bodiless function declaration: a signal or a pure virtual method.
    Declaration,
    Member,
}

/// Whether the first `(` opens a parameter list rather than sitting in a
/// member's initial value. `=` ahead of it only counts outside `operator`.
fn call_before_assignment(text: &str) -> bool {
    match text.find('(') {
        Some(open) => {
            let head = &text[..open];
            head.contains("operator") || !head.contains('=')
        }
        None => false,
    }
}

/// Matches statements against the class-name dependent shapes first.
struct ShapeMatcher<'a> {
    class_name: &'a str,
}

impl<'a> ShapeMatcher<'a> {
    fn new(class_name: &'a str) -> Self {
        Self { class_name }
    }

    /// `[prefix] Name (` with an optional leading keyword.
    fn opens_with(&self, text: &str, keyword: &str, marker: &str) -> bool {
        let text = match text.strip_prefix(keyword) {
            Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
            _ => text,
        };
        text.strip_prefix(marker)
            .and_then(|rest| rest.strip_prefix(self.class_name))
            .map_or(false, |rest| rest.trim_start().starts_with('('))
    }

    fn classify(&self, text: &str) -> Option<Shape> {
        if self.opens_with(text, "explicit", "") {
            Some(Shape::Constructor)
        } else if self.opens_with(text, "virtual", "~") {
            Some(Shape::Destructor)
        } else if METHOD_SHAPE.is_match(text) && call_before_assignment(text) {
            Some(Shape::Method)
        } else if TYPEDEF_SHAPE.is_match(text) {
            Some(Shape::Typedef)
        } else if ENUM_SHAPE.is_match(text) {
            Some(Shape::Enum)
        } else if DECLARATION_SHAPE.is_match(text) && call_before_assignment(text) {
            Some(Shape::Declaration)
        } else if text.ends_with(';') {
            Some(Shape::Member)
        } else {
            None
        }
    }
}

/// Class name, storage class and single base from the class header.
struct Header {
    name: String,
    storage_class: Option<String>,
    base: Option<(String, AccessSpecifier)>,
    body_start: usize,
}

fn parse_header(text: &str) -> Result<Header, ParseError> {
    let caps = CLASS_HEADER
        .captures(text)
        .ok_or(ParseError::MissingClassHeader)?;
    let body_start = caps.get(0).map_or(0, |m| m.end());

    let base = match caps.get(3).map(|m| m.as_str().trim()) {
        None | Some("") => None,
        Some(list) => {
            let base = BASE_CLASS
                .captures(list)
                .ok_or_else(|| ParseError::UnsupportedInheritance(list.to_string()))?;
            let access = base
                .get(1)
                .and_then(|m| AccessSpecifier::from_keyword(m.as_str()))
                .unwrap_or(AccessSpecifier::Private);
            Some((base[2].to_string(), access))
        }
    };

    Ok(Header {
        name: caps[2].to_string(),
        storage_class: caps.get(1).map(|m| m.as_str().to_string()),
        base,
        body_start,
    })
}

/// Reconstructs a class model from class source text.
///
/// Fails on the first statement that matches no known shape, carrying the
/// statement text verbatim.
pub fn parse_class(text: &str, config: &GeneratorConfig) -> Result<Class, ParseError> {
    let header = parse_header(text)?;
    let mut class = Class::new(&header.name, config.clone());

    if let Some(storage) = &header.storage_class {
        class.storage_class(storage);
    }
    if let Some((base, access)) = &header.base {
        class.inherits(base, *access);
    }

    let (body, object_marker) = statements(&text[header.body_start..]);
    class.qobject(object_marker);

    let matcher = ShapeMatcher::new(&header.name);
    for statement in body {
        apply_statement(&mut class, &matcher, &statement)?;
    }

    Ok(class)
}

fn apply_statement(
    class: &mut Class,
    matcher: &ShapeMatcher<'_>,
    statement: &Statement,
) -> Result<(), ParseError> {
    let Statement { text, access } = statement;
    let shape = matcher
        .classify(text)
        .ok_or_else(|| ParseError::Unrecognized(text.clone()))?;
    debug!("{:?} ({}): {}", shape, access, first_line(text));

    match shape {
        Shape::Constructor => {
            class.constructors.push(parse_constructor(text, *access)?);
        }
        Shape::Destructor => {
            class.destructor = Some(parse_destructor(text)?);
        }
        Shape::Method => {
            class.add_method(parse_method(text, *access)?);
        }
        Shape::Declaration => {
            class.add_method(parse_declaration(text, *access)?);
        }
        Shape::Typedef => {
            class.definition(text, DefinitionScope::Class);
        }
        Shape::Enum => {
            let mut definition = Definition::new(&format!("{};", text), DefinitionScope::Class);
            definition.enumeration = Some(parse_enum(&class.name, text)?);
            class.definitions.push(definition);
        }
        Shape::Member => {
            let member = parse_member(text, *access)?;
            class.members.push(member);
        }
    }

    Ok(())
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccessLevel;

    fn parse(text: &str) -> Class {
        parse_class(text, &GeneratorConfig::default()).unwrap()
    }

    #[test]
    fn test_header_with_storage_class_and_base() {
        let class = parse("class EXPORT Foo : public Bar {\n};");
        assert_eq!(class.name, "Foo");
        assert_eq!(class.storage_class.as_deref(), Some("EXPORT"));
        assert_eq!(class.inheritance.clause(), ": public Bar");
    }

    #[test]
    fn test_default_base_access_is_private() {
        let class = parse("class Foo : Bar {};");
        assert_eq!(class.inheritance.bases[0].access, AccessSpecifier::Private);
    }

    #[test]
    fn test_multiple_inheritance_is_rejected() {
        let err = parse_class("class Foo : public A, public B {};", &GeneratorConfig::default())
            .unwrap_err();
        assert_eq!(err, ParseError::UnsupportedInheritance("public A, public B".to_string()));
    }

    #[test]
    fn test_missing_header() {
        let err = parse_class("struct Foo {};", &GeneratorConfig::default()).unwrap_err();
        assert_eq!(err, ParseError::MissingClassHeader);
    }

    #[test]
    fn test_classifies_every_shape() {
        let class = parse(
            "class Foo : public QObject {
                Q_OBJECT
            public:
                typedef QList<int> List;
                enum Mode { Fast, Slow = 3 };
                explicit Foo(int a) : mA(a) {}
                virtual ~Foo() {}
                int a() const { return mA; }
                virtual void run() = 0;
            signals:
                void changed(int a);
            protected:
                int mA;
            };",
        );
        assert_eq!(class.object_marker.as_deref(), Some("Q_OBJECT"));
        assert_eq!(class.definitions.len(), 2);
        assert_eq!(class.definitions[0].value, "typedef QList<int> List;");
        assert_eq!(class.definitions[1].value, "enum Mode { Fast, Slow = 3 };");
        let mode = class.definitions[1].enumeration.as_ref().unwrap();
        assert_eq!(mode.values["Slow"], "Foo::Slow");
        assert!(class.constructors[0].explicit);
        assert!(class.destructor.as_ref().unwrap().is_virtual);
        assert_eq!(class.methods.len(), 3);
        assert!(class.find_method("a").unwrap().is_const());
        assert!(class.find_method("run").unwrap().is_pure_virtual());
        assert!(class.find_method("changed").unwrap().is_signal());
        assert_eq!(class.members[0].access, AccessLevel::Protected);
    }

    #[test]
    fn test_literal_braces_in_bodies() {
        let class = parse(
            "class Foo {
            public:
                QString open() const { return \"{\"; }
                bool close(char c) const { if (c == '}') { return true; } return false; }
            };",
        );
        assert_eq!(class.methods.len(), 2);
        assert_eq!(class.methods[0].body, "return \"{\";");
        assert_eq!(class.methods[1].body, "if (c == '}') { return true; } return false;");
    }

    #[test]
    fn test_member_values_with_calls() {
        let class = parse(
            "class Foo {
            protected:
                QStringList mItems = QStringList();
                QString mName = QString(\"a(b)\");
            };",
        );
        assert_eq!(class.members.len(), 2);
        assert_eq!(class.members[0].value.as_deref(), Some("QStringList()"));
        assert_eq!(class.members[1].value.as_deref(), Some("QString(\"a(b)\")"));
        assert!(class.methods.is_empty());
    }

    #[test]
    fn test_call_before_assignment() {
        assert!(call_before_assignment("void run(int a = 1);"));
        assert!(call_before_assignment("virtual void run() = 0;"));
        assert!(call_before_assignment("bool operator==(const Foo& other);"));
        assert!(!call_before_assignment("QStringList mItems = QStringList();"));
        assert!(!call_before_assignment("int mA;"));
    }

    #[test]
    fn test_access_defaults_to_private() {
        let class = parse("class Foo { int mA; public: int mB; };");
        assert_eq!(class.members[0].access, AccessLevel::Private);
        assert_eq!(class.members[1].access, AccessLevel::Public);
    }

    #[test]
    fn test_unrecognized_statement_is_verbatim() {
        let err = parse_class("class Foo { template<typename T> T get() };", &GeneratorConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::Unrecognized("template<typename T> T get()".to_string())
        );
    }
}
