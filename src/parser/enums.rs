// Thu Oct 15 2026 - Alex

use crate::model::EnumDefinition;
use crate::parser::ParseError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static ENUM_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\benum\s+(?:(class|struct)\s+)?(\w+)?\s*(?::\s*[\w:\s]+?)?\s*\{(.*)\}").unwrap()
});

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{}::{}", scope, name)
    }
}

/// Identifiers of an enum body in order. Comments and explicit values are
/// skipped; only the identifier before `=` is kept.
fn enum_identifiers(body: &str) -> Vec<String> {
    let mut identifiers = Vec::new();
    let mut current = String::new();
    let mut line_comment = false;
    let mut block_comment = false;
    let mut in_value = false;
    let mut depth = 0i32;
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if line_comment {
            line_comment = c != '\n';
            continue;
        }
        if block_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                block_comment = false;
            }
            continue;
        }
        match c {
            '/' if chars.peek() == Some(&'/') => line_comment = true,
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                block_comment = true;
            }
            '(' => depth += 1,
            ')' => depth -= 1,
            '=' if depth == 0 => in_value = true,
            ',' if depth == 0 => {
                identifiers.push(std::mem::take(&mut current));
                in_value = false;
            }
            _ if !in_value => current.push(c),
            _ => {}
        }
    }
    identifiers.push(current);

    identifiers
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect()
}

/// Parses one `enum Name { ... }` block into bare -> qualified identifiers.
/// The enum name itself is the first entry. Values of a scoped enum are
/// qualified with the enum name as well.
pub fn parse_enum(namespace: &str, text: &str) -> Result<EnumDefinition, ParseError> {
    let caps = ENUM_HEADER
        .captures(text)
        .ok_or_else(|| ParseError::InvalidEnum(text.trim().to_string()))?;

    let scoped = caps.get(1).is_some();
    let name = caps.get(2).map(|m| m.as_str().to_string());
    let value_scope = match (&name, scoped) {
        (Some(name), true) => qualify(namespace, name),
        _ => namespace.to_string(),
    };

    let mut values = IndexMap::new();
    if let Some(name) = &name {
        values.insert(name.clone(), qualify(namespace, name));
    }
    for identifier in enum_identifiers(&caps[3]) {
        let qualified = qualify(&value_scope, &identifier);
        values.insert(identifier, qualified);
    }

    Ok(EnumDefinition { name, values })
}

/// Parses a sequence of `;`-terminated enum blocks and merges the tables in
/// order; later entries overwrite earlier ones with the same identifier.
pub fn parse_enum_blocks(namespace: &str, text: &str) -> Result<IndexMap<String, String>, ParseError> {
    let mut table = IndexMap::new();
    for block in text.split(';').filter(|b| !b.trim().is_empty()) {
        let definition = parse_enum(namespace, block)?;
        table.extend(definition.values);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enum_skips_values_and_comments() {
        let text = "enum MouseButton {
            NoButton = 0x00000000,
            MidButton = 0x00000004, // ### remove me, later
            MiddleButton = MidButton,
            /* reserved, maybe */ AllButtons = 0x07ffffff,
        }";
        let parsed = parse_enum("Qt", text).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("MouseButton"));
        let keys: Vec<&str> = parsed.values.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["MouseButton", "NoButton", "MidButton", "MiddleButton", "AllButtons"]
        );
        assert_eq!(parsed.values["MidButton"], "Qt::MidButton");
    }

    #[test]
    fn test_scoped_enum_values() {
        let parsed = parse_enum("Foo", "enum class Color : int { Red, Green = 2 }").unwrap();
        assert_eq!(parsed.values["Color"], "Foo::Color");
        assert_eq!(parsed.values["Green"], "Foo::Color::Green");
    }

    #[test]
    fn test_parse_enum_blocks() {
        let text = "enum Orientation { Horizontal = 0x1, Vertical = 0x2 };
                    enum SortOrder { AscendingOrder, DescendingOrder };";
        let table = parse_enum_blocks("Qt", text).unwrap();
        assert_eq!(table.len(), 6);
        assert_eq!(table["DescendingOrder"], "Qt::DescendingOrder");
        assert_eq!(table.get_index(0).map(|(k, _)| k.as_str()), Some("Orientation"));
    }

    #[test]
    fn test_invalid_enum() {
        assert!(matches!(parse_enum("Qt", "struct Foo {}"), Err(ParseError::InvalidEnum(_))));
    }
}
