// Thu Oct 15 2026 - Alex

/// How a type name is used at one occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    /// Followed by `*` or `&`; a forward declaration is enough.
    Indirect,
    /// Anything else, including template arguments and `Name::`.
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeUse<'a> {
    pub name: &'a str,
    pub usage: Usage,
}

fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_identifier_part(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Skips a string or char literal starting at `start`; returns the index
/// after its closing quote.
fn skip_literal(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Tokenizes C++ text into identifiers with their usage kind. Literals and
/// comments are skipped.
pub fn scan(text: &str) -> Vec<TypeUse<'_>> {
    let bytes = text.as_bytes();
    let mut uses = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'"' || b == b'\'' {
            i = skip_literal(bytes, i);
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            i = text[i..].find('\n').map_or(bytes.len(), |n| i + n);
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
            i = text[i + 2..].find("*/").map_or(bytes.len(), |n| i + n + 4);
        } else if is_identifier_start(b) {
            let start = i;
            while i < bytes.len() && is_identifier_part(bytes[i]) {
                i += 1;
            }
            let next = bytes[i..].iter().find(|c| !c.is_ascii_whitespace());
            let usage = match next {
                Some(b'*') | Some(b'&') => Usage::Indirect,
                _ => Usage::Value,
            };
            uses.push(TypeUse {
                name: &text[start..i],
                usage,
            });
        } else if b.is_ascii_digit() {
            while i < bytes.len() && is_identifier_part(bytes[i]) {
                i += 1;
            }
        } else {
            i += 1;
        }
    }

    uses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage_of<'a>(uses: &[TypeUse<'a>], name: &str) -> Vec<Usage> {
        uses.iter().filter(|u| u.name == name).map(|u| u.usage).collect()
    }

    #[test]
    fn test_usage_kinds() {
        let uses = scan("void f(QString* a, const QWidget & w, QList<QPoint> l, QString::SectionFlag s);");
        assert_eq!(usage_of(&uses, "QString"), vec![Usage::Indirect, Usage::Value]);
        assert_eq!(usage_of(&uses, "QWidget"), vec![Usage::Indirect]);
        assert_eq!(usage_of(&uses, "QList"), vec![Usage::Value]);
        assert_eq!(usage_of(&uses, "QPoint"), vec![Usage::Value]);
    }

    #[test]
    fn test_literals_and_comments_are_skipped() {
        let uses = scan("// QFile here\nqDebug() << \"QString\" << 'Q'; /* QMap */ int x2 = 0x1F;");
        let names: Vec<&str> = uses.iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["qDebug", "int", "x2"]);
    }
}
