// Thu Oct 15 2026 - Alex

use crate::model::AccessLevel;
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(public|protected|private|signals|Q_SIGNALS)(\s+(?:slots|Q_SLOTS))?\s*:").unwrap()
});

static OBJECT_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Q_OBJECT\b").unwrap());

/// A top-level statement of a class body with the access level in
/// effect where it appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub access: AccessLevel,
}

#[derive(Debug, Default)]
struct ScanState {
    depth: i32,
    in_string: bool,
    in_char: bool,
    escaped: bool,
    line_comment: bool,
    block_comment: bool,
}

/// Splits a class body (the text after the opening brace) into top-level
/// statements. A statement ends at a `;` or a closing `}` at depth 0; the
/// brace closing the class ends the scan. Comments outside bodies are
/// dropped and literals never change the depth.
pub fn split_statements(body: &str) -> Vec<String> {
    let mut state = ScanState::default();
    let mut statements = Vec::new();
    let mut buf = String::new();
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        let keep = state.depth > 0;

        if state.line_comment {
            if c == '\n' {
                state.line_comment = false;
                buf.push(c);
            } else if keep {
                buf.push(c);
            }
            continue;
        }

        if state.block_comment {
            if keep {
                buf.push(c);
            }
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                if keep {
                    buf.push('/');
                } else {
                    buf.push(' ');
                }
                state.block_comment = false;
            }
            continue;
        }

        if state.in_string || state.in_char {
            buf.push(c);
            if state.escaped {
                state.escaped = false;
            } else if c == '\\' {
                state.escaped = true;
            } else if c == '"' && state.in_string {
                state.in_string = false;
            } else if c == '\'' && state.in_char {
                state.in_char = false;
            }
            continue;
        }

        match c {
            '/' if chars.peek() == Some(&'/') => {
                state.line_comment = true;
                if keep {
                    buf.push(c);
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                state.block_comment = true;
                if keep {
                    buf.push_str("/*");
                }
            }
            '"' => {
                state.in_string = true;
                buf.push(c);
            }
            '\'' => {
                state.in_char = true;
                buf.push(c);
            }
            '{' => {
                state.depth += 1;
                buf.push(c);
            }
            '}' => {
                state.depth -= 1;
                if state.depth < 0 {
                    break;
                }
                buf.push(c);
                if state.depth == 0 {
                    statements.push(std::mem::take(&mut buf));
                }
            }
            ';' => {
                buf.push(c);
                if state.depth == 0 {
                    statements.push(std::mem::take(&mut buf));
                }
            }
            _ => buf.push(c),
        }
    }

    if !buf.trim().is_empty() {
        statements.push(buf);
    }

    statements
}

/// Result of stripping the prefixes of one statement.
#[derive(Debug)]
pub struct Prefixes<'a> {
    pub rest: &'a str,
    pub access: AccessLevel,
    pub object_marker: bool,
}

/// Strips leading access labels, `Q_OBJECT` and stray semicolons. The
/// last label seen wins.
pub fn strip_prefixes(text: &str, mut access: AccessLevel) -> Prefixes<'_> {
    let mut rest = text;
    let mut object_marker = false;

    loop {
        rest = rest.trim_start_matches(|c: char| c == ';' || c.is_whitespace());

        if let Some(found) = OBJECT_MARKER.find(rest) {
            object_marker = true;
            rest = &rest[found.end()..];
            continue;
        }

        if let Some(caps) = LEADING_LABEL.captures(rest) {
            let end = caps.get(0).map_or(0, |m| m.end());
            let label = match caps.get(2) {
                Some(suffix) => format!("{} {}", &caps[1], suffix.as_str().trim()),
                None => caps[1].to_string(),
            };
            if let (false, Some(level)) = (rest[end..].starts_with(':'), AccessLevel::from_label(&label)) {
                access = level;
                rest = &rest[end..];
                continue;
            }
        }

        break;
    }

    Prefixes {
        rest: rest.trim_end(),
        access,
        object_marker,
    }
}

/// Scans a class body into statements, tracking access labels. Returns the
/// statements and whether the body carried the `Q_OBJECT` marker.
pub fn statements(body: &str) -> (Vec<Statement>, bool) {
    let mut access = AccessLevel::Private;
    let mut object_marker = false;
    let mut result = Vec::new();

    for raw in split_statements(body) {
        let prefixes = strip_prefixes(&raw, access);
        access = prefixes.access;
        object_marker |= prefixes.object_marker;
        if !prefixes.rest.is_empty() {
            result.push(Statement {
                text: prefixes.rest.to_string(),
                access,
            });
        }
    }

    (result, object_marker)
}
