// Thu Oct 15 2026 - Alex

//! Helpers for comparing generated C++ in tests.

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Collapses whitespace; a single space survives only between two word
/// characters. Layout differences disappear, token boundaries do not.
pub fn squash(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && result.chars().last().map_or(false, is_word) && is_word(c) {
            result.push(' ');
        }
        pending_space = false;
        result.push(c);
    }
    result
}

/// Drops `//` and `/* */` comments; string literals are not considered.
pub fn without_comments(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let line = rest.find("//");
        let block = rest.find("/*");
        match (line, block) {
            (Some(l), b) if b.map_or(true, |b| l < b) => {
                result.push_str(&rest[..l]);
                rest = rest[l..].find('\n').map_or("", |n| &rest[l + n..]);
            }
            (_, Some(b)) => {
                result.push_str(&rest[..b]);
                rest = rest[b..].find("*/").map_or("", |n| &rest[b + n + 2..]);
            }
            _ => break,
        }
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash() {
        assert_eq!(squash("int  Foo::foo( int a )\n{\n    return 10;\n}"), "int Foo::foo(int a){return 10;}");
        assert_eq!(squash("Foo() { }"), squash("Foo() {\n}"));
    }

    #[test]
    fn test_without_comments() {
        assert_eq!(without_comments("a; // x\nb; /* y */ c;"), "a; \nb;  c;");
    }
}
