// Thu Oct 15 2026 - Alex

use crate::text::BracketError;

/// Returns the byte index of the bracket closing the one at `open`.
///
/// Only `(` and `{` are accepted as openers. Only the opener's own bracket
/// kind is counted; string and character literals are not skipped, so the
/// caller must already know the region is unambiguous.
pub fn matching_bracket(text: &str, open: usize) -> Result<usize, BracketError> {
    let rest = text
        .get(open..)
        .ok_or(BracketError::NotABracket { position: open })?;
    let opener = rest
        .chars()
        .next()
        .ok_or(BracketError::NotABracket { position: open })?;

    let closer = match opener {
        '(' => ')',
        '{' => '}',
        _ => return Err(BracketError::NotABracket { position: open }),
    };

    let mut depth = 0usize;
    for (offset, c) in rest.char_indices() {
        if c == opener {
            depth += 1;
        } else if c == closer {
            depth -= 1;
            if depth == 0 {
                return Ok(open + offset);
            }
        }
    }

    Err(BracketError::Unterminated { position: open })
}

/// Finds `needle` at or after `from` and returns its byte index.
pub fn find_from(text: &str, needle: char, from: usize) -> Option<usize> {
    text.get(from..)?.find(needle).map(|i| from + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_paren() {
        let text = "foo(a, (b), c) { }";
        assert_eq!(matching_bracket(text, 3), Ok(13));
    }

    #[test]
    fn test_matching_brace_nested() {
        let text = "{ if (x) { y(); } }";
        assert_eq!(matching_bracket(text, 0), Ok(text.len() - 1));
        assert_eq!(matching_bracket(text, 9), Ok(16));
    }

    #[test]
    fn test_unterminated_reports_start() {
        let err = matching_bracket("x = (a, (b)", 4).unwrap_err();
        assert_eq!(err, BracketError::Unterminated { position: 4 });
        assert_eq!(err.to_string(), "unterminated bracket at position 4");
    }

    #[test]
    fn test_not_a_bracket() {
        assert_eq!(
            matching_bracket("abc", 1),
            Err(BracketError::NotABracket { position: 1 })
        );
    }

    #[test]
    fn test_find_from() {
        assert_eq!(find_from("a{b{c", '{', 2), Some(3));
        assert_eq!(find_from("a{b", '{', 5), None);
    }
}
