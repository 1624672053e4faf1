// Thu Oct 15 2026 - Alex

//! Member/accessor naming. A member field carries a one-character marker
//! (`mFoo`); the accessor stem is the rest of the name, uncapitalized.

pub fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn uncapitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `foo` -> `mFoo`
pub fn member_name(name: &str) -> String {
    format!("m{}", capitalized(name))
}

/// `mFoo` -> `foo`
pub fn plain_name(member: &str) -> String {
    let mut chars = member.chars();
    chars.next();
    uncapitalized(chars.as_str())
}

/// `mFoo` -> `setFoo`
pub fn setter_name(member: &str) -> String {
    format!("set{}", capitalized(&plain_name(member)))
}

/// `mFoo` -> `getFoo`
pub fn getter_name(member: &str) -> String {
    format!("get{}", capitalized(&plain_name(member)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_transforms() {
        assert_eq!(member_name("foo"), "mFoo");
        assert_eq!(plain_name("mFoo"), "foo");
        assert_eq!(setter_name("mFoo"), "setFoo");
        assert_eq!(getter_name("mFooBar"), "getFooBar");
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(capitalized(""), "");
        assert_eq!(plain_name("m"), "");
        assert_eq!(uncapitalized("URL"), "uRL");
    }
}
