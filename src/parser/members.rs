// Thu Oct 15 2026 - Alex

use crate::model::signature::split_declarator;
use crate::model::{
    AccessLevel, Constructor, Destructor, Member, Method, MethodFlags, Parameters, Signature,
};
use crate::parser::ParseError;
use crate::text::{dedent, find_from, matching_bracket, BracketError};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static METHOD_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?s)(.+?)\s*(?:\b(\w+)::)?(operator\s*(?:\(\)|[^\s(]+)|~?\w+)$").unwrap()
});

static HEAD_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(static|virtual|inline|explicit)\s+").unwrap());

static CONST_QUALIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bconst\b").unwrap());

static PURE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"=\s*0\s*;$").unwrap());

/// A function-like statement cut at its signature and body.
#[derive(Debug)]
struct FunctionParts<'a> {
    head: &'a str,
    signature: &'a str,
    /// Text between the closing parenthesis and the body (or the end).
    qualifiers: &'a str,
    body: Option<&'a str>,
}

fn signature_start(text: &str) -> Option<usize> {
    // `operator()` carries its own parentheses before the parameter list
    match text.find("operator()") {
        Some(at) => find_from(text, '(', at + "operator()".len()),
        None => text.find('('),
    }
}

fn function_parts(text: &str) -> Result<FunctionParts<'_>, ParseError> {
    let start =
        signature_start(text).ok_or_else(|| ParseError::InvalidMethod(text.to_string()))?;
    let end = matching_bracket(text, start)?;

    let (qualifiers, body) = match find_from(text, '{', end) {
        Some(open) => {
            // the statement already ends at the body's closing brace
            let close = text
                .rfind('}')
                .filter(|&close| close > open)
                .ok_or(BracketError::Unterminated { position: open })?;
            (&text[end + 1..open], Some(&text[open + 1..close]))
        }
        None => (&text[end + 1..], None),
    };

    Ok(FunctionParts {
        head: text[..start].trim(),
        signature: text[start + 1..end].trim(),
        qualifiers: qualifiers.trim(),
        body,
    })
}

fn strip_head_keywords(mut head: &str) -> (&str, MethodFlags) {
    let mut flags = MethodFlags::empty();
    while let Some(caps) = HEAD_KEYWORD.captures(head) {
        match &caps[1] {
            "static" => flags |= MethodFlags::STATIC,
            "virtual" => flags |= MethodFlags::VIRTUAL,
            _ => {}
        }
        head = &head[caps.get(0).map_or(0, |m| m.end())..];
    }
    (head, flags)
}

fn method_from_parts(
    text: &str,
    parts: &FunctionParts<'_>,
    access: AccessLevel,
) -> Result<Method, ParseError> {
    let (head, mut flags) = strip_head_keywords(parts.head);
    let caps = METHOD_HEAD
        .captures(head)
        .ok_or_else(|| ParseError::InvalidMethod(text.to_string()))?;

    if CONST_QUALIFIER.is_match(parts.qualifiers) {
        flags |= MethodFlags::CONST;
    }

    let body = parts.body.map(dedent).unwrap_or_default();
    let mut method = Method::new(&caps[3], caps[1].trim(), Signature::raw(parts.signature), &body);
    method.with_flags(flags).with_access(access);
    Ok(method)
}

/// Method with a braced body.
pub fn parse_method(text: &str, access: AccessLevel) -> Result<Method, ParseError> {
    let parts = function_parts(text)?;
    if parts.body.is_none() {
        return Err(ParseError::InvalidMethod(text.to_string()));
    }
    method_from_parts(text, &parts, access)
}

/// Bodiless declaration: a pure virtual method, or a signal when it sits
/// under a signals label.
pub fn parse_declaration(text: &str, access: AccessLevel) -> Result<Method, ParseError> {
    if PURE_SUFFIX.is_match(text) {
        let parts = function_parts(text)?;
        let mut method = method_from_parts(text, &parts, access)?;
        method.with_pure_virtual();
        return Ok(method);
    }

    if access.is_signal() {
        let parts = function_parts(text)?;
        return method_from_parts(text, &parts, access);
    }

    Err(ParseError::Unrecognized(text.to_string()))
}

/// Constructor with an optional initializer list.
pub fn parse_constructor(text: &str, access: AccessLevel) -> Result<Constructor, ParseError> {
    let parts = function_parts(text)?;
    let body = parts
        .body
        .ok_or_else(|| ParseError::Unrecognized(text.to_string()))?;

    // names and defaults must be recoverable even though the text is kept
    Parameters::parse(parts.signature)?;

    let mut constructor = Constructor::new(Signature::raw(parts.signature), &dedent(body));
    constructor.access = access;
    if parts.head.starts_with("explicit") {
        constructor.explicit();
    }

    if let Some(list) = parts.qualifiers.strip_prefix(':') {
        for (name, expression) in parse_init_list(list)? {
            constructor.init(&name, &expression);
        }
    }

    Ok(constructor)
}

/// `a(x), Base(y, z)` -> {a: x, Base: y, z}
pub fn parse_init_list(text: &str) -> Result<IndexMap<String, String>, ParseError> {
    let mut init = IndexMap::new();
    let mut rest = text.trim();

    loop {
        rest = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
        if rest.is_empty() {
            break;
        }
        let open = rest
            .find('(')
            .ok_or_else(|| ParseError::InvalidInitializer(text.trim().to_string()))?;
        let name = rest[..open].trim();
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == ':') {
            return Err(ParseError::InvalidInitializer(text.trim().to_string()));
        }
        let close = matching_bracket(rest, open)?;
        init.insert(name.to_string(), rest[open + 1..close].trim().to_string());
        rest = &rest[close + 1..];
    }

    Ok(init)
}

pub fn parse_destructor(text: &str) -> Result<Destructor, ParseError> {
    let parts = function_parts(text)?;
    let body = parts
        .body
        .ok_or_else(|| ParseError::Unrecognized(text.to_string()))?;
    let mut destructor = Destructor::new(&dedent(body));
    if parts.head.starts_with("virtual") {
        destructor.with_virtual();
    }
    Ok(destructor)
}

/// `type name [= value];` as a member without accessors.
pub fn parse_member(text: &str, access: AccessLevel) -> Result<Member, ParseError> {
    let declaration = text.trim().trim_end_matches(';').trim();
    let (declarator, value) = match declaration.split_once('=') {
        Some((declarator, value)) => (declarator.trim(), Some(value.trim())),
        None => (declaration, None),
    };
    let (ty, name) = split_declarator(declarator)
        .filter(|(ty, _)| !ty.is_empty())
        .ok_or_else(|| ParseError::InvalidMember(text.to_string()))?;

    let mut member = Member::bare(name, ty);
    member.with_access(access);
    if let Some(value) = value {
        member.with_value(value);
    }
    Ok(member)
}
