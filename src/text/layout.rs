// Thu Oct 15 2026 - Alex

/// Removes the common leading indentation and surrounding blank lines.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return String::new();
    };
    let lines = &lines[first..=last];

    // the first line of an inline body often starts right after `{`
    let margin = lines
        .iter()
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.trim_start()
            } else if line.len() >= margin && line[..margin].trim().is_empty() {
                &line[margin..]
            } else {
                line.trim_start()
            }
        })
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefixes each non-empty line with `width` spaces.
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dedented body indented one level, or nothing for an empty body.
pub fn block_body(body: &str) -> String {
    let body = dedent(body);
    if body.is_empty() {
        body
    } else {
        indent(&body, 4)
    }
}
