/// What: Strip a trailing `# ...` or `// ...` comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`.
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - A comment marker only counts when it starts the value or follows whitespace,
///   so URLs such as `http://host:5000` survive intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut cut = s.len();
    for (i, &b) in bytes.iter().enumerate() {
        let starts_comment = b == b'#' || (b == b'/' && bytes.get(i + 1) == Some(&b'/'));
        if starts_comment && (i == 0 || bytes[i - 1].is_ascii_whitespace()) {
            cut = i;
            break;
        }
    }
    s[..cut].trim()
}

/// Canonical form of a settings key: lowercase, with `.`, `-` and spaces as `_`.
pub(crate) fn canonical_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Interpret a config value as a boolean.
///
/// Output:
/// - `Some(true)` for `true/1/yes/on`, `Some(false)` for `false/0/no/off`, else `None`.
pub(crate) fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
