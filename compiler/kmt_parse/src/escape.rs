//! String literal unescaping.

/// Strip the quotes from a string token and resolve escapes.
///
/// `\n`, `\t`, `\"` and `\\` map to their characters; any other escaped
/// character stands for itself. A backslash with nothing after it is kept.
pub(crate) fn unescape_string(token_text: &str) -> String {
    let inner = token_text.strip_prefix('"').unwrap_or(token_text);
    let inner = inner.strip_suffix('"').unwrap_or(inner);

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}
