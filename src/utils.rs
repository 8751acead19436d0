//! String helpers shared by the builder.

/// Returns true if `s` is empty or consists only of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Parses a `property:value;property:value` declaration block.
///
/// Fragments that are blank, lack a colon, contain more than one colon or
/// have an empty key or value are dropped. Keys and values are trimmed.
pub fn parse_style_block(block: &str) -> Vec<(String, String)> {
    block
        .split(';')
        .filter(|fragment| !is_blank(fragment) && fragment.contains(':'))
        .filter_map(|fragment| {
            let mut parts = fragment.split(':');
            let key = parts.next()?.trim();
            let value = parts.next()?.trim();
            if parts.next().is_some() || key.is_empty() || value.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Splits a space-separated class list into trimmed, non-empty tokens.
pub fn split_classes(classes: &str) -> impl Iterator<Item = &str> {
    classes
        .split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Checks a tag name for characters that would break the opening tag.
pub fn is_valid_tag_name(tag: &str) -> bool {
    !tag.is_empty()
        && !tag
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '\'' | '"' | '='))
}
