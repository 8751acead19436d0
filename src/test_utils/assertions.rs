/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Asserts that every needle appears in `haystack`, each after the previous one.
///
/// # Panics
///
/// Panics if a needle is missing or out of order
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut rest = haystack;
    for needle in needles {
        match rest.find(needle) {
            Some(pos) => rest = rest.get(pos + needle.len()..).unwrap_or_default(),
            None => panic!("Expected '{}' in order within:\n{}", needle, haystack),
        }
    }
}
