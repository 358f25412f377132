use refdisplay_semantics::ALIASES;

/// Rewrites generic placeholder names to the type-specific names.
pub fn rewrite(pattern: &str) -> String {
    rewrite_with(pattern, ALIASES)
}

/// Applies `table` as sequential literal replacements.
///
/// Each entry runs over the output of the previous one, so when two keys
/// overlap the earlier entry wins.
pub fn rewrite_with(pattern: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(pattern.to_string(), |current, &(from, to)| {
            if current.contains(from) {
                current.replace(from, to)
            } else {
                current
            }
        })
}
