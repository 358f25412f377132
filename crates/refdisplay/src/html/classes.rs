use std::sync::LazyLock;

use regex::Regex;

use crate::engine::HtmlSanitizer;

static DISALLOWED_CLASS_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^_a-zA-Z0-9\- ]").expect("constant regex pattern is valid"));

/// Turns administrator-entered class text into a class list.
///
/// Tags are stripped first, then every character outside `[A-Za-z0-9_- ]` is
/// dropped and the remainder is split on spaces. Empty pieces are discarded,
/// so input with nothing usable yields no classes.
pub fn sanitize_classes(raw: &str, sanitizer: &dyn HtmlSanitizer) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let stripped = sanitizer.strip_all_tags(raw);
    DISALLOWED_CLASS_CHARS
        .replace_all(&stripped, "")
        .split(' ')
        .filter(|class| !class.is_empty())
        .map(ToString::to_string)
        .collect()
}
