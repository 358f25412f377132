use refdisplay_semantics::prefix_exception;

use crate::engine::TokenService;

/// Maps a record type to its placeholder namespace.
///
/// Record types without an exception use their own id.
pub fn resolve_prefix(record_type: &str) -> &str {
    prefix_exception(record_type).unwrap_or(record_type)
}

/// Returns true if the substitution service knows the namespace.
///
/// An empty prefix is never known.
pub fn prefix_is_known<R>(prefix: &str, tokens: &dyn TokenService<R>) -> bool {
    !prefix.is_empty() && tokens.is_namespace_known(prefix)
}
