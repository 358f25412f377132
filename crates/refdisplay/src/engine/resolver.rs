//! Style-to-pattern resolution.

use refdisplay_semantics::{DirectStyle, PREFIX_MARKER, StyleEntry};
use tracing::{debug, trace};

use crate::engine::{HtmlSanitizer, TokenService, prefix_is_known, resolve_prefix, rewrite};
use crate::html::escape;
use crate::types::{Record, ResolvedPattern};

/// Direct computation used whenever a style cannot be honored.
const FALLBACK_DIRECT: DirectStyle = DirectStyle::Label;

/// Resolves the pattern applied to every record of one render pass.
///
/// - Custom style: the administrator text, markup-filtered, with no prefix
///   or alias processing. Empty text falls back to the label.
/// - Unknown namespace: the identifier or the label for styles showing only
///   one of them, the label for everything else.
/// - Otherwise: the catalog template with the prefix filled in and generic
///   names rewritten.
pub fn resolve<R>(
    style: &StyleEntry,
    record_type: &str,
    custom_text: &str,
    sanitizer: &dyn HtmlSanitizer,
    tokens: &dyn TokenService<R>,
) -> ResolvedPattern {
    if style.is_custom() {
        let filtered = if custom_text.is_empty() {
            String::new()
        } else {
            sanitizer.filter_admin(custom_text)
        };
        if filtered.is_empty() {
            debug!(record_type, "custom text is empty, showing the label");
            return ResolvedPattern::Direct(FALLBACK_DIRECT);
        }
        return ResolvedPattern::Templated(filtered);
    }

    let prefix = resolve_prefix(record_type);
    if !prefix_is_known(prefix, tokens) {
        let direct = match style.direct {
            Some(direct @ (DirectStyle::Id | DirectStyle::Label)) => direct,
            Some(DirectStyle::LabelId) | None => {
                debug!(
                    style = style.id,
                    record_type, "placeholder namespace unknown, downgrading style to the label"
                );
                FALLBACK_DIRECT
            }
        };
        return ResolvedPattern::Direct(direct);
    }

    let Some(template) = style.template else {
        return ResolvedPattern::Direct(style.direct.unwrap_or(FALLBACK_DIRECT));
    };
    let pattern = rewrite(&template.replace(PREFIX_MARKER, prefix));
    trace!(style = style.id, prefix, pattern = %pattern, "resolved pattern");
    ResolvedPattern::Templated(pattern)
}

/// Computes a title from record fields. The result is escaped markup.
pub fn direct_title<R: Record>(record: &R, style: DirectStyle) -> String {
    let label = || escape(&record.label().unwrap_or_default());
    match style {
        DirectStyle::Id => escape(&record.id()),
        DirectStyle::Label => label(),
        DirectStyle::LabelId => format!("{} ({})", label(), escape(&record.id())),
    }
}
