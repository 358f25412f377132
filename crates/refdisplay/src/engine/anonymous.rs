//! Fixed values for placeholders the anonymous principal cannot resolve.

use std::borrow::Cow;

use refdisplay_semantics::{ANONYMOUS_EXACT, ANONYMOUS_QUALIFIED, AnonymousValue};

use crate::parser::{Segment, parse_pattern};
use crate::types::Record;

/// Adjusts `pattern` for one record.
///
/// Only anonymous records are touched, so a batch mixing anonymous and
/// authenticated users is handled per record.
pub fn adjust_for_record<'p, R: Record>(
    pattern: &'p str,
    record: &R,
    anonymous_name: &str,
) -> Cow<'p, str> {
    if record.is_anonymous() {
        Cow::Owned(adjust_for_anonymous(pattern, anonymous_name))
    } else {
        Cow::Borrowed(pattern)
    }
}

/// Replaces the user placeholders an anonymous principal has no value for.
///
/// Dates, picture and URL placeholders are matched with any trailing
/// qualifier (`[user:created:medium]`); identity placeholders must match
/// exactly.
pub fn adjust_for_anonymous(pattern: &str, anonymous_name: &str) -> String {
    let parsed = parse_pattern(pattern);
    let mut out = String::with_capacity(pattern.len());
    for segment in parsed.segments {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Placeholder(placeholder) => {
                let raw = placeholder.to_string();
                let replacement = ANONYMOUS_QUALIFIED
                    .iter()
                    .find(|(opening, _)| raw.starts_with(opening))
                    .or_else(|| ANONYMOUS_EXACT.iter().find(|(exact, _)| raw == *exact))
                    .map(|(_, value)| *value);
                match replacement {
                    Some(AnonymousValue::Literal(text)) => out.push_str(text),
                    Some(AnonymousValue::SiteAnonymousName) => out.push_str(anonymous_name),
                    None => out.push_str(&raw),
                }
            }
        }
    }
    out
}
