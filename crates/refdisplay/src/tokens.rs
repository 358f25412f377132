//! A substitution service backed by [`Record::field`].

use std::collections::BTreeSet;

use crate::engine::{ReplaceOptions, TokenContext, TokenError, TokenService};
use crate::html::escape;
use crate::parser::{Segment, parse_pattern};
use crate::types::Record;

/// Resolves `[namespace:path]` placeholders from the record's own fields.
///
/// Only placeholders in the context namespace are looked up; values are
/// HTML-escaped. Placeholders of other namespaces, or paths the record has no
/// value for, are removed or kept verbatim according to
/// [`ReplaceOptions::clear_unresolved`].
#[derive(Debug, Clone, Default)]
pub struct FieldTokens {
    namespaces: BTreeSet<String>,
}

impl FieldTokens {
    /// Creates a service that recognizes `namespaces`.
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }
}

impl<R: Record> TokenService<R> for FieldTokens {
    fn replace(
        &self,
        pattern: &str,
        context: TokenContext<'_, R>,
        options: &ReplaceOptions<'_>,
    ) -> Result<String, TokenError> {
        let mut out = String::with_capacity(pattern.len());
        for segment in parse_pattern(pattern).segments {
            match segment {
                Segment::Literal(text) => out.push_str(&text),
                Segment::Placeholder(placeholder) => {
                    let value = (placeholder.namespace == context.namespace)
                        .then(|| context.record.field(&placeholder.path))
                        .flatten();
                    match value {
                        Some(value) => out.push_str(&escape(&value)),
                        None if options.clear_unresolved => {}
                        None => out.push_str(&placeholder.to_string()),
                    }
                }
            }
        }
        Ok(out)
    }

    fn is_namespace_known(&self, prefix: &str) -> bool {
        self.namespaces.contains(prefix)
    }
}
