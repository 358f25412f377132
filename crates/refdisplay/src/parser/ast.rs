//! Public AST types for placeholder patterns.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A parsed pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    pub segments: Vec<Segment>,
}

impl Pattern {
    /// Iterates over the placeholders in source order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Placeholder(placeholder) => write!(f, "{placeholder}")?,
            }
        }
        Ok(())
    }
}

/// A segment within a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output unchanged.
    Literal(String),
    /// A bracketed placeholder.
    Placeholder(Placeholder),
}

/// A placeholder such as `[node:author:display-name]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// The namespace before the first colon (`node`).
    pub namespace: String,
    /// Everything after the first colon (`author:display-name`).
    pub path: String,
}

impl Placeholder {
    /// The field name, without chained qualifiers (`author`).
    pub fn name(&self) -> &str {
        self.path.split(':').next().unwrap_or(&self.path)
    }
}

impl Display for Placeholder {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[{}:{}]", self.namespace, self.path)
    }
}
