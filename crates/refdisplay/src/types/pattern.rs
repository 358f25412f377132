use refdisplay_semantics::DirectStyle;

/// What to apply to every record of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPattern {
    /// Compute the title from record fields without substitution.
    Direct(DirectStyle),
    /// Hand this pattern to the substitution service.
    Templated(String),
}

impl ResolvedPattern {
    /// The pattern text, if this is a templated result.
    pub fn as_template(&self) -> Option<&str> {
        match self {
            ResolvedPattern::Templated(pattern) => Some(pattern),
            ResolvedPattern::Direct(_) => None,
        }
    }

    /// The direct computation, if this is a direct result.
    pub fn as_direct(&self) -> Option<DirectStyle> {
        match self {
            ResolvedPattern::Direct(style) => Some(*style),
            ResolvedPattern::Templated(_) => None,
        }
    }
}
