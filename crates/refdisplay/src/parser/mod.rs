//! Placeholder pattern parser.
//!
//! Splits a pattern string into literal text and `[namespace:path]`
//! placeholders. Used by the anonymous-principal adjustment and by the
//! in-crate [`FieldTokens`](crate::FieldTokens) substitution service.

pub mod ast;
mod pattern;

pub use ast::*;
pub use pattern::parse_pattern;
