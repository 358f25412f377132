//! Pattern parser using winnow.
//!
//! The grammar is deliberately forgiving: anything that does not form a
//! well-shaped placeholder is literal text, so parsing never fails.

use super::ast::*;
use winnow::combinator::{alt, delimited, repeat, separated_pair};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// Parse a pattern string into literal and placeholder segments.
pub fn parse_pattern(input: &str) -> Pattern {
    let mut remaining = input;
    match pattern(&mut remaining) {
        Ok(parsed) if remaining.is_empty() => parsed,
        _ => Pattern {
            segments: vec![Segment::Literal(input.to_string())],
        },
    }
}

fn pattern(input: &mut &str) -> ModalResult<Pattern> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Pattern {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse `[namespace:path]`.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited('[', separated_pair(namespace, ':', path), ']')
        .map(|(namespace, path): (&str, &str)| {
            Segment::Placeholder(Placeholder {
                namespace: namespace.to_string(),
                path: path.to_string(),
            })
        })
        .parse_next(input)
}

fn namespace<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        !matches!(c, '[' | ']' | ':') && !c.is_whitespace()
    })
    .parse_next(input)
}

/// Everything up to the closing bracket, so qualifiers such as date
/// formats may contain spaces.
fn path<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !matches!(c, '[' | ']')).parse_next(input)
}
