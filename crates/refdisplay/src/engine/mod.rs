//! The reference display engine.
//!
//! This module resolves a configured style into a pattern (or a direct
//! computation), adapts it per record, hands it to the substitution service
//! and assembles the results into a render tree.

mod alias;
mod anonymous;
mod assembler;
mod error;
mod formatter;
mod prefix;
mod resolver;
mod services;

pub use alias::{rewrite, rewrite_with};
pub use anonymous::{adjust_for_anonymous, adjust_for_record};
pub use assembler::{assemble, build_node};
pub use error::RenderError;
pub use formatter::ReferenceFormatter;
pub use prefix::{prefix_is_known, resolve_prefix};
pub use resolver::{direct_title, resolve};
pub use services::{
    AccessCheck, HtmlSanitizer, ReplaceOptions, TokenContext, TokenError, TokenService,
    TokenTreeBuilder, UrlResolver,
};
