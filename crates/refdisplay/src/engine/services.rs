//! Interfaces of the collaborators the engine calls.

use std::error::Error;

/// Error type a substitution service may return.
pub type TokenError = Box<dyn Error + Send + Sync>;

/// The record a pattern is substituted against, keyed by namespace.
pub struct TokenContext<'a, R> {
    /// Placeholder namespace the record answers to.
    pub namespace: &'a str,
    pub record: &'a R,
}

/// Options passed through to the substitution service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOptions<'a> {
    /// Language code for localized values.
    pub language: &'a str,
    /// Remove placeholders that cannot be resolved instead of leaving them.
    pub clear_unresolved: bool,
}

/// The placeholder substitution service.
///
/// Implementations must leave text outside placeholders untouched.
pub trait TokenService<R> {
    /// Replaces the placeholders in `pattern` with values from the record.
    fn replace(
        &self,
        pattern: &str,
        context: TokenContext<'_, R>,
        options: &ReplaceOptions<'_>,
    ) -> Result<String, TokenError>;

    /// Returns true if the service has placeholders registered for `prefix`.
    fn is_namespace_known(&self, prefix: &str) -> bool;
}

/// Decides whether a record's label may be shown.
pub trait AccessCheck<R> {
    fn can_view_label(&self, record: &R) -> bool;
}

impl<R, F> AccessCheck<R> for F
where
    F: Fn(&R) -> bool,
{
    fn can_view_label(&self, record: &R) -> bool {
        self(record)
    }
}

/// Builds the URL of a record, if it has one.
pub trait UrlResolver<R> {
    fn record_url(&self, record: &R) -> Option<String>;
}

impl<R, F> UrlResolver<R> for F
where
    F: Fn(&R) -> Option<String>,
{
    fn record_url(&self, record: &R) -> Option<String> {
        self(record)
    }
}

/// HTML sanitization primitives.
pub trait HtmlSanitizer {
    /// Removes every tag, keeping text content.
    fn strip_all_tags(&self, text: &str) -> String;

    /// Keeps a safe subset of markup suitable for administrator input.
    fn filter_admin(&self, text: &str) -> String;
}

/// Builds help markup listing the placeholders available for custom text.
///
/// This collaborator is optional; hosts without one simply leave it unset
/// on the formatter.
pub trait TokenTreeBuilder {
    /// `namespaces` lists the record namespaces to show; `global_types`
    /// requests site-wide namespaces as well.
    fn build_help(&self, namespaces: &[&str], global_types: bool) -> String;
}
