//! The public entry point tying the engine to its collaborators.

use bon::Builder;
use refdisplay_semantics::{RecordKind, StyleEntry};
use tracing::debug;

use crate::engine::{
    AccessCheck, HtmlSanitizer, RenderError, ReplaceOptions, TokenContext, TokenService,
    TokenTreeBuilder, UrlResolver, adjust_for_record, assemble, direct_title, prefix_is_known,
    resolve, resolve_prefix,
};
use crate::html::AdminHtmlFilter;
use crate::settings::{DisplaySettings, RawSettings, available_styles};
use crate::types::{Record, RenderTree, ResolvedPattern};

/// Renders record references for one kind of field.
///
/// A formatter holds no per-render state, so one instance can serve any
/// number of render passes, including concurrent ones when its
/// collaborators allow it.
///
/// # Example
///
/// ```
/// use refdisplay::{FieldTokens, RawSettings, Record, ReferenceFormatter};
///
/// struct Page(u32, &'static str);
///
/// impl Record for Page {
///     fn id(&self) -> String {
///         self.0.to_string()
///     }
///     fn label(&self) -> Option<String> {
///         Some(self.1.to_string())
///     }
///     fn field(&self, path: &str) -> Option<String> {
///         match path {
///             "nid" => Some(self.0.to_string()),
///             "title" => Some(self.1.to_string()),
///             _ => None,
///         }
///     }
/// }
///
/// let tokens = FieldTokens::new(["node"]);
/// let access = |_: &Page| true;
/// let urls = |page: &Page| Some(format!("/node/{}", page.0));
/// let formatter = ReferenceFormatter::<Page>::builder()
///     .tokens(&tokens)
///     .access(&access)
///     .urls(&urls)
///     .build();
///
/// let settings = RawSettings::builder()
///     .entity_reference_style("title-id")
///     .show_link(false)
///     .build();
/// let tree = formatter
///     .render(&[Some(Page(7, "About"))], &settings, "node")
///     .unwrap();
/// assert_eq!(tree.plain_text(), "About (7)");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct ReferenceFormatter<'a, R> {
    /// Placeholder substitution service.
    tokens: &'a dyn TokenService<R>,

    /// Label visibility check.
    access: &'a dyn AccessCheck<R>,

    /// Record URL construction.
    urls: &'a dyn UrlResolver<R>,

    /// Markup sanitizer for classes, custom text and separators.
    #[builder(default = &AdminHtmlFilter)]
    sanitizer: &'a dyn HtmlSanitizer,

    /// Placeholder help builder, when the host has one.
    tree_builder: Option<&'a dyn TokenTreeBuilder>,

    /// Which style catalog the field uses.
    #[builder(default)]
    kind: RecordKind,

    /// Site-wide display name of the anonymous principal.
    #[builder(default = "Anonymous".to_string())]
    anonymous_name: String,

    /// Language passed to the substitution service.
    #[builder(default = "en".to_string())]
    language: String,
}

impl<R: Record> ReferenceFormatter<'_, R> {
    /// Validates raw settings against this formatter's catalog.
    pub fn sanitize_settings(&self, raw: &RawSettings) -> DisplaySettings {
        DisplaySettings::sanitize(raw, self.kind, self.sanitizer)
    }

    /// Renders `records` with settings as stored by the host.
    ///
    /// Settings are sanitized once here and the typed result is used for the
    /// whole pass. `None` entries stand for references whose record no longer
    /// exists.
    pub fn render(
        &self,
        records: &[Option<R>],
        raw: &RawSettings,
        record_type: &str,
    ) -> Result<RenderTree, RenderError> {
        if records.iter().all(Option::is_none) {
            return Ok(RenderTree::Empty);
        }
        let settings = self.sanitize_settings(raw);
        self.render_with_settings(records, &settings, record_type)
    }

    /// Renders `records` with already sanitized settings.
    pub fn render_with_settings(
        &self,
        records: &[Option<R>],
        settings: &DisplaySettings,
        record_type: &str,
    ) -> Result<RenderTree, RenderError> {
        let pattern = self.resolve(settings, record_type);
        let namespace = resolve_prefix(record_type);
        assemble(records, settings, self.access, self.urls, |record| {
            self.title_for(record, &pattern, namespace)
        })
    }

    /// Resolves the pattern for one pass.
    pub fn resolve(&self, settings: &DisplaySettings, record_type: &str) -> ResolvedPattern {
        resolve(
            settings.style,
            record_type,
            &settings.custom_text,
            self.sanitizer,
            self.tokens,
        )
    }

    /// Produces the title of one record.
    pub fn title_for(
        &self,
        record: &R,
        pattern: &ResolvedPattern,
        namespace: &str,
    ) -> Result<String, RenderError> {
        let template = match pattern {
            ResolvedPattern::Direct(style) => return Ok(direct_title(record, *style)),
            ResolvedPattern::Templated(template) => template,
        };
        let adjusted = adjust_for_record(template, record, &self.anonymous_name);
        let options = ReplaceOptions {
            language: &self.language,
            clear_unresolved: true,
        };
        let context = TokenContext { namespace, record };
        self.tokens
            .replace(&adjusted, context, &options)
            .map_err(|source| RenderError::Substitution {
                pattern: adjusted.into_owned(),
                source,
            })
    }

    /// Styles a configuration form should offer for `record_type`.
    pub fn available_styles(&self, record_type: &str) -> Vec<&'static StyleEntry> {
        let known = prefix_is_known(resolve_prefix(record_type), self.tokens);
        available_styles(self.kind, known)
    }

    /// Help markup listing the placeholders usable in custom text.
    ///
    /// Returns `None` when the host has no placeholder help builder.
    pub fn custom_text_help(&self, record_type: &str) -> Option<String> {
        let builder = self.tree_builder?;
        let prefix = resolve_prefix(record_type);
        if prefix_is_known(prefix, self.tokens) {
            Some(builder.build_help(&[prefix], false))
        } else {
            debug!(record_type, "no placeholder namespace, offering global placeholders");
            Some(builder.build_help(&[], true))
        }
    }
}
