use refdisplay_semantics::{
    DEFAULT_LIST_SEPARATOR, LEGACY_LINK_STYLE, LinkTopic, ListStyle, OpenLinkIn, RecordKind,
    StyleEntry,
};
use strsim::levenshtein;
use thiserror::Error;
use tracing::{debug, trace};

use crate::engine::HtmlSanitizer;
use crate::html::sanitize_classes;
use crate::settings::{RawSettings, Scalar};

/// Settings drift repaired while sanitizing.
///
/// None of these stop a render; they are kept so a configuration UI can tell
/// the administrator what was stored and what is used instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsWarning {
    #[error("unknown style '{value}', using '{replacement}'{}", did_you_mean(.suggestions))]
    UnknownStyle {
        value: String,
        replacement: &'static str,
        suggestions: Vec<&'static str>,
    },

    #[error("legacy style '{value}' replaced by '{replacement}' with a link")]
    LegacyStyle {
        value: String,
        replacement: &'static str,
    },

    #[error("unknown link target '{value}', opening in the same tab")]
    UnknownOpenLinkIn { value: String },

    #[error("link relation '{value}' is not available here, using none")]
    UnknownLinkTopic { value: String },

    #[error("unknown list style '{value}', using a single line")]
    UnknownListStyle { value: String },
}

fn did_you_mean(suggestions: &[&str]) -> String {
    match suggestions.first() {
        Some(first) => format!(" (did you mean '{first}'?)"),
        None => String::new(),
    }
}

/// Validated display settings for one field.
///
/// Every value here is usable as-is: styles exist in the catalog for
/// [`DisplaySettings::kind`], vocabularies hold known values, classes and the
/// separator are sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub kind: RecordKind,
    pub style: &'static StyleEntry,
    /// Administrator pattern, unfiltered; filtered when resolved.
    pub custom_text: String,
    pub classes: Vec<String>,
    pub show_link: bool,
    pub open_link_in: OpenLinkIn,
    pub link_topic: LinkTopic,
    pub list_style: ListStyle,
    /// Filtered separator markup for single-line lists.
    pub list_separator: String,
    pub warnings: Vec<SettingsWarning>,
}

impl DisplaySettings {
    /// The settings a new field starts with.
    pub fn defaults(kind: RecordKind) -> Self {
        Self {
            kind,
            style: kind.default_style(),
            custom_text: String::new(),
            classes: Vec::new(),
            show_link: true,
            open_link_in: OpenLinkIn::default(),
            link_topic: LinkTopic::default(),
            list_style: ListStyle::default(),
            list_separator: DEFAULT_LIST_SEPARATOR.to_string(),
            warnings: Vec::new(),
        }
    }

    /// Validates stored settings, repairing anything that drifted.
    ///
    /// Missing values take their defaults silently. Values that are present
    /// but unusable also take their defaults, and leave a
    /// [`SettingsWarning`] behind.
    pub fn sanitize(raw: &RawSettings, kind: RecordKind, sanitizer: &dyn HtmlSanitizer) -> Self {
        let mut settings = Self::defaults(kind);

        if let Some(show_link) = &raw.show_link {
            settings.show_link = show_link.is_truthy();
        }

        if let Some(value) = raw.style_for(kind).and_then(scalar_text) {
            trace!(key = kind.style_setting_key(), %value, "stored style");
            settings.style = settings.sanitize_style(value);
        }

        if let Some(text) = raw.title_custom_text.as_ref().and_then(Scalar::as_text) {
            text.clone_into(&mut settings.custom_text);
        }

        if let Some(text) = raw.classes.as_ref().and_then(Scalar::as_text) {
            settings.classes = sanitize_classes(text, sanitizer);
        }

        if let Some(value) = raw.open_link_in.as_ref().and_then(scalar_text) {
            match OpenLinkIn::parse(&value) {
                Some(open_link_in) => settings.open_link_in = open_link_in,
                None => settings.warn(SettingsWarning::UnknownOpenLinkIn { value }),
            }
        }

        if let Some(value) = raw.link_topic.as_ref().and_then(scalar_text) {
            match LinkTopic::parse(&value).filter(|topic| kind.link_topics().contains(topic)) {
                Some(topic) => settings.link_topic = topic,
                None => settings.warn(SettingsWarning::UnknownLinkTopic { value }),
            }
        }

        if let Some(value) = raw.list_style.as_ref().and_then(scalar_text) {
            match ListStyle::parse(&value) {
                Some(list_style) => settings.list_style = list_style,
                None => settings.warn(SettingsWarning::UnknownListStyle { value }),
            }
        }

        if let Some(text) = raw.list_separator.as_ref().and_then(Scalar::as_text) {
            settings.list_separator = sanitizer.filter_admin(text);
        }

        settings
    }

    /// Warnings collected while sanitizing.
    pub fn warnings(&self) -> &[SettingsWarning] {
        &self.warnings
    }

    fn sanitize_style(&mut self, value: String) -> &'static StyleEntry {
        let default = self.kind.default_style();
        if self.kind == RecordKind::Entity && value == LEGACY_LINK_STYLE {
            self.show_link = true;
            self.warn(SettingsWarning::LegacyStyle {
                value,
                replacement: default.id,
            });
            return default;
        }
        if let Some(style) = self.kind.style(&value) {
            return style;
        }
        let suggestions = compute_suggestions(&value, self.kind.styles());
        self.warn(SettingsWarning::UnknownStyle {
            value,
            replacement: default.id,
            suggestions,
        });
        default
    }

    fn warn(&mut self, warning: SettingsWarning) {
        debug!(kind = ?self.kind, %warning, "repaired display settings");
        self.warnings.push(warning);
    }
}

/// A stored value in the textual form vocabularies are matched against.
fn scalar_text(value: &Scalar) -> Option<String> {
    match value {
        Scalar::Text(text) => Some(text.clone()),
        Scalar::Integer(number) => Some(number.to_string()),
        Scalar::Float(number) => Some(number.to_string()),
        Scalar::Bool(flag) => Some(flag.to_string()),
        Scalar::Other(_) => None,
    }
}

/// Style ids within a small edit distance of `name`, closest first.
fn compute_suggestions(name: &str, styles: &'static [StyleEntry]) -> Vec<&'static str> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &'static str)> = styles
        .iter()
        .filter_map(|style| {
            let dist = levenshtein(name, style.id);
            if dist <= max_distance && dist > 0 {
                Some((dist, style.id))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, id)| id).collect()
}
