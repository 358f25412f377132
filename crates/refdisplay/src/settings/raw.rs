use bon::Builder;
use refdisplay_semantics::RecordKind;
use serde::Deserialize;
use serde::de::IgnoredAny;

/// A stored setting value of whatever shape the host persisted.
///
/// Values of an unexpected shape (arrays, maps, null) deserialize to
/// [`Scalar::Other`] and are treated as absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Scalar {
    /// The value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(text) => Some(text),
            Scalar::Bool(_) | Scalar::Integer(_) | Scalar::Float(_) | Scalar::Other(_) => None,
        }
    }

    /// Loose truthiness: `false`, zero, `""` and `"0"` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(value) => *value,
            Scalar::Integer(value) => *value != 0,
            Scalar::Float(value) => *value != 0.0,
            Scalar::Text(text) => !text.is_empty() && text != "0",
            Scalar::Other(_) => false,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Integer(a), Scalar::Integer(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a.to_bits() == b.to_bits(),
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            (Scalar::Other(_), Scalar::Other(_)) => true,
            _ => false,
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// Display settings exactly as stored by the host.
///
/// Nothing here is trusted: every field may be missing, of the wrong shape
/// or name a value that no longer exists. [`DisplaySettings::sanitize`]
/// turns this into the typed settings used at render time.
///
/// [`DisplaySettings::sanitize`]: crate::DisplaySettings::sanitize
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Builder)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSettings {
    /// Style id of an entity reference field.
    #[builder(into)]
    pub entity_reference_style: Option<Scalar>,
    /// Style id of a user reference field.
    #[builder(into)]
    pub user_reference_style: Option<Scalar>,
    /// Administrator pattern for the custom style.
    #[builder(into)]
    pub title_custom_text: Option<Scalar>,
    /// Free-text CSS classes.
    #[builder(into)]
    pub classes: Option<Scalar>,
    #[builder(into)]
    pub show_link: Option<Scalar>,
    #[builder(into)]
    pub open_link_in: Option<Scalar>,
    #[builder(into)]
    pub link_topic: Option<Scalar>,
    #[builder(into)]
    pub list_style: Option<Scalar>,
    #[builder(into)]
    pub list_separator: Option<Scalar>,
}

impl RawSettings {
    /// The stored style id for `kind`, read from that kind's key only.
    pub fn style_for(&self, kind: RecordKind) -> Option<&Scalar> {
        match kind {
            RecordKind::Entity => self.entity_reference_style.as_ref(),
            RecordKind::User => self.user_reference_style.as_ref(),
        }
    }
}
