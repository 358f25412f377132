use refdisplay_semantics::{ListStyle, OpenLinkIn, RecordKind, StyleEntry};

use crate::settings::{DisplaySettings, SettingsWarning};

/// One-line descriptions of `settings` for a field configuration overview.
///
/// The list layout is only described when the field holds several values.
pub fn settings_summary(settings: &DisplaySettings, is_multiple: bool) -> Vec<String> {
    let mut summary = Vec::new();

    let unknown_style = settings
        .warnings
        .iter()
        .any(|warning| matches!(warning, SettingsWarning::UnknownStyle { .. }));
    if unknown_style {
        summary.push("Unknown style".to_string());
    } else {
        summary.push(settings.style.label.to_string());
    }

    let link = if settings.show_link {
        match settings.open_link_in {
            OpenLinkIn::SameTab => "Open in current tab/window",
            OpenLinkIn::NewTab => "Open in new tab/window",
            OpenLinkIn::Download => "Download",
        }
    } else {
        "No link"
    };
    summary.push(link.to_string());

    if is_multiple {
        let mut text = settings.list_style.label().to_string();
        if settings.list_style == ListStyle::SingleLine && !settings.list_separator.is_empty() {
            text.push_str(", with separator");
        }
        summary.push(text);
    }

    summary
}

/// Styles a configuration form offers.
///
/// When the placeholder namespace of the record type is unknown only the
/// styles computable from record fields (and the custom style) remain.
pub fn available_styles(kind: RecordKind, prefix_known: bool) -> Vec<&'static StyleEntry> {
    if prefix_known {
        kind.styles().iter().collect()
    } else {
        kind.minimal_styles().collect()
    }
}
