//! A small administrator-level markup filter.
//!
//! Hosts with their own sanitizer should implement [`HtmlSanitizer`]
//! themselves; this one exists so the engine is usable out of the box.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::engine::HtmlSanitizer;
use crate::html::escape;

/// Matches a comment, a complete tag, or a stray `<`.
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<[^<>]*>|<").expect("constant regex pattern is valid")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^<\s*(/?)\s*([A-Za-z][A-Za-z0-9]*)(.*?)(/?)\s*>$")
        .expect("constant regex pattern is valid")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z][A-Za-z0-9_:\-]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
        .expect("constant regex pattern is valid")
});

/// Tags an administrator may use in patterns and separators.
const ADMIN_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "address", "article", "aside", "b", "bdi", "bdo", "big",
    "blockquote", "br", "caption", "cite", "code", "col", "colgroup", "command", "dd", "del",
    "details", "dfn", "div", "dl", "dt", "em", "figcaption", "figure", "footer", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "i", "img", "ins", "kbd", "li", "mark",
    "menu", "meter", "nav", "ol", "output", "p", "pre", "progress", "q", "rp", "rt", "ruby",
    "s", "samp", "section", "small", "span", "strong", "sub", "summary", "sup", "table",
    "tbody", "td", "tfoot", "th", "thead", "time", "tr", "tt", "u", "ul", "var", "wbr",
];

/// Attributes whose value is a URL and must use a safe scheme.
const URL_ATTRIBUTES: &[&str] = &["href", "src", "cite", "longdesc", "action", "srcset"];

const SAFE_SCHEMES: &[&str] = &[
    "http", "https", "ftp", "mailto", "tel", "news", "nntp", "sftp", "webcal", "rtsp", "irc",
    "ssh", "svn",
];

/// Tag stripping plus an allow-list filter for administrator markup.
///
/// `filter_admin` keeps the tags in the administrator allow-list, drops event
/// handler and `style` attributes, drops URL attributes with unsafe schemes,
/// removes comments and every other tag (keeping their text), and escapes
/// stray `<` characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminHtmlFilter;

impl HtmlSanitizer for AdminHtmlFilter {
    fn strip_all_tags(&self, text: &str) -> String {
        MARKUP
            .replace_all(text, |caps: &Captures<'_>| {
                if &caps[0] == "<" {
                    "<".to_string()
                } else {
                    String::new()
                }
            })
            .into_owned()
    }

    fn filter_admin(&self, text: &str) -> String {
        MARKUP
            .replace_all(text, |caps: &Captures<'_>| filter_markup(&caps[0]))
            .into_owned()
    }
}

fn filter_markup(markup: &str) -> String {
    if markup == "<" {
        return "&lt;".to_string();
    }
    if markup.starts_with("<!--") {
        return String::new();
    }
    let Some(tag) = TAG.captures(markup) else {
        return String::new();
    };
    let name = tag[2].to_ascii_lowercase();
    if !ADMIN_TAGS.contains(&name.as_str()) {
        return String::new();
    }
    if !tag[1].is_empty() {
        return format!("</{name}>");
    }

    let mut out = format!("<{name}");
    for attribute in ATTRIBUTE.captures_iter(&tag[3]) {
        let attribute_name = attribute[1].to_ascii_lowercase();
        if attribute_name.starts_with("on") || attribute_name == "style" {
            continue;
        }
        let value = attribute
            .get(2)
            .or_else(|| attribute.get(3))
            .or_else(|| attribute.get(4))
            .map(|m| m.as_str());
        match value {
            None => {
                let _ = write!(out, " {attribute_name}");
            }
            Some(value) => {
                if URL_ATTRIBUTES.contains(&attribute_name.as_str()) && !has_safe_scheme(value) {
                    continue;
                }
                let _ = write!(out, " {attribute_name}=\"{}\"", escape(value));
            }
        }
    }
    if !tag[4].is_empty() {
        out.push_str(" /");
    }
    out.push('>');
    out
}

/// Relative URLs are safe; absolute ones must use an allowed scheme.
fn has_safe_scheme(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    let scheme_end = compact.find(':');
    let path_start = compact.find(['/', '?', '#']);
    match (scheme_end, path_start) {
        (None, _) => true,
        (Some(colon), Some(slash)) if slash < colon => true,
        (Some(colon), _) => SAFE_SCHEMES.contains(&&compact[..colon]),
    }
}
