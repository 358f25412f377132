use std::fmt::Write;
use std::slice;

use refdisplay_semantics::ListStyle;

use crate::html::escape;

/// Attributes added to a link node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkAttributes {
    /// The `target` attribute.
    pub target: Option<&'static str>,
    /// The `rel` attribute; at most one relation is ever set.
    pub rel: Option<&'static str>,
    /// Whether the link forces a download.
    pub download: bool,
}

/// The rendered form of one visible record.
///
/// Titles are markup: catalog and custom patterns may carry entities or
/// administrator-approved tags, and direct titles are escaped when built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    /// A plain `<span>`.
    Text { title: String, classes: Vec<String> },
    /// An anchor to the record.
    Link {
        title: String,
        url: String,
        classes: Vec<String>,
        attributes: LinkAttributes,
    },
}

impl RenderNode {
    pub fn title(&self) -> &str {
        match self {
            RenderNode::Text { title, .. } | RenderNode::Link { title, .. } => title,
        }
    }

    pub fn classes(&self) -> &[String] {
        match self {
            RenderNode::Text { classes, .. } | RenderNode::Link { classes, .. } => classes,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            RenderNode::Link { url, .. } => Some(url),
            RenderNode::Text { .. } => None,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, RenderNode::Link { .. })
    }

    /// Renders this node as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        match self {
            RenderNode::Text { title, classes } => {
                out.push_str("<span");
                push_classes(&mut out, classes);
                out.push('>');
                out.push_str(title);
                out.push_str("</span>");
            }
            RenderNode::Link {
                title,
                url,
                classes,
                attributes,
            } => {
                let _ = write!(out, "<a href=\"{}\"", escape(url));
                push_classes(&mut out, classes);
                if let Some(target) = attributes.target {
                    let _ = write!(out, " target=\"{target}\"");
                }
                if let Some(rel) = attributes.rel {
                    let _ = write!(out, " rel=\"{rel}\"");
                }
                if attributes.download {
                    out.push_str(" download");
                }
                out.push('>');
                out.push_str(title);
                out.push_str("</a>");
            }
        }
        out
    }
}

fn push_classes(out: &mut String, classes: &[String]) {
    if classes.is_empty() {
        return;
    }
    let _ = write!(out, " class=\"{}\"", escape(&classes.join(" ")));
}

/// Several visible records laid out as a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderList {
    pub style: ListStyle,
    /// Sanitized markup placed between items of a single-line list.
    pub separator: String,
    pub items: Vec<RenderNode>,
}

/// The output of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderTree {
    /// No record survived.
    #[default]
    Empty,
    /// Exactly one record survived.
    Single(RenderNode),
    /// More than one record survived, in input order.
    List(RenderList),
}

impl RenderTree {
    /// Wraps surviving nodes: none is empty, one is single, more is a list.
    pub fn from_nodes(mut nodes: Vec<RenderNode>, style: ListStyle, separator: &str) -> Self {
        match nodes.len() {
            0 => RenderTree::Empty,
            1 => nodes.pop().map_or(RenderTree::Empty, RenderTree::Single),
            _ => RenderTree::List(RenderList {
                style,
                separator: separator.to_string(),
                items: nodes,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RenderTree::Empty)
    }

    /// The rendered nodes in output order.
    pub fn items(&self) -> &[RenderNode] {
        match self {
            RenderTree::Empty => &[],
            RenderTree::Single(node) => slice::from_ref(node),
            RenderTree::List(list) => &list.items,
        }
    }

    /// Titles only: joined with the separator for single-line lists, one per
    /// line otherwise.
    pub fn plain_text(&self) -> String {
        let titles: Vec<&str> = self.items().iter().map(RenderNode::title).collect();
        match self {
            RenderTree::List(list) if list.style != ListStyle::SingleLine => titles.join("\n"),
            RenderTree::List(list) => titles.join(&list.separator),
            RenderTree::Empty | RenderTree::Single(_) => titles.concat(),
        }
    }

    /// Renders the whole tree as HTML.
    pub fn to_html(&self) -> String {
        match self {
            RenderTree::Empty => String::new(),
            RenderTree::Single(node) => node.to_html(),
            RenderTree::List(list) => {
                let items: Vec<String> = list.items.iter().map(RenderNode::to_html).collect();
                match list.style {
                    ListStyle::SingleLine => {
                        format!("<span>{}</span>", items.join(&list.separator))
                    }
                    ListStyle::Numbered => wrap_items("ol", "li", &items),
                    ListStyle::Bulleted => wrap_items("ul", "li", &items),
                    ListStyle::Block => wrap_items("div", "div", &items),
                }
            }
        }
    }
}

fn wrap_items(container: &str, item: &str, items: &[String]) -> String {
    let mut out = format!("<{container}>");
    for html in items {
        let _ = write!(out, "<{item}>{html}</{item}>");
    }
    let _ = write!(out, "</{container}>");
    out
}
