//! Turns resolved titles into render nodes and lists.

use refdisplay_semantics::{ID_STYLE, OpenLinkIn};
use tracing::trace;

use crate::engine::{AccessCheck, RenderError, UrlResolver};
use crate::settings::DisplaySettings;
use crate::types::{LinkAttributes, Record, RenderNode, RenderTree};

/// Assembles the render tree for one pass.
///
/// Missing records are skipped and records whose label may not be shown are
/// suppressed before their title is computed; the identifier-only style
/// bypasses the access check. Surviving records keep their input order.
pub fn assemble<R, F>(
    records: &[Option<R>],
    settings: &DisplaySettings,
    access: &dyn AccessCheck<R>,
    urls: &dyn UrlResolver<R>,
    mut title_for: F,
) -> Result<RenderTree, RenderError>
where
    R: Record,
    F: FnMut(&R) -> Result<String, RenderError>,
{
    let check_access = settings.style.id != ID_STYLE;
    let mut nodes = Vec::with_capacity(records.len());
    for record in records.iter().flatten() {
        if check_access && !access.can_view_label(record) {
            trace!(id = %record.id(), "label access denied, suppressing");
            continue;
        }
        let title = title_for(record)?;
        nodes.push(build_node(record, title, settings, urls));
    }
    Ok(RenderTree::from_nodes(
        nodes,
        settings.list_style,
        &settings.list_separator,
    ))
}

/// Wraps one title as a text node, or as a link when links are enabled and
/// the record has a URL.
pub fn build_node<R: Record>(
    record: &R,
    title: String,
    settings: &DisplaySettings,
    urls: &dyn UrlResolver<R>,
) -> RenderNode {
    let classes = settings.classes.clone();
    let url = if settings.show_link && !record.is_anonymous() {
        urls.record_url(record)
    } else {
        None
    };
    let Some(url) = url else {
        return RenderNode::Text { title, classes };
    };
    let attributes = LinkAttributes {
        target: settings.open_link_in.target(),
        rel: settings.link_topic.rel(),
        download: settings.open_link_in == OpenLinkIn::Download,
    };
    RenderNode::Link {
        title,
        url,
        classes,
        attributes,
    }
}
