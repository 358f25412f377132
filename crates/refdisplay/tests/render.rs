//! End-to-end tests for rendering references through the formatter.

use refdisplay::{
    FieldTokens, RawSettings, Record, RecordKind, ReferenceFormatter, RenderError, RenderNode,
    RenderTree, ReplaceOptions, TokenContext, TokenError, TokenService, TokenTreeBuilder,
};

#[derive(Debug, Clone)]
struct Node {
    nid: u32,
    title: &'static str,
    hidden: bool,
}

fn node(nid: u32, title: &'static str) -> Option<Node> {
    Some(Node {
        nid,
        title,
        hidden: false,
    })
}

fn hidden(nid: u32, title: &'static str) -> Option<Node> {
    Some(Node {
        nid,
        title,
        hidden: true,
    })
}

impl Record for Node {
    fn id(&self) -> String {
        self.nid.to_string()
    }

    fn label(&self) -> Option<String> {
        Some(self.title.to_string())
    }

    fn field(&self, path: &str) -> Option<String> {
        match path {
            "nid" => Some(self.nid.to_string()),
            "title" => Some(self.title.to_string()),
            _ => None,
        }
    }
}

fn can_view(node: &Node) -> bool {
    !node.hidden
}

fn node_url(node: &Node) -> Option<String> {
    Some(format!("/node/{}", node.nid))
}

fn render_nodes(records: &[Option<Node>], raw: &RawSettings, record_type: &str) -> RenderTree {
    let tokens = FieldTokens::new(["node", "user"]);
    let formatter = ReferenceFormatter::<Node>::builder()
        .tokens(&tokens)
        .access(&can_view)
        .urls(&node_url)
        .build();
    formatter.render(records, raw, record_type).unwrap()
}

fn abc() -> Vec<Option<Node>> {
    vec![node(1, "A"), node(2, "B"), node(3, "C")]
}

// =========================================================================
// Lists
// =========================================================================

#[test]
fn single_line_list_joins_with_the_separator() {
    let raw = RawSettings::builder().show_link(false).build();
    let tree = render_nodes(&abc(), &raw, "node");
    assert_eq!(tree.plain_text(), "A, B, C");
    insta::assert_snapshot!(
        tree.to_html(),
        @"<span><span>A</span>, <span>B</span>, <span>C</span></span>"
    );
}

#[test]
fn numbered_list_keeps_input_order() {
    let raw = RawSettings::builder().list_style("ol").build();
    let tree = render_nodes(&abc(), &raw, "node");
    let RenderTree::List(list) = &tree else {
        panic!("expected a list, got {tree:?}");
    };
    let titles: Vec<_> = list.items.iter().map(RenderNode::title).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
    insta::assert_snapshot!(
        tree.to_html(),
        @r#"<ol><li><a href="/node/1" target="_self">A</a></li><li><a href="/node/2" target="_self">B</a></li><li><a href="/node/3" target="_self">C</a></li></ol>"#
    );
}

#[test]
fn block_list_wraps_each_item() {
    let raw = RawSettings::builder()
        .list_style("div")
        .show_link(false)
        .build();
    let tree = render_nodes(&[node(1, "A"), node(2, "B")], &raw, "node");
    insta::assert_snapshot!(
        tree.to_html(),
        @"<div><div><span>A</span></div><div><span>B</span></div></div>"
    );
}

#[test]
fn suppressed_and_missing_records_are_removed_in_order() {
    let raw = RawSettings::builder().show_link(false).build();
    let records = vec![node(1, "A"), None, hidden(2, "B"), node(3, "C")];
    let tree = render_nodes(&records, &raw, "node");
    assert_eq!(tree.plain_text(), "A, C");
}

#[test]
fn one_survivor_is_not_wrapped_in_a_list() {
    let raw = RawSettings::builder().show_link(false).build();
    let tree = render_nodes(&[hidden(1, "A"), node(2, "B")], &raw, "node");
    assert!(matches!(tree, RenderTree::Single(_)));
    insta::assert_snapshot!(tree.to_html(), @"<span>B</span>");
}

#[test]
fn nothing_visible_renders_empty() {
    let raw = RawSettings::default();
    assert!(render_nodes(&[], &raw, "node").is_empty());
    assert!(render_nodes(&[None, None], &raw, "node").is_empty());
    let tree = render_nodes(&[hidden(1, "A")], &raw, "node");
    assert!(tree.is_empty());
    assert_eq!(tree.to_html(), "");
}

// =========================================================================
// Styles
// =========================================================================

#[test]
fn catalog_style_goes_through_substitution() {
    let raw = RawSettings::builder()
        .entity_reference_style("title-id")
        .show_link(false)
        .build();
    let tree = render_nodes(&[node(7, "About")], &raw, "node");
    assert_eq!(tree.plain_text(), "About (7)");
}

#[test]
fn id_style_skips_the_access_check() {
    let raw = RawSettings::builder()
        .entity_reference_style("id")
        .show_link(false)
        .build();
    let tree = render_nodes(&[hidden(4, "Secret"), node(5, "Open")], &raw, "node");
    assert_eq!(tree.plain_text(), "4, 5");
}

#[test]
fn title_id_with_unknown_prefix_shows_the_label_only() {
    let raw = RawSettings::builder()
        .entity_reference_style("title-id")
        .show_link(false)
        .build();
    let tree = render_nodes(&[node(7, "About")], &raw, "widget");
    assert_eq!(tree.plain_text(), "About");
}

#[test]
fn custom_style_with_empty_text_shows_the_label() {
    let raw = RawSettings::builder()
        .entity_reference_style("custom")
        .title_custom_text("")
        .show_link(false)
        .build();
    let tree = render_nodes(&[node(7, "About")], &raw, "node");
    assert_eq!(tree.plain_text(), "About");
}

#[test]
fn custom_text_is_filtered_then_substituted() {
    let raw = RawSettings::builder()
        .entity_reference_style("custom")
        .title_custom_text("<strong onclick=\"x()\">[node:title]</strong> #[node:nid][node:missing]")
        .show_link(false)
        .build();
    let tree = render_nodes(&[node(7, "About")], &raw, "node");
    insta::assert_snapshot!(tree.to_html(), @"<span><strong>About</strong> #7</span>");
}

#[test]
fn unresolved_placeholders_with_spaced_qualifiers_are_removed() {
    let raw = RawSettings::builder()
        .entity_reference_style("custom")
        .title_custom_text("[node:title] [node:created:custom:F j, Y]")
        .show_link(false)
        .build();
    let tree = render_nodes(&[node(1, "A")], &raw, "node");
    assert_eq!(tree.plain_text(), "A ");
    assert!(!tree.to_html().contains("[node:created"));
}

#[test]
fn substituted_values_are_escaped() {
    let raw = RawSettings::builder().show_link(false).build();
    let tree = render_nodes(&[node(1, "Fish & <Chips>")], &raw, "node");
    insta::assert_snapshot!(tree.to_html(), @"<span>Fish &amp; &lt;Chips&gt;</span>");
}

// =========================================================================
// Links
// =========================================================================

#[test]
fn link_attributes_follow_settings() {
    let raw = RawSettings::builder()
        .open_link_in("download")
        .link_topic("canonical")
        .classes("ref <b>primary</b>")
        .build();
    let tree = render_nodes(&[node(1, "A")], &raw, "node");
    insta::assert_snapshot!(
        tree.to_html(),
        @r#"<a href="/node/1" class="ref primary" rel="canonical" download>A</a>"#
    );
}

#[test]
fn new_tab_links_set_the_target() {
    let raw = RawSettings::builder().open_link_in("_blank").build();
    let tree = render_nodes(&[node(1, "A")], &raw, "node");
    insta::assert_snapshot!(tree.to_html(), @r#"<a href="/node/1" target="_blank">A</a>"#);
}

#[test]
fn records_without_url_render_as_text() {
    let tokens = FieldTokens::new(["node"]);
    let no_url = |_: &Node| -> Option<String> { None };
    let formatter = ReferenceFormatter::<Node>::builder()
        .tokens(&tokens)
        .access(&can_view)
        .urls(&no_url)
        .build();
    let tree = formatter
        .render(&[node(1, "A")], &RawSettings::default(), "node")
        .unwrap();
    assert!(tree.items().iter().all(|item| !item.is_link()));
}

#[test]
fn legacy_link_style_renders_a_link() {
    let raw = RawSettings::builder()
        .entity_reference_style("titlelink")
        .show_link(false)
        .build();
    let tree = render_nodes(&[node(1, "A")], &raw, "node");
    assert_eq!(tree.items()[0].url(), Some("/node/1"));
}

// =========================================================================
// User accounts
// =========================================================================

struct Account {
    uid: u32,
    name: &'static str,
}

impl Record for Account {
    fn id(&self) -> String {
        self.uid.to_string()
    }

    fn label(&self) -> Option<String> {
        Some(self.name.to_string())
    }

    fn is_anonymous(&self) -> bool {
        self.uid == 0
    }

    fn field(&self, path: &str) -> Option<String> {
        match path {
            "uid" => Some(self.uid.to_string()),
            "display-name" | "account-name" => Some(self.name.to_string()),
            _ => None,
        }
    }
}

#[test]
fn anonymous_users_get_fixed_values_and_no_link() {
    let tokens = FieldTokens::new(["user"]);
    let access = |_: &Account| true;
    let urls = |account: &Account| Some(format!("/user/{}", account.uid));
    let formatter = ReferenceFormatter::<Account>::builder()
        .tokens(&tokens)
        .access(&access)
        .urls(&urls)
        .kind(RecordKind::User)
        .anonymous_name("Guest")
        .build();

    let records = [
        Some(Account { uid: 0, name: "" }),
        Some(Account { uid: 3, name: "Ann" }),
    ];
    let raw = RawSettings::builder()
        .user_reference_style("display-id")
        .build();
    let tree = formatter.render(&records, &raw, "user").unwrap();
    insta::assert_snapshot!(
        tree.to_html(),
        @r#"<span><span>Guest (0)</span>, <a href="/user/3" target="_self">Ann (3)</a></span>"#
    );
}

// =========================================================================
// Collaborators
// =========================================================================

struct Failing;

impl TokenService<Node> for Failing {
    fn replace(
        &self,
        _pattern: &str,
        _context: TokenContext<'_, Node>,
        _options: &ReplaceOptions<'_>,
    ) -> Result<String, TokenError> {
        Err("token backend unavailable".into())
    }

    fn is_namespace_known(&self, prefix: &str) -> bool {
        prefix == "node"
    }
}

#[test]
fn substitution_failures_propagate() {
    let formatter = ReferenceFormatter::<Node>::builder()
        .tokens(&Failing)
        .access(&can_view)
        .urls(&node_url)
        .build();
    let result = formatter.render(&[node(1, "A")], &RawSettings::default(), "node");
    let error = match result {
        Err(error @ RenderError::Substitution { .. }) => error,
        Ok(tree) => panic!("expected a substitution error, got {tree:?}"),
    };
    assert_eq!(
        error.to_string(),
        "placeholder substitution failed for '[node:title]': token backend unavailable"
    );
}

#[test]
fn direct_styles_never_call_the_substitution_service() {
    let formatter = ReferenceFormatter::<Node>::builder()
        .tokens(&Failing)
        .access(&can_view)
        .urls(&node_url)
        .build();
    let raw = RawSettings::builder().entity_reference_style("title-id").build();
    let tree = formatter.render(&[node(1, "A")], &raw, "widget").unwrap();
    assert_eq!(tree.plain_text(), "A");
}

struct Help;

impl TokenTreeBuilder for Help {
    fn build_help(&self, namespaces: &[&str], global_types: bool) -> String {
        format!("{} global={global_types}", namespaces.join(","))
    }
}

#[test]
fn custom_text_help_lists_the_record_namespace() {
    let tokens = FieldTokens::new(["term"]);
    let formatter = ReferenceFormatter::<Node>::builder()
        .tokens(&tokens)
        .access(&can_view)
        .urls(&node_url)
        .tree_builder(&Help)
        .build();
    assert_eq!(
        formatter.custom_text_help("taxonomy_term").as_deref(),
        Some("term global=false")
    );
    assert_eq!(
        formatter.custom_text_help("widget").as_deref(),
        Some(" global=true")
    );
}

#[test]
fn custom_text_help_is_absent_without_a_builder() {
    let tokens = FieldTokens::new(["node"]);
    let formatter = ReferenceFormatter::<Node>::builder()
        .tokens(&tokens)
        .access(&can_view)
        .urls(&node_url)
        .build();
    assert_eq!(formatter.custom_text_help("node"), None);
}

#[test]
fn available_styles_shrink_for_unknown_types() {
    let tokens = FieldTokens::new(["node"]);
    let formatter = ReferenceFormatter::<Node>::builder()
        .tokens(&tokens)
        .access(&can_view)
        .urls(&node_url)
        .build();
    assert_eq!(formatter.available_styles("node").len(), 7);
    let reduced: Vec<_> = formatter
        .available_styles("widget")
        .iter()
        .map(|style| style.id)
        .collect();
    assert_eq!(reduced, vec!["id", "title", "title-id", "custom"]);
}

#[test]
fn field_tokens_can_keep_unresolved_placeholders() {
    let tokens = FieldTokens::new(["node"]);
    let record = Node {
        nid: 9,
        title: "Nine",
        hidden: false,
    };
    let context = TokenContext {
        namespace: "node",
        record: &record,
    };
    let options = ReplaceOptions {
        language: "en",
        clear_unresolved: false,
    };
    let replaced = tokens
        .replace("[node:title] [node:missing] [site:name]", context, &options)
        .unwrap();
    assert_eq!(replaced, "Nine [node:missing] [site:name]");
}
