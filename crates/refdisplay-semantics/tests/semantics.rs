use std::collections::HashSet;

use refdisplay_semantics::{
    ALIASES, ANONYMOUS_EXACT, ANONYMOUS_QUALIFIED, CUSTOM_STYLE, DirectStyle, LinkTopic,
    ListStyle, OpenLinkIn, PREFIX_MARKER, RecordKind, prefix_exception,
};

#[test]
fn every_non_custom_style_has_a_prefixed_template() {
    for kind in [RecordKind::Entity, RecordKind::User] {
        for entry in kind.styles() {
            if entry.is_custom() {
                assert!(entry.template.is_none());
                assert!(entry.direct.is_none());
                continue;
            }
            let template = entry
                .template
                .unwrap_or_else(|| panic!("{} has no template", entry.id));
            assert!(
                template.contains(PREFIX_MARKER),
                "{} template lacks the prefix marker",
                entry.id
            );
        }
    }
}

#[test]
fn style_ids_are_unique_per_kind() {
    for kind in [RecordKind::Entity, RecordKind::User] {
        let ids: HashSet<_> = kind.styles().iter().map(|entry| entry.id).collect();
        assert_eq!(ids.len(), kind.styles().len());
    }
}

#[test]
fn default_styles_are_label_only() {
    assert_eq!(RecordKind::Entity.default_style().id, "title");
    assert_eq!(RecordKind::User.default_style().id, "display");
    for kind in [RecordKind::Entity, RecordKind::User] {
        assert_eq!(kind.default_style().direct, Some(DirectStyle::Label));
    }
}

#[test]
fn minimal_entity_catalog_is_direct_styles_plus_custom() {
    let ids: Vec<_> = RecordKind::Entity.minimal_styles().map(|e| e.id).collect();
    assert_eq!(ids, vec!["id", "title", "title-id", CUSTOM_STYLE]);
}

#[test]
fn minimal_user_catalog_is_direct_styles_plus_custom() {
    let ids: Vec<_> = RecordKind::User.minimal_styles().map(|e| e.id).collect();
    assert_eq!(ids, vec!["id", "display", "display-id", CUSTOM_STYLE]);
}

#[test]
fn prefix_exceptions_cover_taxonomy_only() {
    assert_eq!(prefix_exception("taxonomy_term"), Some("term"));
    assert_eq!(prefix_exception("taxonomy_vocabulary"), Some("vocabulary"));
    assert_eq!(prefix_exception("node"), None);
    assert_eq!(prefix_exception("user"), None);
}

#[test]
fn alias_keys_are_unique_and_open_ended() {
    let keys: HashSet<_> = ALIASES.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys.len(), ALIASES.len());
    for (key, value) in ALIASES {
        assert!(key.starts_with('['));
        assert!(!key.ends_with(']'), "{key} must not close the placeholder");
        assert!(!value.ends_with(']'), "{value} must not close the placeholder");
    }
}

#[test]
fn alias_targets_keep_their_namespace() {
    for (key, value) in ALIASES {
        let key_ns = key.split(':').next();
        let value_ns = value.split(':').next();
        assert_eq!(key_ns, value_ns, "{key} -> {value} changes namespace");
    }
}

#[test]
fn anonymous_tables_only_touch_user_placeholders() {
    for (pattern, _) in ANONYMOUS_QUALIFIED.iter().chain(ANONYMOUS_EXACT) {
        assert!(pattern.starts_with("[user:"));
    }
}

#[test]
fn user_link_topics_are_a_subset() {
    let user = RecordKind::User.link_topics();
    assert!(!user.contains(&LinkTopic::Bookmark));
    assert!(!user.contains(&LinkTopic::Help));
    assert!(!user.contains(&LinkTopic::License));
    for topic in user {
        assert!(RecordKind::Entity.link_topics().contains(topic));
    }
}

#[test]
fn vocabularies_round_trip_their_ids() {
    for value in OpenLinkIn::ALL {
        assert_eq!(OpenLinkIn::parse(value.id()), Some(*value));
    }
    for style in ListStyle::ALL {
        assert_eq!(ListStyle::parse(style.id()), Some(*style));
    }
    for topic in RecordKind::Entity.link_topics() {
        assert_eq!(LinkTopic::parse(topic.id()), Some(*topic));
    }
    assert_eq!(OpenLinkIn::parse("_parent"), None);
    assert_eq!(ListStyle::parse("table"), None);
    assert_eq!(LinkTopic::parse("nofollow"), None);
}

#[test]
fn link_attributes_follow_the_option() {
    assert_eq!(OpenLinkIn::SameTab.target(), Some("_self"));
    assert_eq!(OpenLinkIn::NewTab.target(), Some("_blank"));
    assert_eq!(OpenLinkIn::Download.target(), None);
    assert_eq!(LinkTopic::Any.rel(), None);
    assert_eq!(LinkTopic::Canonical.rel(), Some("canonical"));
}
