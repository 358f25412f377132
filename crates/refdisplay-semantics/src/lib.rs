//! Reference-display tables shared by the rendering engine and settings UIs:
//! style catalogs, placeholder-prefix exceptions, the alias table, anonymous
//! overrides and the link/list vocabularies.

/// Marker replaced by the resolved placeholder prefix in catalog templates.
pub const PREFIX_MARKER: &str = "PREFIX";

/// Style id of the administrator-defined pattern.
pub const CUSTOM_STYLE: &str = "custom";

/// Style id that shows only the record identifier.
///
/// Rendering this style never requires a label access check.
pub const ID_STYLE: &str = "id";

/// Legacy generic-record style that implied a link to the record.
pub const LEGACY_LINK_STYLE: &str = "titlelink";

/// Separator used between single-line list items when none is configured.
pub const DEFAULT_LIST_SEPARATOR: &str = ", ";

/// The kind of record a field references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordKind {
    /// Any content entity (node, term, file, media, ...).
    #[default]
    Entity,
    /// A user account, possibly the anonymous principal.
    User,
}

/// A display computed from record fields without placeholder substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectStyle {
    /// The record identifier alone.
    Id,
    /// The record label alone.
    Label,
    /// The label followed by the identifier in parentheses.
    LabelId,
}

/// One entry of a style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleEntry {
    /// Identifier stored in settings.
    pub id: &'static str,
    /// Human-readable label shown in configuration UIs.
    pub label: &'static str,
    /// Placeholder template containing [`PREFIX_MARKER`].
    pub template: Option<&'static str>,
    /// Computation used when placeholders are unavailable.
    pub direct: Option<DirectStyle>,
}

impl StyleEntry {
    /// Returns true for the administrator-defined pattern style.
    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_STYLE
    }

    /// Returns true if this style can only be rendered through placeholders.
    pub fn requires_prefix(&self) -> bool {
        self.direct.is_none() && !self.is_custom()
    }
}

const ENTITY_STYLES: &[StyleEntry] = &[
    StyleEntry {
        id: ID_STYLE,
        label: "Entity's ID",
        template: Some("[PREFIX:id]"),
        direct: Some(DirectStyle::Id),
    },
    StyleEntry {
        id: "title",
        label: "Entity's title",
        template: Some("[PREFIX:title]"),
        direct: Some(DirectStyle::Label),
    },
    StyleEntry {
        id: "title-id",
        label: "Entity's title and ID",
        template: Some("[PREFIX:title] ([PREFIX:id])"),
        direct: Some(DirectStyle::LabelId),
    },
    StyleEntry {
        id: "title-author",
        label: "Entity's title and author",
        template: Some("[PREFIX:title] by [PREFIX:author:display-name]"),
        direct: None,
    },
    StyleEntry {
        id: "title-created",
        label: "Entity's title and creation date",
        template: Some("[PREFIX:title] (Created [PREFIX:created])"),
        direct: None,
    },
    StyleEntry {
        id: "title-changed",
        label: "Entity's title and update date",
        template: Some("[PREFIX:title] (Updated [PREFIX:changed])"),
        direct: None,
    },
    StyleEntry {
        id: CUSTOM_STYLE,
        label: "Custom",
        template: None,
        direct: None,
    },
];

const USER_STYLES: &[StyleEntry] = &[
    StyleEntry {
        id: ID_STYLE,
        label: "User's ID",
        template: Some("[PREFIX:uid]"),
        direct: Some(DirectStyle::Id),
    },
    StyleEntry {
        id: "email",
        label: "User's email address",
        template: Some("[PREFIX:mail]"),
        direct: None,
    },
    StyleEntry {
        id: "account",
        label: "User's account name",
        template: Some("[PREFIX:account-name]"),
        direct: None,
    },
    StyleEntry {
        id: "account-id",
        label: "User's account name and ID",
        template: Some("[PREFIX:account-name] ([PREFIX:uid])"),
        direct: None,
    },
    StyleEntry {
        id: "account-email",
        label: "User's account name and email address",
        template: Some("[PREFIX:account-name] &lt;[PREFIX:mail]&gt;"),
        direct: None,
    },
    StyleEntry {
        id: "account-display",
        label: "User's account and display names",
        template: Some("[PREFIX:account-name] ([PREFIX:display-name])"),
        direct: None,
    },
    StyleEntry {
        id: "account-roles",
        label: "User's account name and roles",
        template: Some("[PREFIX:account-name] ([PREFIX:roles])"),
        direct: None,
    },
    StyleEntry {
        id: "account-last",
        label: "User's account name and last login date",
        template: Some("[PREFIX:account-name] (Last login [PREFIX:last-login])"),
        direct: None,
    },
    StyleEntry {
        id: "account-since",
        label: "User's account name and account creation date",
        template: Some("[PREFIX:account-name] (Since [PREFIX:created])"),
        direct: None,
    },
    StyleEntry {
        id: "display",
        label: "User's display name",
        template: Some("[PREFIX:display-name]"),
        direct: Some(DirectStyle::Label),
    },
    StyleEntry {
        id: "display-id",
        label: "User's display name and ID",
        template: Some("[PREFIX:display-name] ([PREFIX:uid])"),
        direct: Some(DirectStyle::LabelId),
    },
    StyleEntry {
        id: "display-email",
        label: "User's display name and email address",
        template: Some("[PREFIX:display-name] &lt;[PREFIX:mail]&gt;"),
        direct: None,
    },
    StyleEntry {
        id: "display-account",
        label: "User's display and account names",
        template: Some("[PREFIX:display-name] ([PREFIX:account-name])"),
        direct: None,
    },
    StyleEntry {
        id: "display-roles",
        label: "User's display name and roles",
        template: Some("[PREFIX:display-name] ([PREFIX:roles])"),
        direct: None,
    },
    StyleEntry {
        id: "display-last",
        label: "User's display name and last login date",
        template: Some("[PREFIX:display-name] (Last login [PREFIX:last-login])"),
        direct: None,
    },
    StyleEntry {
        id: "display-since",
        label: "User's display name and account creation date",
        template: Some("[PREFIX:display-name] (Since [PREFIX:created])"),
        direct: None,
    },
    StyleEntry {
        id: CUSTOM_STYLE,
        label: "Custom",
        template: None,
        direct: None,
    },
];

impl RecordKind {
    /// The full style catalog for this kind, in presentation order.
    pub fn styles(self) -> &'static [StyleEntry] {
        match self {
            RecordKind::Entity => ENTITY_STYLES,
            RecordKind::User => USER_STYLES,
        }
    }

    /// Styles usable when the placeholder prefix cannot be confirmed.
    pub fn minimal_styles(self) -> impl Iterator<Item = &'static StyleEntry> {
        self.styles()
            .iter()
            .filter(|entry| !entry.requires_prefix())
    }

    /// Looks up a style by id.
    pub fn style(self, id: &str) -> Option<&'static StyleEntry> {
        self.styles().iter().find(|entry| entry.id == id)
    }

    /// Id of the style used when settings name no valid style.
    pub fn default_style_id(self) -> &'static str {
        match self {
            RecordKind::Entity => "title",
            RecordKind::User => "display",
        }
    }

    /// The catalog entry of [`RecordKind::default_style_id`].
    pub fn default_style(self) -> &'static StyleEntry {
        let id = self.default_style_id();
        self.styles()
            .iter()
            .find(|entry| entry.id == id)
            .unwrap_or(&self.styles()[0])
    }

    /// Link relations accepted for this kind.
    pub fn link_topics(self) -> &'static [LinkTopic] {
        match self {
            RecordKind::Entity => ENTITY_LINK_TOPICS,
            RecordKind::User => USER_LINK_TOPICS,
        }
    }

    /// Settings key under which the host stores the style id.
    pub fn style_setting_key(self) -> &'static str {
        match self {
            RecordKind::Entity => "entityReferenceStyle",
            RecordKind::User => "userReferenceStyle",
        }
    }
}

/// Record types whose placeholder namespace differs from the type id.
const PREFIX_EXCEPTIONS: &[(&str, &str)] = &[
    ("taxonomy_term", "term"),
    ("taxonomy_vocabulary", "vocabulary"),
];

/// Returns the placeholder namespace for a record type that does not use its
/// own id as prefix.
pub fn prefix_exception(record_type: &str) -> Option<&'static str> {
    PREFIX_EXCEPTIONS
        .iter()
        .find(|(from, _)| *from == record_type)
        .map(|(_, to)| *to)
}

/// Generic placeholder openings and the type-specific opening that replaces
/// them.
///
/// Entries are applied in order as literal substring replacements over the
/// whole pattern. Keys are open-ended (no closing bracket) so qualifiers such
/// as `[node:owner:mail]` are remapped too.
pub const ALIASES: &[(&str, &str)] = &[
    ("[aggregator_feed:id", "[aggregator_feed:fid"),
    ("[aggregator_feed:name", "[aggregator_feed:title"),
    ("[aggregator_feed:changed", "[aggregator_feed:modified"),
    ("[aggregator_item:id", "[aggregator_item:iid"),
    ("[aggregator_item:name", "[aggregator_item:title"),
    ("[aggregator_item:owner", "[aggregator_item:author"),
    ("[aggregator_item:user", "[aggregator_item:author"),
    ("[aggregator_item:uid", "[aggregator_item:author"),
    ("[aggregator_item:created", "[aggregator_item:timestamp"),
    ("[comment:id", "[comment:cid"),
    ("[comment:name", "[comment:title"),
    ("[comment:owner", "[comment:author"),
    ("[comment:user", "[comment:author"),
    ("[comment:uid", "[comment:author"),
    ("[content_moderation_state:author", "[content_moderation_state:uid"),
    ("[content_moderation_state:owner", "[content_moderation_state:uid"),
    ("[content_moderation_state:user", "[content_moderation_state:uid"),
    ("[file:id", "[file:fid"),
    ("[file:title", "[file:name"),
    ("[file:author", "[file:owner"),
    ("[file:user", "[file:owner"),
    ("[file:uid", "[file:owner"),
    ("[media:id", "[media:mid"),
    ("[media:title", "[media:name"),
    ("[media:author", "[media:uid"),
    ("[media:owner", "[media:uid"),
    ("[media:user", "[media:uid"),
    ("[menu_link_content:name", "[menu_link_content:title"),
    ("[node:id", "[node:nid"),
    ("[node:name", "[node:title"),
    ("[node:owner", "[node:author"),
    ("[node:user", "[node:author"),
    ("[node:uid", "[node:author"),
    ("[shortcut:name", "[shortcut:title"),
    ("[term:id", "[term:tid"),
    ("[term:title", "[term:name"),
    ("[user:id", "[user:uid"),
    ("[user:name", "[user:display-name"),
    ("[user:title", "[user:display-name"),
    ("[user:changed", "[user:last-login"),
    ("[view:name", "[view:title"),
    ("[vocabulary:id", "[vocabulary:vid"),
    ("[vocabulary:title", "[vocabulary:name"),
    ("[workspace:title", "[workspace:name"),
    ("[workspace:author", "[workspace:uid"),
    ("[workspace:owner", "[workspace:uid"),
    ("[workspace:user", "[workspace:uid"),
    ("[foldershare:title", "[foldershare:name"),
    ("[foldershare:author", "[foldershare:owner"),
    ("[foldershare:user", "[foldershare:owner"),
    ("[foldershare:uid", "[foldershare:owner"),
    ("[menu-link:id", "[menu-link:mlid"),
    ("[menu-link:name", "[menu-link:title"),
];

/// Replacement for a placeholder the anonymous principal cannot resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnonymousValue {
    /// Fixed text.
    Literal(&'static str),
    /// The site-wide display name configured for anonymous visitors.
    SiteAnonymousName,
}

/// Placeholder openings replaced together with any trailing qualifier, up to
/// the closing bracket.
pub const ANONYMOUS_QUALIFIED: &[(&str, AnonymousValue)] = &[
    ("[user:created", AnonymousValue::Literal("site creation")),
    ("[user:last-login", AnonymousValue::Literal("never")),
    ("[user:user_picture", AnonymousValue::Literal("")),
    ("[user:url", AnonymousValue::Literal("")),
];

/// Exact placeholders replaced for the anonymous principal.
pub const ANONYMOUS_EXACT: &[(&str, AnonymousValue)] = &[
    ("[user:uid]", AnonymousValue::Literal("0")),
    ("[user:account-name]", AnonymousValue::Literal("anonymous")),
    ("[user:display-name]", AnonymousValue::SiteAnonymousName),
    ("[user:name]", AnonymousValue::Literal("anonymous")),
    ("[user:mail]", AnonymousValue::Literal("None")),
    ("[user:edit-url]", AnonymousValue::Literal("")),
    ("[user:cancel-url]", AnonymousValue::Literal("")),
    ("[user:one-time-login-url]", AnonymousValue::Literal("")),
];

/// Where a link to the record opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenLinkIn {
    #[default]
    SameTab,
    NewTab,
    Download,
}

impl OpenLinkIn {
    pub const ALL: &'static [OpenLinkIn] =
        &[OpenLinkIn::SameTab, OpenLinkIn::NewTab, OpenLinkIn::Download];

    pub fn id(self) -> &'static str {
        match self {
            OpenLinkIn::SameTab => "_self",
            OpenLinkIn::NewTab => "_blank",
            OpenLinkIn::Download => "download",
        }
    }

    pub fn parse(id: &str) -> Option<OpenLinkIn> {
        Self::ALL.iter().copied().find(|value| value.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            OpenLinkIn::SameTab => "Open linked entity in the same tab/window",
            OpenLinkIn::NewTab => "Open linked entity in a new tab/window",
            OpenLinkIn::Download => "Download the linked entity",
        }
    }

    /// The `target` attribute, if this option sets one.
    pub fn target(self) -> Option<&'static str> {
        match self {
            OpenLinkIn::SameTab => Some("_self"),
            OpenLinkIn::NewTab => Some("_blank"),
            OpenLinkIn::Download => None,
        }
    }
}

/// The relation a link is annotated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LinkTopic {
    #[default]
    Any,
    Alternate,
    Author,
    Bookmark,
    Canonical,
    Help,
    License,
}

const ENTITY_LINK_TOPICS: &[LinkTopic] = &[
    LinkTopic::Any,
    LinkTopic::Alternate,
    LinkTopic::Author,
    LinkTopic::Bookmark,
    LinkTopic::Canonical,
    LinkTopic::Help,
    LinkTopic::License,
];

const USER_LINK_TOPICS: &[LinkTopic] = &[
    LinkTopic::Any,
    LinkTopic::Alternate,
    LinkTopic::Author,
    LinkTopic::Canonical,
];

impl LinkTopic {
    pub fn id(self) -> &'static str {
        match self {
            LinkTopic::Any => "any",
            LinkTopic::Alternate => "alternate",
            LinkTopic::Author => "author",
            LinkTopic::Bookmark => "bookmark",
            LinkTopic::Canonical => "canonical",
            LinkTopic::Help => "help",
            LinkTopic::License => "license",
        }
    }

    pub fn parse(id: &str) -> Option<LinkTopic> {
        ENTITY_LINK_TOPICS
            .iter()
            .copied()
            .find(|topic| topic.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            LinkTopic::Any => "- Unspecified -",
            LinkTopic::Alternate => "Alternate form of this entity",
            LinkTopic::Author => "Author information",
            LinkTopic::Bookmark => "Bookmarkable permalink",
            LinkTopic::Canonical => "Canonical (preferred) form of this entity",
            LinkTopic::Help => "Help information",
            LinkTopic::License => "License information",
        }
    }

    /// The `rel` attribute value, `None` for [`LinkTopic::Any`].
    pub fn rel(self) -> Option<&'static str> {
        match self {
            LinkTopic::Any => None,
            other => Some(other.id()),
        }
    }
}

/// How multiple rendered records are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListStyle {
    /// Inline, joined with a separator.
    #[default]
    SingleLine,
    /// Ordered list.
    Numbered,
    /// Unordered list.
    Bulleted,
    /// One block per record, no bullets.
    Block,
}

impl ListStyle {
    pub const ALL: &'static [ListStyle] = &[
        ListStyle::SingleLine,
        ListStyle::Numbered,
        ListStyle::Bulleted,
        ListStyle::Block,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ListStyle::SingleLine => "span",
            ListStyle::Numbered => "ol",
            ListStyle::Bulleted => "ul",
            ListStyle::Block => "div",
        }
    }

    pub fn parse(id: &str) -> Option<ListStyle> {
        Self::ALL.iter().copied().find(|style| style.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            ListStyle::SingleLine => "Single line list",
            ListStyle::Numbered => "Numbered list",
            ListStyle::Bulleted => "Bulleted list",
            ListStyle::Block => "Non-bulleted block list",
        }
    }
}
