pub mod engine;
pub mod html;
pub mod parser;
pub mod settings;
pub mod tokens;
pub mod types;

pub use engine::{
    AccessCheck, HtmlSanitizer, ReferenceFormatter, RenderError, ReplaceOptions, TokenContext,
    TokenError, TokenService, TokenTreeBuilder, UrlResolver,
};
pub use html::AdminHtmlFilter;
pub use settings::{
    DisplaySettings, RawSettings, Scalar, SettingsWarning, available_styles, settings_summary,
};
pub use tokens::FieldTokens;
pub use types::{LinkAttributes, Record, RenderList, RenderNode, RenderTree, ResolvedPattern};

pub use refdisplay_semantics::{
    DirectStyle, LinkTopic, ListStyle, OpenLinkIn, RecordKind, StyleEntry,
};
