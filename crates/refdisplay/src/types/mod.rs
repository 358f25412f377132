mod pattern;
mod record;
mod render;

pub use pattern::ResolvedPattern;
pub use record::Record;
pub use render::{LinkAttributes, RenderList, RenderNode, RenderTree};
