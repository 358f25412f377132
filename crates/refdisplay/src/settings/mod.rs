//! Stored display settings and their validation.

mod display;
mod raw;
mod summary;

pub use display::{DisplaySettings, SettingsWarning};
pub use raw::{RawSettings, Scalar};
pub use summary::{available_styles, settings_summary};
