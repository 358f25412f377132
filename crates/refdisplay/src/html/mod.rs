//! HTML helpers: escaping, CSS class filtering and the administrator
//! markup filter.

mod classes;
mod escape;
mod sanitizer;

pub use classes::sanitize_classes;
pub use escape::escape;
pub use sanitizer::AdminHtmlFilter;
