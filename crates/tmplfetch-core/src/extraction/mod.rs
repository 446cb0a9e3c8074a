//! Archive walking and selective template expansion.

pub mod classify;
pub mod expander;

pub use classify::EntryKind;
pub use classify::classify;
pub use classify::is_contained;
pub use classify::relative_path;
pub use expander::TemplateExpander;
pub use expander::expand_templates;
