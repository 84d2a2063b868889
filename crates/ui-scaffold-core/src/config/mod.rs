//! Project configuration and init-time templates

pub mod project;
pub mod templates;

pub use project::{resolve_alias, Aliases, ProjectConfig};
pub use templates::{GLOBALS_CSS, TAILWIND_CONFIG};
