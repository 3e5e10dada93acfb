//! Email template system.
//!
//! This module provides:
//! - Filesystem-backed template loading (one `.html` file per template name)
//! - Variable substitution for `{{variable}}` placeholders
//!
//! Templates are re-read from storage on every call by design, so edits to
//! template files take effect without restarting the dispatching process.

mod loader;
mod substitution;
mod types;

pub use loader::TemplateLoader;
pub use substitution::substitute_variables;
pub use types::{TemplateError, TemplateResult};
