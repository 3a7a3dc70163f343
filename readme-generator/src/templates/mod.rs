//! README templates rendered with Handlebars.
//!
//! This module owns the built-in template and the engine that compiles a
//! template once and renders it with [`TemplateVariables`](crate::extract::TemplateVariables).

mod default;
mod error;
mod renderer;

pub use default::DEFAULT_TEMPLATE;
pub use error::TemplateError;
pub use renderer::TemplateEngine;

use std::path::Path;
use tracing::info;

/// File name used when writing the default template without an explicit path.
pub const DEFAULT_TEMPLATE_FILE: &str = "readme_template.md";

/// Returns the built-in template text.
#[must_use]
pub fn default_template() -> &'static str {
    DEFAULT_TEMPLATE
}

/// Writes the built-in template to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`TemplateError::IoError`] if the file cannot be written.
pub fn write_default_template(path: &Path) -> Result<(), TemplateError> {
    std::fs::write(path, DEFAULT_TEMPLATE).map_err(|e| TemplateError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    info!(path = %path.display(), "Wrote default template");
    Ok(())
}
