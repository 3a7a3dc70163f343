//! Template error types.

use thiserror::Error;

/// Errors that can occur while loading or rendering a README template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template references a value that was not provided, or a helper failed.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template text is not valid Handlebars.
    #[error("Template syntax error: {0}")]
    SyntaxError(#[from] handlebars::TemplateError),

    /// Failed to read or write a template file.
    #[error("Failed to access template file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template data could not be serialized.
    #[error("Template data error: {0}")]
    DataError(#[from] serde_json::Error),
}
