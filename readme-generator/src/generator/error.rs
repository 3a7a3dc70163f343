//! Generator error types.

use crate::github::ApiError;
use crate::identifier::IdentifierError;
use crate::templates::TemplateError;

/// Errors that can occur while generating a README.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Malformed repository identifier.
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// GitHub API errors.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Template loading and rendering errors.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Failed to resolve or write the output file.
    #[error("Failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification used to report errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad user input.
    Input,
    /// The API answered with an error status.
    Remote,
    /// Connection, DNS or other transport failure.
    Transport,
    /// Anything else.
    Unexpected,
}

impl GeneratorError {
    /// Classifies the error for reporting.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Identifier(_) => ErrorCategory::Input,
            Self::Api(e) if e.is_transport() => ErrorCategory::Transport,
            Self::Api(ApiError::InvalidResponse { .. }) => ErrorCategory::Unexpected,
            Self::Api(_) => ErrorCategory::Remote,
            Self::Template(_) | Self::Io { .. } => ErrorCategory::Unexpected,
        }
    }
}
