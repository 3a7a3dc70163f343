//! Repository identifier error types.

use thiserror::Error;

/// Errors that can occur while parsing a repository identifier.
#[derive(Debug, Error)]
pub enum IdentifierError {
    /// Input was empty or whitespace.
    #[error("Repository identifier is empty. Use 'owner/repo' or a full GitHub URL")]
    Empty,

    /// Input is neither `owner/repo` nor a URL.
    #[error("Invalid repository format '{input}'. Use 'owner/repo' or a full GitHub URL")]
    InvalidFormat { input: String },

    /// URL could not be parsed.
    #[error("Invalid repository URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// URL path does not end in a valid `owner/repo` pair.
    #[error("Repository URL '{input}' does not end with a valid owner and repository name")]
    MissingSegments { input: String },
}
