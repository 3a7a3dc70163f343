//! GitHub API error types.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The repository does not exist or is not visible with the current token.
    #[error("Repository {owner}/{repo} not found")]
    NotFound { owner: String, repo: String },

    /// The API refused the request, usually because the rate limit ran out.
    #[error("API rate limit exceeded. Set GITHUB_TOKEN environment variable.")]
    RateLimited,

    /// Any other non-success status.
    #[error("GitHub API error: {status}")]
    Status { status: u16 },

    /// A success response whose body could not be decoded.
    #[error("Invalid response from {endpoint}: {source}")]
    InvalidResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Transport or client construction failure.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}

impl ApiError {
    /// Returns true for failures below the HTTP status layer.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::GitHubError(_))
    }
}
