//! Generator configuration.

use crate::github::DEFAULT_API_URL;
use std::path::{Path, PathBuf};

/// Configuration for a README generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// GitHub token; requests are anonymous when absent.
    token: Option<String>,
    /// Base URL of the GitHub API.
    api_url: String,
    /// Custom template path.
    template_path: Option<PathBuf>,
    /// Explicit output path.
    output_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorConfig {
    /// Creates a configuration for anonymous access to the public API,
    /// using the default template and output path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
            template_path: None,
            output_path: None,
        }
    }

    /// Sets the GitHub token.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|token| !token.trim().is_empty());
        self
    }

    /// Sets the GitHub API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets a custom template path.
    #[must_use]
    pub fn with_template_path(mut self, template_path: Option<PathBuf>) -> Self {
        self.template_path = template_path;
        self
    }

    /// Sets an explicit output path.
    #[must_use]
    pub fn with_output_path(mut self, output_path: Option<PathBuf>) -> Self {
        self.output_path = output_path;
        self
    }

    /// Returns the configured GitHub token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the GitHub API base URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the custom template path.
    #[must_use]
    pub fn template_path(&self) -> Option<&Path> {
        self.template_path.as_deref()
    }

    /// Returns the explicit output path.
    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }
}
