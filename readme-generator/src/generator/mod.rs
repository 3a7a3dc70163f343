//! Orchestrates README generation for a single repository.

mod config;
mod error;
mod outcome;

pub use config::GeneratorConfig;
pub use error::{ErrorCategory, GeneratorError};
pub use outcome::GeneratedReadme;

use crate::extract::extract_variables;
use crate::github::{GitHubClient, RepositoryMetadata};
use crate::identifier::RepositoryId;
use crate::templates::TemplateEngine;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, Instrument};

/// Fetches repository data, renders the template and writes the result.
pub struct ReadmeGenerator {
    config: GeneratorConfig,
    client: GitHubClient,
    engine: TemplateEngine,
}

impl ReadmeGenerator {
    /// Builds a generator from the provided configuration.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the API client cannot be built or the template
    /// cannot be loaded.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let client = GitHubClient::new(config.api_url(), config.token())?;
        let engine = TemplateEngine::load(config.template_path())?;
        Ok(Self {
            config,
            client,
            engine,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a README for `identifier` and writes it to the output path.
    ///
    /// An existing file at the output path is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] if the identifier is malformed, the
    /// repository cannot be fetched, the template fails to render or the
    /// file cannot be written.
    pub async fn generate(&self, identifier: &str) -> Result<GeneratedReadme, GeneratorError> {
        let repository = RepositoryId::parse(identifier)?;
        let span = info_span!("generate", repo = %repository);

        async {
            info!(
                authenticated = self.client.is_authenticated(),
                "Fetching repository information"
            );

            let (metadata, content) = self.render(&repository).await?;
            info!(
                full_name = metadata.full_name.as_deref().unwrap_or_default(),
                "Repository found"
            );

            let output_path = self.resolve_output_path(&repository)?;
            write_output(&output_path, &content)?;
            info!(path = %output_path.display(), "README written");

            Ok::<_, GeneratorError>(GeneratedReadme {
                repository: repository.clone(),
                full_name: metadata.full_name,
                description: metadata.description,
                output_path,
                bytes_written: content.len(),
            })
        }
        .instrument(span)
        .await
    }

    /// Fetches repository data and renders the README without writing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be fetched or the template
    /// fails to render. Language statistics never cause a failure.
    pub async fn render(
        &self,
        repository: &RepositoryId,
    ) -> Result<(RepositoryMetadata, String), GeneratorError> {
        let metadata = self.client.get_repository(repository).await?;
        let languages = self.client.get_languages(repository).await;
        debug!(count = languages.len(), "Fetched languages");

        if let Some(existing) = self.client.get_readme_content(repository).await {
            info!(
                encoded_len = existing.len(),
                "Repository already has a README"
            );
        }

        let variables = extract_variables(&metadata, &languages, Local::now().naive_local());
        let content = self.engine.render(&variables)?;
        Ok((metadata, content))
    }

    /// Resolves the absolute output path for a repository.
    ///
    /// Defaults to `{repo}_README.md` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Io`] if the current directory is unavailable.
    pub fn resolve_output_path(&self, repository: &RepositoryId) -> Result<PathBuf, GeneratorError> {
        let path = match self.config.output_path() {
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(default_output_file_name(repository)),
        };

        if path.is_absolute() {
            return Ok(path);
        }

        let cwd = std::env::current_dir().map_err(|e| GeneratorError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(cwd.join(path))
    }
}

/// Default output file name, `{repo}_README.md`.
#[must_use]
pub fn default_output_file_name(repository: &RepositoryId) -> String {
    format!("{}_README.md", repository.name)
}

fn write_output(path: &Path, content: &str) -> Result<(), GeneratorError> {
    std::fs::write(path, content).map_err(|e| GeneratorError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
