//! GitHub REST API access.
//!
//! This module fetches the three repository resources the generator needs:
//! repository metadata, the language histogram and the existing README.
//! Only the metadata fetch is allowed to fail; the other two degrade to
//! empty values.

mod error;
mod models;

pub use error::ApiError;
pub use models::{LanguageHistogram, LicenseInfo, RepositoryMetadata, RepositoryOwner};

use crate::identifier::RepositoryId;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{debug, warn};

/// Base URL of the public GitHub API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Installs aws-lc-rs as the process-wide rustls crypto provider.
///
/// Both ring and aws-lc-rs are compiled in, so rustls cannot pick one on its
/// own. Returns false if a provider was already installed.
pub fn install_crypto_provider() -> bool {
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_ok()
}

/// Body of `GET /repos/{owner}/{repo}/readme`.
#[derive(Debug, Deserialize)]
struct ReadmePayload {
    content: Option<String>,
}

/// Thin client over the repository endpoints.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    authenticated: bool,
}

impl GitHubClient {
    /// Builds a client for the given API base URL.
    ///
    /// When `token` is `None` requests are anonymous and subject to the
    /// unauthenticated rate limit. Transparent retries are disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::GitHubError`] if the base URL is invalid or the
    /// HTTP client cannot be constructed.
    pub fn new(api_url: &str, token: Option<&str>) -> Result<Self, ApiError> {
        install_crypto_provider();

        let mut builder = Octocrab::builder()
            .base_uri(api_url)?
            .add_retry_config(RetryConfig::None);

        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }

        Ok(Self {
            octocrab: builder.build()?,
            authenticated: token.is_some(),
        })
    }

    /// Returns true when requests carry an authorization header.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Fetches repository metadata.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] on 404
    /// - [`ApiError::RateLimited`] on 403
    /// - [`ApiError::Status`] on any other non-200 status
    /// - [`ApiError::InvalidResponse`] if the body is not repository JSON
    /// - [`ApiError::GitHubError`] on transport failure
    pub async fn get_repository(&self, id: &RepositoryId) -> Result<RepositoryMetadata, ApiError> {
        let route = format!("/repos/{}/{}", id.owner, id.name);
        debug!(route = %route, "Fetching repository metadata");

        let response = self.octocrab._get(route.as_str()).await?;
        match response.status().as_u16() {
            200 => {}
            404 => {
                return Err(ApiError::NotFound {
                    owner: id.owner.clone(),
                    repo: id.name.clone(),
                })
            }
            403 => return Err(ApiError::RateLimited),
            status => return Err(ApiError::Status { status }),
        }

        let body = self.octocrab.body_to_string(response).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::InvalidResponse {
            endpoint: route,
            source,
        })
    }

    /// Fetches the language histogram.
    ///
    /// Language statistics are cosmetic, so every failure yields an empty
    /// histogram instead of an error.
    pub async fn get_languages(&self, id: &RepositoryId) -> LanguageHistogram {
        let route = format!("/repos/{}/{}/languages", id.owner, id.name);
        debug!(route = %route, "Fetching languages");

        match self.fetch_json::<LanguageHistogram>(&route).await {
            Ok(Some(languages)) => languages,
            Ok(None) => LanguageHistogram::new(),
            Err(e) => {
                warn!(repo = %id, error = %e, "Failed to fetch languages, continuing without them");
                LanguageHistogram::new()
            }
        }
    }

    /// Fetches the base64 content of the repository's README, if any.
    ///
    /// Never fails; any error is reported as `None`.
    pub async fn get_readme_content(&self, id: &RepositoryId) -> Option<String> {
        let route = format!("/repos/{}/{}/readme", id.owner, id.name);
        debug!(route = %route, "Fetching existing README");

        match self.fetch_json::<ReadmePayload>(&route).await {
            Ok(Some(readme)) => Some(readme.content.unwrap_or_default()),
            Ok(None) => None,
            Err(e) => {
                debug!(repo = %id, error = %e, "Failed to fetch README");
                None
            }
        }
    }

    /// GETs `route` and decodes the body on 200, returning `None` for any
    /// other status.
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        route: &str,
    ) -> Result<Option<T>, ApiError> {
        let response = self.octocrab._get(route).await?;
        let status = response.status().as_u16();
        if status != 200 {
            debug!(route, status, "Resource unavailable");
            return Ok(None);
        }

        let body = self.octocrab.body_to_string(response).await?;
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|source| ApiError::InvalidResponse {
                endpoint: route.to_string(),
                source,
            })
    }
}
