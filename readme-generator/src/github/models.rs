//! Repository payloads returned by the GitHub API.
//!
//! Every field is optional. The accessors apply the fallbacks used when
//! rendering, so each default is a single checked branch.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Repository metadata from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryMetadata {
    /// Repository name.
    pub name: Option<String>,

    /// Full name in "owner/name" format.
    pub full_name: Option<String>,

    /// Repository owner.
    pub owner: Option<RepositoryOwner>,

    /// Short description.
    pub description: Option<String>,

    /// Detected license, if any.
    pub license: Option<LicenseInfo>,

    /// Star count.
    pub stargazers_count: Option<u64>,

    /// Fork count.
    pub forks_count: Option<u64>,

    /// Open issue count (includes pull requests).
    pub open_issues_count: Option<u64>,

    /// Project homepage.
    pub homepage: Option<String>,

    /// ISO-8601 creation timestamp.
    pub created_at: Option<String>,

    /// ISO-8601 last update timestamp.
    pub updated_at: Option<String>,

    /// Canonical web URL.
    pub html_url: Option<String>,
}

/// Owner of a repository.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryOwner {
    /// User or organization login.
    pub login: Option<String>,
}

/// License object attached to a repository.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseInfo {
    /// Display name, e.g. "MIT License".
    pub name: Option<String>,

    /// SPDX identifier, e.g. "MIT".
    pub spdx_id: Option<String>,
}

impl RepositoryMetadata {
    /// Repository name, or `"Repository"` when absent.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Repository")
    }

    /// Owner login, or an empty string when absent.
    #[must_use]
    pub fn owner_login(&self) -> &str {
        self.owner
            .as_ref()
            .and_then(|owner| owner.login.as_deref())
            .unwrap_or("")
    }

    /// Star count, zero when absent.
    #[must_use]
    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }

    /// Fork count, zero when absent.
    #[must_use]
    pub fn forks(&self) -> u64 {
        self.forks_count.unwrap_or(0)
    }

    /// Open issue count, zero when absent.
    #[must_use]
    pub fn open_issues(&self) -> u64 {
        self.open_issues_count.unwrap_or(0)
    }

    /// Homepage URL, ignoring blank values.
    #[must_use]
    pub fn homepage(&self) -> Option<&str> {
        self.homepage
            .as_deref()
            .map(str::trim)
            .filter(|homepage| !homepage.is_empty())
    }

    /// Canonical web URL, or an empty string when absent.
    #[must_use]
    pub fn html_url_or_default(&self) -> &str {
        self.html_url.as_deref().unwrap_or("")
    }
}

/// Byte count per language from `GET /repos/{owner}/{repo}/languages`.
///
/// Backed by a [`BTreeMap`] so iteration is alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LanguageHistogram(BTreeMap<String, u64>);

impl LanguageHistogram {
    /// Creates an empty histogram.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no languages were reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total bytes across all languages.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.0.values().sum()
    }

    /// Iterates languages alphabetically.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(name, bytes)| (name.as_str(), *bytes))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for LanguageHistogram {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, bytes)| (name.into(), bytes))
                .collect(),
        )
    }
}
