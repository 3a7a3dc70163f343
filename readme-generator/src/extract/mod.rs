//! Flattens repository data into template variables.
//!
//! Everything here is a pure function of the fetched metadata, the language
//! histogram and the generation timestamp.

mod dates;
mod languages;
mod license;

pub use dates::format_date;
pub use languages::{format_tech_stack, primary_language, NOT_AVAILABLE, NOT_SPECIFIED};
pub use license::{summarize_license, LicenseSummary, NO_LICENSE};

use crate::github::{LanguageHistogram, RepositoryMetadata};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Format of the `generation_date` variable.
pub const GENERATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DEFAULT_DESCRIPTION: &str = "No description provided.";
const DEFAULT_OVERVIEW: &str = "Add a detailed overview of your project here.";
const FEATURES: &str = "- Feature 1: Add your features here\n\
                        - Feature 2: Describe key capabilities\n\
                        - Feature 3: Highlight unique aspects";
const INSTALL_INSTRUCTIONS: &str = "```bash\n# Add installation commands here\n```";
const USAGE_INSTRUCTIONS: &str = "```bash\n# Add usage examples here\n```";

/// Values available to README templates, one field per placeholder.
///
/// Serialized as a flat object of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateVariables {
    pub repo_name: String,
    pub owner: String,
    pub description: String,
    pub overview: String,
    pub features: String,
    pub install_instructions: String,
    pub usage_instructions: String,
    pub tech_stack: String,
    pub created_date: String,
    pub updated_date: String,
    pub stars: String,
    pub forks: String,
    pub open_issues: String,
    pub license: String,
    pub license_info: String,
    pub primary_language: String,
    pub repo_url: String,
    pub homepage_link: String,
    pub generation_date: String,
}

/// Builds the template variables for a repository.
///
/// `generated_at` is rendered verbatim into `generation_date`, so callers
/// decide which clock to read.
#[must_use]
pub fn extract_variables(
    metadata: &RepositoryMetadata,
    languages: &LanguageHistogram,
    generated_at: NaiveDateTime,
) -> TemplateVariables {
    let license = summarize_license(metadata.license.as_ref());

    let homepage_link = metadata
        .homepage()
        .map(|homepage| format!("- **Homepage:** [{homepage}]({homepage})"))
        .unwrap_or_default();

    TemplateVariables {
        repo_name: metadata.name_or_default().to_string(),
        owner: metadata.owner_login().to_string(),
        description: metadata
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        overview: metadata
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_OVERVIEW.to_string()),
        features: FEATURES.to_string(),
        install_instructions: INSTALL_INSTRUCTIONS.to_string(),
        usage_instructions: USAGE_INSTRUCTIONS.to_string(),
        tech_stack: format_tech_stack(languages),
        created_date: format_date(metadata.created_at.as_deref().unwrap_or("")),
        updated_date: format_date(metadata.updated_at.as_deref().unwrap_or("")),
        stars: metadata.stars().to_string(),
        forks: metadata.forks().to_string(),
        open_issues: metadata.open_issues().to_string(),
        license: license.name,
        license_info: license.statement,
        primary_language: primary_language(languages),
        repo_url: metadata.html_url_or_default().to_string(),
        homepage_link,
        generation_date: generated_at.format(GENERATION_DATE_FORMAT).to_string(),
    }
}
