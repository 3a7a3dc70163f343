#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod extract;
pub mod generator;
pub mod github;
pub mod identifier;
pub mod templates;

pub use extract::{extract_variables, format_date, TemplateVariables};
pub use generator::{
    default_output_file_name, ErrorCategory, GeneratedReadme, GeneratorConfig, GeneratorError,
    ReadmeGenerator,
};
pub use github::{
    install_crypto_provider, ApiError, GitHubClient, LanguageHistogram, LicenseInfo,
    RepositoryMetadata, DEFAULT_API_URL,
};
pub use identifier::{IdentifierError, RepositoryId};
pub use templates::{
    default_template, write_default_template, TemplateEngine, TemplateError,
    DEFAULT_TEMPLATE_FILE,
};
