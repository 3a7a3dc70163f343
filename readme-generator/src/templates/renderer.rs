//! README template engine.

use super::{default_template, TemplateError};
use crate::extract::TemplateVariables;
use handlebars::{no_escape, Handlebars};
use std::path::Path;
use tracing::{debug, warn};

/// Registry name of the loaded template.
const TEMPLATE_NAME: &str = "readme";

/// Strict registry without HTML escaping, since output is Markdown and
/// every placeholder must resolve.
fn strict_registry() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(no_escape);
    handlebars.set_strict_mode(true);
    handlebars
}

/// A compiled README template.
///
/// Placeholders use `{{name}}` syntax. Single braces are plain text and
/// `\{{` produces a literal `{{`.
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    source: String,
}

impl TemplateEngine {
    /// Compiles the built-in default template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::SyntaxError`] if the template does not compile.
    pub fn new() -> Result<Self, TemplateError> {
        Self::from_source(default_template())
    }

    /// Compiles a template from its text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::SyntaxError`] for malformed templates.
    pub fn from_source(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        let mut handlebars = strict_registry();
        handlebars.register_template_string(TEMPLATE_NAME, &source)?;
        Ok(Self { handlebars, source })
    }

    /// Loads the template at `path` if it exists, otherwise the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or compiled.
    pub fn load(path: Option<&Path>) -> Result<Self, TemplateError> {
        match path {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading custom template");
                let source =
                    std::fs::read_to_string(path).map_err(|e| TemplateError::IoError {
                        path: path.display().to_string(),
                        source: e,
                    })?;
                Self::from_source(source)
            }
            Some(path) => {
                warn!(path = %path.display(), "Template not found, using default template");
                Self::new()
            }
            None => Self::new(),
        }
    }

    /// Returns the template text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders the template with the given variables.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::RenderError`] if the template references a
    /// placeholder that has no value.
    pub fn render(&self, variables: &TemplateVariables) -> Result<String, TemplateError> {
        let data = serde_json::to_value(variables)?;
        Ok(self.handlebars.render(TEMPLATE_NAME, &data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_variables;
    use crate::github::{LanguageHistogram, RepositoryMetadata};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn sample_variables() -> TemplateVariables {
        let metadata: RepositoryMetadata = serde_json::from_str(
            r#"{
                "name": "widgets",
                "owner": {"login": "acme"},
                "description": "Widgets <for> everyone & more",
                "html_url": "https://github.com/acme/widgets"
            }"#,
        )
        .unwrap();
        let languages: LanguageHistogram = [("Rust", 10)].into_iter().collect();
        let generated_at = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();

        extract_variables(&metadata, &languages, generated_at)
    }

    #[test]
    fn default_template_renders_without_placeholders() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine.render(&sample_variables()).unwrap();

        assert!(rendered.starts_with("# widgets\n"));
        assert!(rendered.contains("git clone https://github.com/acme/widgets.git"));
        assert!(rendered.contains("- **Rust:** 100.0%"));
        assert!(rendered.contains("*This README was generated on 2024-05-06 07:08:09*"));
        assert!(!rendered.contains("{{"));
        assert!(!rendered.contains("}}"));
    }

    #[test]
    fn no_html_escaping() {
        let engine = TemplateEngine::from_source("{{description}}").unwrap();
        let rendered = engine.render(&sample_variables()).unwrap();

        assert_eq!(rendered, "Widgets <for> everyone & more");
    }

    #[test]
    fn unknown_placeholder_fails() {
        let engine = TemplateEngine::from_source("Maintainer: {{maintainer}}").unwrap();
        let result = engine.render(&sample_variables());

        assert!(matches!(result, Err(TemplateError::RenderError(_))));
    }

    #[test]
    fn malformed_template_fails_to_compile() {
        let result = TemplateEngine::from_source("{{#if stars}}unterminated");
        assert!(matches!(result, Err(TemplateError::SyntaxError(_))));
    }

    #[test]
    fn single_braces_and_escapes_are_literal() {
        let engine =
            TemplateEngine::from_source(r#"{ "name": "{{repo_name}}" } \{{repo_name}}"#).unwrap();
        let rendered = engine.render(&sample_variables()).unwrap();

        assert_eq!(rendered, r#"{ "name": "widgets" } {{repo_name}}"#);
    }

    #[test]
    fn empty_values_are_falsy_in_conditionals() {
        let engine = TemplateEngine::from_source(
            "{{#if homepage_link}}{{homepage_link}}{{else}}No homepage{{/if}}",
        )
        .unwrap();
        assert_eq!(engine.render(&sample_variables()).unwrap(), "No homepage");
    }

    #[test]
    fn load_prefers_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.md");
        fs::write(&path, "Custom {{repo_name}} by {{owner}}").unwrap();

        let engine = TemplateEngine::load(Some(&path)).unwrap();
        let rendered = engine.render(&sample_variables()).unwrap();

        assert_eq!(rendered, "Custom widgets by acme");
    }

    #[test]
    fn load_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.md");

        let engine = TemplateEngine::load(Some(&missing)).unwrap();
        assert_eq!(engine.source(), default_template());

        let engine = TemplateEngine::load(None).unwrap();
        assert_eq!(engine.source(), default_template());
    }
}
