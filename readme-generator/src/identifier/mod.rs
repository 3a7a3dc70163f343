//! Repository identifier parsing.
//!
//! Accepts either the short `owner/repo` form or a full URL such as
//! `https://github.com/owner/repo`, and produces exactly one owner/name pair.

mod error;

pub use error::IdentifierError;

use std::fmt;
use std::str::FromStr;
use url::Url;

/// Owner and name of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepositoryId {
    /// Creates an identifier from an already split pair.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses `owner/repo` or a repository URL.
    ///
    /// For URLs, the last two non-empty path segments are used, so trailing
    /// slashes are ignored. A trailing `.git` on the name is stripped.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the input does not name exactly one
    /// owner/name pair.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(IdentifierError::Empty);
        }

        if input.contains("://") {
            return parse_url(input);
        }

        let invalid = || IdentifierError::InvalidFormat {
            input: input.to_string(),
        };
        let (owner, name) = input.split_once('/').ok_or_else(invalid)?;
        if name.contains('/') {
            return Err(invalid());
        }

        build(owner, name).ok_or_else(invalid)
    }

    /// Returns the `owner/name` form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn parse_url(input: &str) -> Result<RepositoryId, IdentifierError> {
    let url = Url::parse(input).map_err(|source| IdentifierError::InvalidUrl {
        input: input.to_string(),
        source,
    })?;
    let missing = || IdentifierError::MissingSegments {
        input: input.to_string(),
    };

    let segments: Vec<&str> = url
        .path_segments()
        .ok_or_else(missing)?
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [.., owner, name] => build(owner, name).ok_or_else(missing),
        _ => Err(missing()),
    }
}

fn build(owner: &str, name: &str) -> Option<RepositoryId> {
    let owner = owner.trim();
    let name = name.trim();
    let name = name.strip_suffix(".git").unwrap_or(name);

    if !is_valid_segment(owner) || !is_valid_segment(name) {
        return None;
    }

    Some(RepositoryId::new(owner, name))
}

/// Owner and repository names are limited to ASCII letters, digits, `-`,
/// `_` and `.`, and may not be `.` or `..`. Anything else would change the
/// meaning of the API route the name is interpolated into.
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_repo() {
        let id = RepositoryId::parse("octocat/Hello-World").unwrap();
        assert_eq!(id, RepositoryId::new("octocat", "Hello-World"));
    }

    #[test]
    fn parses_url() {
        let id = RepositoryId::parse("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(id.owner, "rust-lang");
        assert_eq!(id.name, "rust");
    }

    #[test]
    fn parses_url_with_trailing_slash() {
        let id = RepositoryId::parse("https://github.com/a/b/").unwrap();
        assert_eq!(id, RepositoryId::new("a", "b"));
    }

    #[test]
    fn strips_git_suffix() {
        let id = RepositoryId::parse("https://github.com/user/repo.git").unwrap();
        assert_eq!(id.name, "repo");

        let id = RepositoryId::parse("user/repo.git").unwrap();
        assert_eq!(id.name, "repo");
    }

    #[test]
    fn uses_last_two_url_segments() {
        let id = RepositoryId::parse("http://git.example.com/mirror/a/b").unwrap();
        assert_eq!(id, RepositoryId::new("a", "b"));
    }

    #[test]
    fn rejects_missing_slash() {
        let result = RepositoryId::parse("just-a-name");
        assert!(matches!(result, Err(IdentifierError::InvalidFormat { .. })));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            RepositoryId::parse("   "),
            Err(IdentifierError::Empty)
        ));
    }

    #[test]
    fn rejects_extra_segments_and_empty_parts() {
        assert!(RepositoryId::parse("a/b/c").is_err());
        assert!(RepositoryId::parse("/b").is_err());
        assert!(RepositoryId::parse("a/").is_err());
    }

    #[test]
    fn rejects_characters_outside_names() {
        for input in [
            "octo cat/Hello World",
            "octocat/Hello#World",
            "octocat/Hello?World",
            "octocat/..",
            "octo%2Fcat/repo",
        ] {
            assert!(
                matches!(
                    RepositoryId::parse(input),
                    Err(IdentifierError::InvalidFormat { .. })
                ),
                "accepted {input}"
            );
        }
    }

    #[test]
    fn rejects_encoded_characters_in_urls() {
        let result = RepositoryId::parse("https://github.com/octocat/Hello%20World");
        assert!(matches!(
            result,
            Err(IdentifierError::MissingSegments { .. })
        ));
    }

    #[test]
    fn accepts_dots_and_underscores() {
        let id = RepositoryId::parse("rust-lang/rust_analyzer.github.io").unwrap();
        assert_eq!(id.name, "rust_analyzer.github.io");
    }

    #[test]
    fn rejects_url_without_repository() {
        let result = RepositoryId::parse("https://github.com/octocat");
        assert!(matches!(
            result,
            Err(IdentifierError::MissingSegments { .. })
        ));
    }

    #[test]
    fn displays_full_name() {
        let id: RepositoryId = "octocat/Spoon-Knife".parse().unwrap();
        assert_eq!(id.to_string(), "octocat/Spoon-Knife");
        assert_eq!(id.full_name(), "octocat/Spoon-Knife");
    }
}
