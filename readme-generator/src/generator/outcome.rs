//! Generation outcome.

use crate::identifier::RepositoryId;
use std::path::PathBuf;

/// Result of a successful generation run.
#[derive(Debug, Clone)]
pub struct GeneratedReadme {
    /// Repository the README was generated for.
    pub repository: RepositoryId,

    /// Full name reported by GitHub, if any.
    pub full_name: Option<String>,

    /// Description reported by GitHub, if any.
    pub description: Option<String>,

    /// Absolute path of the written file.
    pub output_path: PathBuf,

    /// Number of bytes written.
    pub bytes_written: usize,
}
