//! License naming.

use crate::github::LicenseInfo;

/// Statement used when the repository has no usable license.
pub const NO_LICENSE: &str = "No license specified.";

/// Short license name and a one-sentence licensing statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseSummary {
    /// Short name, e.g. "MIT License" or "None".
    pub name: String,

    /// Sentence for the license section.
    pub statement: String,
}

/// Summarizes the license object of a repository.
///
/// A license without an SPDX identifier keeps its name but gets the
/// [`NO_LICENSE`] statement.
#[must_use]
pub fn summarize_license(license: Option<&LicenseInfo>) -> LicenseSummary {
    let Some(license) = license else {
        return LicenseSummary {
            name: "None".to_string(),
            statement: NO_LICENSE.to_string(),
        };
    };

    let name = license.name.as_deref().unwrap_or("Unknown").to_string();
    let has_spdx = license
        .spdx_id
        .as_deref()
        .is_some_and(|spdx| !spdx.is_empty());

    let statement = if has_spdx {
        format!("This project is licensed under the {name}.")
    } else {
        NO_LICENSE.to_string()
    };

    LicenseSummary { name, statement }
}
