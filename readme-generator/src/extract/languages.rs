//! Language statistics.

use crate::github::LanguageHistogram;
use std::cmp::Ordering;

/// Sentinel used when no languages were reported.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Tech-stack line used when no languages were reported.
pub const NOT_AVAILABLE: &str = "- Language information not available";

/// Returns the language with the most bytes.
///
/// Ties resolve to the alphabetically first language. Returns
/// [`NOT_SPECIFIED`] for an empty histogram.
#[must_use]
pub fn primary_language(languages: &LanguageHistogram) -> String {
    ranked(languages)
        .first()
        .map_or_else(|| NOT_SPECIFIED.to_string(), |(name, _)| name.to_string())
}

/// Formats one `- **{language}:** {share}%` line per language, largest first.
#[must_use]
pub fn format_tech_stack(languages: &LanguageHistogram) -> String {
    if languages.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    let total = languages.total_bytes();
    ranked(languages)
        .into_iter()
        .map(|(name, bytes)| format!("- **{name}:** {:.1}%", percentage(bytes, total)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Languages sorted by byte count descending, then name ascending.
fn ranked(languages: &LanguageHistogram) -> Vec<(&str, u64)> {
    let mut ranked: Vec<(&str, u64)> = languages.iter().collect();
    ranked.sort_by(|(a_name, a_bytes), (b_name, b_bytes)| match b_bytes.cmp(a_bytes) {
        Ordering::Equal => a_name.cmp(b_name),
        other => other,
    });
    ranked
}

fn percentage(bytes: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    bytes as f64 / total as f64 * 100.0
}
