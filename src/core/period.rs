//! Reporting period tags (`Q1-2025`)

use once_cell::sync::Lazy;
use regex::Regex;

/// Quarter tag: `Q<1-4>-<year>`
pub static PERIOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Q([1-4])-(\d{4})$").expect("Invalid PERIOD_RE regex"));

/// Validate a period tag (clap value parser)
pub fn parse_period(s: &str) -> Result<String, String> {
    let tag = s.trim();
    if PERIOD_RE.is_match(tag) {
        Ok(tag.to_string())
    } else {
        Err(format!(
            "invalid period '{}': expected a quarter tag like Q1-2025",
            s
        ))
    }
}

/// Human form of a period tag: `Q1-2025` → `Q1 2025`.
///
/// Tags that are not quarter tags are returned unchanged.
pub fn display_period(tag: &str) -> String {
    match PERIOD_RE.captures(tag) {
        Some(caps) => format!("Q{} {}", &caps[1], &caps[2]),
        None => tag.to_string(),
    }
}
