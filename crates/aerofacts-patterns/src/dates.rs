//! HSI / mid-life date fallbacks

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static HSI_DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)Last HSI[:\s]+([A-Za-z0-9 ,/-]+)",
        r"(?i)Date of HSI[:\s]+([A-Za-z0-9 ,/-]+)",
        r"(?i)Midlife c/w\s+([A-Za-z]+\s+\d{4})",
        r"(?i)Ten Year Calendar[:\s]+([A-Za-z]+\s+\d{4})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([A-Za-z]+)\s+(\d{4})$").unwrap());

const FULL_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
];

/// Find the date of the last hot-section inspection in the ad text.
///
/// Recognized introducers, in precedence order: `Last HSI:`,
/// `Date of HSI:`, `Midlife c/w`, `Ten Year Calendar:`. Month-year forms
/// ("June 2018") normalize to the first of the month.
pub fn hsi_date(text: &str) -> Option<NaiveDate> {
    for pattern in &*HSI_DATE_PATTERNS {
        if let Some(caps) = pattern.captures(text) {
            if let Some(date) = caps.get(1).and_then(|m| parse_loose_date(m.as_str())) {
                return Some(date);
            }
        }
    }
    None
}

/// Parse a date string in any recognized form, or a "Month Year" pair
/// normalized to the first of the month.
///
/// The capture groups are greedy and often include trailing prose
/// ("06/14/2019 both engines"), so longer token prefixes are tried first
/// and shortened until one parses.
fn parse_loose_date(raw: &str) -> Option<NaiveDate> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    for take in (1..=tokens.len().min(4)).rev() {
        let prefix = tokens[..take].join(" ");
        let prefix = prefix.trim_end_matches([',', '.', '-']);
        if let Some(date) = parse_exact(prefix).or_else(|| parse_month_year(prefix)) {
            return Some(date);
        }
    }
    None
}

fn parse_exact(s: &str) -> Option<NaiveDate> {
    FULL_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

fn parse_month_year(s: &str) -> Option<NaiveDate> {
    let caps = MONTH_YEAR.captures(s)?;
    let padded = format!("{} 1 {}", &caps[1], &caps[2]);
    ["%B %d %Y", "%b %d %Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&padded, format).ok())
}
