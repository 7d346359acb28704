//! Numeric hour fallbacks: total airframe time and explicit remaining hours

use regex::Regex;
use std::sync::LazyLock;

static TTAF_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)TTAF:\s*(\d+)\s*Hrs",
        r"(?i)Airframe Total Time\s*:?\s*(\d+)",
        r"(?i)Airframe:\s*(\d+)\s*Hrs",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static REMAINING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(\d+)\s+hrs?\s+left",
        r"(?i)Remaining[:\s]+(\d+)\s+hrs?",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Scan an ordered pattern table, returning the first capture that parses
/// as an integer. Later patterns are only consulted when earlier ones find
/// nothing.
fn first_number(text: &str, patterns: &[Regex]) -> Option<u32> {
    for pattern in patterns {
        if let Some(caps) = pattern.captures(text) {
            if let Some(value) = caps.get(1).and_then(|m| m.as_str().parse().ok()) {
                return Some(value);
            }
        }
    }
    None
}

/// Find the total airframe hours (TTAF) stated anywhere in the ad.
///
/// Recognized forms, in precedence order: `TTAF: N Hrs`,
/// `Airframe Total Time N`, `Airframe: N Hrs` (case-insensitive).
pub fn total_airframe_hours(text: &str) -> Option<u32> {
    first_number(text, &TTAF_PATTERNS)
}

/// Find an explicit "hours left before overhaul" statement in the ad.
///
/// Recognized forms: `N hrs left`, `Remaining: N hrs`.
pub fn explicit_hours_remaining(text: &str) -> Option<u32> {
    first_number(text, &REMAINING_PATTERNS)
}
