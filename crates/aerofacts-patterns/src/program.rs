//! Paid maintenance-program detection

use regex::Regex;
use std::sync::LazyLock;

/// Known hourly-cost maintenance programs. Longer brand names precede their
/// substrings so "Rolls Royce Corporate Care" is reported in full.
const PROGRAM_VOCABULARY: &[&str] = &[
    "Rolls Royce Corporate Care",
    "Corporate Care",
    "Honeywell HAPP",
    "JSSI",
    "MSP",
];

static PROGRAM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = PROGRAM_VOCABULARY.join("|");
    Regex::new(&format!(r"(?i)\b({})\b", alternation)).unwrap()
});

/// Find a recognized paid maintenance program name in the given text.
///
/// Matching is case-insensitive; the returned name is the canonical
/// vocabulary spelling, not the ad's casing. Callers typically scan the
/// structured program field first and fall back to the whole ad body.
pub fn maintenance_program(text: &str) -> Option<&'static str> {
    let matched = PROGRAM_PATTERN.captures(text)?.get(1)?.as_str();
    PROGRAM_VOCABULARY
        .iter()
        .find(|name| name.eq_ignore_ascii_case(matched))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_program_recognized() {
        for name in PROGRAM_VOCABULARY {
            let text = format!("Engines enrolled on {}.", name);
            assert_eq!(maintenance_program(&text), Some(*name));
        }
    }

    #[test]
    fn test_case_insensitive_canonicalized() {
        assert_eq!(maintenance_program("engines on jssi since 2015"), Some("JSSI"));
        assert_eq!(
            maintenance_program("ROLLS ROYCE CORPORATE CARE enrolled"),
            Some("Rolls Royce Corporate Care")
        );
    }

    #[test]
    fn test_full_brand_preferred_over_substring() {
        assert_eq!(
            maintenance_program("Both engines on Rolls Royce Corporate Care."),
            Some("Rolls Royce Corporate Care")
        );
    }

    #[test]
    fn test_no_program() {
        assert_eq!(maintenance_program("Engines maintained on condition."), None);
    }

    #[test]
    fn test_word_boundary_respected() {
        // "MSPX" is not an MSP enrollment
        assert_eq!(maintenance_program("registration MSPX123"), None);
    }
}
