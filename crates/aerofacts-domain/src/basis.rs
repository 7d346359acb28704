//! Basis-of-calculation labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// The rule that determined a record's remaining-time figure.
///
/// The variants are listed in precedence order: the resolver tries them
/// top to bottom and the first applicable one wins. A record with no basis
/// set has no remaining-time figure either (and vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationBasis {
    /// Enrolled in a recognized paid maintenance program; treated as reset
    /// to full life
    Program,
    /// An explicit "N hrs left" statement found in the ad text
    Explicit,
    /// Hours flown since the mid-life (HSI) milestone
    TimeSinceMidlife,
    /// Hours flown since the last overhaul, when that estimate is stricter
    /// than the time-since-new one
    TimeSinceOverhaul,
    /// Hours flown since new, against the full TBO interval
    TimeSinceNew,
}

impl CalculationBasis {
    /// The human-readable label used in the output workbook
    pub fn label(&self) -> &'static str {
        match self {
            CalculationBasis::Program => "program",
            CalculationBasis::Explicit => "explicit",
            CalculationBasis::TimeSinceMidlife => "Time Since Mid-Life (TSML)",
            CalculationBasis::TimeSinceOverhaul => "Time Since Overhaul (TSOH)",
            CalculationBasis::TimeSinceNew => "Time Since New (TSN)",
        }
    }
}

impl fmt::Display for CalculationBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
