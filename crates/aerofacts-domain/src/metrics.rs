//! Computed per-engine output records

use crate::basis::CalculationBasis;
use crate::facts::RawFacts;
use crate::position::EnginePosition;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the output table: everything known or derived about one
/// engine of one ad.
///
/// Invariants:
/// - `time_remaining_before_overhaul` is never negative (floored at zero)
/// - `basis_of_calculation` is `Some` exactly when
///   `time_remaining_before_overhaul` is `Some`
/// - both left unset is a legitimate terminal state, not an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineMetrics {
    /// Identifier of the source ad
    pub ad_id: String,

    /// Engine position within the ad
    pub position: EnginePosition,

    /// The facts the record was computed from, carried through verbatim
    pub facts: RawFacts,

    /// Hours of operation left before the next overhaul, floored at zero
    pub time_remaining_before_overhaul: Option<f64>,

    /// The rule that produced the remaining-time figure
    pub basis_of_calculation: Option<CalculationBasis>,

    /// Resolved overhaul due date (stated by the ad, or the earliest
    /// computable candidate)
    pub date_of_overhaul_due: Option<NaiveDate>,

    /// Years of operation left, rounded to two decimal places
    pub years_left_for_operation: Option<f64>,

    /// Remaining hours expressed at the policy's annual usage rate
    pub average_annual_hours_equivalent: Option<f64>,
}

impl EngineMetrics {
    /// Create an empty record for an ad/engine pair with nothing resolved
    pub fn unresolved(ad_id: impl Into<String>, position: EnginePosition, facts: RawFacts) -> Self {
        Self {
            ad_id: ad_id.into(),
            position,
            facts,
            time_remaining_before_overhaul: None,
            basis_of_calculation: None,
            date_of_overhaul_due: None,
            years_left_for_operation: None,
            average_annual_hours_equivalent: None,
        }
    }

    /// Check the basis/remaining pairing invariant
    pub fn is_consistent(&self) -> bool {
        self.basis_of_calculation.is_some() == self.time_remaining_before_overhaul.is_some()
            && self.time_remaining_before_overhaul.map_or(true, |h| h >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_record_is_consistent() {
        let record = EngineMetrics::unresolved("ad-1", EnginePosition::Left, RawFacts::default());
        assert!(record.is_consistent());
        assert!(record.basis_of_calculation.is_none());
        assert!(record.time_remaining_before_overhaul.is_none());
    }

    #[test]
    fn test_basis_without_remaining_is_inconsistent() {
        let mut record =
            EngineMetrics::unresolved("ad-1", EnginePosition::Left, RawFacts::default());
        record.basis_of_calculation = Some(CalculationBasis::Program);
        assert!(!record.is_consistent());
    }

    #[test]
    fn test_negative_remaining_is_inconsistent() {
        let mut record =
            EngineMetrics::unresolved("ad-1", EnginePosition::Right, RawFacts::default());
        record.basis_of_calculation = Some(CalculationBasis::TimeSinceNew);
        record.time_remaining_before_overhaul = Some(-1.0);
        assert!(!record.is_consistent());
    }
}
