//! Final record shaping on top of the resolver

use crate::resolver::{resolve_basis, resolve_due_date};
use aerofacts_domain::{EngineMetrics, EnginePosition, LifecyclePolicy, RawFacts};
use chrono::NaiveDate;

/// Shape one engine's final output record.
///
/// `facts` must already be enriched (shared airframe hours merged, regex
/// fallbacks applied); this function only resolves and derives, it never
/// scans text. Pure and idempotent: the same inputs always produce the
/// same record.
///
/// Derived figures:
/// - `years_left_for_operation` = remaining / annual usage, two decimals
/// - `average_annual_hours_equivalent` = remaining
///
/// When no due date was stated and at least one candidate is computable,
/// both figures are recomputed from the resolved due date instead,
/// superseding the basis-derived values ("whichever trigger fires first
/// governs" extends to the derived figures).
pub fn compute_metrics(
    ad_id: &str,
    position: EnginePosition,
    facts: RawFacts,
    program_name: Option<&str>,
    explicit_hours: Option<u32>,
    policy: &LifecyclePolicy,
    today: NaiveDate,
) -> EngineMetrics {
    let annual = f64::from(policy.annual_usage_hours);

    let resolved = resolve_basis(&facts, program_name, explicit_hours, policy);
    let basis = resolved.map(|(basis, _)| basis);
    let remaining = resolved.map(|(_, hours)| hours);

    let mut years_left = remaining.map(|hours| round2(hours / annual));
    let mut avg_hours = remaining;

    let mut due_date = facts.date_of_overhaul_due;
    if due_date.is_none() {
        due_date = resolve_due_date(&facts, policy, today);
        if let Some(due) = due_date {
            let years = (due - today).num_days() as f64 / 365.25;
            years_left = Some(round2(years));
            avg_hours = Some(years * annual);
        }
    }

    EngineMetrics {
        ad_id: ad_id.to_string(),
        position,
        facts,
        time_remaining_before_overhaul: remaining,
        basis_of_calculation: basis,
        date_of_overhaul_due: due_date,
        years_left_for_operation: years_left,
        average_annual_hours_equivalent: avg_hours,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
