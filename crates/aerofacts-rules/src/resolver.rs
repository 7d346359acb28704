//! Basis precedence chain and due-date resolution

use aerofacts_domain::{CalculationBasis, LifecyclePolicy, RawFacts};
use chrono::{Duration, NaiveDate};

/// Pick the computation basis and remaining hours for one engine.
///
/// The five rules are evaluated in strict precedence order; the first
/// applicable one wins:
///
/// 1. `program` - a recognized paid program name was found (structured
///    field or ad-text scan); enrolled engines are treated as reset to
///    full life, so remaining = the full TBO interval.
/// 2. `explicit` - the ad states "N hrs left" outright.
/// 3. `time-since-mid-life` - TSML is known; remaining counts down from
///    the mid-life interval.
/// 4. `time-since-overhaul` - TSOH is known and the estimate it implies is
///    strictly smaller than the TSN one; the more conservative figure wins.
/// 5. `time-since-new` - remaining counts down from the full TBO.
///
/// The TSOH/TSN comparison is made on the raw pre-floor estimates, with a
/// missing side treated as unbounded; equal estimates resolve to TSN. When
/// both are unknown and no earlier rule applied, the outcome is `None` -
/// a legitimate terminal state, not an error.
///
/// `program_name` and `explicit_hours` are the two text-derived signals
/// the caller scanned for; the resolver itself never touches ad text.
pub fn resolve_basis(
    facts: &RawFacts,
    program_name: Option<&str>,
    explicit_hours: Option<u32>,
    policy: &LifecyclePolicy,
) -> Option<(CalculationBasis, f64)> {
    if program_name.is_some() {
        return Some((CalculationBasis::Program, f64::from(policy.tbo_hours)));
    }

    if let Some(hours) = explicit_hours {
        return Some((CalculationBasis::Explicit, f64::from(hours)));
    }

    if let Some(tsml) = facts.time_since_midlife {
        let remaining = (f64::from(policy.midlife_hours) - f64::from(tsml)).max(0.0);
        return Some((CalculationBasis::TimeSinceMidlife, remaining));
    }

    // Raw pre-floor estimates; a missing input leaves its side unbounded.
    let by_tsoh = facts
        .time_since_overhaul
        .map_or(f64::INFINITY, |tsoh| f64::from(policy.midlife_hours) - tsoh);
    let by_tsn = facts
        .time_since_new
        .map_or(f64::INFINITY, |tsn| f64::from(policy.tbo_hours) - f64::from(tsn));

    if by_tsoh.is_infinite() && by_tsn.is_infinite() {
        return None;
    }

    if by_tsoh < by_tsn {
        Some((CalculationBasis::TimeSinceOverhaul, by_tsoh.max(0.0)))
    } else {
        Some((CalculationBasis::TimeSinceNew, by_tsn.max(0.0)))
    }
}

/// Project the overhaul due date from whatever calendar anchors are known.
///
/// Candidates:
/// - last overhaul date + the policy's calendar limit (20 years,
///   approximated as 365-day years);
/// - hours remaining to TBO from TSML (preferred) or TSN, converted to
///   years at the policy's annual usage rate, from `today`.
///
/// The result is the earliest computable candidate: whichever overhaul
/// trigger fires first governs. `today` is injected so tests are
/// deterministic.
pub fn resolve_due_date(
    facts: &RawFacts,
    policy: &LifecyclePolicy,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let mut candidates = Vec::new();

    if let Some(last_overhaul) = facts.date_of_last_overhaul {
        let limit = Duration::days(i64::from(policy.overhaul_calendar_years) * 365);
        candidates.push(last_overhaul + limit);
    }

    let used = facts.time_since_midlife.or(facts.time_since_new);
    if let Some(used) = used {
        let hours_left = f64::from(policy.tbo_hours) - f64::from(used);
        let years = hours_left / f64::from(policy.annual_usage_hours);
        candidates.push(today + Duration::days((years * 365.0).round() as i64));
    }

    candidates.into_iter().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy() -> LifecyclePolicy {
        LifecyclePolicy::default()
    }

    #[test]
    fn test_program_takes_precedence_over_everything() {
        // Even with every dated/hour field pointing elsewhere, enrollment wins
        let facts = RawFacts {
            time_since_new: Some(7999),
            time_since_midlife: Some(3999),
            time_since_overhaul: Some(3999.0),
            ..Default::default()
        };
        let resolved = resolve_basis(&facts, Some("JSSI"), Some(12), &policy());
        assert_eq!(resolved, Some((CalculationBasis::Program, 8000.0)));
    }

    #[test]
    fn test_explicit_beats_tsml() {
        let facts = RawFacts {
            time_since_midlife: Some(1000),
            ..Default::default()
        };
        let resolved = resolve_basis(&facts, None, Some(650), &policy());
        assert_eq!(resolved, Some((CalculationBasis::Explicit, 650.0)));
    }

    #[test]
    fn test_tsml_arithmetic() {
        let facts = RawFacts {
            time_since_midlife: Some(1500),
            ..Default::default()
        };
        let resolved = resolve_basis(&facts, None, None, &policy());
        assert_eq!(resolved, Some((CalculationBasis::TimeSinceMidlife, 2500.0)));
    }

    #[test]
    fn test_tsml_floored_at_zero() {
        // TSML past the interval still resolves, at zero remaining
        let facts = RawFacts {
            time_since_midlife: Some(9000),
            ..Default::default()
        };
        let resolved = resolve_basis(&facts, None, None, &policy());
        assert_eq!(resolved, Some((CalculationBasis::TimeSinceMidlife, 0.0)));
    }

    #[test]
    fn test_tsoh_wins_when_stricter() {
        // TSOH estimate 4000-3500=500 beats TSN estimate 8000-6000=2000
        let facts = RawFacts {
            time_since_new: Some(6000),
            time_since_overhaul: Some(3500.0),
            ..Default::default()
        };
        let resolved = resolve_basis(&facts, None, None, &policy());
        assert_eq!(resolved, Some((CalculationBasis::TimeSinceOverhaul, 500.0)));
    }

    #[test]
    fn test_tsn_wins_when_stricter() {
        // TSN estimate 8000-7800=200 beats TSOH estimate 4000-1000=3000
        let facts = RawFacts {
            time_since_new: Some(7800),
            time_since_overhaul: Some(1000.0),
            ..Default::default()
        };
        let resolved = resolve_basis(&facts, None, None, &policy());
        assert_eq!(resolved, Some((CalculationBasis::TimeSinceNew, 200.0)));
    }

    #[test]
    fn test_equal_estimates_default_to_tsn() {
        // 4000-1000 == 8000-5000 == 3000
        let facts = RawFacts {
            time_since_new: Some(5000),
            time_since_overhaul: Some(1000.0),
            ..Default::default()
        };
        let resolved = resolve_basis(&facts, None, None, &policy());
        assert_eq!(resolved, Some((CalculationBasis::TimeSinceNew, 3000.0)));
    }

    #[test]
    fn test_tsoh_alone_applies() {
        let facts = RawFacts {
            time_since_overhaul: Some(3200.0),
            ..Default::default()
        };
        let resolved = resolve_basis(&facts, None, None, &policy());
        assert_eq!(resolved, Some((CalculationBasis::TimeSinceOverhaul, 800.0)));
    }

    #[test]
    fn test_tsn_floored_at_zero() {
        let facts = RawFacts {
            time_since_new: Some(9500),
            ..Default::default()
        };
        let resolved = resolve_basis(&facts, None, None, &policy());
        assert_eq!(resolved, Some((CalculationBasis::TimeSinceNew, 0.0)));
    }

    #[test]
    fn test_nothing_known_resolves_to_none() {
        let resolved = resolve_basis(&RawFacts::default(), None, None, &policy());
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_resolver_is_idempotent() {
        let facts = RawFacts {
            time_since_new: Some(6000),
            time_since_overhaul: Some(3500.0),
            ..Default::default()
        };
        let first = resolve_basis(&facts, None, None, &policy());
        let second = resolve_basis(&facts, None, None, &policy());
        assert_eq!(first, second);
    }

    #[test]
    fn test_due_date_from_last_overhaul() {
        let facts = RawFacts {
            date_of_last_overhaul: Some(date(2010, 1, 1)),
            ..Default::default()
        };
        let due = resolve_due_date(&facts, &policy(), date(2025, 6, 1)).unwrap();
        // 20 * 365 days after 2010-01-01
        assert_eq!(due, date(2010, 1, 1) + Duration::days(20 * 365));
    }

    #[test]
    fn test_due_date_from_usage_projection() {
        // 8000 - 7000 = 1000 hrs left, at 450 h/yr ~= 2.22 years out
        let today = date(2025, 6, 1);
        let facts = RawFacts {
            time_since_new: Some(7000),
            ..Default::default()
        };
        let due = resolve_due_date(&facts, &policy(), today).unwrap();
        let expected = today + Duration::days(((1000.0 / 450.0) * 365.0_f64).round() as i64);
        assert_eq!(due, expected);
    }

    #[test]
    fn test_due_date_prefers_tsml_over_tsn() {
        let today = date(2025, 6, 1);
        let facts = RawFacts {
            time_since_midlife: Some(3000),
            time_since_new: Some(7000),
            ..Default::default()
        };
        let due = resolve_due_date(&facts, &policy(), today).unwrap();
        let expected = today + Duration::days(((5000.0 / 450.0) * 365.0_f64).round() as i64);
        assert_eq!(due, expected);
    }

    #[test]
    fn test_due_date_minimum_candidate_governs() {
        // Calendar limit candidate ~2030, usage candidate ~2027: usage wins
        let today = date(2025, 6, 1);
        let facts = RawFacts {
            date_of_last_overhaul: Some(date(2010, 1, 1)),
            time_since_new: Some(7000),
            ..Default::default()
        };
        let usage_candidate = today + Duration::days(((1000.0 / 450.0) * 365.0_f64).round() as i64);
        assert_eq!(resolve_due_date(&facts, &policy(), today), Some(usage_candidate));

        // Move the last overhaul far enough back and the calendar limit wins
        let facts = RawFacts {
            date_of_last_overhaul: Some(date(2006, 1, 1)),
            time_since_new: Some(7000),
            ..Default::default()
        };
        let calendar_candidate = date(2006, 1, 1) + Duration::days(20 * 365);
        assert_eq!(
            resolve_due_date(&facts, &policy(), today),
            Some(calendar_candidate)
        );
    }

    #[test]
    fn test_due_date_no_anchors() {
        assert_eq!(
            resolve_due_date(&RawFacts::default(), &policy(), date(2025, 6, 1)),
            None
        );
    }
}
