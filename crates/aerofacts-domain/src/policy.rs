//! Engine lifecycle policy constants

use serde::{Deserialize, Serialize};

/// The process-wide maintenance constants the rule engine computes against.
///
/// These are configuration, not facts: extraction never overwrites them,
/// and they are passed explicitly into the resolver so tests can run under
/// alternate policy regimes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifecyclePolicy {
    /// Time between overhauls, in hours
    pub tbo_hours: u32,

    /// Planned mid-life (HSI) interval, in hours
    pub midlife_hours: u32,

    /// Assumed annual utilization, in hours per year
    pub annual_usage_hours: u32,

    /// Calendar limit between overhauls, in years
    pub overhaul_calendar_years: u32,
}

impl Default for LifecyclePolicy {
    /// The Gulfstream G-IV family convention: 8000 h TBO, 4000 h mid-life,
    /// 450 h/yr utilization, 20-year calendar limit.
    fn default() -> Self {
        Self {
            tbo_hours: 8000,
            midlife_hours: 4000,
            annual_usage_hours: 450,
            overhaul_calendar_years: 20,
        }
    }
}

impl LifecyclePolicy {
    /// Validate the policy constants
    pub fn validate(&self) -> Result<(), String> {
        if self.tbo_hours == 0 {
            return Err("tbo_hours must be greater than 0".to_string());
        }
        if self.midlife_hours == 0 {
            return Err("midlife_hours must be greater than 0".to_string());
        }
        if self.midlife_hours > self.tbo_hours {
            return Err("midlife_hours cannot exceed tbo_hours".to_string());
        }
        if self.annual_usage_hours == 0 {
            return Err("annual_usage_hours must be greater than 0".to_string());
        }
        if self.overhaul_calendar_years == 0 {
            return Err("overhaul_calendar_years must be greater than 0".to_string());
        }
        Ok(())
    }
}
