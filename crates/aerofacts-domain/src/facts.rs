//! Raw per-engine facts as extracted from ad text

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The attribute bag an extractor produces for one engine of one ad.
///
/// Every field is optional: `None` means the ad did not state the value
/// (or it could not be parsed), never that the value is zero. A `RawFacts`
/// is built once per ad/engine pair - by structured extraction plus the
/// regex fallback pass - and is read-only from then on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFacts {
    /// Total airframe hours (TTAF); shared by both engines of an ad
    pub total_airframe_hours: Option<u32>,

    /// Hours since new (TSN)
    pub time_since_new: Option<u32>,

    /// Cycles since new (CSN)
    pub cycles_since_new: Option<u32>,

    /// Hours since the mid-life / HSI milestone (TSML)
    pub time_since_midlife: Option<u32>,

    /// Hours since the last overhaul (TSOH)
    pub time_since_overhaul: Option<f64>,

    /// Cycles since mid-life (CSML)
    pub cycles_since_midlife: Option<u32>,

    /// Cycles since overhaul (CSOH)
    pub cycles_since_overhaul: Option<u32>,

    /// Planned mid-life interval stated by the ad, if any. The policy
    /// constant governs the computation; this is pass-through only.
    pub planned_midlife_interval: Option<u32>,

    /// Hours since the hot-section inspection (usually equals TSML)
    pub hours_since_hsi: Option<u32>,

    /// Date of the last hot-section inspection
    pub date_of_last_hsi: Option<NaiveDate>,

    /// Whether the ad marks the engine "On Condition"
    pub on_condition: bool,

    /// Maintenance program name as stated by the ad (JSSI, MSP, ...)
    pub maintenance_program: Option<String>,

    /// Date of the last overhaul
    pub date_of_last_overhaul: Option<NaiveDate>,

    /// Overhaul due date stated directly by the ad, if any
    pub date_of_overhaul_due: Option<NaiveDate>,
}

impl RawFacts {
    /// Whether no field carries a value.
    ///
    /// An all-empty bag is still a legitimate extraction result; the
    /// resolver will simply find no applicable basis for it.
    pub fn is_empty(&self) -> bool {
        self.total_airframe_hours.is_none()
            && self.time_since_new.is_none()
            && self.cycles_since_new.is_none()
            && self.time_since_midlife.is_none()
            && self.time_since_overhaul.is_none()
            && self.cycles_since_midlife.is_none()
            && self.cycles_since_overhaul.is_none()
            && self.planned_midlife_interval.is_none()
            && self.hours_since_hsi.is_none()
            && self.date_of_last_hsi.is_none()
            && !self.on_condition
            && self.maintenance_program.is_none()
            && self.date_of_last_overhaul.is_none()
            && self.date_of_overhaul_due.is_none()
    }
}
