//! LLM prompt engineering for engine-fact extraction

/// Extraction instructions sent ahead of every ad.
///
/// The engine-table conventions (serial number before TSN, the known
/// header orderings, LEFT/RIGHT row labels) come from how Gulfstream
/// G-IV/G-IVSP/G450 ads are actually written.
const EXTRACTION_INSTRUCTIONS: &str = r#"You are an expert JSON extraction assistant specialized in parsing Gulfstream G-IV, G-IVSP, and G450 aircraft ads.

Extract detailed engine data for BOTH the LEFT and RIGHT engines from the free-form ad text below. Return ONLY a JSON object with two keys - "LEFT" and "RIGHT" - each containing an object with exactly these fields:

  - TotalAirframeHours: total airframe hours (integer). Appears once per ad and is shared between LEFT and RIGHT. Look anywhere in the ad for forms like "Airframe Total Time 12882", "TTAF: 12882 Hrs", "Airframe: 12882 Hrs".
  - TimeSinceNew: hours since new (integer). Extract from the engine table rows only, never from the airframe total. In engine rows the value immediately following the engine model (e.g. "611-8") is the Serial Number, not TimeSinceNew; TimeSinceNew and CyclesSinceNew follow the serial number. Example row: "Rolls Royce TAY 611-8 16455 8467 2654" gives Serial# 16455, TimeSinceNew 8467, CyclesSinceNew 2654.
  - CyclesSinceNew: cycles since new (integer)
  - TimeSinceMidlife: hours since mid-life or HSI (integer)
  - TimeSinceOverhaul: hours since last overhaul (number)
  - CyclesSinceMidlife: cycles since mid-life (integer)
  - CyclesSinceOverhaul: cycles since overhaul (integer)
  - PlannedMidlifeInterval: planned mid-life interval stated by the ad (usually 4000), or null
  - HoursSinceHSI: same as TimeSinceMidlife
  - DateOfLastHSI: ISO 8601 date parsed from "Midlife c/w <Month> <Year>" or similar, or null
  - OnCondition: true if "On Condition" appears anywhere in the ad
  - MaintenanceProgramName: the engine maintenance program name (e.g. JSSI, MSP, Corporate Care), or null
  - DateOfLastOverhaul: ISO 8601, or null
  - DateOfOverhaulDue: ISO 8601, or null

Formatting rules:
  - JSON numbers must not be quoted
  - Strings use double quotes
  - Dates in "YYYY-MM-DD" format
  - true/false for booleans
  - null for missing data

Engine-table header variants you may encounter:
  1. Loc. Make Model Serial# TSN CSN TSML
  2. Loc. Make Model Serial# TSN CSN
  3. Loc. Make Model Serial# TSN CSN TSOH
  4. Loc. Make Model Serial# TSML
  5. Loc. Make Model Serial# TSN CSN CSOH TSML CSML TSOH
  6. Loc. Model Serial# TSN CSN
  7. Loc. TSN CSN TSOH CSOH

Parsing steps:
  1. Find the first line containing "TSN" and "CSN" (case-insensitive) and record the column positions of TSN, CSN, TSML, TSOH, CSOH, CSML.
  2. Take the two lines immediately below as engine rows.
  3. Use the label before the row ("L", "Left", "Engine 1") to assign LEFT; "R", "Right", "Engine 2" to assign RIGHT. If the label is ambiguous or missing, assign positionally.
  4. Slice each engine row by the recorded column positions and map the values to fields.
  5. If no table is found, search narrative sections for "engine serial", "TSN:", "TSML:" and similar; use such values only when confident.
  6. Return ONLY valid JSON with "LEFT" and "RIGHT" keys. No extra text or explanation."#;

/// Builds the extraction prompt pair for one ad.
///
/// The extraction contract travels as the system message; the ad itself is
/// the user message, so the provider's wire call carries the two roles
/// separately.
pub struct PromptBuilder {
    ad_text: String,
}

impl PromptBuilder {
    /// Create a prompt builder for the given ad text
    pub fn new(ad_text: impl Into<String>) -> Self {
        Self {
            ad_text: ad_text.into(),
        }
    }

    /// The standing extraction instructions, identical for every ad
    pub fn system(&self) -> &'static str {
        EXTRACTION_INSTRUCTIONS
    }

    /// The per-ad user message: the ad text, delimited, with the response
    /// cue
    pub fn user(&self) -> String {
        format!(
            "Extract structured JSON for both engines from this ad text:\n\"\"\"\n{}\n\"\"\"\n\nJSON:",
            self.ad_text
        )
    }
}
