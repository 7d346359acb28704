//! Parse the LLM's LEFT/RIGHT JSON response into raw fact sets

use crate::error::ExtractorError;
use aerofacts_domain::{EnginePosition, RawFacts};
use chrono::NaiveDate;
use serde_json::Value;
use tracing::warn;

/// Parse an LLM response into per-engine fact sets.
///
/// The response must contain a JSON object with top-level `LEFT` and
/// `RIGHT` keys; a missing or null side simply yields no entry for that
/// engine. Within a side, each recognized field is parsed independently
/// and degrades to absent on failure - only a response that is not the
/// expected object shape at all is an error.
pub fn parse_response(response: &str) -> Result<Vec<(EnginePosition, RawFacts)>, ExtractorError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| ExtractorError::JsonParse(e.to_string()))?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected a JSON object".to_string()))?;

    let mut engines = Vec::new();
    for (key, position) in [("LEFT", EnginePosition::Left), ("RIGHT", EnginePosition::Right)] {
        match obj.get(key) {
            Some(Value::Object(fields)) => {
                engines.push((position, parse_facts(fields)));
            }
            Some(Value::Null) | None => {}
            Some(other) => {
                warn!("{} entry is not an object ({}), skipping", key, type_name(other));
            }
        }
    }

    if engines.is_empty() && !obj.contains_key("LEFT") && !obj.contains_key("RIGHT") {
        return Err(ExtractorError::InvalidFormat(
            "Object has neither LEFT nor RIGHT key".to_string(),
        ));
    }

    Ok(engines)
}

/// Extract the JSON payload from a response, tolerating markdown code
/// fences and prose around the object.
fn extract_json(response: &str) -> Result<String, ExtractorError> {
    let mut trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractorError::InvalidFormat("Empty code block".to_string()));
        }
        // Drop the opening fence line and a trailing fence if present
        let end = if lines[lines.len() - 1].trim_start().starts_with("```") {
            lines.len() - 1
        } else {
            lines.len()
        };
        return Ok(lines[1..end].join("\n"));
    }

    // Models sometimes preface the object with prose; keep the outermost
    // brace span only.
    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            trimmed = &trimmed[start..=end];
        }
    }

    Ok(trimmed.to_string())
}

/// Parse one engine's field object. Unrecognized keys are ignored; each
/// recognized field degrades to `None` when its value has the wrong shape.
fn parse_facts(fields: &serde_json::Map<String, Value>) -> RawFacts {
    RawFacts {
        total_airframe_hours: parse_u32(fields.get("TotalAirframeHours")),
        time_since_new: parse_u32(fields.get("TimeSinceNew")),
        cycles_since_new: parse_u32(fields.get("CyclesSinceNew")),
        time_since_midlife: parse_u32(fields.get("TimeSinceMidlife")),
        time_since_overhaul: parse_f64(fields.get("TimeSinceOverhaul")),
        cycles_since_midlife: parse_u32(fields.get("CyclesSinceMidlife")),
        cycles_since_overhaul: parse_u32(fields.get("CyclesSinceOverhaul")),
        planned_midlife_interval: parse_u32(fields.get("PlannedMidlifeInterval")),
        hours_since_hsi: parse_u32(fields.get("HoursSinceHSI")),
        date_of_last_hsi: parse_date(fields.get("DateOfLastHSI")),
        on_condition: fields
            .get("OnCondition")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        maintenance_program: parse_string(fields.get("MaintenanceProgramName")),
        date_of_last_overhaul: parse_date(fields.get("DateOfLastOverhaul")),
        date_of_overhaul_due: parse_date(fields.get("DateOfOverhaulDue")),
    }
}

/// Non-negative integer; numbers should be unquoted but quoted digits are
/// tolerated. Fractional or negative values are treated as absent.
fn parse_u32(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| *v >= 0.0),
        Value::String(s) => s.trim().parse().ok().filter(|v: &f64| *v >= 0.0),
        _ => None,
    }
}

/// ISO-8601 (`YYYY-MM-DD`) per the wire contract
fn parse_date(value: Option<&Value>) -> Option<NaiveDate> {
    let s = value?.as_str()?;
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn parse_string(value: Option<&Value>) -> Option<String> {
    let s = value?.as_str()?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
