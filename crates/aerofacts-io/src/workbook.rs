//! Output workbook writing

use crate::error::IoError;
use aerofacts_domain::{Ad, EngineMetrics};
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

const SHEET_NAME: &str = "Computed";

const HEADERS: &[&str] = &[
    "ID",
    "Text",
    "Position",
    "TTAF",
    "TSN",
    "CSN",
    "TSML",
    "TSOH",
    "CSML",
    "CSOH",
    "Planned Midlife Interval",
    "Hours Since HSI",
    "Date of Last HSI",
    "On Condition",
    "Time Remaining Before Overhaul",
    "Basis of Calculation",
    "Date of Last Overhaul",
    "Date of Overhaul Due",
    "Years Left for Operation",
    "Avg Hours Left for Operation",
    "Engine Program Name",
];

/// Write the computed table to an `.xlsx` workbook with one `Computed`
/// sheet. Each row carries its source ad text next to the id; absent
/// values become blank cells.
pub fn write_metrics(path: &Path, ads: &[Ad], records: &[EngineMetrics]) -> Result<(), IoError> {
    let mut workbook = Workbook::new();
    let write_err = |reason: String| IoError::Write {
        path: path.display().to_string(),
        reason,
    };

    let text_by_id: HashMap<&str, &str> = ads
        .iter()
        .map(|ad| (ad.id.as_str(), ad.description.as_str()))
        .collect();

    {
        let sheet = workbook
            .add_worksheet()
            .set_name(SHEET_NAME)
            .map_err(|e| write_err(e.to_string()))?;

        let header_format = Format::new().set_bold();
        for (col, header) in HEADERS.iter().enumerate() {
            sheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(|e| write_err(e.to_string()))?;
        }

        for (idx, record) in records.iter().enumerate() {
            let row = (idx + 1) as u32;
            let text = text_by_id.get(record.ad_id.as_str()).copied();
            write_record(sheet, row, record, text).map_err(|e| write_err(e.to_string()))?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| write_err(e.to_string()))?;

    info!(path = %path.display(), records = records.len(), "wrote output workbook");
    Ok(())
}

fn write_record(
    sheet: &mut Worksheet,
    row: u32,
    record: &EngineMetrics,
    text: Option<&str>,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    let facts = &record.facts;

    sheet.write_string(row, 0, &record.ad_id)?;
    if let Some(text) = text {
        sheet.write_string(row, 1, text)?;
    }
    sheet.write_string(row, 2, record.position.label())?;
    write_opt_u32(sheet, row, 3, facts.total_airframe_hours)?;
    write_opt_u32(sheet, row, 4, facts.time_since_new)?;
    write_opt_u32(sheet, row, 5, facts.cycles_since_new)?;
    write_opt_u32(sheet, row, 6, facts.time_since_midlife)?;
    write_opt_f64(sheet, row, 7, facts.time_since_overhaul)?;
    write_opt_u32(sheet, row, 8, facts.cycles_since_midlife)?;
    write_opt_u32(sheet, row, 9, facts.cycles_since_overhaul)?;
    write_opt_u32(sheet, row, 10, facts.planned_midlife_interval)?;
    write_opt_u32(sheet, row, 11, facts.hours_since_hsi)?;
    write_opt_date(sheet, row, 12, facts.date_of_last_hsi)?;
    sheet.write_boolean(row, 13, facts.on_condition)?;
    write_opt_f64(sheet, row, 14, record.time_remaining_before_overhaul)?;
    if let Some(basis) = record.basis_of_calculation {
        sheet.write_string(row, 15, basis.label())?;
    }
    write_opt_date(sheet, row, 16, facts.date_of_last_overhaul)?;
    write_opt_date(sheet, row, 17, record.date_of_overhaul_due)?;
    write_opt_f64(sheet, row, 18, record.years_left_for_operation)?;
    write_opt_f64(sheet, row, 19, record.average_annual_hours_equivalent)?;
    if let Some(program) = facts.maintenance_program.as_deref() {
        sheet.write_string(row, 20, program)?;
    }

    Ok(())
}

fn write_opt_u32(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<u32>,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    if let Some(v) = value {
        sheet.write_number(row, col, f64::from(v))?;
    }
    Ok(())
}

fn write_opt_f64(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    if let Some(v) = value {
        sheet.write_number(row, col, v)?;
    }
    Ok(())
}

fn write_opt_date(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<NaiveDate>,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    if let Some(d) = value {
        sheet.write_string(row, col, d.format("%Y-%m-%d").to_string())?;
    }
    Ok(())
}
