//! Ad-table loading

use crate::error::IoError;
use aerofacts_domain::Ad;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::info;

const ID_COLUMN: &str = "ID";
const DESCRIPTION_COLUMN: &str = "Description";

/// Read the input ad table.
///
/// Expects a header row with `ID` and `Description` columns. Spreadsheet
/// formats (`.xlsx`, `.xls`, `.xlsb`, `.ods`) read the named sheet, or the
/// first sheet when `sheet` is `None`; `.csv` ignores the sheet name. Rows
/// with an empty id or description are skipped.
pub fn read_ads(path: &Path, sheet: Option<&str>) -> Result<Vec<Ad>, IoError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let ads = match extension.as_str() {
        "xlsx" | "xls" | "xlsb" | "ods" => read_spreadsheet(path, sheet)?,
        "csv" => read_csv(path)?,
        other => return Err(IoError::UnsupportedFormat(other.to_string())),
    };

    info!(path = %path.display(), count = ads.len(), "loaded ads");
    Ok(ads)
}

fn read_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<Vec<Ad>, IoError> {
    let read_err = |reason: String| IoError::Read {
        path: path.display().to_string(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| read_err(e.to_string()))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| read_err("workbook has no sheets".to_string()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| read_err(format!("sheet '{}': {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| read_err(format!("sheet '{}' is empty", sheet_name)))?;

    let id_col = find_column(header, ID_COLUMN)?;
    let desc_col = find_column(header, DESCRIPTION_COLUMN)?;

    let mut ads = Vec::new();
    for row in rows {
        let id = cell_to_string(row.get(id_col));
        let description = cell_to_string(row.get(desc_col));
        if id.is_empty() || description.is_empty() {
            continue;
        }
        ads.push(Ad::new(id, description));
    }
    Ok(ads)
}

fn read_csv(path: &Path) -> Result<Vec<Ad>, IoError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| IoError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let headers = reader
        .headers()
        .map_err(|e| IoError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
        .clone();

    let id_col = headers
        .iter()
        .position(|h| h.trim() == ID_COLUMN)
        .ok_or_else(|| IoError::MissingColumn(ID_COLUMN.to_string()))?;
    let desc_col = headers
        .iter()
        .position(|h| h.trim() == DESCRIPTION_COLUMN)
        .ok_or_else(|| IoError::MissingColumn(DESCRIPTION_COLUMN.to_string()))?;

    let mut ads = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IoError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let id = record.get(id_col).unwrap_or_default().trim();
        let description = record.get(desc_col).unwrap_or_default().trim();
        if id.is_empty() || description.is_empty() {
            continue;
        }
        ads.push(Ad::new(id, description));
    }
    Ok(ads)
}

fn find_column(header: &[Data], name: &str) -> Result<usize, IoError> {
    header
        .iter()
        .position(|cell| cell_to_string(Some(cell)).trim() == name)
        .ok_or_else(|| IoError::MissingColumn(name.to_string()))
}

/// Render a cell as text; numeric ids like `42.0` come back as `42`.
fn cell_to_string(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Float(f)) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        Some(Data::DateTimeIso(s)) => s.clone(),
        _ => String::new(),
    }
}
