//! Aerofacts Spreadsheet Boundary
//!
//! Loads ad tables from `.xlsx`/`.csv` files and writes the computed
//! engine-metrics table back out as a workbook. This is a thin collaborator
//! around the core: the one place where failure is fatal to a run (an
//! unreadable input before the first ad, an unwritable output after the
//! last record).

#![warn(missing_docs)]
#![warn(clippy::all)]

mod ads;
mod error;
mod workbook;

pub use ads::read_ads;
pub use error::IoError;
pub use workbook::write_metrics;
