//! Aerofacts Regex Fallback Library
//!
//! Pure text-scanning functions used when structured extraction leaves a
//! field absent. Each function takes the full ad text and evaluates an
//! ordered pattern table, returning the first successfully parsed value or
//! `None`. Precedence lives in the table order, not in control flow.
//!
//! Policy note: the *caller* decides when a fallback runs. A structured
//! value that is present - including `0` - is authoritative and must not be
//! overwritten by anything found here.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod dates;
mod hours;
mod program;

pub use dates::hsi_date;
pub use hours::{explicit_hours_remaining, total_airframe_hours};
pub use program::maintenance_program;
