//! Aerofacts Rule Engine
//!
//! The deterministic core: given one engine's partial facts, decide the
//! single authoritative "time remaining before overhaul", the basis that
//! justifies it, and the projected overhaul due date.
//!
//! Everything here is a pure function over domain values. Missing inputs
//! degrade to "skip this rule / skip this candidate", never to an error:
//! an engine for which no rule applies simply gets an unresolved record.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod metrics;
mod resolver;

pub use metrics::compute_metrics;
pub use resolver::{resolve_basis, resolve_due_date};
