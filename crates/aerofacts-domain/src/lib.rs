//! Aerofacts Domain Layer
//!
//! Core data model for engine-lifecycle extraction from aircraft-sale ads.
//! This crate defines the value types that flow through the pipeline and the
//! trait seams behind which the infrastructure lives.
//!
//! ## Key Concepts
//!
//! - **Ad**: An opaque identifier plus free-form advertisement text
//! - **RawFacts**: the per-engine attribute bag an extractor produces;
//!   every field is optional and absence means "unknown", never zero
//! - **EngineMetrics**: the computed output record - raw facts plus the
//!   resolved remaining time, its basis, and the projected due date
//! - **LifecyclePolicy**: the process-wide maintenance constants (TBO,
//!   mid-life interval, annual usage rate)
//!
//! ## Architecture
//!
//! Value types and pure invariants only. The LLM call, the regex library,
//! the rule engine, and the spreadsheet boundary all live in sibling crates
//! and reach this one through `traits`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ad;
pub mod basis;
pub mod facts;
pub mod metrics;
pub mod policy;
pub mod position;
pub mod traits;

// Re-exports for convenience
pub use ad::Ad;
pub use basis::CalculationBasis;
pub use facts::RawFacts;
pub use metrics::EngineMetrics;
pub use policy::LifecyclePolicy;
pub use position::EnginePosition;
