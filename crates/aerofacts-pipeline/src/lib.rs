//! Aerofacts Pipeline
//!
//! Orchestrates the per-ad flow: extraction, regex-fallback enrichment,
//! basis resolution, and assembly of the ordered output table.
//!
//! ```text
//! ads → FactExtractor → {LEFT, RIGHT} RawFacts → fallbacks → rules → EngineMetrics
//! ```
//!
//! Processing is one sequential pass; each ad's computation is independent
//! and pure, and an ad that yields no facts simply contributes no records.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod assembler;

pub use assembler::{Assembler, AssemblyReport};
