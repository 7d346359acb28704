//! Command implementations.

mod run;

pub use run::execute_run;
