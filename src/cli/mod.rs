//! Command Line Interface (CLI) layer for colorcloud.
//!
//! Defines argument parsing (`args`), CLI error types (`errors`) and the
//! orchestration logic (`runner`) that turns flags and an optional preset
//! into `PlotParams` before calling `colorcloud::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
