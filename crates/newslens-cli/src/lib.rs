// NOTE: newslens layering
//
// types   -> Article / Dataset and the derived columns (length, date, hour)
// loader  -> CSV export on disk -> Dataset
// engine  -> pure group-by aggregation and thresholds over a borrowed Dataset
// cli     -> argument parsing, config, logging, and the views that draw results
//
// The engine never renders. Every handler computes plain series first and
// hands them to a ReportView, so the same results can be printed as terminal
// charts, emitted as JSON, or written to CSV.

mod args;
mod commands;
pub mod config;
mod export;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
