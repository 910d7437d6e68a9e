pub mod config;
pub mod context;
pub mod publishers;
pub mod stats;
pub mod timeseries;

pub use context::HandlerContext;
