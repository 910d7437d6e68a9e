// Error types
pub mod error;

// CSV ingestion
pub mod csv_loader;

pub use csv_loader::{REQUIRED_COLUMNS, load_dataset, load_from_reader};
pub use error::{Error, Result};
