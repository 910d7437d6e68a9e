// Engine module - Core analysis logic (group-by aggregation, summaries, thresholds)
// This layer sits between the loaded dataset (types) and CLI presentation

pub mod counts;
pub mod descriptive;
pub mod error;
pub mod histogram;
pub mod publisher;
pub mod summary;
pub mod timeseries;

pub use counts::{Bucket, Counts};
pub use descriptive::{
    DescriptiveReport, DescriptiveStatistics, date_from_day_number, day_number,
};
pub use error::{Error, Result};
pub use histogram::{Histogram, HistogramBin};
pub use publisher::{DEFAULT_TOP_N, PublisherAnalysis, extract_domain};
pub use summary::Summary;
pub use timeseries::{DEFAULT_SPIKE_SIGMAS, SpikeReport, TimeSeriesAnalysis, detect_spikes};

use newslens_types::Dataset;

// Façade API - Stable public interface for CLI layer

/// Headline length summary, publisher counts and date counts in one pass
pub fn describe(dataset: &Dataset) -> DescriptiveReport {
    DescriptiveStatistics::new(dataset).describe()
}

/// Top `n` publishers by article count
pub fn top_publishers(dataset: &Dataset, n: usize) -> Result<Counts<String>> {
    PublisherAnalysis::new(dataset).top_publishers(n)
}
