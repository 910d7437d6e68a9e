use chrono::NaiveDate;
use newslens_engine::{Counts, Histogram, SpikeReport, Summary};
use newslens_types::Dataset;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub path: PathBuf,
    pub records: usize,
    pub unparsed_dates: usize,
}

impl DatasetInfo {
    pub fn new(path: &Path, dataset: &Dataset) -> Self {
        Self {
            path: path.to_path_buf(),
            records: dataset.len(),
            unparsed_dates: dataset.unparsed_date_count(),
        }
    }
}

/// Everything `stats` shows: the three descriptive results plus the series
/// behind its charts
#[derive(Debug, Clone, Serialize)]
pub struct DescriptiveView {
    pub dataset: DatasetInfo,
    pub headline_length: Summary,
    pub publisher_counts: Counts<String>,
    pub date_counts: Counts<NaiveDate>,
    pub top_publishers: Counts<String>,
    pub headline_length_histogram: Histogram,
    /// Bin edges are day numbers, see `newslens_engine::day_number`
    pub date_histogram: Histogram,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublisherView {
    pub dataset: DatasetInfo,
    pub top_publishers: Counts<String>,
    pub unique_domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesView {
    pub dataset: DatasetInfo,
    pub frequency: Counts<NaiveDate>,
    pub hourly: Counts<u32>,
    pub spikes: SpikeSummary,
}

/// Spike statistics without the daily series, which `TimeSeriesView`
/// already carries as `frequency`
#[derive(Debug, Clone, Serialize)]
pub struct SpikeSummary {
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub sigmas: f64,
    pub threshold: Option<f64>,
    pub days: Counts<NaiveDate>,
}

impl From<SpikeReport> for SpikeSummary {
    fn from(report: SpikeReport) -> Self {
        Self {
            mean: report.mean,
            std_dev: report.std_dev,
            sigmas: report.sigmas,
            threshold: report.threshold,
            days: report.spikes,
        }
    }
}
