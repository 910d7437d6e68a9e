use chrono::NaiveDate;
use newslens_types::Dataset;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::summary::{mean, sample_std_dev};
use crate::{Counts, Error, Result};

/// Standard deviations above the mean a day must exceed to count as a spike
pub const DEFAULT_SPIKE_SIGMAS: f64 = 2.0;

/// Daily publication series with the days that stand out from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpikeReport {
    /// Chronological article count per day
    pub daily: Counts<NaiveDate>,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1) of the daily counts
    pub std_dev: Option<f64>,
    pub sigmas: f64,
    /// `mean + sigmas * std_dev`; `None` with fewer than two days
    pub threshold: Option<f64>,
    /// Days whose count is strictly above `threshold`, chronological
    pub spikes: Counts<NaiveDate>,
}

/// Publication frequency, time-of-day and spike analysis over a loaded dataset
pub struct TimeSeriesAnalysis<'a> {
    dataset: &'a Dataset,
}

impl<'a> TimeSeriesAnalysis<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Articles per calendar date in chronological order.
    /// Records with an unparsable date are left out.
    pub fn publication_frequency_over_time(&self) -> Counts<NaiveDate> {
        Counts::tally(self.dataset.published_dates().into_iter().flatten()).by_key()
    }

    /// Articles per hour of day (0-23), ascending. Hours with no articles are
    /// not listed.
    pub fn analyze_publication_times(&self) -> Counts<u32> {
        Counts::tally(self.dataset.hours().into_iter().flatten()).by_key()
    }

    /// Days publishing more than mean + 2σ of the daily series
    pub fn analyze_article_spikes(&self) -> SpikeReport {
        spike_report(self.publication_frequency_over_time(), DEFAULT_SPIKE_SIGMAS)
    }

    /// Same as [`analyze_article_spikes`](Self::analyze_article_spikes) with a
    /// custom multiplier.
    pub fn analyze_article_spikes_with(&self, sigmas: f64) -> Result<SpikeReport> {
        detect_spikes(self.publication_frequency_over_time(), sigmas)
    }
}

/// Flag the entries of a daily series that lie strictly above
/// `mean + sigmas * sample_std_dev`.
///
/// Series with fewer than two days have no defined deviation and produce no
/// spikes. `sigmas` must be finite and non-negative.
pub fn detect_spikes(daily: Counts<NaiveDate>, sigmas: f64) -> Result<SpikeReport> {
    if !sigmas.is_finite() || sigmas < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "spike sigmas must be a non-negative number, got {}",
            sigmas
        )));
    }
    Ok(spike_report(daily, sigmas))
}

fn spike_report(daily: Counts<NaiveDate>, sigmas: f64) -> SpikeReport {
    let values: Vec<f64> = daily.values().into_iter().map(|c| c as f64).collect();
    let mean = mean(&values);
    let std_dev = sample_std_dev(&values);
    let threshold = match (mean, std_dev) {
        (Some(m), Some(s)) => Some(m + sigmas * s),
        _ => None,
    };

    let spikes = match threshold {
        Some(t) => daily.clone().retain(|b| b.count as f64 > t),
        None => Counts::default(),
    };

    debug!(
        days = daily.len(),
        ?mean,
        ?std_dev,
        ?threshold,
        spikes = spikes.len(),
        "computed publication spikes"
    );

    SpikeReport {
        daily,
        mean,
        std_dev,
        sigmas,
        threshold,
        spikes,
    }
}
