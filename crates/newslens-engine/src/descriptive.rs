use chrono::{Datelike, NaiveDate};
use newslens_types::Dataset;
use serde::{Deserialize, Serialize};

use crate::{Counts, Histogram, Summary};

/// Headline lengths, publisher counts and date counts, computed together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveReport {
    pub headline_length: Summary,
    pub publisher_counts: Counts<String>,
    pub date_counts: Counts<NaiveDate>,
}

/// Descriptive statistics over a loaded dataset
pub struct DescriptiveStatistics<'a> {
    dataset: &'a Dataset,
}

impl<'a> DescriptiveStatistics<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Summary of headline length in characters
    pub fn headline_length_stats(&self) -> Summary {
        let lengths: Vec<f64> = self
            .dataset
            .headline_lengths()
            .into_iter()
            .map(|len| len as f64)
            .collect();
        Summary::from_values(&lengths)
    }

    /// Articles per publisher, most prolific first (ties in first-seen order)
    pub fn publisher_counts(&self) -> Counts<String> {
        Counts::tally(self.dataset.iter().map(|a| a.publisher.clone())).ranked()
    }

    /// Articles per calendar date, busiest first (ties chronological).
    /// Records with an unparsable date are left out.
    pub fn date_counts(&self) -> Counts<NaiveDate> {
        Counts::tally(self.dataset.published_dates().into_iter().flatten()).ranked_then_by_key()
    }

    pub fn describe(&self) -> DescriptiveReport {
        DescriptiveReport {
            headline_length: self.headline_length_stats(),
            publisher_counts: self.publisher_counts(),
            date_counts: self.date_counts(),
        }
    }

    /// Distribution of headline lengths over `bins` equal-width bins
    pub fn headline_length_histogram(&self, bins: usize) -> Histogram {
        let lengths: Vec<f64> = self
            .dataset
            .headline_lengths()
            .into_iter()
            .map(|len| len as f64)
            .collect();
        Histogram::from_values(&lengths, bins)
    }

    /// Distribution of publication dates; bin edges are day numbers as
    /// returned by [`day_number`].
    pub fn date_histogram(&self, bins: usize) -> Histogram {
        let days: Vec<f64> = self
            .dataset
            .published_dates()
            .into_iter()
            .flatten()
            .map(day_number)
            .collect();
        Histogram::from_values(&days, bins)
    }
}

/// Days since 0001-01-01 (day 1), as used for date histogram edges
pub fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Inverse of [`day_number`], truncating any fractional day
pub fn date_from_day_number(day: f64) -> Option<NaiveDate> {
    if !day.is_finite() {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(day.floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use newslens_types::Article;

    fn article(headline: &str, publisher: &str, date: &str) -> Article {
        Article::new(headline, "https://example.com", publisher, date, "A")
    }

    #[test]
    fn test_date_counts_ranked_then_chronological() {
        let dataset: Dataset = vec![
            article("a", "p", "2024-01-03"),
            article("b", "p", "2024-01-01"),
            article("c", "p", "2024-01-02 09:00:00"),
            article("d", "p", "2024-01-02 17:00:00"),
            article("e", "p", "n/a"),
        ]
        .into();

        let counts = DescriptiveStatistics::new(&dataset).date_counts();
        let pairs: Vec<_> = counts.iter().map(|(d, c)| (d.to_string(), c)).collect();
        assert_eq!(
            pairs,
            vec![
                ("2024-01-02".to_string(), 2),
                ("2024-01-01".to_string(), 1),
                ("2024-01-03".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_headline_length_histogram_counts_every_record() {
        let dataset: Dataset = vec![
            article("short", "p", ""),
            article("a bit longer", "p", ""),
            article("the longest headline here", "p", ""),
        ]
        .into();

        let hist = DescriptiveStatistics::new(&dataset).headline_length_histogram(30);
        assert_eq!(hist.bins.len(), 30);
        assert_eq!(hist.total(), 3);
    }

    #[test]
    fn test_day_number_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2020, 6, 5).unwrap();
        assert_eq!(date_from_day_number(day_number(date) + 0.7), Some(date));
        assert_eq!(date_from_day_number(f64::NAN), None);
    }
}
