use crate::presentation::{DescriptiveView, PublisherView, TimeSeriesView};
use anyhow::{Context, Result};
use newslens_engine::{Counts, Histogram, Summary, date_from_day_number};
use std::fmt::Display;
use std::path::Path;

pub fn write_descriptive(dir: &Path, view: &DescriptiveView) -> Result<()> {
    prepare_dir(dir)?;
    write_summary(&dir.join("headline_length_summary.csv"), &view.headline_length)?;
    write_counts(&dir.join("publisher_counts.csv"), "publisher", &view.publisher_counts)?;
    write_counts(&dir.join("date_counts.csv"), "date", &view.date_counts)?;
    write_counts(&dir.join("top_publishers.csv"), "publisher", &view.top_publishers)?;
    write_histogram(
        &dir.join("headline_length_histogram.csv"),
        &view.headline_length_histogram,
        |edge| edge.to_string(),
    )?;
    write_histogram(&dir.join("date_histogram.csv"), &view.date_histogram, |edge| {
        date_from_day_number(edge)
            .map(|d| d.to_string())
            .unwrap_or_else(|| edge.to_string())
    })
}

pub fn write_publishers(dir: &Path, view: &PublisherView) -> Result<()> {
    prepare_dir(dir)?;
    write_counts(&dir.join("top_publishers.csv"), "publisher", &view.top_publishers)?;
    write_column(&dir.join("publisher_domains.csv"), "domain", &view.unique_domains)
}

pub fn write_time_series(dir: &Path, view: &TimeSeriesView) -> Result<()> {
    prepare_dir(dir)?;
    write_counts(&dir.join("publication_frequency.csv"), "date", &view.frequency)?;
    write_counts(&dir.join("publication_hours.csv"), "hour", &view.hourly)?;
    write_counts(&dir.join("spikes.csv"), "date", &view.spikes.days)
}

fn prepare_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))
}

fn write_counts<K: Display>(path: &Path, key_header: &str, counts: &Counts<K>) -> Result<()> {
    let mut wtr = open(path)?;
    wtr.write_record([key_header, "count"])?;
    for (key, count) in counts.iter() {
        wtr.write_record([key.to_string(), count.to_string()])?;
    }
    finish(wtr, path)
}

fn write_summary(path: &Path, summary: &Summary) -> Result<()> {
    let stat = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();

    let mut wtr = open(path)?;
    wtr.write_record(["statistic", "value"])?;
    wtr.write_record(["count".to_string(), summary.count.to_string()])?;
    for (name, value) in [
        ("mean", summary.mean),
        ("std", summary.std),
        ("min", summary.min),
        ("25%", summary.p25),
        ("50%", summary.median),
        ("75%", summary.p75),
        ("max", summary.max),
    ] {
        wtr.write_record([name.to_string(), stat(value)])?;
    }
    finish(wtr, path)
}

fn write_histogram(path: &Path, histogram: &Histogram, edge: impl Fn(f64) -> String) -> Result<()> {
    let mut wtr = open(path)?;
    wtr.write_record(["lower", "upper", "count"])?;
    for bin in &histogram.bins {
        wtr.write_record([edge(bin.lower), edge(bin.upper), bin.count.to_string()])?;
    }
    finish(wtr, path)
}

fn write_column(path: &Path, header: &str, values: &[String]) -> Result<()> {
    let mut wtr = open(path)?;
    wtr.write_record([header])?;
    for value in values {
        wtr.write_record([value])?;
    }
    finish(wtr, path)
}

fn open(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    csv::Writer::from_path(path).with_context(|| format!("Failed to create {}", path.display()))
}

fn finish(mut wtr: csv::Writer<std::fs::File>, path: &Path) -> Result<()> {
    wtr.flush()?;
    tracing::info!(path = %path.display(), "exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_counts() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("publisher_counts.csv");
        let counts = Counts::tally(["Reuters", "Zacks", "Reuters"].map(String::from)).ranked();

        write_counts(&path, "publisher", &counts)?;

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(content, "publisher,count\nReuters,2\nZacks,1\n");
        Ok(())
    }

    #[test]
    fn test_write_summary_leaves_missing_values_blank() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("summary.csv");

        write_summary(&path, &Summary::from_values(&[7.0]))?;

        let content = std::fs::read_to_string(&path)?;
        assert!(content.starts_with("statistic,value\ncount,1\nmean,7\nstd,\n"));
        assert!(content.ends_with("max,7\n"));
        Ok(())
    }

    #[test]
    fn test_write_column_quotes_commas() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("domains.csv");

        write_column(&path, "domain", &["zacks".to_string(), "Smith, J".to_string()])?;

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(content, "domain\nzacks\n\"Smith, J\"\n");
        Ok(())
    }
}
