use crate::config::Config;
use crate::presentation::charts::{Row, bar, bar_width, condense, truncate_label};
use crate::presentation::traits::ReportView;
use crate::presentation::view_models::{
    DatasetInfo, DescriptiveView, PublisherView, SpikeSummary, TimeSeriesView,
};
use anyhow::Result;
use newslens_engine::{Counts, Histogram, HistogramBin, Summary, date_from_day_number};
use owo_colors::OwoColorize;
use std::fmt::Display;

const MAX_LABEL_WIDTH: usize = 32;

/// Human-readable tables and text bar charts
pub struct ConsoleReportView {
    enable_color: bool,
    width: usize,
    max_rows: usize,
}

impl ConsoleReportView {
    pub fn new(enable_color: bool, width: usize, max_rows: usize) -> Self {
        Self {
            enable_color,
            width,
            max_rows,
        }
    }

    fn heading(&self, title: &str) {
        if self.enable_color {
            println!("\n{}", title.bright_white().bold());
        } else {
            println!("\n{}", title);
        }
    }

    fn dataset_header(&self, info: &DatasetInfo) {
        let records = format!("{} records", info.records);
        if self.enable_color {
            println!("{} ({})", info.path.display().cyan(), records);
        } else {
            println!("{} ({})", info.path.display(), records);
        }

        if info.unparsed_dates > 0 {
            let note = format!(
                "{} rows have no usable date and are left out of date analyses",
                info.unparsed_dates
            );
            if self.enable_color {
                println!("{}", note.yellow());
            } else {
                println!("{}", note);
            }
        }
    }

    fn summary_table(&self, summary: &Summary) {
        let rows: [(&str, String); 8] = [
            ("count", summary.count.to_string()),
            ("mean", format_stat(summary.mean)),
            ("std", format_stat(summary.std)),
            ("min", format_stat(summary.min)),
            ("25%", format_stat(summary.p25)),
            ("50%", format_stat(summary.median)),
            ("75%", format_stat(summary.p75)),
            ("max", format_stat(summary.max)),
        ];
        for (name, value) in rows {
            println!("  {:<6} {:>10}", name, value);
        }
    }

    /// Two-column listing, cut after `max_rows` entries
    fn counts_table<K: Display>(&self, counts: &Counts<K>) {
        if counts.is_empty() {
            println!("  (no data)");
            return;
        }

        let shown: Vec<(String, usize)> = counts
            .iter()
            .take(self.max_rows)
            .map(|(key, count)| (truncate_label(&key.to_string(), MAX_LABEL_WIDTH), count))
            .collect();
        let label_width = shown
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        for (label, count) in &shown {
            println!("  {:<lw$}  {:>8}", label, count, lw = label_width);
        }
        self.more_line(counts.len());
    }

    fn list(&self, items: &[String]) {
        if items.is_empty() {
            println!("  (no data)");
            return;
        }
        for item in items.iter().take(self.max_rows) {
            println!("  {}", item);
        }
        self.more_line(items.len());
    }

    fn more_line(&self, total: usize) {
        if total > self.max_rows {
            let more = format!("... {} more", total - self.max_rows);
            if self.enable_color {
                println!("  {}", more.dimmed());
            } else {
                println!("  {}", more);
            }
        }
    }

    /// Horizontal bar chart; long series are merged down to `max_rows` lines
    fn bar_chart(&self, rows: Vec<Row>) {
        if rows.is_empty() {
            println!("  (no data)");
            return;
        }

        let rows = condense(rows, self.max_rows);
        let labels: Vec<String> = rows
            .iter()
            .map(|r| truncate_label(&r.label, MAX_LABEL_WIDTH))
            .collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let max = rows.iter().map(|r| r.count).max().unwrap_or(0);
        let count_width = max.to_string().len();
        let cells = bar_width(self.width, label_width, count_width);

        for (row, label) in rows.iter().zip(&labels) {
            let bar = bar(row.count, max, cells);
            let count = format!("{:>cw$}", row.count, cw = count_width);
            if row.marked && self.enable_color {
                println!(
                    "  {:<lw$} {} {} {}",
                    label,
                    count,
                    bar.red(),
                    "*".red().bold(),
                    lw = label_width
                );
            } else if row.marked {
                println!("  {:<lw$} {} {} *", label, count, bar, lw = label_width);
            } else if self.enable_color {
                println!("  {:<lw$} {} {}", label, count, bar.green(), lw = label_width);
            } else {
                println!("  {:<lw$} {} {}", label, count, bar, lw = label_width);
            }
        }
    }

    fn spike_summary(&self, spikes: &SpikeSummary) {
        let Some(threshold) = spikes.threshold else {
            println!("  Not enough publishing days to detect spikes");
            return;
        };

        println!(
            "  daily mean {}, std {}, threshold (mean + {} x std) {:.2}",
            format_stat(spikes.mean),
            format_stat(spikes.std_dev),
            spikes.sigmas,
            threshold
        );

        if spikes.days.is_empty() {
            println!("  No days above the threshold");
            return;
        }
        for (day, count) in spikes.days.iter() {
            if self.enable_color {
                println!("  {}  {}", day.to_string().red().bold(), count);
            } else {
                println!("  {}  {}", day, count);
            }
        }
    }
}

impl ReportView for ConsoleReportView {
    fn render_descriptive(&self, view: &DescriptiveView) -> Result<()> {
        self.dataset_header(&view.dataset);

        self.heading("Headline Length Statistics");
        self.summary_table(&view.headline_length);

        self.heading("Publisher Article Counts");
        self.counts_table(&view.publisher_counts);

        self.heading("Publication Date Analysis");
        self.counts_table(&view.date_counts);

        self.heading("Distribution of Headline Lengths");
        self.bar_chart(histogram_rows(&view.headline_length_histogram, length_label));

        self.heading(&format!(
            "Top {} Publishers by Article Count",
            view.top_publishers.len()
        ));
        self.bar_chart(count_rows(&view.top_publishers));

        self.heading("Publication Date Distribution");
        self.bar_chart(histogram_rows(&view.date_histogram, date_label));
        Ok(())
    }

    fn render_publishers(&self, view: &PublisherView) -> Result<()> {
        self.dataset_header(&view.dataset);

        self.heading(&format!(
            "Top {} Publishers by Article Count",
            view.top_publishers.len()
        ));
        self.bar_chart(count_rows(&view.top_publishers));

        self.heading(&format!(
            "Publisher Domains ({} unique)",
            view.unique_domains.len()
        ));
        self.list(&view.unique_domains);
        Ok(())
    }

    fn render_time_series(&self, view: &TimeSeriesView) -> Result<()> {
        self.dataset_header(&view.dataset);

        self.heading("Publication Frequency Over Time");
        let rows = view
            .frequency
            .iter()
            .map(|(day, count)| {
                Row::new(day.to_string(), count).marked(view.spikes.days.get(day).is_some())
            })
            .collect();
        self.bar_chart(rows);

        self.heading("Articles by Hour of Day");
        let rows = view
            .hourly
            .iter()
            .map(|(hour, count)| Row::new(format!("{:02}:00", hour), count))
            .collect();
        self.bar_chart(rows);

        self.heading("Article Spikes");
        self.spike_summary(&view.spikes);
        Ok(())
    }

    fn render_config(&self, config: &Config) -> Result<()> {
        print!("{}", config.to_toml()?);
        Ok(())
    }
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

fn count_rows<K: Display>(counts: &Counts<K>) -> Vec<Row> {
    counts
        .iter()
        .map(|(key, count)| Row::new(key.to_string(), count))
        .collect()
}

fn histogram_rows(histogram: &Histogram, label: fn(&HistogramBin) -> String) -> Vec<Row> {
    histogram
        .bins
        .iter()
        .map(|bin| Row::new(label(bin), bin.count))
        .collect()
}

fn length_label(bin: &HistogramBin) -> String {
    format!("{:.1}-{:.1}", bin.lower, bin.upper)
}

fn date_label(bin: &HistogramBin) -> String {
    date_from_day_number(bin.lower)
        .map(|d| d.to_string())
        .unwrap_or_else(|| format!("{:.0}", bin.lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(Some(36.3333)), "36.33");
        assert_eq!(format_stat(None), "-");
    }

    #[test]
    fn test_histogram_labels() {
        let bin = HistogramBin {
            lower: 29.0,
            upper: 29.5,
            count: 1,
        };
        assert_eq!(length_label(&bin), "29.0-29.5");

        let day = chrono::NaiveDate::from_ymd_opt(2020, 6, 5).unwrap();
        let bin = HistogramBin {
            lower: newslens_engine::day_number(day),
            upper: newslens_engine::day_number(day) + 1.0,
            count: 3,
        };
        assert_eq!(date_label(&bin), "2020-06-05");
    }

    #[test]
    fn test_count_rows_keep_order() {
        let counts = Counts::tally(["b", "a", "b"].map(String::from)).ranked();
        let rows = count_rows(&counts);
        assert_eq!(rows, vec![Row::new("b", 2), Row::new("a", 1)]);
    }
}
