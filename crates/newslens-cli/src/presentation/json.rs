use crate::config::Config;
use crate::presentation::traits::ReportView;
use crate::presentation::view_models::{DescriptiveView, PublisherView, TimeSeriesView};
use anyhow::Result;
use serde::Serialize;

/// Pretty-printed JSON on stdout, one document per command
pub struct JsonReportView;

impl JsonReportView {
    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

impl ReportView for JsonReportView {
    fn render_descriptive(&self, view: &DescriptiveView) -> Result<()> {
        self.emit(view)
    }

    fn render_publishers(&self, view: &PublisherView) -> Result<()> {
        self.emit(view)
    }

    fn render_time_series(&self, view: &TimeSeriesView) -> Result<()> {
        self.emit(view)
    }

    fn render_config(&self, config: &Config) -> Result<()> {
        self.emit(config)
    }
}
