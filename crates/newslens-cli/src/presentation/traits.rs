use crate::config::Config;
use crate::presentation::view_models::{DescriptiveView, PublisherView, TimeSeriesView};
use anyhow::Result;

/// Display collaborator for analysis results. Handlers build view models and
/// hand them over; they never print directly.
pub trait ReportView {
    fn render_descriptive(&self, view: &DescriptiveView) -> Result<()>;
    fn render_publishers(&self, view: &PublisherView) -> Result<()>;
    fn render_time_series(&self, view: &TimeSeriesView) -> Result<()>;
    fn render_config(&self, config: &Config) -> Result<()>;
}
