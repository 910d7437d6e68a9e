pub mod charts;
pub mod console;
pub mod json;
pub mod traits;
pub mod view_models;

pub use console::ConsoleReportView;
pub use json::JsonReportView;
pub use traits::ReportView;
pub use view_models::{DatasetInfo, DescriptiveView, PublisherView, SpikeSummary, TimeSeriesView};

use crate::config::Config;
use crate::types::OutputFormat;

/// Pick the view for the requested output format.
///
/// Chart width comes from the config when set, otherwise from the terminal.
pub fn create_view(format: OutputFormat, enable_color: bool, config: &Config) -> Box<dyn ReportView> {
    match format {
        OutputFormat::Json => Box::new(JsonReportView),
        OutputFormat::Plain => {
            let width = config
                .chart_width
                .or_else(|| {
                    terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize)
                })
                .unwrap_or(charts::DEFAULT_WIDTH);
            Box::new(ConsoleReportView::new(enable_color, width, config.max_rows))
        }
    }
}
