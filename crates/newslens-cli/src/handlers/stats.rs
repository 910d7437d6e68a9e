use super::HandlerContext;
use crate::export;
use crate::presentation::{DatasetInfo, DescriptiveView};
use anyhow::Result;
use newslens_engine::DescriptiveStatistics;
use newslens_loader::load_dataset;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, path: &Path) -> Result<()> {
    let dataset = load_dataset(path)?;
    let report = newslens_engine::describe(&dataset);
    let top_publishers = newslens_engine::top_publishers(&dataset, ctx.config.top_publishers)?;
    let stats = DescriptiveStatistics::new(&dataset);

    let view = DescriptiveView {
        dataset: DatasetInfo::new(path, &dataset),
        headline_length: report.headline_length,
        publisher_counts: report.publisher_counts,
        date_counts: report.date_counts,
        top_publishers,
        headline_length_histogram: stats.headline_length_histogram(ctx.config.length_bins),
        date_histogram: stats.date_histogram(ctx.config.date_bins),
    };

    if let Some(dir) = &ctx.export_dir {
        export::write_descriptive(dir, &view)?;
    }
    ctx.view.render_descriptive(&view)
}
