use super::HandlerContext;
use crate::export;
use crate::presentation::{DatasetInfo, TimeSeriesView};
use anyhow::Result;
use newslens_engine::TimeSeriesAnalysis;
use newslens_loader::load_dataset;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, path: &Path, sigmas: f64) -> Result<()> {
    let dataset = load_dataset(path)?;
    let analysis = TimeSeriesAnalysis::new(&dataset);

    let spikes = analysis.analyze_article_spikes_with(sigmas)?;
    tracing::debug!(
        days = spikes.daily.len(),
        spikes = spikes.spikes.len(),
        threshold = ?spikes.threshold,
        "spike detection finished"
    );

    let view = TimeSeriesView {
        dataset: DatasetInfo::new(path, &dataset),
        frequency: analysis.publication_frequency_over_time(),
        hourly: analysis.analyze_publication_times(),
        spikes: spikes.into(),
    };

    if let Some(dir) = &ctx.export_dir {
        export::write_time_series(dir, &view)?;
    }
    ctx.view.render_time_series(&view)
}
