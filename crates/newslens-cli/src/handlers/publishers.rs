use super::HandlerContext;
use crate::export;
use crate::presentation::{DatasetInfo, PublisherView};
use anyhow::Result;
use newslens_engine::PublisherAnalysis;
use newslens_loader::load_dataset;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, path: &Path, top: usize) -> Result<()> {
    let dataset = load_dataset(path)?;
    let analysis = PublisherAnalysis::new(&dataset);

    let view = PublisherView {
        dataset: DatasetInfo::new(path, &dataset),
        top_publishers: analysis.top_publishers(top)?,
        unique_domains: analysis.unique_domains(),
    };

    if let Some(dir) = &ctx.export_dir {
        export::write_publishers(dir, &view)?;
    }
    ctx.view.render_publishers(&view)
}
