use crate::config::Config;
use crate::presentation::ReportView;
use std::path::PathBuf;

/// Everything a handler needs besides its own arguments
pub struct HandlerContext {
    pub config: Config,
    pub view: Box<dyn ReportView>,
    /// Directory receiving CSV copies of the computed series, if requested
    pub export_dir: Option<PathBuf>,
}

impl HandlerContext {
    pub fn new(config: Config, view: Box<dyn ReportView>, export_dir: Option<PathBuf>) -> Self {
        Self {
            config,
            view,
            export_dir,
        }
    }
}
