use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers::{self, HandlerContext};
use crate::logging;
use crate::presentation;
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;
    let enable_color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    let view = presentation::create_view(cli.format, enable_color, &config);
    let ctx = HandlerContext::new(config, view, cli.export);

    match cli.command {
        Commands::Stats { path } => handlers::stats::handle(&ctx, &path),

        Commands::Publishers { path, top } => {
            let top = top.unwrap_or(ctx.config.top_publishers);
            handlers::publishers::handle(&ctx, &path, top)
        }

        Commands::Timeseries { path, sigmas } => {
            let sigmas = sigmas.unwrap_or(ctx.config.spike_sigmas);
            handlers::timeseries::handle(&ctx, &path, sigmas)
        }

        Commands::Config => handlers::config::handle(&ctx),
    }
}
