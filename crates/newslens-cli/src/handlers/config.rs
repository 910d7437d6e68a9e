use super::HandlerContext;
use anyhow::Result;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    ctx.view.render_config(&ctx.config)
}
