use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::{Result, bail};

pub fn show(ctx: &ExecutionContext, renderer: &ConsoleRenderer) -> Result<()> {
    renderer.render_config(ctx.config()?)
}

pub fn init(ctx: &ExecutionContext, renderer: &ConsoleRenderer, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    log::info!("wrote default config to {}", path.display());
    renderer.render_message(&format!("Wrote {}", path.display()))
}

pub fn path(ctx: &ExecutionContext, renderer: &ConsoleRenderer) -> Result<()> {
    renderer.render_message(&ctx.config_path().display().to_string())
}
