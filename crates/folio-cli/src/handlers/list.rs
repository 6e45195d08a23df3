use crate::context::ExecutionContext;
use crate::presentation::presenters::present_registry;
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, renderer: &ConsoleRenderer) -> Result<()> {
    let store = ctx.store()?;
    renderer.render_list(&present_registry(store))
}
