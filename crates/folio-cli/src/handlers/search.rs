use crate::context::ExecutionContext;
use crate::presentation::presenters::present_search;
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, renderer: &ConsoleRenderer, query: &str) -> Result<()> {
    let store = ctx.store()?;
    let model = present_search(store, query);
    log::debug!("search {:?}: {} match(es)", query, model.entries.len());
    renderer.render_search(&model)
}
