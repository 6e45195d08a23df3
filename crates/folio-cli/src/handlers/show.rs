use super::require_entry;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_document;
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, renderer: &ConsoleRenderer, document: &str) -> Result<()> {
    let store = ctx.store()?;
    let entry = require_entry(store, document)?;

    let model = present_document(store, entry);
    renderer.render_document(&model, store.payload_for(entry.kind))
}
