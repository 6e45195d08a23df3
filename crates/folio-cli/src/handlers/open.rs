use super::require_entry;
use crate::context::ExecutionContext;
use crate::presentation::presenters::ShellChrome;
use crate::presentation::renderers::TuiRenderer;
use crate::presentation::renderers::tui::App;
use anyhow::{Result, bail};
use folio_engine::{Action, Shell, ShellOptions};
use is_terminal::IsTerminal;
use std::time::Instant;

pub fn handle(ctx: &ExecutionContext, document: Option<String>) -> Result<()> {
    let store = ctx.store()?;
    let config = ctx.config()?;
    let skin = ctx.skin()?;

    let initial = match document.as_deref() {
        Some(id) => Some(require_entry(store, id)?.id.clone()),
        None => None,
    };

    if !std::io::stdout().is_terminal() {
        bail!("The editor shell needs an interactive terminal; try `folio show README.md`");
    }

    let options = ShellOptions {
        collapsible_sidebar: skin.has_collapsible_sidebar(),
        intro_delay: config.intro_delay(skin),
    };
    let mut shell = Shell::new(
        store.registry().to_vec(),
        store.home().clone(),
        options,
        Instant::now(),
    );
    if let Some(id) = initial {
        shell.apply(Action::OpenDocument(id));
    }

    log::info!("opening shell with skin {}", skin);

    let chrome = ShellChrome {
        show_status_bar: config.ui.show_status_bar,
    };
    TuiRenderer::run(App::new(store, shell, chrome, config.ui.explorer_width))
}
