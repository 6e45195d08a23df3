use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(
        data_dir,
        cli.skin.map(Into::into),
        cli.content,
    );

    let command = cli.command.unwrap_or(Commands::Open { document: None });

    let target = match command {
        Commands::Open { .. } => LogTarget::File(ctx.log_path()),
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;
    log::info!("data dir: {}", ctx.data_dir().display());

    let renderer = ConsoleRenderer::new(cli.format);

    match command {
        Commands::Open { document } => handlers::open::handle(&ctx, document),

        Commands::List => handlers::list::handle(&ctx, &renderer),

        Commands::Show { document } => handlers::show::handle(&ctx, &renderer, &document),

        Commands::Search { query } => handlers::search::handle(&ctx, &renderer, &query),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx, &renderer),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, &renderer, force),
            ConfigCommand::Path => handlers::config::path(&ctx, &renderer),
        },
    }
}
