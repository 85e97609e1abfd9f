use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use crate::types::LogLevel;
use anyhow::Result;
use deidash_runtime::resolve_workspace_path;

pub fn run(cli: Cli) -> Result<()> {
    // Log lines would tear the alternate screen
    match cli.command {
        Some(Commands::Tui { .. }) => logging::init_fixed(LogLevel::Error),
        _ => logging::init(cli.log_level),
    }

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.dataset, cli.format);

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    match command {
        Commands::Init { force } => handlers::init::handle(&ctx, force),

        Commands::Options => handlers::options::handle(&ctx),

        Commands::Summary { filter, top } => handlers::summary::handle(&ctx, &filter, top),

        Commands::Table {
            filter,
            sort,
            asc,
            desc: _,
            page,
            page_size,
        } => handlers::table::handle(
            &ctx,
            &filter,
            handlers::table::TableOptions {
                sort,
                ascending: asc,
                page,
                page_size,
            },
        ),

        Commands::Feed {
            filter,
            count,
            seed,
        } => handlers::feed::handle(&ctx, &filter, count, seed),

        Commands::Export { filter, output } => handlers::export::handle(&ctx, &filter, &output),

        Commands::Tui { filter, seed } => handlers::tui::handle(&ctx, &filter, seed),
    }
}
