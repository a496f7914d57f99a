use crate::args::{Cli, Commands, ConfigCommand};
use crate::handlers::{self, HandlerContext};
use crate::logging::{self, LogTarget};
use anyhow::Result;
use pulseboard_runtime::{SessionStore, resolve_data_dir};
use std::path::Path;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    // Bare `pulseboard` opens the dashboard once someone has signed in
    let command = cli
        .command
        .or_else(|| has_stored_session(&data_dir).then_some(Commands::Dashboard));

    let target = match command {
        Some(Commands::Dashboard) => LogTarget::file_in(&data_dir),
        _ => LogTarget::Stderr,
    };
    let _guard = logging::init(cli.log_level, target)?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let ctx = HandlerContext::new(cli.format, data_dir);

    let Some(command) = command else {
        return handlers::config::guidance(&ctx);
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match command {
        Commands::Login { email, password } => {
            handlers::account::login(&ctx, &runtime, &email, &password)
        }
        Commands::Logout => handlers::account::logout(&ctx, &runtime),
        Commands::Whoami => handlers::account::whoami(&ctx),
        Commands::Posts { limit } => handlers::posts::list(&ctx, &runtime, limit),
        Commands::Summary { window_days } => handlers::posts::summary(&ctx, &runtime, window_days),
        Commands::Dashboard => handlers::dashboard::handle(&ctx, &runtime),
        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init {
                url,
                anon_key,
                posts_table,
            } => handlers::config::init(&ctx, url, anon_key, posts_table),
        },
    }
}

fn has_stored_session(data_dir: &Path) -> bool {
    SessionStore::new(data_dir).path().exists()
}
