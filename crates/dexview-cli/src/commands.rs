use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use super::logging;
use anyhow::{Context, Result};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);
    let ctx = HandlerContext::new(cli.config.as_deref(), cli.format)?;
    tracing::debug!(config = %ctx.config_path.display(), format = %ctx.format, "starting");

    // Config commands never touch the network.
    if let Commands::Config { command } = &cli.command {
        return match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, *force),
        };
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(dispatch(&ctx, cli.command))
}

async fn dispatch(ctx: &HandlerContext, command: Commands) -> Result<()> {
    match command {
        Commands::List { page, filter } => handlers::list::handle(ctx, page, &filter).await,
        Commands::Browse { batches, filter } => {
            handlers::browse::handle(ctx, batches, &filter).await
        }
        Commands::Show { id } => handlers::show::handle(ctx, &id).await,
        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(ctx),
            ConfigCommand::Init { force } => handlers::config::init(ctx, force),
        },
    }
}
