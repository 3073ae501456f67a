mod cli;
mod commands;
mod config;
mod dataset;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

/// Log to stderr so command output stays clean on stdout
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "aewiki=debug" } else { "aewiki=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let load_data = || dataset::load(config.resolve_data_path(cli.data.as_deref()).as_deref());

    match cli.command {
        Commands::Avatars {
            world,
            rarity,
            search,
            group,
            format,
        } => {
            let data = load_data()?;
            let filter = commands::avatars::build_filter(world, rarity.as_deref(), search)?;
            commands::avatars::handle(&data, &filter, group, config.resolve_format(format))?;
        }

        Commands::Worlds { format } => {
            let data = load_data()?;
            commands::worlds::handle(&data, config.resolve_format(format))?;
        }

        Commands::Rarities => {
            let data = load_data()?;
            commands::rarities::handle(&data)?;
        }

        Commands::Upgrade {
            level,
            base,
            avatar,
            world,
            table,
        } => {
            let data = load_data()?;
            commands::upgrade::handle(&data, level, base, avatar.as_deref(), world, table)?;
        }

        Commands::Ranks { summary, format } => {
            let data = load_data()?;
            commands::ranks::handle(&data, summary, config.resolve_format(format))?;
        }

        Commands::Configure {
            data_path,
            format,
            clear,
            show,
        } => {
            commands::configure::handle(data_path, format, clear, show)?;
        }
    }

    Ok(())
}
