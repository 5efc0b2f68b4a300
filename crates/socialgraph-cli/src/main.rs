mod command;
mod driver;

use anyhow::Context;
use clap::{Parser, Subcommand};
use command::Format;
use socialgraph::{
    prelude::*,
    schema::{catalog::TABLES, validate::validate_catalog},
};
use std::{io::IsTerminal, path::PathBuf};

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "socialgraph", version, about = "Provision the socialgraph keyspace")]
struct Cli {
    /// Path to a TOML config file (defaults to ./socialgraph.toml when present).
    #[arg(long, global = true, env = "SOCIALGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Keyspace to provision; overrides the config file.
    #[arg(long, global = true, env = "SOCIALGRAPH_KEYSPACE")]
    keyspace: Option<String>,

    /// Contact point; repeat for several nodes. Overrides the config file.
    #[arg(long = "node", global = true, value_name = "HOST:PORT")]
    nodes: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every statement of the setup sequence without connecting.
    Schema {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Drop and recreate the keyspace, its tables and its indexes.
    Setup,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ANSI colours only on a terminal, and never with NO_COLOR set.
    let ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    tracing_subscriber::fmt()
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,scylla=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    validate_catalog(TABLES).context("built-in table catalog is invalid")?;

    let config = Config::load(cli.config.as_deref())?
        .with_keyspace(cli.keyspace)
        .with_nodes(cli.nodes);
    config.validate()?;

    match cli.command {
        Command::Schema { format } => {
            print!("{}", command::render_schema(&config, format)?);
            Ok(())
        }
        Command::Setup => command::run_setup(&config).await,
    }
}
