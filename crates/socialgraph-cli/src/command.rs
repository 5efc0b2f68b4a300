use crate::driver::ScyllaClient;
use clap::ValueEnum;
use serde::Serialize;
use socialgraph::{
    prelude::*,
    schema::node::{create_keyspace, drop_keyspace},
};
use std::fmt::Write as _;
use tracing::info;

///
/// Format
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

///
/// SchemaReport
///
/// The full statement sequence in the order `setup` issues it.
///

#[derive(Debug, Serialize)]
struct SchemaReport {
    drop_keyspace: String,
    create_keyspace: String,

    #[serde(flatten)]
    options: SetupOptions,
}

impl SchemaReport {
    fn new(config: &Config) -> anyhow::Result<Self> {
        let keyspace = config.keyspace()?;
        let defs = build_schema(keyspace).ok_or(SetupError::MissingKeyspace)?;

        Ok(Self {
            drop_keyspace: drop_keyspace(keyspace),
            create_keyspace: create_keyspace(keyspace, &config.replication),
            options: SetupOptions::new(keyspace, defs),
        })
    }

    fn statements(&self) -> impl Iterator<Item = &str> {
        [self.drop_keyspace.as_str(), self.create_keyspace.as_str()]
            .into_iter()
            .chain(self.options.tables.iter().map(String::as_str))
            .chain(self.options.indexes.iter().map(String::as_str))
    }
}

/// Render the setup sequence for printing.
pub fn render_schema(config: &Config, format: Format) -> anyhow::Result<String> {
    let report = SchemaReport::new(config)?;

    match format {
        Format::Text => {
            let mut out = String::new();
            for statement in report.statements() {
                writeln!(out, "{statement};")?;
            }
            Ok(out)
        }
        Format::Json => {
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Connect to the configured cluster and run the setup sequence.
pub async fn run_setup(config: &Config) -> anyhow::Result<()> {
    let keyspace = config.keyspace()?;
    let client = ScyllaClient::connect(config).await?;
    let replication = config.replication.clone();

    try_setup_with(client, keyspace, move |client, options| {
        CqlHelper::new(client, options).with_replication(replication)
    })
    .await?;
    info!(keyspace, "keyspace is ready");

    Ok(())
}
