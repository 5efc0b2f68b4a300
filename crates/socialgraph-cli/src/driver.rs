use anyhow::Context;
use scylla::{Session, SessionBuilder};
use socialgraph::{
    config::Config,
    setup::{ClientError, CqlClient},
};
use tracing::info;

///
/// ScyllaClient
///
/// `CqlClient` over a driver session. Works against Cassandra and ScyllaDB.
///

pub struct ScyllaClient {
    session: Session,
}

impl ScyllaClient {
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let mut builder = SessionBuilder::new().known_nodes(&config.nodes);
        if let Some(credentials) = &config.credentials {
            builder = builder.user(&credentials.username, &credentials.password);
        }

        let session = builder
            .build()
            .await
            .with_context(|| format!("failed to connect to {}", config.nodes.join(", ")))?;
        info!(nodes = ?config.nodes, "connected");

        Ok(Self { session })
    }
}

impl CqlClient for ScyllaClient {
    async fn execute(&self, cql: &str) -> Result<(), ClientError> {
        self.session
            .query_unpaged(cql, ())
            .await
            .map(|_| ())
            .map_err(|err| ClientError::new(err.to_string()))
    }
}
