use crate::{ClientError, CqlClient, SetupOptions};
use derive_more::Display;
use socialgraph_schema::node::{Replication, create_keyspace, drop_keyspace};
use std::future::Future;
use thiserror::Error as ThisError;
use tracing::debug;

///
/// Step
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Step {
    #[display("drop keyspace")]
    DropKeyspace,
    #[display("create keyspace")]
    CreateKeyspace,
    #[display("create tables")]
    CreateTables,
    #[display("create indexes")]
    CreateIndexes,
}

impl Step {
    /// Execution order of the setup sequence.
    pub const ORDER: [Self; 4] = [
        Self::DropKeyspace,
        Self::CreateKeyspace,
        Self::CreateTables,
        Self::CreateIndexes,
    ];
}

///
/// HelperError
///

#[derive(Debug, ThisError)]
#[error("statement `{statement}` failed: {source}")]
pub struct HelperError {
    pub statement: String,

    #[source]
    pub source: ClientError,
}

impl HelperError {
    pub fn new(statement: impl Into<String>, source: ClientError) -> Self {
        Self {
            statement: statement.into(),
            source,
        }
    }
}

///
/// SetupSteps
///
/// The four operations of the setup sequence. Each completes (or fails)
/// before the next one is started.
///

pub trait SetupSteps: Sync {
    fn drop_keyspace(&self) -> impl Future<Output = Result<(), HelperError>> + Send;

    fn create_keyspace(&self) -> impl Future<Output = Result<(), HelperError>> + Send;

    fn create_tables(&self) -> impl Future<Output = Result<(), HelperError>> + Send;

    fn create_indexes(&self) -> impl Future<Output = Result<(), HelperError>> + Send;

    fn run(&self, step: Step) -> impl Future<Output = Result<(), HelperError>> + Send {
        async move {
            match step {
                Step::DropKeyspace => self.drop_keyspace().await,
                Step::CreateKeyspace => self.create_keyspace().await,
                Step::CreateTables => self.create_tables().await,
                Step::CreateIndexes => self.create_indexes().await,
            }
        }
    }
}

///
/// CqlHelper
///
/// Runs the setup steps as CQL through a `CqlClient`. Table and index
/// statements run one at a time in option order; the first failing
/// statement ends the step.
///

pub struct CqlHelper<C> {
    client: C,
    options: SetupOptions,
    replication: Replication,
}

impl<C: CqlClient> CqlHelper<C> {
    #[must_use]
    pub const fn new(client: C, options: SetupOptions) -> Self {
        Self {
            client,
            options,
            replication: Replication::simple(1),
        }
    }

    #[must_use]
    pub fn with_replication(mut self, replication: Replication) -> Self {
        self.replication = replication;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &SetupOptions {
        &self.options
    }

    #[must_use]
    pub const fn replication(&self) -> &Replication {
        &self.replication
    }

    async fn execute(&self, statement: &str) -> Result<(), HelperError> {
        debug!(statement, "executing");

        self.client
            .execute(statement)
            .await
            .map_err(|source| HelperError::new(statement, source))
    }

    async fn execute_all(&self, statements: &[String]) -> Result<(), HelperError> {
        for statement in statements {
            self.execute(statement).await?;
        }

        Ok(())
    }
}

impl<C: CqlClient> SetupSteps for CqlHelper<C> {
    async fn drop_keyspace(&self) -> Result<(), HelperError> {
        self.execute(&drop_keyspace(&self.options.keyspace)).await
    }

    async fn create_keyspace(&self) -> Result<(), HelperError> {
        self.execute(&create_keyspace(&self.options.keyspace, &self.replication))
            .await
    }

    async fn create_tables(&self) -> Result<(), HelperError> {
        self.execute_all(&self.options.tables).await
    }

    async fn create_indexes(&self) -> Result<(), HelperError> {
        self.execute_all(&self.options.indexes).await
    }
}
