use std::future::Future;
use thiserror::Error as ThisError;

///
/// ClientError
///
/// Failure reported by the driver while executing a statement.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct ClientError {
    pub message: String,
}

impl ClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// CqlClient
///
/// Executes one CQL statement and waits for the cluster to acknowledge it.
///

pub trait CqlClient: Sync {
    fn execute(&self, cql: &str) -> impl Future<Output = Result<(), ClientError>> + Send;
}

impl<C: CqlClient> CqlClient for &C {
    fn execute(&self, cql: &str) -> impl Future<Output = Result<(), ClientError>> + Send {
        (**self).execute(cql)
    }
}
