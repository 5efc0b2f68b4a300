use crate::{CqlClient, CqlHelper, HelperError, SetupOptions, SetupSteps, Step};
use socialgraph_schema::build::build_schema;
use thiserror::Error as ThisError;
use tracing::{error, info};

///
/// SetupError
///

#[derive(Debug, ThisError)]
pub enum SetupError {
    #[error("keyspace name is required")]
    MissingKeyspace,

    #[error("{step} failed: {source}")]
    Step {
        step: Step,

        #[source]
        source: HelperError,
    },
}

impl SetupError {
    /// The step that failed, if the sequence got that far.
    #[must_use]
    pub const fn step(&self) -> Option<Step> {
        match self {
            Self::MissingKeyspace => None,
            Self::Step { step, .. } => Some(*step),
        }
    }
}

/// Run every step in `Step::ORDER`, stopping at the first failure.
pub async fn run_steps<S: SetupSteps>(steps: &S) -> Result<(), SetupError> {
    for step in Step::ORDER {
        info!(%step, "running setup step");

        steps
            .run(step)
            .await
            .map_err(|source| SetupError::Step { step, source })?;
    }

    Ok(())
}

/// Build the schema for `keyspace`, bind it and `client` through `factory`,
/// then run the setup sequence.
pub async fn try_setup_with<C, S, F>(
    client: C,
    keyspace: &str,
    factory: F,
) -> Result<(), SetupError>
where
    S: SetupSteps,
    F: FnOnce(C, SetupOptions) -> S,
{
    let defs = build_schema(keyspace).ok_or(SetupError::MissingKeyspace)?;
    let steps = factory(client, SetupOptions::new(keyspace, defs));

    run_steps(&steps).await?;
    info!(keyspace, "keyspace setup complete");

    Ok(())
}

/// `try_setup_with` using `CqlHelper` with its default replication.
pub async fn try_setup<C: CqlClient>(client: C, keyspace: &str) -> Result<(), SetupError> {
    try_setup_with(client, keyspace, CqlHelper::new).await
}

/// Run the setup sequence and invoke `on_complete` exactly once afterwards.
///
/// Failures are logged and never reach `on_complete`; use `try_setup_with`
/// when the caller needs to tell success from failure.
pub async fn setup_with<C, S, F, D>(client: C, keyspace: &str, factory: F, on_complete: D)
where
    S: SetupSteps,
    F: FnOnce(C, SetupOptions) -> S,
    D: FnOnce(),
{
    if let Err(err) = try_setup_with(client, keyspace, factory).await {
        error!(keyspace, error = %err, "keyspace setup failed");
    }

    on_complete();
}

/// `setup_with` using `CqlHelper` with its default replication.
pub async fn setup<C, D>(client: C, keyspace: &str, on_complete: D)
where
    C: CqlClient,
    D: FnOnce(),
{
    setup_with(client, keyspace, CqlHelper::new, on_complete).await;
}
