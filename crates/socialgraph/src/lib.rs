//! Socialgraph: schema and keyspace provisioning for the social graph store.
//!
//! This is the public meta-crate. Downstream users depend on **socialgraph** only.
//!
//! It re-exports:
//!   - `socialgraph-config`  (TOML configuration)
//!   - `socialgraph-schema`  (table catalog and DDL rendering)
//!   - `socialgraph-setup`   (the drop / create / tables / indexes sequence)

pub use socialgraph_config as config;
pub use socialgraph_schema as schema;
pub use socialgraph_setup as setup;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::Config,
        schema::{
            build::{SchemaDefinitions, build_schema},
            node::Replication,
        },
        setup::{
            CqlClient, CqlHelper, SetupError, SetupOptions, SetupSteps, Step, setup, setup_with,
            try_setup, try_setup_with,
        },
    };
}
