//! Static schema for the social graph keyspace.
//!
//! ## Crate layout
//! - `build`: turns the catalog into ordered CREATE TABLE / CREATE INDEX statements.
//! - `catalog`: the fixed set of tables and secondary indexes.
//! - `node`: schema nodes (tables, columns, keys, indexes, keyspace replication).
//! - `types`: CQL column types.
//! - `validate`: catalog and identifier checks.

pub mod build;
pub mod catalog;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length Cassandra accepts for keyspace and table identifiers.
pub const MAX_KEYSPACE_NAME_LEN: usize = 48;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{SchemaDefinitions, build_schema},
        catalog::TABLES,
        node::*,
        types::{ColumnType, Scalar},
    };
    pub use serde::{Deserialize, Serialize};
}
