use crate::{catalog::TABLES, prelude::*};
use tracing::warn;

///
/// SchemaDefinitions
///
/// Ordered DDL for one keyspace: every CREATE TABLE first, then every
/// CREATE INDEX.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SchemaDefinitions {
    pub tables: Vec<String>,
    pub indexes: Vec<String>,
}

impl SchemaDefinitions {
    /// Render statements for `tables` inside `keyspace`. The keyspace is
    /// interpolated verbatim.
    #[must_use]
    pub fn from_tables(keyspace: &str, tables: &[Table]) -> Self {
        let mut defs = Self {
            tables: Vec::with_capacity(tables.len()),
            indexes: Vec::new(),
        };

        for table in tables {
            defs.tables.push(table.create_statement(keyspace));
            defs.indexes.extend(table.index_statements(keyspace));
        }

        defs
    }

    /// Iterate every statement in execution order.
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.tables
            .iter()
            .chain(&self.indexes)
            .map(String::as_str)
    }
}

/// Build the catalog DDL for `keyspace`.
///
/// Returns `None` (and logs a warning) when the keyspace name is empty.
#[must_use]
pub fn build_schema(keyspace: &str) -> Option<SchemaDefinitions> {
    if keyspace.is_empty() {
        warn!("keyspace name is required to build schema definitions");
        return None;
    }

    Some(SchemaDefinitions::from_tables(keyspace, TABLES))
}
