use serde::Serialize;
use socialgraph_schema::build::SchemaDefinitions;

///
/// SetupOptions
///
/// Statement bundle bound into the helper layer together with the client.
/// Serializes as `{ tables, indexes, KEYSPACE }`.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SetupOptions {
    pub tables: Vec<String>,
    pub indexes: Vec<String>,

    #[serde(rename = "KEYSPACE")]
    pub keyspace: String,
}

impl SetupOptions {
    #[must_use]
    pub fn new(keyspace: &str, defs: SchemaDefinitions) -> Self {
        Self {
            tables: defs.tables,
            indexes: defs.indexes,
            keyspace: keyspace.to_string(),
        }
    }
}
