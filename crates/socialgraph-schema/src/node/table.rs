use crate::{err, prelude::*, validate::ValidationErrors};
use derive_more::Display;
use std::{collections::BTreeSet, fmt};

///
/// Column
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
}

impl Column {
    #[must_use]
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self { name, ty }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.ty)
    }
}

///
/// Order
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum Order {
    #[display("ASC")]
    Asc,
    #[display("DESC")]
    Desc,
}

///
/// ClusteringOrder
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[display("{column} {order}")]
pub struct ClusteringOrder {
    pub column: &'static str,
    pub order: Order,
}

impl ClusteringOrder {
    #[must_use]
    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            order: Order::Asc,
        }
    }

    #[must_use]
    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            order: Order::Desc,
        }
    }
}

///
/// Table
///
/// Static description of one table: ordered columns, the primary key, an
/// optional clustering order and the secondary indexes built on top of it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub primary_key: PrimaryKey,

    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub clustering_order: &'static [ClusteringOrder],

    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub indexes: &'static [Index],
}

impl Table {
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn qualified_name(&self, keyspace: &str) -> String {
        format!("{keyspace}.{}", self.name)
    }

    /// Render the CREATE TABLE statement for this table inside `keyspace`.
    #[must_use]
    pub fn create_statement(&self, keyspace: &str) -> String {
        let mut defs: Vec<String> = Vec::with_capacity(self.columns.len() + 1);

        for column in self.columns {
            match self.primary_key {
                PrimaryKey::Column(pk) if pk == column.name => {
                    defs.push(format!("{column} {}", self.primary_key));
                }
                _ => defs.push(column.to_string()),
            }
        }

        if !self.primary_key.is_inline() {
            defs.push(self.primary_key.to_string());
        }

        let mut sql = format!(
            "CREATE TABLE {} ({})",
            self.qualified_name(keyspace),
            defs.join(", ")
        );

        if !self.clustering_order.is_empty() {
            let order = self
                .clustering_order
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");

            sql.push_str(&format!(" WITH CLUSTERING ORDER BY ({order})"));
        }

        sql
    }

    /// Render one CREATE INDEX statement per index, in declaration order.
    pub fn index_statements<'a>(&'a self, keyspace: &'a str) -> impl Iterator<Item = String> + 'a {
        self.indexes
            .iter()
            .map(move |index| index.create_statement(keyspace, self.name))
    }

    /// Check the local invariants of this table.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();

        if self.name.is_empty() {
            err!(errs, "table name is empty");
        }
        if self.columns.is_empty() {
            err!(errs, "table has no columns");
        }

        // columns
        let mut seen = BTreeSet::new();
        for column in self.columns {
            if !seen.insert(column.name) {
                err!(errs, "duplicate column '{}'", column.name);
            }
        }

        // primary key
        if self.primary_key.columns().is_empty() {
            err!(errs, "primary key has no columns");
        }
        for name in self.primary_key.columns() {
            match self.get_column(name) {
                Some(column) if column.ty.is_collection() => {
                    err!(errs, "primary key column '{name}' cannot be a collection");
                }
                Some(_) => {}
                None => err!(errs, "primary key column '{name}' not found"),
            }
        }

        // clustering order
        let clustering = self.primary_key.clustering_columns();
        for order in self.clustering_order {
            if !clustering.contains(&order.column) {
                err!(
                    errs,
                    "clustering order column '{}' is not a clustering column",
                    order.column
                );
            }
        }

        // indexes
        let mut indexed = BTreeSet::new();
        for index in self.indexes {
            if self.get_column(index.column).is_none() {
                err!(errs, "index column '{}' not found", index.column);
            }
            if !indexed.insert(index.column) {
                err!(errs, "duplicate index on '{}'", index.column);
            }
            if self.primary_key.columns() == [index.column] {
                err!(
                    errs,
                    "index on '{}' duplicates the single-column partition key",
                    index.column
                );
            }
        }

        errs.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROKEN: Table = Table {
        name: "broken",
        columns: &[
            Column::new("id", ColumnType::UUID),
            Column::new("id", ColumnType::TEXT),
            Column::new("tags", ColumnType::Map {
                key: Scalar::Text,
                value: Scalar::Text,
            }),
        ],
        primary_key: PrimaryKey::Clause(&["tags", "missing"]),
        clustering_order: &[ClusteringOrder::asc("id")],
        indexes: &[Index::new("nope"), Index::new("id"), Index::new("id")],
    };

    #[test]
    fn create_statement_with_inline_key() {
        const TABLE: Table = Table {
            name: "things",
            columns: &[
                Column::new("thing", ColumnType::UUID),
                Column::new("label", ColumnType::TEXT),
            ],
            primary_key: PrimaryKey::Column("thing"),
            clustering_order: &[],
            indexes: &[],
        };

        assert_eq!(
            TABLE.create_statement("ks"),
            "CREATE TABLE ks.things (thing uuid PRIMARY KEY, label text)"
        );
        TABLE.validate().expect("inline-key table should validate");
    }

    #[test]
    fn create_statement_with_clause_and_clustering_order() {
        const TABLE: Table = Table {
            name: "events",
            columns: &[
                Column::new("owner", ColumnType::UUID),
                Column::new("at", ColumnType::TIMEUUID),
            ],
            primary_key: PrimaryKey::Clause(&["owner", "at"]),
            clustering_order: &[ClusteringOrder::desc("at")],
            indexes: &[],
        };

        assert_eq!(
            TABLE.create_statement("ks"),
            "CREATE TABLE ks.events (owner uuid, at timeuuid, PRIMARY KEY(owner,at)) \
             WITH CLUSTERING ORDER BY (at DESC)"
        );
    }

    #[test]
    fn validate_collects_every_problem() {
        let err = BROKEN.validate().expect_err("broken table must fail");
        let rendered = err.to_string();

        for expected in [
            "duplicate column 'id'",
            "primary key column 'tags' cannot be a collection",
            "primary key column 'missing' not found",
            "clustering order column 'id' is not a clustering column",
            "index column 'nope' not found",
            "duplicate index on 'id'",
        ] {
            assert!(
                rendered.contains(expected),
                "expected '{expected}' in: {rendered}"
            );
        }
    }

    #[test]
    fn validate_rejects_index_on_single_partition_key() {
        const TABLE: Table = Table {
            name: "solo",
            columns: &[Column::new("id", ColumnType::UUID)],
            primary_key: PrimaryKey::Column("id"),
            clustering_order: &[],
            indexes: &[Index::new("id")],
        };

        let err = TABLE.validate().expect_err("index on partition key must fail");
        assert!(err.to_string().contains("single-column partition key"));
    }
}
