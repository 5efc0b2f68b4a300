use crate::prelude::*;
use std::fmt::{self, Display};

///
/// PrimaryKey
///
/// `Column` marks a single column inline (`user uuid PRIMARY KEY`).
/// `Clause` renders a trailing `PRIMARY KEY(a,b,...)`; the first column is the
/// partition key and the remaining columns are clustering columns.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum PrimaryKey {
    Column(&'static str),
    Clause(&'static [&'static str]),
}

impl PrimaryKey {
    /// All key columns, partition key first.
    #[must_use]
    pub const fn columns(&self) -> &[&'static str] {
        match self {
            Self::Column(column) => std::slice::from_ref(column),
            Self::Clause(columns) => *columns,
        }
    }

    #[must_use]
    pub fn partition_key(&self) -> Option<&'static str> {
        self.columns().first().copied()
    }

    #[must_use]
    pub fn clustering_columns(&self) -> &[&'static str] {
        self.columns().get(1..).unwrap_or_default()
    }

    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl Display for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(_) => f.write_str("PRIMARY KEY"),
            Self::Clause(columns) => write!(f, "PRIMARY KEY({})", columns.join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_splits_partition_and_clustering_columns() {
        let key = PrimaryKey::Clause(&["user", "time", "isprivate"]);

        assert_eq!(key.partition_key(), Some("user"));
        assert_eq!(key.clustering_columns(), &["time", "isprivate"]);
        assert_eq!(key.to_string(), "PRIMARY KEY(user,time,isprivate)");
    }

    #[test]
    fn inline_key_has_no_clustering_columns() {
        let key = PrimaryKey::Column("user");

        assert!(key.is_inline());
        assert_eq!(key.columns(), &["user"]);
        assert!(key.clustering_columns().is_empty());
    }

    #[test]
    fn empty_clause_has_no_partition_key() {
        let key = PrimaryKey::Clause(&[]);

        assert_eq!(key.partition_key(), None);
        assert!(key.clustering_columns().is_empty());
    }
}
