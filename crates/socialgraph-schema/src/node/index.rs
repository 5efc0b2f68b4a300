use crate::prelude::*;
use std::fmt::{self, Display};

///
/// Index
///
/// Secondary index on a single column of the owning table.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Index {
    pub column: &'static str,
}

impl Index {
    #[must_use]
    pub const fn new(column: &'static str) -> Self {
        Self { column }
    }

    /// Render the CREATE INDEX statement for `table` inside `keyspace`.
    #[must_use]
    pub fn create_statement(&self, keyspace: &str, table: &str) -> String {
        format!("CREATE INDEX ON {keyspace}.{table} {self}")
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.column)
    }
}
