//! Catalog validation and shared error aggregation.

pub mod naming;

pub use naming::{NameError, validate_keyspace_name};

use crate::node::Table;
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

///
/// ValidationErrors
///
/// Collected validation messages, rendered one per line.
///

#[derive(Debug, Default, Eq, PartialEq, ThisError)]
#[error("{}", .messages.join("\n"))]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Absorb another set of messages, prefixing each with `route`.
    pub fn merge(&mut self, route: &str, other: Self) {
        self.messages.extend(
            other
                .messages
                .into_iter()
                .map(|message| format!("{route}: {message}")),
        );
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Push a formatted message onto a `ValidationErrors`.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {{
        $errs.add(format!($($arg)*));
    }};
}

/// Validate every table, then the catalog-wide invariants.
pub fn validate_catalog(tables: &[Table]) -> Result<(), ValidationErrors> {
    let mut errs = ValidationErrors::new();

    for table in tables {
        if let Err(table_errs) = table.validate() {
            errs.merge(table.name, table_errs);
        }
    }

    let mut names = BTreeSet::new();
    for table in tables {
        if !names.insert(table.name) {
            err!(errs, "duplicate table name '{}'", table.name);
        }
    }

    errs.result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::TABLES, node::PrimaryKey, types::ColumnType};

    #[test]
    fn catalog_is_valid() {
        validate_catalog(TABLES).expect("the built-in catalog must validate");
    }

    #[test]
    fn duplicate_tables_and_routed_messages() {
        let bad = Table {
            columns: &[],
            ..TABLES[0]
        };
        let err = validate_catalog(&[TABLES[0], TABLES[0], bad]).expect_err("must fail");

        assert!(
            err.messages()
                .contains(&"duplicate table name 'users'".to_string())
        );
        assert!(
            err.messages()
                .iter()
                .any(|m| m == "users: table has no columns"),
            "per-table errors should carry the table route, got: {err}"
        );
    }

    #[test]
    fn empty_errors_are_ok() {
        assert_eq!(ValidationErrors::new().result(), Ok(()));

        let mut errs = ValidationErrors::new();
        err!(errs, "{} is broken", "thing");
        assert_eq!(errs.to_string(), "thing is broken");
        assert!(errs.result().is_err());
    }

    #[test]
    fn primary_key_must_exist() {
        const TABLE: Table = Table {
            name: "orphans",
            columns: &[crate::node::Column::new("id", ColumnType::UUID)],
            primary_key: PrimaryKey::Column("missing"),
            clustering_order: &[],
            indexes: &[],
        };

        let err = validate_catalog(&[TABLE]).expect_err("missing key column must fail");
        assert_eq!(
            err.messages(),
            &["orphans: primary key column 'missing' not found".to_string()]
        );
    }
}
