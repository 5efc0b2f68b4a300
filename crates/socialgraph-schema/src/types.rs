use crate::prelude::*;
use derive_more::Display;
use std::fmt;

///
/// Scalar
///
/// CQL native types used by the catalog. Renders as the CQL keyword.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum Scalar {
    #[display("boolean")]
    Boolean,
    #[display("text")]
    Text,
    #[display("timestamp")]
    Timestamp,
    #[display("timeuuid")]
    Timeuuid,
    #[display("uuid")]
    Uuid,
}

///
/// ColumnType
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ColumnType {
    Scalar(Scalar),
    Map { key: Scalar, value: Scalar },
}

impl ColumnType {
    pub const BOOLEAN: Self = Self::Scalar(Scalar::Boolean);
    pub const TEXT: Self = Self::Scalar(Scalar::Text);
    pub const TIMESTAMP: Self = Self::Scalar(Scalar::Timestamp);
    pub const TIMEUUID: Self = Self::Scalar(Scalar::Timeuuid);
    pub const UUID: Self = Self::Scalar(Scalar::Uuid);

    #[must_use]
    pub const fn map(key: Scalar, value: Scalar) -> Self {
        Self::Map { key, value }
    }

    /// Collections cannot take part in a primary key.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::Map { .. })
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "{scalar}"),
            Self::Map { key, value } => write!(f, "map<{key},{value}>"),
        }
    }
}
