use crate::{err, prelude::*, validate::ValidationErrors};
use std::{collections::BTreeMap, fmt};

///
/// Replication
///
/// Keyspace replication strategy. Deserializes from a `class`-tagged table so
/// configuration files can spell it the way CQL does.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "class")]
pub enum Replication {
    SimpleStrategy {
        replication_factor: u32,
    },
    NetworkTopologyStrategy {
        #[serde(default)]
        datacenters: BTreeMap<String, u32>,
    },
}

impl Replication {
    #[must_use]
    pub const fn simple(replication_factor: u32) -> Self {
        Self::SimpleStrategy { replication_factor }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();

        match self {
            Self::SimpleStrategy { replication_factor } => {
                if *replication_factor == 0 {
                    err!(errs, "replication_factor must be greater than zero");
                }
            }
            Self::NetworkTopologyStrategy { datacenters } => {
                if datacenters.is_empty() {
                    err!(errs, "NetworkTopologyStrategy needs at least one datacenter");
                }
                for (dc, factor) in datacenters {
                    if !is_datacenter_name(dc) {
                        err!(errs, "invalid datacenter name '{dc}'");
                    }
                    if *factor == 0 {
                        err!(errs, "replication factor for datacenter '{dc}' must be greater than zero");
                    }
                }
            }
        }

        errs.result()
    }
}

/// Datacenter names are rendered inside quoted CQL literals, so only
/// plain name characters are accepted.
fn is_datacenter_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

impl Default for Replication {
    fn default() -> Self {
        Self::simple(1)
    }
}

impl fmt::Display for Replication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SimpleStrategy { replication_factor } => write!(
                f,
                "{{'class': 'SimpleStrategy', 'replication_factor': {replication_factor}}}"
            ),
            Self::NetworkTopologyStrategy { datacenters } => {
                f.write_str("{'class': 'NetworkTopologyStrategy'")?;
                for (dc, factor) in datacenters {
                    write!(f, ", '{dc}': {factor}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[must_use]
pub fn drop_keyspace(keyspace: &str) -> String {
    format!("DROP KEYSPACE IF EXISTS {keyspace}")
}

#[must_use]
pub fn create_keyspace(keyspace: &str, replication: &Replication) -> String {
    format!("CREATE KEYSPACE {keyspace} WITH replication = {replication}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_strategy_statement() {
        assert_eq!(
            create_keyspace("social", &Replication::default()),
            "CREATE KEYSPACE social WITH replication = \
             {'class': 'SimpleStrategy', 'replication_factor': 1}"
        );
        assert_eq!(drop_keyspace("social"), "DROP KEYSPACE IF EXISTS social");
    }

    #[test]
    fn network_topology_lists_datacenters_in_order() {
        let replication = Replication::NetworkTopologyStrategy {
            datacenters: BTreeMap::from([("eu".to_string(), 2), ("us".to_string(), 3)]),
        };

        assert_eq!(
            replication.to_string(),
            "{'class': 'NetworkTopologyStrategy', 'eu': 2, 'us': 3}"
        );
        replication.validate().expect("two datacenters should validate");
    }

    #[test]
    fn validate_rejects_zero_factors() {
        assert!(Replication::simple(0).validate().is_err());

        let empty = Replication::NetworkTopologyStrategy {
            datacenters: BTreeMap::new(),
        };
        assert!(empty.validate().is_err());

        let zero = Replication::NetworkTopologyStrategy {
            datacenters: BTreeMap::from([("eu".to_string(), 0)]),
        };
        let err = zero.validate().expect_err("zero factor must fail");
        assert!(err.to_string().contains("datacenter 'eu'"));
    }

    #[test]
    fn validate_rejects_quoted_datacenter_names() {
        let quoted = Replication::NetworkTopologyStrategy {
            datacenters: BTreeMap::from([("dc'1".to_string(), 3), (String::new(), 1)]),
        };
        let err = quoted.validate().expect_err("quote in datacenter name must fail");

        assert_eq!(
            err.messages(),
            &[
                "invalid datacenter name ''".to_string(),
                "invalid datacenter name 'dc'1'".to_string(),
            ]
        );

        let dashed = Replication::NetworkTopologyStrategy {
            datacenters: BTreeMap::from([("us-east-1".to_string(), 3)]),
        };
        dashed.validate().expect("dashed datacenter name should validate");
    }

    #[test]
    fn deserializes_class_tag() {
        let replication: Replication = serde_json::from_str(
            r#"{"class": "NetworkTopologyStrategy", "datacenters": {"dc1": 3}}"#,
        )
        .expect("tagged replication should parse");

        assert_eq!(
            replication,
            Replication::NetworkTopologyStrategy {
                datacenters: BTreeMap::from([("dc1".to_string(), 3)]),
            }
        );
    }
}
