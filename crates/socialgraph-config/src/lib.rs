//! TOML configuration for the socialgraph tools.
//!
//! ```toml
//! keyspace = "social"
//! nodes = ["127.0.0.1:9042"]
//!
//! [replication]
//! class = "SimpleStrategy"
//! replication_factor = 1
//! ```

use serde::Deserialize;
use socialgraph_schema::{node::Replication, validate::validate_keyspace_name};
use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "socialgraph.toml";

/// Contact point used when neither the file nor the command line names one.
pub const DEFAULT_NODE: &str = "127.0.0.1:9042";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no keyspace configured; set `keyspace` in the config file or pass --keyspace")]
    MissingKeyspace,

    #[error("invalid config: {0}")]
    Invalid(String),
}

///
/// Config
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub keyspace: Option<String>,
    pub nodes: Vec<String>,
    pub replication: Replication,
    pub credentials: Option<Credentials>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keyspace: None,
            nodes: vec![DEFAULT_NODE.to_string()],
            replication: Replication::default(),
            credentials: None,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `DEFAULT_CONFIG_PATH` is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            Self::from_file(default_path)
        } else {
            debug!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");

        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Override the keyspace when one is given.
    #[must_use]
    pub fn with_keyspace(mut self, keyspace: Option<String>) -> Self {
        if keyspace.is_some() {
            self.keyspace = keyspace;
        }
        self
    }

    /// Replace the contact points when any are given.
    #[must_use]
    pub fn with_nodes(mut self, nodes: Vec<String>) -> Self {
        if !nodes.is_empty() {
            self.nodes = nodes;
        }
        self
    }

    pub fn keyspace(&self) -> Result<&str, ConfigError> {
        self.keyspace.as_deref().ok_or(ConfigError::MissingKeyspace)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(keyspace) = &self.keyspace {
            validate_keyspace_name(keyspace).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        if self.nodes.is_empty() {
            return Err(ConfigError::Invalid("at least one node is required".to_string()));
        }
        self.replication
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(())
    }
}

///
/// Credentials
///

#[derive(Clone, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
