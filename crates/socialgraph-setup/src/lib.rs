//! Keyspace provisioning: drop keyspace, create keyspace, create tables,
//! create indexes, strictly in that order.
//!
//! ## Crate layout
//! - `client`: the seam to the database driver.
//! - `helper`: the four setup steps, bound to a client and options.
//! - `options`: the statement bundle handed to the helper layer.
//! - `orchestrator`: sequential execution and completion reporting.

pub mod client;
pub mod helper;
pub mod options;
pub mod orchestrator;

pub use client::{ClientError, CqlClient};
pub use helper::{CqlHelper, HelperError, SetupSteps, Step};
pub use options::SetupOptions;
pub use orchestrator::{SetupError, run_steps, setup, setup_with, try_setup, try_setup_with};
