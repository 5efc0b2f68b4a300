mod index;
mod keyspace;
mod primary_key;
mod table;

pub use index::Index;
pub use keyspace::{Replication, create_keyspace, drop_keyspace};
pub use primary_key::PrimaryKey;
pub use table::{ClusteringOrder, Column, Order, Table};
