//! The social graph tables, in creation order.

use crate::prelude::*;

/// Every table in the keyspace. Statement order follows this slice.
pub static TABLES: &[Table] = &[
    USERS,
    POSTS,
    FRIENDS,
    FRIEND_REQUEST,
    LIKES,
    FOLLOWERS,
    USERLINE,
];

pub const USERS: Table = Table {
    name: "users",
    columns: &[
        Column::new("user", ColumnType::UUID),
        Column::new("username", ColumnType::TEXT),
        Column::new("userdata", ColumnType::map(Scalar::Text, Scalar::Text)),
    ],
    primary_key: PrimaryKey::Column("user"),
    clustering_order: &[],
    indexes: &[Index::new("username")],
};

pub const POSTS: Table = Table {
    name: "posts",
    columns: &[
        Column::new("post", ColumnType::UUID),
        Column::new("user", ColumnType::UUID),
        Column::new("content", ColumnType::TEXT),
        Column::new("isprivate", ColumnType::BOOLEAN),
        Column::new("posted", ColumnType::TIMESTAMP),
    ],
    primary_key: PrimaryKey::Column("post"),
    clustering_order: &[],
    indexes: &[Index::new("user"), Index::new("isprivate")],
};

pub const FRIENDS: Table = Table {
    name: "friends",
    columns: &[
        Column::new("friend", ColumnType::UUID),
        Column::new("user", ColumnType::UUID),
        Column::new("user_friend", ColumnType::UUID),
        Column::new("since", ColumnType::TIMESTAMP),
    ],
    primary_key: PrimaryKey::Clause(&["user", "user_friend"]),
    clustering_order: &[],
    indexes: &[Index::new("friend")],
};

pub const FRIEND_REQUEST: Table = Table {
    name: "friend_request",
    columns: &[
        Column::new("friend_request", ColumnType::UUID),
        Column::new("user", ColumnType::UUID),
        Column::new("user_friend", ColumnType::UUID),
        Column::new("message", ColumnType::TEXT),
        Column::new("since", ColumnType::TIMESTAMP),
    ],
    primary_key: PrimaryKey::Clause(&["friend_request"]),
    clustering_order: &[],
    indexes: &[Index::new("user_friend"), Index::new("user")],
};

pub const LIKES: Table = Table {
    name: "likes",
    columns: &[
        Column::new("like", ColumnType::UUID),
        Column::new("user", ColumnType::UUID),
        Column::new("item", ColumnType::TEXT),
        Column::new("since", ColumnType::TIMESTAMP),
    ],
    primary_key: PrimaryKey::Clause(&["user", "item"]),
    clustering_order: &[],
    indexes: &[Index::new("like")],
};

pub const FOLLOWERS: Table = Table {
    name: "followers",
    columns: &[
        Column::new("follow", ColumnType::UUID),
        Column::new("user", ColumnType::UUID),
        Column::new("user_follower", ColumnType::UUID),
        Column::new("since", ColumnType::TIMESTAMP),
    ],
    primary_key: PrimaryKey::Clause(&["user", "user_follower"]),
    clustering_order: &[],
    indexes: &[Index::new("follow")],
};

// newest entries first within a user's line
pub const USERLINE: Table = Table {
    name: "userline",
    columns: &[
        Column::new("user", ColumnType::UUID),
        Column::new("time", ColumnType::TIMEUUID),
        Column::new("item", ColumnType::UUID),
        Column::new("type", ColumnType::TEXT),
        Column::new("isprivate", ColumnType::BOOLEAN),
    ],
    primary_key: PrimaryKey::Clause(&["user", "time", "isprivate"]),
    clustering_order: &[ClusteringOrder::desc("time"), ClusteringOrder::asc("isprivate")],
    indexes: &[Index::new("item")],
};

/// Look up a catalog table by name.
#[must_use]
pub fn table(name: &str) -> Option<&'static Table> {
    TABLES.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(table("userline").map(|t| t.columns.len()), Some(5));
        assert!(table("comments").is_none());
    }

    #[test]
    fn index_count_per_table() {
        let counts: Vec<(&str, usize)> = TABLES.iter().map(|t| (t.name, t.indexes.len())).collect();

        assert_eq!(
            counts,
            vec![
                ("users", 1),
                ("posts", 2),
                ("friends", 1),
                ("friend_request", 2),
                ("likes", 1),
                ("followers", 1),
                ("userline", 1),
            ]
        );
    }
}
