use crate::MAX_KEYSPACE_NAME_LEN;
use thiserror::Error as ThisError;

///
/// NameError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum NameError {
    #[error("keyspace name is empty")]
    Empty,

    #[error("keyspace name '{name}' exceeds max length {max}", max = MAX_KEYSPACE_NAME_LEN)]
    TooLong { name: String },

    #[error("keyspace name '{name}' contains invalid character {ch:?}")]
    InvalidChar { name: String, ch: char },
}

/// Ensure a keyspace name is an unquoted CQL identifier: non-empty, at most
/// 48 characters, ASCII alphanumerics and underscores only.
pub fn validate_keyspace_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.len() > MAX_KEYSPACE_NAME_LEN {
        return Err(NameError::TooLong {
            name: name.to_string(),
        });
    }
    if let Some(ch) = name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(NameError::InvalidChar {
            name: name.to_string(),
            ch,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(validate_keyspace_name("social").is_ok());
        assert!(validate_keyspace_name("social_graph_2").is_ok());
        assert!(validate_keyspace_name(&"k".repeat(MAX_KEYSPACE_NAME_LEN)).is_ok());
    }

    #[test]
    fn rejects_empty_long_and_quoted_names() {
        assert_eq!(validate_keyspace_name(""), Err(NameError::Empty));
        assert!(matches!(
            validate_keyspace_name(&"k".repeat(MAX_KEYSPACE_NAME_LEN + 1)),
            Err(NameError::TooLong { .. })
        ));
        assert_eq!(
            validate_keyspace_name("drop; --"),
            Err(NameError::InvalidChar {
                name: "drop; --".to_string(),
                ch: ';',
            })
        );
    }
}
