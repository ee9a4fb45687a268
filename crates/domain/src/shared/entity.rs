use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use uuid::Uuid;

pub trait Entity {
    fn id(&self) -> &ID;
}

/// Length of the canonical 8-4-4-4-12 textual form of a uuid
const HYPHENATED_LEN: usize = 36;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ID(Uuid);

impl ID {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.hyphenated().to_string()
    }

    pub fn inner(self) -> Uuid {
        self.0
    }

    pub fn inner_ref(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ID {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ID {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    /// Only the hyphenated form is accepted. `Uuid::parse_str` would also take
    /// the simple, braced and urn forms, which all have a different length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HYPHENATED_LEN {
            return Err(InvalidIDError::Malformed(s.to_string()));
        }
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidIDError::Malformed(s.to_string()))
    }
}

impl TryFrom<String> for ID {
    type Error = InvalidIDError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ID> for String {
    fn from(id: ID) -> Self {
        id.as_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_hyphenated_ids() {
        let valid_ids = vec![
            "a1b2c3d4-e5f6-4789-8abc-def012345678",
            "A1B2C3D4-E5F6-4789-8ABC-DEF012345678",
            "00000000-0000-0000-0000-000000000000",
        ];
        for id in valid_ids {
            assert!(id.parse::<ID>().is_ok(), "Expected {} to be valid", id);
        }
    }

    #[test]
    fn rejects_malformed_ids() {
        let invalid_ids = vec![
            "",
            "invalid id",
            "invalid-id",
            // Simple form
            "a1b2c3d4e5f647898abcdef012345678",
            // Braced form
            "{a1b2c3d4-e5f6-4789-8abc-def012345678}",
            "urn:uuid:a1b2c3d4-e5f6-4789-8abc-def012345678",
            // Wrong group lengths
            "a1b2c3d-4e5f6-4789-8abc-def012345678",
            "g1b2c3d4-e5f6-4789-8abc-def012345678",
            " a1b2c3d4-e5f6-4789-8abc-def01234567",
        ];
        for id in invalid_ids {
            assert_eq!(
                id.parse::<ID>(),
                Err(InvalidIDError::Malformed(id.to_string())),
                "Expected {} to be rejected",
                id
            );
        }
    }

    #[test]
    fn displays_lowercase() {
        let id = "A1B2C3D4-E5F6-4789-8ABC-DEF012345678".parse::<ID>().unwrap();
        assert_eq!(id.to_string(), "a1b2c3d4-e5f6-4789-8abc-def012345678");
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ID::new(), ID::new());
    }
}
