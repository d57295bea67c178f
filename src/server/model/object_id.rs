//! Opaque document identifiers.
//!
//! Ids follow the 12 byte ObjectId layout rendered as 24 lowercase hex characters:
//! a 4 byte big-endian timestamp in seconds, 5 random bytes fixed for the lifetime
//! of the process, and a 3 byte counter starting at a random value. Ids created by
//! one process therefore sort in creation order.

use std::{
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicU32, Ordering},
        LazyLock,
    },
};

use rand::Rng;
use thiserror::Error;

const HEX_LENGTH: usize = 24;
const MAX_COUNTER: u32 = 0x00FF_FFFF;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(|| rand::rng().random());
static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::rng().random_range(0..=MAX_COUNTER)));

/// A string is not a well-formed document id.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("'{0}' is not a valid document id")]
pub struct InvalidObjectId(pub String);

/// Store-assigned identifier of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Generates a fresh identifier. Only the document store assigns ids.
    pub(crate) fn generate() -> Self {
        let timestamp = chrono::Utc::now().timestamp() as u32;
        let count = COUNTER.fetch_add(1, Ordering::Relaxed) & MAX_COUNTER;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&timestamp.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

        Self(bytes.iter().map(|byte| format!("{:02x}", byte)).collect())
    }

    /// Returns whether `value` is a well-formed id: exactly 24 hex characters.
    pub fn is_valid(value: &str) -> bool {
        value.len() == HEX_LENGTH && value.bytes().all(|byte| byte.is_ascii_hexdigit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parses an id, normalizing hex digits to lowercase.
impl FromStr for ObjectId {
    type Err = InvalidObjectId;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid(value) {
            return Err(InvalidObjectId(value.to_string()));
        }

        Ok(Self(value.to_ascii_lowercase()))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_24_hex_characters() {
        assert!(ObjectId::is_valid("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert!(ObjectId::is_valid("65A1F0C2E4B0A1B2C3D4E5F6"));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(!ObjectId::is_valid(""));
        assert!(!ObjectId::is_valid("not-an-id"));
        assert!(!ObjectId::is_valid("65a1f0c2e4b0a1b2c3d4e5f"));
        assert!(!ObjectId::is_valid("65a1f0c2e4b0a1b2c3d4e5f6a"));
        assert!(!ObjectId::is_valid("65a1f0c2e4b0a1b2c3d4e5fg"));
        assert!(!ObjectId::is_valid("abcdefghijkl"));
    }

    #[test]
    fn parsing_normalizes_case() {
        let id: ObjectId = "65A1F0C2E4B0A1B2C3D4E5F6".parse().unwrap();
        assert_eq!(id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");

        let err = "xyz".parse::<ObjectId>().unwrap_err();
        assert_eq!(err, InvalidObjectId("xyz".to_string()));
    }

    #[test]
    fn generated_ids_are_valid_unique_and_ordered() {
        let first = ObjectId::generate();
        let second = ObjectId::generate();

        assert!(ObjectId::is_valid(first.as_str()));
        assert_ne!(first, second);
        assert_eq!(first.as_str()[8..18], second.as_str()[8..18]);

        let round_trip: ObjectId = first.to_string().parse().unwrap();
        assert_eq!(round_trip, first);
    }
}
