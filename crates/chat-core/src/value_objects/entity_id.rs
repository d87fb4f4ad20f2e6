//! Entity ID - database-assigned 64-bit identifier
//!
//! Rows in `chats`, `messages` and `users` are keyed by integer ids assigned by
//! PostgreSQL. Clients send them back either as JSON numbers or as numeric
//! strings (query parameters, headers), so deserialization accepts both.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Database-assigned entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntityId(i64);

impl EntityId {
    /// Create a new EntityId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the id is zero (absent)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse from string representation, ignoring surrounding whitespace
    pub fn parse(s: &str) -> Result<Self, EntityIdParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EntityIdParseError::Empty);
        }
        trimmed
            .parse::<i64>()
            .map(EntityId)
            .map_err(|_| EntityIdParseError::InvalidFormat(trimmed.to_string()))
    }
}

/// Error when parsing an EntityId from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityIdParseError {
    #[error("empty id")]
    Empty,

    #[error("invalid id format: {0}")]
    InvalidFormat(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EntityId {
    type Err = EntityIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

// Serialize as a plain JSON number; the web client compares ids numerically
impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

// Deserialize from string or number, including floats with no fractional
// part. A blank string decodes to the zero id so request validation can
// report it as missing.
impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct EntityIdVisitor;

        impl Visitor<'_> for EntityIdVisitor {
            type Value = EntityId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing an entity ID")
            }

            fn visit_i64<E>(self, value: i64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                Ok(EntityId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(EntityId)
                    .map_err(|_| de::Error::custom("entity id out of range"))
            }

            fn visit_f64<E>(self, value: f64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                // 2^63, the first float outside the i64 range
                const LIMIT: f64 = 9_223_372_036_854_775_808.0;

                if value.fract() != 0.0 || value.abs() >= LIMIT {
                    return Err(de::Error::custom("entity id must be an integer"));
                }
                #[allow(clippy::cast_possible_truncation)]
                let id = value as i64;
                Ok(EntityId(id))
            }

            fn visit_str<E>(self, value: &str) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                match EntityId::parse(value) {
                    Ok(id) => Ok(id),
                    Err(EntityIdParseError::Empty) => Ok(EntityId::default()),
                    Err(e) => Err(de::Error::custom(e)),
                }
            }
        }

        deserializer.deserialize_any(EntityIdVisitor)
    }
}
