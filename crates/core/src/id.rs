//! Strongly-typed identifiers used across the domain.
//!
//! Every catalog record is identified by a ULID: 128 bits (a 48-bit Unix
//! millisecond timestamp followed by 80 random bits) written as 26 Crockford
//! base32 characters. Ids sort lexicographically in creation order.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::DomainError;

/// Number of characters in the canonical text form.
pub const ENCODED_LEN: usize = 26;

const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Highest leading character: 26 symbols carry 130 bits, so the first one may
/// only use its low 3 bits.
const MAX_LEADING: u8 = 7;

fn decode_symbol(c: u8) -> Option<u8> {
    let upper = c.to_ascii_uppercase();
    ALPHABET
        .iter()
        .position(|&a| a == upper)
        .map(|pos| pos as u8)
}

fn decode(s: &str) -> Result<u128, String> {
    let bytes = s.as_bytes();
    if bytes.len() != ENCODED_LEN {
        return Err(format!(
            "expected {ENCODED_LEN} characters, got {}",
            s.chars().count()
        ));
    }

    let mut value: u128 = 0;
    for (pos, &b) in bytes.iter().enumerate() {
        let symbol = decode_symbol(b)
            .ok_or_else(|| format!("character {:?} at position {pos} is not Crockford base32", b as char))?;
        if pos == 0 && symbol > MAX_LEADING {
            return Err("timestamp component overflows 48 bits".to_string());
        }
        value = (value << 5) | u128::from(symbol);
    }
    Ok(value)
}

fn encode(value: u128) -> [u8; ENCODED_LEN] {
    let mut out = [0u8; ENCODED_LEN];
    let mut rest = value;
    for slot in out.iter_mut().rev() {
        *slot = ALPHABET[(rest & 0x1f) as usize];
        rest >>= 5;
    }
    out
}

/// Identifier of any catalog record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CatalogId(Uuid);

impl CatalogId {
    /// Create a new identifier stamped with the current time.
    ///
    /// Backed by UUIDv7, whose bit layout (48-bit millisecond timestamp first) is
    /// the ULID layout, so ids from one process come out in non-decreasing order.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Whether `s` is a well-formed identifier.
    ///
    /// Decoding is case-insensitive; `I`, `L`, `O` and `U` are never accepted.
    pub fn is_valid(s: &str) -> bool {
        decode(s).is_ok()
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        decode(s)
            .map(|value| Self(Uuid::from_u128(value)))
            .map_err(|e| DomainError::invalid_id(format!("CatalogId: {e}")))
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Milliseconds since the Unix epoch embedded in the id.
    pub fn timestamp_ms(&self) -> u64 {
        (self.0.as_u128() >> 80) as u64
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = encode(self.0.as_u128());
        // ALPHABET is pure ASCII.
        f.write_str(core::str::from_utf8(&encoded).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for CatalogId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for CatalogId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CatalogId> for Uuid {
    fn from(value: CatalogId) -> Self {
        value.0
    }
}

impl Serialize for CatalogId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CatalogId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Declare a record-specific id wrapping [`CatalogId`].
///
/// ```ignore
/// bookshelf_core::typed_id!(AuthorId, "author id");
/// ```
///
/// The label is the field name used in validation messages.
#[macro_export]
macro_rules! typed_id {
    ($t:ident, $label:literal) => {
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(pub $crate::CatalogId);

        impl $t {
            /// Field name used when this id fails validation.
            pub const LABEL: &'static str = $label;

            pub fn new(id: $crate::CatalogId) -> Self {
                Self(id)
            }

            pub fn generate() -> Self {
                Self($crate::CatalogId::generate())
            }

            pub fn as_catalog_id(&self) -> &$crate::CatalogId {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<$crate::CatalogId>().map(Self)
            }
        }

        impl From<$t> for $crate::CatalogId {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}
