//! The UUID value engine.
//!
//! A [`Uuid`] is sixteen bytes and nothing else. Every operation here is a pure function
//! of those bytes (or, for [`Uuid::clear`], an in-place reset of them); nothing in this
//! module knows about handles, type descriptors or hosts.

use std::{cmp::Ordering, fmt, str::FromStr};

use ::uuid::{Builder, Uuid as RustUuid, fmt::Hyphenated};
use rand::{RngCore, rngs::OsRng};

use crate::error::{EntropyError, ParseUuidError};

/// Number of bytes in a UUID value.
pub const BYTE_LEN: usize = 16;

/// Length of the canonical `8-4-4-4-12` string form.
pub const CANONICAL_LEN: usize = 36;

/// A 128-bit universally unique identifier.
///
/// Equality, ordering and hashing all operate on the raw bytes; the derived `Ord` is the
/// byte-wise lexicographic order that [`Uuid::compare`] reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid([u8; BYTE_LEN]);

impl Uuid {
    /// The all-zero value.
    #[must_use]
    pub const fn nil() -> Self {
        Self([0; BYTE_LEN])
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; BYTE_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a value from a byte slice, which must be exactly sixteen bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ParseUuidError> {
        <[u8; BYTE_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| ParseUuidError::InvalidByteLength { len: bytes.len() })
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BYTE_LEN] {
        &self.0
    }

    /// Generates a random (version 4) UUID.
    ///
    /// 122 bits come from the operating system's randomness source; the remaining six
    /// encode the version and the RFC 4122 variant.
    pub fn generate() -> Result<Self, EntropyError> {
        let mut bytes = [0u8; BYTE_LEN];
        OsRng.try_fill_bytes(&mut bytes).map_err(|err| {
            tracing::error!(%err, "failed to read the randomness source");
            EntropyError(err.to_string())
        })?;
        Ok(Self::from(Builder::from_random_bytes(bytes).into_uuid()))
    }

    /// Decodes the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
    ///
    /// Hex digits may be in either case. Braced, URN and hyphen-less forms are rejected,
    /// and nothing is returned unless the whole string decodes.
    pub fn parse(text: &str) -> Result<Self, ParseUuidError> {
        let len = text.chars().count();
        if len != CANONICAL_LEN {
            return Err(ParseUuidError::InvalidLength { len });
        }
        let hyphenated = Hyphenated::from_str(text)?;
        Ok(Self::from(hyphenated.into_uuid()))
    }

    /// Renders the canonical hyphenated form.
    #[must_use]
    pub fn unparse(self, format: UnparseFormat) -> String {
        let mut buffer = RustUuid::encode_buffer();
        let hyphenated = RustUuid::from_bytes(self.0).hyphenated();
        let rendered: &str = match format {
            UnparseFormat::Upper => hyphenated.encode_upper(&mut buffer),
            UnparseFormat::Default | UnparseFormat::Lower => hyphenated.encode_lower(&mut buffer),
        };
        rendered.to_owned()
    }

    /// Byte-wise lexicographic comparison.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Resets the value to the nil UUID.
    pub fn clear(&mut self) {
        self.0 = [0; BYTE_LEN];
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|&byte| byte == 0)
    }

    /// The version nibble, or `None` for the nil UUID.
    #[must_use]
    pub fn version(&self) -> Option<u8> {
        if self.is_null() { None } else { Some(self.0[6] >> 4) }
    }
}

/// Maps an ordering onto the `-1`/`0`/`1` convention scripting hosts expect.
#[must_use]
pub fn ordering_to_int(ordering: Ordering) -> i64 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

impl From<RustUuid> for Uuid {
    fn from(value: RustUuid) -> Self {
        Self(value.into_bytes())
    }
}

impl From<Uuid> for RustUuid {
    fn from(value: Uuid) -> Self {
        Self::from_bytes(value.0)
    }
}

impl FromStr for Uuid {
    type Err = ParseUuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unparse(UnparseFormat::Default))
    }
}

impl serde::Serialize for Uuid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.unparse(UnparseFormat::Default))
    }
}

impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Letter case used by [`Uuid::unparse`].
///
/// Hosts pass this as an optional string: `"upper"` and `"lower"` are recognized, anything
/// else (or nothing) selects [`UnparseFormat::Default`], which renders lowercase.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UnparseFormat {
    #[default]
    Default,
    Upper,
    Lower,
}

impl UnparseFormat {
    /// Resolves a host-supplied format option, falling back to `Default` for unknown names.
    #[must_use]
    pub fn from_option(option: Option<&str>) -> Self {
        match option {
            None => Self::Default,
            Some(name) => name.parse().unwrap_or_else(|_| {
                tracing::debug!(option = name, "unrecognized unparse format, using default");
                Self::Default
            }),
        }
    }
}
