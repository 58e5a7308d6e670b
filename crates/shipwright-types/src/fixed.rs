//! Fixed-capacity identifier strings.
//!
//! Runtime records never hold heap strings. Every textual identifier is
//! stored inline as at most `N` bytes of UTF-8, so a record has the same
//! size regardless of what the designer typed. Two capacities are used:
//!
//! - [`ShortId`] (32 bytes) for template-class ids such as aggregate
//!   template, outlook, or theme profiles.
//! - [`LongId`] (64 bytes) for instance and catalog ids such as hulls,
//!   modules, resources, and entity references.
//!
//! # Invariants
//!
//! - The stored bytes are always valid UTF-8.
//! - Bytes past `len` are always zero, so derived equality, ordering, and
//!   hashing depend only on the visible text.

use core::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Byte budget for template-class identifiers.
pub const SHORT_ID_BYTES: usize = 32;

/// Byte budget for instance and catalog identifiers.
pub const LONG_ID_BYTES: usize = 64;

/// Template-class identifier (32-byte budget).
pub type ShortId = FixedId<SHORT_ID_BYTES>;

/// Instance or catalog identifier (64-byte budget).
pub type LongId = FixedId<LONG_ID_BYTES>;

/// Errors raised when constructing a [`FixedId`] without truncation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixedIdError {
    /// The input does not fit in the identifier's byte budget.
    #[error("identifier is {actual_bytes} bytes, budget is {max_bytes}")]
    TooLong {
        /// The byte budget of the target identifier type.
        max_bytes: usize,
        /// The byte length of the rejected input.
        actual_bytes: usize,
    },
}

/// An inline UTF-8 string of at most `N` bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedId<const N: usize> {
    len: u8,
    bytes: [u8; N],
}

impl<const N: usize> FixedId<N> {
    const CAPACITY_FITS_LEN: () = assert!(N <= u8::MAX as usize, "FixedId capacity exceeds u8 length");

    /// The empty identifier.
    pub const fn empty() -> Self {
        let () = Self::CAPACITY_FITS_LEN;
        Self { len: 0, bytes: [0; N] }
    }

    /// Build an identifier, rejecting input longer than `N` bytes.
    pub fn new(text: &str) -> Result<Self, FixedIdError> {
        if text.len() > N {
            return Err(FixedIdError::TooLong {
                max_bytes: N,
                actual_bytes: text.len(),
            });
        }
        Ok(Self::copy_from(text))
    }

    /// Build an identifier, cutting the input at the last UTF-8 character
    /// boundary that fits in `N` bytes.
    ///
    /// Returns the identifier and whether any bytes were dropped.
    pub fn truncating(text: &str) -> (Self, bool) {
        if text.len() <= N {
            return (Self::copy_from(text), false);
        }
        let mut cut = N;
        while !text.is_char_boundary(cut) {
            cut = cut.saturating_sub(1);
        }
        let head = text.get(..cut).unwrap_or_default();
        (Self::copy_from(head), true)
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        let used = self.bytes.get(..usize::from(self.len)).unwrap_or_default();
        core::str::from_utf8(used).unwrap_or_default()
    }

    /// Number of bytes in use.
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the identifier is empty.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The byte budget of this identifier type.
    pub const fn capacity() -> usize {
        N
    }

    /// Copy `text` into a zeroed buffer. Callers guarantee `text.len() <= N`.
    fn copy_from(text: &str) -> Self {
        let mut id = Self::empty();
        let mut used: u8 = 0;
        for (slot, byte) in id.bytes.iter_mut().zip(text.bytes()) {
            *slot = byte;
            used = used.saturating_add(1);
        }
        id.len = used;
        id
    }
}

impl<const N: usize> Default for FixedId<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> fmt::Debug for FixedId<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedId<{N}>({:?})", self.as_str())
    }
}

impl<const N: usize> fmt::Display for FixedId<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> TryFrom<&str> for FixedId<N> {
    type Error = FixedIdError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl<const N: usize> Serialize for FixedId<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedId<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_within_budget() {
        let id = LongId::new("lcv-sparrow");
        assert_eq!(id.as_ref().map(LongId::as_str), Ok("lcv-sparrow"));
        assert_eq!(id.map(|i| i.len()), Ok(11));
    }

    #[test]
    fn exact_budget_is_accepted() {
        let text = "a".repeat(SHORT_ID_BYTES);
        let id = ShortId::new(&text);
        assert_eq!(id.map(|i| i.len()), Ok(SHORT_ID_BYTES));
    }

    #[test]
    fn oversized_input_is_rejected() {
        let text = "a".repeat(SHORT_ID_BYTES + 1);
        assert_eq!(
            ShortId::new(&text),
            Err(FixedIdError::TooLong {
                max_bytes: 32,
                actual_bytes: 33,
            })
        );
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 31 ASCII bytes followed by a 3-byte character: the character
        // straddles the 32-byte budget and must be dropped whole.
        let text = format!("{}\u{2603}", "x".repeat(31));
        let (id, truncated) = ShortId::truncating(&text);
        assert!(truncated);
        assert_eq!(id.len(), 31);
        assert_eq!(id.as_str(), "x".repeat(31));
    }

    #[test]
    fn truncating_short_input_is_lossless() {
        let (id, truncated) = LongId::truncating("hull.frigate");
        assert!(!truncated);
        assert_eq!(id.as_str(), "hull.frigate");
    }

    #[test]
    fn equality_ignores_construction_path() {
        let (a, _) = ShortId::truncating("theme.crimson");
        let b = ShortId::new("theme.crimson");
        assert_eq!(Ok(a), b);
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let id = LongId::new("res.ore.iron").unwrap_or_default();
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, "\"res.ore.iron\"");
        let back: Result<LongId, _> = serde_json::from_str(&json);
        assert_eq!(back.ok(), Some(id));
    }

    #[test]
    fn deserialize_rejects_oversized() {
        let json = format!("\"{}\"", "z".repeat(SHORT_ID_BYTES + 5));
        let parsed: Result<ShortId, _> = serde_json::from_str(&json);
        assert!(parsed.is_err());
    }

    #[test]
    fn empty_is_default() {
        let id = LongId::default();
        assert!(id.is_empty());
        assert_eq!(id.as_str(), "");
        assert_eq!(LongId::capacity(), 64);
    }
}
