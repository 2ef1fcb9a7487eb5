//! Strong type definitions for fingerprint digests.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hasher::EntryHash;

/// A 64-bit running digest over a multiset of pod entries.
///
/// Entries are folded in with modular addition (`wrapping_add`), which is
/// commutative and associative, so the digest does not depend on the order
/// entries were added in. Adding the same entry twice does not cancel out
/// as it would under XOR: multiplicity is reflected in the digest.
///
/// Two different multisets collide when their entry hashes sum to the same
/// value mod 2^64. For independent entries this is roughly a 2^-64 event,
/// but equal digests only mean "likely the same multiset". This is a change
/// detector, not a cryptographic commitment.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digest(pub u64);

impl Digest {
    /// Length of the lowercase hex rendering.
    pub const HEX_LEN: usize = 16;

    /// The digest of an empty fingerprint.
    pub const ZERO: Self = Self(0);

    /// Create from a raw value.
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Big-endian bytes, matching the hex rendering.
    pub const fn to_bytes(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Convert to a zero-padded lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse from a 16-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 8] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(u64::from_be_bytes(arr)))
    }

    /// Fold one entry hash into this digest.
    #[must_use]
    pub const fn fold(self, entry: EntryHash) -> Self {
        Self(self.0.wrapping_add(entry.as_u64()))
    }

    /// Combine two digests computed over disjoint parts of the same multiset.
    #[must_use]
    pub const fn combine(self, other: Digest) -> Self {
        Self(self.0.wrapping_add(other.0))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<u64> for Digest {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Digest> for u64 {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}
