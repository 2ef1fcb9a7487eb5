//! Entry hashing: one (namespace, name) pair to one 64-bit scalar.

use std::fmt;

/// Domain tag prepended to every entry hash.
///
/// Changing it changes every digest, so it moves together with
/// [`crate::signature::VERSION`].
pub const ENTRY_DOMAIN: &[u8] = b"podfp-entry-v001:";

/// The 64-bit hash of a single pod entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHash(pub u64);

impl EntryHash {
    /// Hash a (namespace, name) pair.
    ///
    /// Computes BLAKE3 over `ENTRY_DOMAIN || u64_le(len(namespace)) ||
    /// namespace || name` and keeps the first 8 bytes as a little-endian
    /// integer. The length prefix pins the field boundary, so `("ab", "c")`
    /// and `("a", "bc")` hash differently for arbitrary bytes.
    pub fn compute(namespace: &[u8], name: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(ENTRY_DOMAIN);
        hasher.update(&(namespace.len() as u64).to_le_bytes());
        hasher.update(namespace);
        hasher.update(name);

        let mut head = [0u8; 8];
        head.copy_from_slice(&hasher.finalize().as_bytes()[..8]);
        Self(u64::from_le_bytes(head))
    }

    /// Get the raw value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntryHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryHash({:016x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_hash_deterministic() {
        let h1 = EntryHash::compute(b"ns-a", b"pod-1");
        let h2 = EntryHash::compute(b"ns-a", b"pod-1");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_entry_hash_field_boundary() {
        let h1 = EntryHash::compute(b"ab", b"c");
        let h2 = EntryHash::compute(b"a", b"bc");
        assert_ne!(h1, h2);

        let h3 = EntryHash::compute(b"", b"abc");
        let h4 = EntryHash::compute(b"abc", b"");
        assert_ne!(h3, h4);
    }

    #[test]
    fn test_entry_hash_fields_not_swappable() {
        let h1 = EntryHash::compute(b"default", b"nginx");
        let h2 = EntryHash::compute(b"nginx", b"default");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_entry_hash_accepts_empty() {
        let empty = EntryHash::compute(b"", b"");
        assert_eq!(empty, EntryHash::compute(b"", b""));
    }

    #[test]
    fn test_entry_hash_matches_manual_blake3() {
        let mut input = Vec::new();
        input.extend_from_slice(ENTRY_DOMAIN);
        input.extend_from_slice(&4u64.to_le_bytes());
        input.extend_from_slice(b"ns-a");
        input.extend_from_slice(b"pod-1");
        let full = blake3::hash(&input);
        let mut head = [0u8; 8];
        head.copy_from_slice(&full.as_bytes()[..8]);

        assert_eq!(
            EntryHash::compute(b"ns-a", b"pod-1").as_u64(),
            u64::from_le_bytes(head)
        );
    }
}
