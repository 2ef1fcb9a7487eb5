//! Accumulator configuration.

use crate::signature::SignatureFormat;

/// Configuration for a [`crate::Fingerprint`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FingerprintConfig {
    /// Expected number of entries. Sizes tracer buffers only; never
    /// affects the digest.
    pub capacity_hint: usize,
    /// Signature layout used by `signature` and `check`.
    pub format: SignatureFormat,
}

impl FingerprintConfig {
    /// Default configuration: no capacity hint, reference format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity hint.
    pub fn capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }

    /// Set the signature format.
    pub fn format(mut self, format: SignatureFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FingerprintConfig::new();
        assert_eq!(config.capacity_hint, 0);
        assert_eq!(config.format, SignatureFormat::V001);
    }

    #[test]
    fn test_builder() {
        let format = SignatureFormat::new("pfp0v", "001").unwrap();
        let config = FingerprintConfig::new().capacity_hint(300).format(format);
        assert_eq!(config.capacity_hint, 300);
        assert_eq!(config.format.magic(), "pfp0v");
    }
}
