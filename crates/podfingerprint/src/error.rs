//! Error types for fingerprint signatures.

use thiserror::Error;

/// Outcomes of validating a signature against a fingerprint.
///
/// All three are pure validation results: they are detected synchronously
/// and retrying the same check always yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingerprintError {
    /// The input is not a signature this scheme can interpret: wrong total
    /// length, wrong magic prefix, or a version tag of the wrong width.
    #[error("malformed signature: {0}")]
    Malformed(String),

    /// Well-formed, but produced by a different scheme version. Digests
    /// from different versions are not comparable.
    #[error("incompatible version: expected {expected:?}, got {found:?}")]
    IncompatibleVersion { found: String, expected: String },

    /// Well-formed and compatible, but the digests differ.
    #[error("signature mismatch: expected {expected}, computed {computed}")]
    SignatureMismatch { expected: String, computed: String },
}

impl FingerprintError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        FingerprintError::Malformed(msg.into())
    }

    /// Check if this is a malformed-input error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, FingerprintError::Malformed(_))
    }

    /// Check if this is a version incompatibility.
    pub fn is_incompatible_version(&self) -> bool {
        matches!(self, FingerprintError::IncompatibleVersion { .. })
    }

    /// Check if this is a digest mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, FingerprintError::SignatureMismatch { .. })
    }
}

/// Result type for fingerprint operations.
pub type Result<T> = std::result::Result<T, FingerprintError>;
