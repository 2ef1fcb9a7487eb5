//! Signature codec and verifier.
//!
//! A signature is `<magic><version><digest-hex>` with no separators:
//!
//! ```text
//! pfp0 v001 d2cea00aa866782a
//! ^    ^    ^
//! |    |    16 lowercase hex chars, zero-padded
//! |    fixed-width version tag
//! magic
//! ```
//!
//! Verification runs in three steps and stops at the first failure:
//! shape (length and magic), version compatibility, then digest equality.

use crate::error::{FingerprintError, Result};
use crate::types::Digest;

/// Magic prefix of the reference encoding.
pub const PREFIX: &str = "pfp0";

/// Version tag written into every signature produced by this build.
pub const VERSION: &str = "v001";

/// The (magic, version) pair that fixes the signature layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureFormat {
    magic: &'static str,
    version: &'static str,
}

impl SignatureFormat {
    /// The reference encoding: `pfp0` + `v001`.
    pub const V001: Self = Self {
        magic: PREFIX,
        version: VERSION,
    };

    /// Create a custom format.
    ///
    /// Both parts must be non-empty ASCII so that every field sits on a
    /// fixed byte offset.
    pub fn new(magic: &'static str, version: &'static str) -> Result<Self> {
        if magic.is_empty() || !magic.is_ascii() {
            return Err(FingerprintError::malformed(format!(
                "magic {magic:?} must be non-empty ascii"
            )));
        }
        if version.is_empty() || !version.is_ascii() {
            return Err(FingerprintError::malformed(format!(
                "version {version:?} must be non-empty ascii"
            )));
        }
        Ok(Self { magic, version })
    }

    /// The magic prefix.
    pub const fn magic(&self) -> &'static str {
        self.magic
    }

    /// The compiled-in version tag.
    pub const fn version(&self) -> &'static str {
        self.version
    }

    /// Total length of every signature in this format.
    pub const fn signature_len(&self) -> usize {
        self.magic.len() + self.version.len() + Digest::HEX_LEN
    }

    /// Render a digest as a signature.
    pub fn render(&self, digest: Digest) -> String {
        let mut out = String::with_capacity(self.signature_len());
        out.push_str(self.magic);
        out.push_str(self.version);
        out.push_str(&digest.to_hex());
        out
    }

    /// Check a bare version tag against this format's version.
    ///
    /// Returns `Ok(true)` for the compiled tag, `Ok(false)` for any other tag
    /// of the same width, and `Malformed` for any other width (empty
    /// included).
    pub fn is_version_compatible(&self, tag: &str) -> Result<bool> {
        if tag.len() != self.version.len() {
            return Err(FingerprintError::malformed(format!(
                "version tag {tag:?} has length {}, expected {}",
                tag.len(),
                self.version.len()
            )));
        }
        Ok(tag == self.version)
    }

    /// Split a candidate signature into its fields.
    ///
    /// Only the shape is checked here: total length and magic prefix. The
    /// version and digest fields are returned as-is.
    pub fn parse<'a>(&self, candidate: &'a str) -> Result<ParsedSignature<'a>> {
        if candidate.len() != self.signature_len() {
            return Err(FingerprintError::malformed(format!(
                "length {}, expected {}",
                candidate.len(),
                self.signature_len()
            )));
        }

        let rest = candidate
            .strip_prefix(self.magic)
            .ok_or_else(|| FingerprintError::malformed(format!("missing prefix {:?}", self.magic)))?;

        // `get` refuses to split inside a multi-byte char
        let version = rest
            .get(..self.version.len())
            .ok_or_else(|| FingerprintError::malformed("version field is not valid text"))?;
        let digest_hex = &rest[self.version.len()..];

        Ok(ParsedSignature {
            version,
            digest_hex,
        })
    }

    /// Verify a candidate signature against a locally computed digest.
    pub fn verify(&self, digest: Digest, candidate: &str) -> Result<()> {
        let parsed = self.parse(candidate)?;

        if !self.is_version_compatible(parsed.version())? {
            return Err(FingerprintError::IncompatibleVersion {
                found: parsed.version().to_string(),
                expected: self.version.to_string(),
            });
        }

        let computed = self.render(digest);
        if computed != candidate {
            return Err(FingerprintError::SignatureMismatch {
                expected: candidate.to_string(),
                computed,
            });
        }

        Ok(())
    }
}

impl Default for SignatureFormat {
    fn default() -> Self {
        Self::V001
    }
}

/// The fields of a signature that passed the shape checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSignature<'a> {
    version: &'a str,
    digest_hex: &'a str,
}

impl<'a> ParsedSignature<'a> {
    /// The version tag, not yet checked for compatibility.
    pub fn version(&self) -> &'a str {
        self.version
    }

    /// The digest field, exactly as supplied.
    pub fn digest_hex(&self) -> &'a str {
        self.digest_hex
    }

    /// Decode the digest field, if it is valid hex.
    pub fn digest(&self) -> Option<Digest> {
        Digest::from_hex(self.digest_hex).ok()
    }
}

/// Check a version tag against the reference format.
pub fn is_version_compatible(tag: &str) -> Result<bool> {
    SignatureFormat::V001.is_version_compatible(tag)
}
