//! # Pod Fingerprint
//!
//! Order-independent fingerprints over the set of pods placed on a node.
//!
//! A [`Fingerprint`] accumulates (namespace, name) entries in any order and
//! yields a 64-bit [`Digest`] plus a short, versioned text signature such as
//! `pfp0v001d2cea00aa866782a`. Two observers that enumerate the same pods,
//! in whatever order their APIs return them, produce the same signature.
//!
//! This crate contains no I/O. The digest is a change detector, not a
//! cryptographic commitment.
//!
//! ## Key Types
//!
//! - [`Fingerprint`] - The accumulator
//! - [`Digest`] - The running 64-bit digest
//! - [`SignatureFormat`] - Signature layout (magic + version tag)
//! - [`FingerprintError`] - Malformed, incompatible version, or mismatch
//!
//! ## Usage
//!
//! ```rust
//! use podfingerprint::Fingerprint;
//!
//! let mut observed = Fingerprint::new(2);
//! observed.add("ns-a", "pod-1");
//! observed.add("ns-b", "pod-2");
//! let published = observed.signature();
//!
//! let mut current = Fingerprint::new(2);
//! current.add("ns-b", "pod-2");
//! current.add("ns-a", "pod-1");
//! assert!(current.check(&published).is_ok());
//! ```

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod hasher;
pub mod signature;
pub mod status;
pub mod types;

pub use config::FingerprintConfig;
pub use error::{FingerprintError, Result};
pub use fingerprint::{Fingerprint, PodIdentifier};
pub use hasher::EntryHash;
pub use signature::{is_version_compatible, ParsedSignature, SignatureFormat, PREFIX, VERSION};
pub use status::{NamespacedName, NoopTracer, Status, StatusTracer, Tracer};
pub use types::Digest;
