//! # Pod Fingerprint Testkit
//!
//! Testing utilities for podfingerprint.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Pod lists from JSON files and random stress data
//! - **Generators**: Proptest strategies for property-based testing
//! - **Check vectors**: The table of candidate signatures and the outcome
//!   `check` must report for each
//!
//! ## Fixtures
//!
//! ```rust
//! use podfingerprint::Fingerprint;
//! use podfingerprint_testkit::fixtures::fixture_pods;
//!
//! let pods = fixture_pods().unwrap();
//! let mut fp = Fingerprint::new(pods.len());
//! fp.extend(&pods);
//! println!("{}", fp.signature());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use podfingerprint_testkit::generators::{FingerprintParams, fingerprint_from_params};
//!
//! proptest! {
//!     #[test]
//!     fn digest_is_deterministic(params: FingerprintParams) {
//!         let a = fingerprint_from_params(&params);
//!         let b = fingerprint_from_params(&params);
//!         prop_assert_eq!(a.digest(), b.digest());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{fixture_pods, load_pods, stress_pods, PodIdent};
pub use generators::{fingerprint_from_params, FingerprintParams};
pub use vectors::{check_vectors, verify_check_vectors, CheckVector, Expected};
