//! Check scenarios for signature verification.
//!
//! Each vector pairs a candidate signature with the outcome `check` must
//! report. The "correct" vector is derived from the pods at hand, so the
//! table works for any fixture.

use podfingerprint::{
    Digest, Fingerprint, FingerprintConfig, FingerprintError, PodIdentifier, Tracer,
};

/// What `check` is expected to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Match,
    Malformed,
    IncompatibleVersion,
    Mismatch,
}

impl Expected {
    /// Classify an actual `check` outcome.
    pub fn of(outcome: &Result<(), FingerprintError>) -> Self {
        match outcome {
            Ok(()) => Expected::Match,
            Err(FingerprintError::Malformed(_)) => Expected::Malformed,
            Err(FingerprintError::IncompatibleVersion { .. }) => Expected::IncompatibleVersion,
            Err(FingerprintError::SignatureMismatch { .. }) => Expected::Mismatch,
        }
    }
}

/// A single check scenario.
#[derive(Debug, Clone)]
pub struct CheckVector {
    /// Human-readable description.
    pub description: &'static str,
    /// The candidate signature.
    pub candidate: String,
    /// Expected outcome.
    pub expected: Expected,
}

/// Build the check table against a fingerprint.
pub fn check_vectors<T: Tracer>(fp: &Fingerprint<T>) -> Vec<CheckVector> {
    let format = fp.format();
    let (magic, version) = (format.magic(), format.version());
    let correct = fp.signature();
    let digest_field = &correct[correct.len() - Digest::HEX_LEN..];

    vec![
        CheckVector {
            description: "too short",
            candidate: "x".into(),
            expected: Expected::Malformed,
        },
        CheckVector {
            description: "empty",
            candidate: String::new(),
            expected: Expected::Malformed,
        },
        CheckVector {
            description: "wrong prefix",
            candidate: format!("{}{version}{digest_field}", replace_char(magic, 0)),
            expected: Expected::Malformed,
        },
        CheckVector {
            description: "malformed version",
            candidate: format!("{magic}X"),
            expected: Expected::Malformed,
        },
        CheckVector {
            description: "too long",
            candidate: format!("{correct}0"),
            expected: Expected::Malformed,
        },
        CheckVector {
            description: "incompatible version",
            candidate: format!("{magic}{}{digest_field}", replace_char(version, version.len() - 1)),
            expected: Expected::IncompatibleVersion,
        },
        CheckVector {
            description: "wrong fingerprint",
            candidate: format!("{magic}{version}{}", replace_char(digest_field, 0)),
            expected: Expected::Mismatch,
        },
        CheckVector {
            description: "uppercase fingerprint",
            candidate: format!("{magic}{version}{}", digest_field.to_ascii_uppercase()),
            expected: if digest_field.bytes().any(|b| b.is_ascii_alphabetic()) {
                Expected::Mismatch
            } else {
                Expected::Match
            },
        },
        CheckVector {
            description: "correct fingerprint",
            candidate: correct.clone(),
            expected: Expected::Match,
        },
    ]
}

/// Build a fingerprint from pods and run every check vector against it.
///
/// Returns `(description, passed, actual)` per vector.
pub fn verify_check_vectors<P: PodIdentifier>(pods: &[P]) -> Vec<(String, bool, Expected)> {
    verify_check_vectors_with(FingerprintConfig::new(), pods)
}

/// Like [`verify_check_vectors`], with the fingerprint built from `config`.
pub fn verify_check_vectors_with<P: PodIdentifier>(
    config: FingerprintConfig,
    pods: &[P],
) -> Vec<(String, bool, Expected)> {
    let mut fp = Fingerprint::with_config(config.capacity_hint(pods.len()));
    fp.extend(pods);

    check_vectors(&fp)
        .into_iter()
        .map(|v| {
            let actual = Expected::of(&fp.check(&v.candidate));
            (v.description.to_string(), actual == v.expected, actual)
        })
        .collect()
}

/// Swap the ascii char at `index` for a different one, keeping the width.
fn replace_char(field: &str, index: usize) -> String {
    field
        .chars()
        .enumerate()
        .map(|(i, c)| match (i == index, c) {
            (false, c) => c,
            (true, '0') => '1',
            (true, _) => '0',
        })
        .collect()
}
