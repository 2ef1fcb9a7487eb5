//! The digest accumulator.
//!
//! Entries are fed one at a time, in any order; the resulting digest and
//! signature depend only on the multiset of entries.

use tracing::{debug, trace};

use crate::config::FingerprintConfig;
use crate::error::Result;
use crate::hasher::EntryHash;
use crate::signature::SignatureFormat;
use crate::status::{NoopTracer, Status, StatusTracer, Tracer};
use crate::types::Digest;

/// Anything that identifies a pod by namespace and name.
pub trait PodIdentifier {
    fn namespace(&self) -> &str;
    fn name(&self) -> &str;
}

impl<T: PodIdentifier + ?Sized> PodIdentifier for &T {
    fn namespace(&self) -> &str {
        (**self).namespace()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<N: AsRef<str>, M: AsRef<str>> PodIdentifier for (N, M) {
    fn namespace(&self) -> &str {
        self.0.as_ref()
    }

    fn name(&self) -> &str {
        self.1.as_ref()
    }
}

/// An order-independent fingerprint over a set of pods.
///
/// `add` takes `&mut self` and every query takes `&self`, so readers can
/// share a settled fingerprint but never observe one mid-update.
#[derive(Debug, Clone)]
pub struct Fingerprint<T: Tracer = NoopTracer> {
    digest: Digest,
    len: usize,
    format: SignatureFormat,
    tracer: T,
}

impl Fingerprint<NoopTracer> {
    /// Create an empty fingerprint expecting about `capacity_hint` entries.
    pub fn new(capacity_hint: usize) -> Self {
        Self::with_config(FingerprintConfig::new().capacity_hint(capacity_hint))
    }

    /// Create an empty fingerprint from a configuration.
    pub fn with_config(config: FingerprintConfig) -> Self {
        Self::with_tracer(config, NoopTracer)
    }
}

impl Default for Fingerprint<NoopTracer> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Tracer> Fingerprint<T> {
    /// Create an empty fingerprint that reports entries to `tracer`.
    pub fn with_tracer(config: FingerprintConfig, mut tracer: T) -> Self {
        tracer.start(config.capacity_hint);
        Self {
            digest: Digest::ZERO,
            len: 0,
            format: config.format,
            tracer,
        }
    }

    /// Add one entry.
    ///
    /// Every other way of adding entries goes through here.
    pub fn add(&mut self, namespace: impl AsRef<[u8]>, name: impl AsRef<[u8]>) {
        let (namespace, name) = (namespace.as_ref(), name.as_ref());
        let entry = EntryHash::compute(namespace, name);
        self.digest = self.digest.fold(entry);
        self.len += 1;
        self.tracer.add(namespace, name);
        trace!(?entry, digest = %self.digest, "added entry");
    }

    /// Add one entry from a pod identifier.
    pub fn add_pod<P: PodIdentifier + ?Sized>(&mut self, pod: &P) {
        self.add(pod.namespace(), pod.name());
    }

    /// Fold another fingerprint's entries into this one.
    ///
    /// Equivalent to having added all of `other`'s entries here, tracer
    /// included.
    pub fn merge(&mut self, other: &Fingerprint<T>) {
        self.digest = self.digest.combine(other.digest);
        self.len += other.len;
        self.tracer.merge(&other.tracer);
    }

    /// The current running digest.
    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// The current digest as big-endian bytes.
    pub fn sum(&self) -> [u8; 8] {
        self.digest.to_bytes()
    }

    /// The current digest rendered as a text signature.
    pub fn signature(&self) -> String {
        self.format.render(self.digest)
    }

    /// Check a signature produced elsewhere against the entries added here.
    pub fn check(&self, candidate: &str) -> Result<()> {
        let outcome = self.format.verify(self.digest, candidate);
        match &outcome {
            Ok(()) => debug!(signature = candidate, entries = self.len, "fingerprint matches"),
            Err(err) => debug!(
                signature = candidate,
                computed = %self.signature(),
                entries = self.len,
                error = %err,
                "fingerprint check failed"
            ),
        }
        outcome
    }

    /// Number of entries added, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The signature format in use.
    pub fn format(&self) -> SignatureFormat {
        self.format
    }

    /// The attached tracer.
    pub fn tracer(&self) -> &T {
        &self.tracer
    }
}

impl Fingerprint<StatusTracer> {
    /// Create a traced fingerprint for the given node.
    pub fn traced(node_name: impl Into<String>, capacity_hint: usize) -> Self {
        Self::with_tracer(
            FingerprintConfig::new().capacity_hint(capacity_hint),
            StatusTracer::new(node_name),
        )
    }

    /// Build a status report, optionally against an expected signature.
    pub fn status(&self, expected: Option<&str>) -> Status {
        Status {
            node_name: self.tracer.node_name().to_string(),
            fingerprint_expected: expected.unwrap_or_default().to_string(),
            fingerprint_computed: self.signature(),
            pods: self.tracer.pods().to_vec(),
        }
    }
}

impl<T: Tracer, P: PodIdentifier> Extend<P> for Fingerprint<T> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for pod in iter {
            self.add_pod(&pod);
        }
    }
}

impl<P: PodIdentifier> FromIterator<P> for Fingerprint<NoopTracer> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut fp = Fingerprint::new(iter.size_hint().0);
        fp.extend(iter);
        fp
    }
}
