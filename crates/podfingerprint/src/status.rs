//! Tracing hooks and the diagnostic status record.
//!
//! A [`Tracer`] observes every entry that goes into a fingerprint. The
//! default [`NoopTracer`] does nothing and compiles away; [`StatusTracer`]
//! records the entries so a [`Status`] report can be produced when two
//! nodes disagree on their fingerprints.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fingerprint::PodIdentifier;

/// Hooks invoked by the fingerprint accumulator.
pub trait Tracer {
    /// Called once when the accumulator is created.
    fn start(&mut self, _capacity_hint: usize) {}

    /// Called for every entry added, after hashing.
    fn add(&mut self, _namespace: &[u8], _name: &[u8]) {}

    /// Called when another fingerprint's entries are merged in.
    fn merge(&mut self, _other: &Self) {}
}

/// A tracer that records nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopTracer;

impl Tracer for NoopTracer {}

/// A namespace/name pair, as recorded by [`StatusTracer`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

impl NamespacedName {
    /// Create a new namespaced name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl PodIdentifier for NamespacedName {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A tracer that records every entry for later inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTracer {
    node_name: String,
    pods: Vec<NamespacedName>,
}

impl StatusTracer {
    /// Create a tracer for the given node.
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            pods: Vec::new(),
        }
    }

    /// The node this tracer reports on.
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// Entries recorded so far, in insertion order.
    pub fn pods(&self) -> &[NamespacedName] {
        &self.pods
    }
}

impl Tracer for StatusTracer {
    fn start(&mut self, capacity_hint: usize) {
        self.pods.reserve(capacity_hint);
    }

    fn add(&mut self, namespace: &[u8], name: &[u8]) {
        self.pods.push(NamespacedName::new(
            String::from_utf8_lossy(namespace),
            String::from_utf8_lossy(name),
        ));
    }

    fn merge(&mut self, other: &Self) {
        self.pods.extend_from_slice(&other.pods);
    }
}

/// Diagnostic record of a traced fingerprint computation.
///
/// Serialized with camelCase keys; empty fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub node_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fingerprint_expected: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fingerprint_computed: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pods: Vec<NamespacedName>,
}

impl Status {
    /// Whether the computed fingerprint equals the expected one.
    ///
    /// A status without an expected fingerprint never matches.
    pub fn matches(&self) -> bool {
        !self.fingerprint_expected.is_empty()
            && self.fingerprint_expected == self.fingerprint_computed
    }

    /// Compact one-line rendering for logs.
    pub fn repr(&self) -> String {
        let pods: Vec<String> = self.pods.iter().map(|p| p.to_string()).collect();
        format!(
            "node={:?} expected={:?} computed={:?} pods={} [{}]",
            self.node_name,
            self.fingerprint_expected,
            self.fingerprint_computed,
            self.pods.len(),
            pods.join(" ")
        )
    }
}
