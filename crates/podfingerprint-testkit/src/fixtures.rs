//! Test fixtures and helpers.
//!
//! Pod lists loaded from JSON files, plus randomly generated stress data
//! sized after a large cluster.

use std::path::Path;

use anyhow::Context;
use podfingerprint::PodIdentifier;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound on nodes in the stress scenarios.
pub const CLUSTER_MAX_NODES: usize = 5000;
/// Upper bound on pods per node in the stress scenarios.
pub const CLUSTER_MAX_PODS_PER_NODE: usize = 300;

/// Namespace length used by [`stress_pods`] (close to the Kubernetes limit).
pub const STRESS_NAMESPACE_LEN: usize = 52;
/// Name length used by [`stress_pods`].
pub const STRESS_NAME_LEN: usize = 72;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A pod identity as stored in fixture files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PodIdent {
    pub namespace: String,
    pub name: String,
}

impl PodIdent {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl PodIdentifier for PodIdent {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Load a JSON array of `{"Namespace": .., "Name": ..}` objects.
pub fn load_pods(path: impl AsRef<Path>) -> anyhow::Result<Vec<PodIdent>> {
    let path = path.as_ref();
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pods = serde_json::from_slice(&data)
        .with_context(|| format!("parsing pods from {}", path.display()))?;
    Ok(pods)
}

/// Load the bundled `testdata/pods.json` fixture.
pub fn fixture_pods() -> anyhow::Result<Vec<PodIdent>> {
    load_pods(Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/pods.json"))
}

/// A random ASCII-letter string of length `n`.
pub fn random_string<R: Rng>(rng: &mut R, n: usize) -> String {
    (0..n)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

/// Generate `count` random pods with stress-sized namespace and name.
pub fn stress_pods<R: Rng>(rng: &mut R, count: usize) -> Vec<PodIdent> {
    (0..count)
        .map(|_| {
            PodIdent::new(
                random_string(rng, STRESS_NAMESPACE_LEN),
                random_string(rng, STRESS_NAME_LEN),
            )
        })
        .collect()
}

/// Split `pods` into per-node chunks of at most `pods_per_node`.
pub fn nodes_of(pods: &[PodIdent], pods_per_node: usize) -> Vec<&[PodIdent]> {
    pods.chunks(pods_per_node.max(1)).collect()
}
