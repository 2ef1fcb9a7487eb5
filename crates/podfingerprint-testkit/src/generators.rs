//! Proptest generators for property-based testing.

use proptest::prelude::*;

use podfingerprint::{Digest, Fingerprint, SignatureFormat};

use crate::fixtures::PodIdent;

/// Generate a Kubernetes-like namespace.
pub fn namespace() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,30}".prop_map(String::from)
}

/// Generate a Kubernetes-like pod name.
pub fn pod_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,40}".prop_map(String::from)
}

/// Generate a single pod.
pub fn pod() -> impl Strategy<Value = PodIdent> {
    (namespace(), pod_name()).prop_map(|(ns, name)| PodIdent::new(ns, name))
}

/// Generate a list of up to `max_len` pods (duplicates allowed).
pub fn pods(max_len: usize) -> impl Strategy<Value = Vec<PodIdent>> {
    prop::collection::vec(pod(), 0..=max_len)
}

/// Generate a list of pods together with a permutation of it.
pub fn pods_and_permutation(max_len: usize) -> impl Strategy<Value = (Vec<PodIdent>, Vec<PodIdent>)> {
    pods(max_len).prop_flat_map(|pods| {
        let shuffled = Just(pods.clone()).prop_shuffle();
        (Just(pods), shuffled)
    })
}

/// Generate a random digest.
pub fn digest() -> impl Strategy<Value = Digest> {
    any::<u64>().prop_map(Digest::from_u64)
}

/// Generate a signature in the reference format.
pub fn signature() -> impl Strategy<Value = String> {
    digest().prop_map(|d| SignatureFormat::V001.render(d))
}

/// Parameters for building a fingerprint.
#[derive(Debug, Clone)]
pub struct FingerprintParams {
    pub capacity_hint: usize,
    pub pods: Vec<PodIdent>,
}

impl Arbitrary for FingerprintParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0usize..=512, pods(64))
            .prop_map(|(capacity_hint, pods)| FingerprintParams {
                capacity_hint,
                pods,
            })
            .boxed()
    }
}

/// Build a fingerprint from parameters.
pub fn fingerprint_from_params(params: &FingerprintParams) -> Fingerprint {
    let mut fp = Fingerprint::new(params.capacity_hint);
    fp.extend(&params.pods);
    fp
}
