//! End-to-end fingerprint behaviour over the bundled pod fixture.

use podfingerprint::{
    is_version_compatible, Digest, Fingerprint, FingerprintError, NamespacedName, Status, VERSION,
};
use podfingerprint_testkit::fixtures::{nodes_of, CLUSTER_MAX_PODS_PER_NODE};
use podfingerprint_testkit::generators::pods_and_permutation;
use podfingerprint_testkit::{fixture_pods, stress_pods, verify_check_vectors, PodIdent};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn shuffled(pods: &[PodIdent], seed: u64) -> Vec<PodIdent> {
    let mut local = pods.to_vec();
    local.shuffle(&mut StdRng::seed_from_u64(seed));
    local
}

#[test]
fn test_version_compatible() {
    let cases: &[(&str, Result<bool, ()>)] = &[
        ("", Err(())),
        ("a", Err(())),
        ("xxxx", Ok(false)),
        ("bbbbbbbb", Err(())),
        (VERSION, Ok(true)),
    ];

    for (tag, expected) in cases {
        let got = is_version_compatible(tag);
        match expected {
            Ok(compat) => assert_eq!(got, Ok(*compat), "tag {:?}", tag),
            Err(()) => assert!(
                matches!(got, Err(FingerprintError::Malformed(_))),
                "tag {:?} got {:?}",
                tag,
                got
            ),
        }
    }
}

#[test]
fn test_sum_pods() {
    let pods = fixture_pods().expect("cannot load the test data");

    let mut fp = Fingerprint::new(pods.len());
    for pod in &pods {
        fp.add_pod(pod);
    }
    assert_ne!(fp.digest(), Digest::ZERO);
    assert_eq!(fp.len(), pods.len());
}

#[test]
fn test_sum_stable_across_entry_points() {
    let pods = fixture_pods().expect("cannot load the test data");
    let local = shuffled(&pods, 0x5eed);

    let mut fp: Fingerprint = Fingerprint::default();
    for pod in &pods {
        fp.add_pod(pod);
    }
    let mut fp2: Fingerprint = Fingerprint::default();
    for pod in &local {
        fp2.add(&pod.namespace, &pod.name);
    }

    assert_eq!(fp.sum(), fp2.sum(), "signature not stable");
}

#[test]
fn test_sign_stable() {
    let pods = fixture_pods().expect("cannot load the test data");

    for seed in 0..8 {
        let local = shuffled(&pods, seed);
        let fp: Fingerprint = pods.iter().collect();
        let fp2: Fingerprint = local.iter().collect();
        assert_eq!(fp.signature(), fp2.signature(), "seed {}", seed);
    }
}

#[test]
fn test_check_vectors_against_fixture() {
    let pods = fixture_pods().expect("cannot load the test data");
    for (description, passed, actual) in verify_check_vectors(&pods) {
        assert!(passed, "vector '{}' got {:?}", description, actual);
    }
}

#[test]
fn test_two_pods_reverse_order() {
    let forward = [("ns-a", "pod-1"), ("ns-b", "pod-2")];
    let a: Fingerprint = forward.iter().collect();
    let b: Fingerprint = forward.iter().rev().collect();

    assert_eq!(a.signature(), b.signature());
    assert!(a.check(&b.signature()).is_ok());
    assert!(b.check(&a.signature()).is_ok());
}

#[test]
fn test_removed_pod_is_detected() {
    let pods = fixture_pods().expect("cannot load the test data");
    let published: Fingerprint = pods.iter().collect();

    let current: Fingerprint = pods.iter().skip(1).collect();
    let err = current.check(&published.signature()).unwrap_err();
    assert!(err.is_mismatch());
}

#[test]
fn test_per_node_fingerprints_merge_to_cluster_fingerprint() {
    let mut rng = StdRng::seed_from_u64(42);
    let pods = stress_pods(&mut rng, 3 * CLUSTER_MAX_PODS_PER_NODE);
    let cluster: Fingerprint = pods.iter().collect();

    let mut merged: Fingerprint = Fingerprint::default();
    let nodes = nodes_of(&pods, CLUSTER_MAX_PODS_PER_NODE);
    assert_eq!(nodes.len(), 3);
    for node in nodes {
        let fp: Fingerprint = node.iter().collect();
        merged.merge(&fp);
    }

    assert_eq!(merged.signature(), cluster.signature());
}

#[test]
fn test_per_thread_fingerprints_merge() {
    let mut rng = StdRng::seed_from_u64(7);
    let pods = stress_pods(&mut rng, 1000);
    let expected: Fingerprint = pods.iter().collect();

    let partials: Vec<Fingerprint> = std::thread::scope(|s| {
        let handles: Vec<_> = pods
            .chunks(250)
            .map(|chunk| s.spawn(move || chunk.iter().collect::<Fingerprint>()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });

    let mut merged: Fingerprint = Fingerprint::default();
    for partial in &partials {
        merged.merge(partial);
    }
    assert_eq!(merged.digest(), expected.digest());
}

#[test]
fn test_traced_status_roundtrips_as_json() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let pods = fixture_pods().expect("cannot load the test data");
    let mut fp = Fingerprint::traced("worker-0", pods.len());
    fp.extend(&pods);

    let stale = "pfp0v0010000000000000000";
    assert!(fp.check(stale).unwrap_err().is_mismatch());

    let status = fp.status(Some(stale));
    assert!(!status.matches());
    assert_eq!(status.pods.len(), pods.len());
    assert_eq!(
        status.pods[0],
        NamespacedName::new(pods[0].namespace.clone(), pods[0].name.clone())
    );

    let json = serde_json::to_string(&status).unwrap();
    let recovered: Status = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, status);

    let replay: Fingerprint = recovered.pods.iter().collect();
    assert_eq!(replay.signature(), recovered.fingerprint_computed);
}

proptest! {
    #[test]
    fn test_permutations_share_signature((pods, permuted) in pods_and_permutation(48)) {
        let a: Fingerprint = pods.iter().collect();
        let b: Fingerprint = permuted.iter().collect();
        prop_assert_eq!(a.signature(), b.signature());
        prop_assert!(b.check(&a.signature()).is_ok());
    }
}
