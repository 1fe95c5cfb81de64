//! End-to-end scenarios from `spec.md` §8, run against the public API only.

use hdwsa::{
    root_wallet_keygen, sign, sign_key_derive, verify, verify_key_check, verify_key_derive,
    wallet_key_delegate, PublicParams,
};

fn path(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

#[test]
fn scenario_root_wallet_round_trip_on_empty_and_nonempty_messages() {
    let pp = PublicParams::setup(160, 512);
    let root_path = path(&["id0"]);

    let (wsk0, wpk0) = root_wallet_keygen(&pp, &root_path);

    for message in [b"".as_slice(), b"hello".as_slice()] {
        let dvk = verify_key_derive(&pp, &root_path, &wpk0);
        assert!(verify_key_check(&pp, &dvk, &root_path, &wpk0, &wsk0));

        let dsk = sign_key_derive(&pp, &dvk, &root_path, &wpk0, &wsk0);
        let sigma = sign(&pp, message, &dvk, &dsk);
        assert!(verify(&pp, message, Some(&sigma), Some(&dvk)));
    }
}

#[test]
fn scenario_level_one_delegation_round_trips() {
    let pp = PublicParams::setup(160, 512);
    let (wsk0, wpk0) = root_wallet_keygen(&pp, &path(&["id0"]));

    let child_path = path(&["id0", "id1"]);
    let (wpk1, wsk1) = wallet_key_delegate(&pp, &child_path, &wpk0, &wsk0);

    let dvk = verify_key_derive(&pp, &child_path, &wpk1);
    assert!(verify_key_check(&pp, &dvk, &child_path, &wpk1, &wsk1));

    let dsk = sign_key_derive(&pp, &dvk, &child_path, &wpk1, &wsk1);
    let sigma = sign(&pp, b"hello", &dvk, &dsk);
    assert!(verify(&pp, b"hello", Some(&sigma), Some(&dvk)));
}

#[test]
fn scenario_cross_wallet_dvk_is_rejected() {
    let pp = PublicParams::setup(160, 512);
    let (wsk0, wpk0) = root_wallet_keygen(&pp, &path(&["id0"]));
    let child_path = path(&["id0", "id1"]);
    let (wpk1, wsk1) = wallet_key_delegate(&pp, &child_path, &wpk0, &wsk0);

    // A DVK honestly issued against the child wallet must not check out
    // against the root wallet's keys.
    let dvk = verify_key_derive(&pp, &child_path, &wpk1);
    assert!(!verify_key_check(&pp, &dvk, &child_path, &wpk1, &wsk0));
    let _ = &wsk1; // keep child secret alive for symmetry with spec.md's scenario 4
}

#[test]
fn scenario_tampered_signature_is_rejected() {
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_serialize::CanonicalSerialize;

    let pp = PublicParams::setup(160, 512);
    let root_path = path(&["id0"]);
    let (wsk0, wpk0) = root_wallet_keygen(&pp, &root_path);
    let dvk = verify_key_derive(&pp, &root_path, &wpk0);
    let dsk = sign_key_derive(&pp, &dvk, &root_path, &wpk0, &wsk0);
    let sigma = sign(&pp, b"hello", &dvk, &dsk);

    // Flip Q_sigma by adding the generator to it, then round-trip through
    // the canonical bytes the way a wire-level attacker would tamper.
    let bumped = (sigma.q_sigma().into_group() + pp.p().into_group()).into_affine();
    let mut tampered_bytes = Vec::new();
    sigma.h().serialize_compressed(&mut tampered_bytes).unwrap();
    bumped.serialize_compressed(&mut tampered_bytes).unwrap();
    let tampered = hdwsa::Signature::from_bytes(&tampered_bytes).unwrap();

    assert!(!verify(&pp, b"hello", Some(&tampered), Some(&dvk)));
}

#[test]
fn scenario_delegation_is_deterministic() {
    let pp = PublicParams::setup(160, 512);
    let (wsk0, wpk0) = root_wallet_keygen(&pp, &path(&["id0"]));
    let child_path = path(&["id0", "id1"]);

    let (wpk_a, _) = wallet_key_delegate(&pp, &child_path, &wpk0, &wsk0);
    let (wpk_b, _) = wallet_key_delegate(&pp, &child_path, &wpk0, &wsk0);

    assert_eq!(wpk_a.to_bytes(), wpk_b.to_bytes());
}

#[test]
fn wallet_public_key_and_signature_round_trip_through_canonical_bytes() {
    let pp = PublicParams::setup(160, 512);
    let root_path = path(&["id0"]);
    let (wsk0, wpk0) = root_wallet_keygen(&pp, &root_path);
    let dvk = verify_key_derive(&pp, &root_path, &wpk0);
    let dsk = sign_key_derive(&pp, &dvk, &root_path, &wpk0, &wsk0);
    let sigma = sign(&pp, b"hello", &dvk, &dsk);

    let wpk_roundtrip = hdwsa::WalletPublicKey::from_bytes(&wpk0.to_bytes()).unwrap();
    assert_eq!(wpk_roundtrip.a_id(), wpk0.a_id());
    assert_eq!(wpk_roundtrip.b_id(), wpk0.b_id());

    let sigma_roundtrip = hdwsa::Signature::from_bytes(&sigma.to_bytes()).unwrap();
    assert_eq!(sigma_roundtrip, sigma);
}
