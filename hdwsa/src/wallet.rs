//! Root key generation and hierarchical delegation along an identity path
//! (`spec.md` §4.D).

use crate::hash::{h0, h1, h2};
use crate::keys::{WalletPublicKey, WalletSecretKey};
use crate::pairing::{mul_g1, mul_g2, sample_nonzero_scalar, PublicParams};

/// `RootWalletKeyGen(ids) -> (WSK, WPK)`.
///
/// Precondition: `ids.len() == 1` — the identity vector is otherwise unused
/// inside the computation, kept only for API symmetry with delegation
/// (`spec.md` §4.D, §9.3). Violating it is a programmer error, not data the
/// caller should branch on, so it panics rather than returning `Result`
/// (`spec.md` §7).
pub fn root_wallet_keygen(pp: &PublicParams, ids: &[String]) -> (WalletSecretKey, WalletPublicKey) {
    assert_eq!(
        ids.len(),
        1,
        "RootWalletKeyGen requires exactly one identity label, got {}",
        ids.len()
    );
    log::trace!(target: "hdwsa::wallet", "RootWalletKeyGen(id={:?})", ids[0]);

    let mut rng = rand::thread_rng();
    let alpha = sample_nonzero_scalar(&mut rng);
    let beta = sample_nonzero_scalar(&mut rng);

    // A_ID = alpha*P (and its G2 twin) and B_ID = beta*P are independent
    // exponentiations; run them in parallel, matching the reference's
    // goroutine fan-out for the two PowZn calls (spec.md §5). Sequential and
    // parallel paths compute byte-identical outputs.
    let ((a_id, a_id_twin), b_id) = rayon::join(
        || (mul_g1(pp.p(), alpha), mul_g2(pp.p2(), alpha)),
        || mul_g1(pp.p(), beta),
    );
    let public = WalletPublicKey::new(a_id, a_id_twin, b_id);
    let secret = WalletSecretKey::new(alpha, beta, public);
    (secret, public)
}

/// `WalletKeyDelegate(idt, parentWPK, parentWSK) -> (childWPK, childWSK)`.
///
/// Deterministic given the parent secret and the full child identity path
/// `idt` (root to child, not just the last component) — this is the "HD"
/// property: descendant keys are recoverable from the root secret alone
/// (`spec.md` §4.D). `parentWPK` is part of the normative signature
/// (`spec.md` §6) but, like the reference implementation, the computation
/// only ever needs `parent_secret` (whose own public half is consistent
/// with it by construction).
pub fn wallet_key_delegate(
    pp: &PublicParams,
    idt: &[String],
    _parent_wpk: &WalletPublicKey,
    parent_secret: &WalletSecretKey,
) -> (WalletPublicKey, WalletSecretKey) {
    log::trace!(target: "hdwsa::wallet", "WalletKeyDelegate(depth={})", idt.len());

    let q_id = h0(idt);
    let alpha_q_id = mul_g1(q_id, parent_secret.alpha);
    let beta_q_id = mul_g1(q_id, parent_secret.beta);

    let alpha_prime = h1(&q_id, &alpha_q_id);
    let beta_prime = h2(&q_id, &beta_q_id);

    // Independent exponentiations, as in RootWalletKeyGen above.
    let ((a_id, a_id_twin), b_id) = rayon::join(
        || (mul_g1(pp.p(), alpha_prime), mul_g2(pp.p2(), alpha_prime)),
        || mul_g1(pp.p(), beta_prime),
    );

    let public = WalletPublicKey::new(a_id, a_id_twin, b_id);
    let secret = WalletSecretKey::new(alpha_prime, beta_prime, public);
    (public, secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::Zero;

    #[test]
    fn root_keygen_rejects_wrong_arity() {
        let pp = PublicParams::setup(160, 512);
        let result = std::panic::catch_unwind(|| {
            root_wallet_keygen(&pp, &["id0".to_string(), "id1".to_string()])
        });
        assert!(result.is_err());
    }

    #[test]
    fn root_keygen_produces_nonzero_keys() {
        let pp = PublicParams::setup(160, 512);
        let (_secret, public) = root_wallet_keygen(&pp, &["id0".to_string()]);
        assert!(!public.a_id().is_zero());
        assert!(!public.b_id().is_zero());
    }

    #[test]
    fn delegation_is_deterministic() {
        let pp = PublicParams::setup(160, 512);
        let (root_secret, root_public) = root_wallet_keygen(&pp, &["id0".to_string()]);
        let path = vec!["id0".to_string(), "id1".to_string()];

        let (child_a, _) = wallet_key_delegate(&pp, &path, &root_public, &root_secret);
        let (child_b, _) = wallet_key_delegate(&pp, &path, &root_public, &root_secret);

        assert_eq!(child_a.a_id(), child_b.a_id());
        assert_eq!(child_a.b_id(), child_b.b_id());
    }

    #[test]
    fn delegation_depends_on_full_path_not_just_suffix() {
        let pp = PublicParams::setup(160, 512);
        let (root_secret, root_public) = root_wallet_keygen(&pp, &["id0".to_string()]);

        let path_ab_c = vec!["ab".to_string(), "c".to_string()];
        let path_a_bc = vec!["a".to_string(), "bc".to_string()];

        let (wpk_ab_c, _) = wallet_key_delegate(&pp, &path_ab_c, &root_public, &root_secret);
        let (wpk_a_bc, _) = wallet_key_delegate(&pp, &path_a_bc, &root_public, &root_secret);

        assert_ne!(wpk_ab_c.a_id(), wpk_a_bc.a_id());
    }
}
