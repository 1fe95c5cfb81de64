//! Per-transaction derived verification and signing keys (`spec.md` §4.E).
//!
//! `verify_key_derive` is the public-side, randomized half: any party
//! holding a wallet's public key can run it. `verify_key_check` and
//! `sign_key_derive` are owner-side: they additionally need the wallet
//! secret key and are only meaningful after a successful check.

use crate::hash::h3;
use crate::keys::{Dsk, Dvk, WalletPublicKey, WalletSecretKey};
use crate::pairing::{mul_g1, sample_nonzero_scalar, PublicParams};

/// `VerifyKeyDerive(idt, wpk) -> DVK`.
///
/// `idt` is accepted for interface parity with `spec.md` §6 but, as in the
/// reference implementation, does not enter the computation: the binding to
/// an identity happens earlier, at delegation time, through `A_ID`/`B_ID`.
pub fn verify_key_derive(pp: &PublicParams, _idt: &[String], wpk: &WalletPublicKey) -> Dvk {
    log::trace!(target: "hdwsa::derive", "VerifyKeyDerive");

    let mut rng = rand::thread_rng();
    let r = sample_nonzero_scalar(&mut rng);
    let q_r = mul_g1(pp.p(), r);
    let q_id = mul_g1(wpk.b_id(), r); // r*B_ID

    let h3_val = h3(&wpk.b_id(), &q_r, &q_id);
    let q_vk = pp.pair(h3_val, -wpk.a_id_twin);

    Dvk { q_r, q_vk }
}

/// `VerifyKeyCheck(dvk, id, wpk, wsk) -> bool`.
///
/// The wallet owner reconstructs the sender's `r*B_ID` as `beta*Q_r`
/// (`beta*Q_r = beta*rP = r*(beta*P) = r*B_ID`) and confirms the DVK was
/// produced honestly against this wallet. `idt` is unused for the same
/// reason as in `verify_key_derive`.
pub fn verify_key_check(
    pp: &PublicParams,
    dvk: &Dvk,
    _idt: &[String],
    wpk: &WalletPublicKey,
    wsk: &WalletSecretKey,
) -> bool {
    log::trace!(target: "hdwsa::derive", "VerifyKeyCheck");

    let reconstructed = mul_g1(dvk.q_r, wsk.beta);
    let h3_val = h3(&wpk.b_id(), &dvk.q_r, &reconstructed);
    let pair = pp.pair(h3_val, -wpk.a_id_twin);
    dvk.q_vk == pair
}

/// `SignKeyDerive(dvk, idt, wpk, wsk) -> DSK`.
///
/// Only meaningful after a successful [`verify_key_check`]; this crate does
/// not enforce that ordering (`spec.md` §4.F's state machine is advisory,
/// not a runtime guard — see `DESIGN.md`).
pub fn sign_key_derive(
    _pp: &PublicParams,
    dvk: &Dvk,
    _idt: &[String],
    wpk: &WalletPublicKey,
    wsk: &WalletSecretKey,
) -> Dsk {
    log::trace!(target: "hdwsa::derive", "SignKeyDerive");

    let q1 = mul_g1(dvk.q_r, wsk.beta); // beta*Q_r == the sender's r*B_ID
    let h3_val = h3(&wpk.b_id(), &dvk.q_r, &q1);
    let d = mul_g1(h3_val, wsk.alpha);
    Dsk { d }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::root_wallet_keygen;

    #[test]
    fn honest_dvk_checks_out() {
        let pp = PublicParams::setup(160, 512);
        let (secret, public) = root_wallet_keygen(&pp, &["id0".to_string()]);
        let path = vec!["id0".to_string()];

        let dvk = verify_key_derive(&pp, &path, &public);
        assert!(verify_key_check(&pp, &dvk, &path, &public, &secret));
    }

    #[test]
    fn dvk_issued_against_one_wallet_fails_check_under_another() {
        let pp = PublicParams::setup(160, 512);
        let (secret_a, public_a) = root_wallet_keygen(&pp, &["id0".to_string()]);
        let (secret_b, public_b) = root_wallet_keygen(&pp, &["id1".to_string()]);
        let path = vec!["id0".to_string()];

        let dvk_for_b = verify_key_derive(&pp, &path, &public_b);
        assert!(!verify_key_check(&pp, &dvk_for_b, &path, &public_a, &secret_a));

        let dvk_for_a = verify_key_derive(&pp, &path, &public_a);
        assert!(!verify_key_check(&pp, &dvk_for_a, &path, &public_b, &secret_b));
    }

    #[test]
    fn successive_derivations_are_unlinkable() {
        let pp = PublicParams::setup(160, 512);
        let (_secret, public) = root_wallet_keygen(&pp, &["id0".to_string()]);
        let path = vec!["id0".to_string()];

        let first = verify_key_derive(&pp, &path, &public);
        let second = verify_key_derive(&pp, &path, &public);
        assert_ne!(first.q_r(), second.q_r());
    }
}
