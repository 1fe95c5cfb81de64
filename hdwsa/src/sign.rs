//! Signing and verification (`spec.md` §4.F).

use ark_ec::{AffineRepr, CurveGroup};

use crate::hash::h4;
use crate::keys::{Dsk, Dvk, Signature};
use crate::pairing::{mul_g1, sample_nonzero_scalar, PublicParams};

/// `Sign(message, dvk, dsk) -> Signature`.
pub fn sign(pp: &PublicParams, message: &[u8], dvk: &Dvk, dsk: &Dsk) -> Signature {
    log::trace!(target: "hdwsa::sign", "Sign(message_len={})", message.len());

    let mut rng = rand::thread_rng();
    let x = sample_nonzero_scalar(&mut rng);

    // x*P (G1) and e(P,P)^x (GT) depend only on x and are independent of
    // each other; run them in parallel, matching the reference's goroutine
    // split (spec.md §5). Both paths produce the identical GT/G1 values.
    let (x_p, x_term) = rayon::join(|| mul_g1(pp.p(), x), || pp.egg() * x);

    let h = h4(&dvk.q_r, &dvk.q_vk, message, &x_term);
    let q_sigma = (mul_g1(dsk.d, h).into_group() + x_p.into_group()).into_affine();

    Signature { h, q_sigma }
}

/// `Verify(message, sigma, dvk) -> bool`.
///
/// `spec.md` §9 Open Question 2 flags the reference's inverted disjunction
/// (`sigma != nil || dvk != nil`), which still dereferences a nil `dvk`.
/// This takes `Option<&_>` for both and rejects whenever *either* is
/// absent, before touching either value.
pub fn verify(pp: &PublicParams, message: &[u8], sigma: Option<&Signature>, dvk: Option<&Dvk>) -> bool {
    log::trace!(target: "hdwsa::sign", "Verify(message_len={})", message.len());

    let (sigma, dvk) = match (sigma, dvk) {
        (Some(sigma), Some(dvk)) => (sigma, dvk),
        _ => return false,
    };

    let lhs = pp.pair(sigma.q_sigma, pp.p2());
    let rhs = lhs + dvk.q_vk * sigma.h;

    sigma.h == h4(&dvk.q_r, &dvk.q_vk, message, &rhs)
}
