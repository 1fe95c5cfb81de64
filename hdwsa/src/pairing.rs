//! Curve/field type aliases, `PublicParams`/`Setup`, and the canonical byte
//! encoding shared by every hash oracle and persisted value.
//!
//! `spec.md` §1 treats the pairing itself as an opaque external collaborator
//! providing G1, GT, Zr, a bilinear map `e: G1×G1→GT`, uniform sampling,
//! exponentiation, group arithmetic, and canonical encoding — built on a
//! genuine symmetric (Type-A) construction in the reference implementation.
//! No such library exists on crates.io; this module substitutes the
//! asymmetric (Type-3) BLS12-381 pairing from `ark-bls12-381` and carries a
//! second, internal group-2 witness alongside every value that the scheme
//! ever uses as the right-hand side of a pairing. See `DESIGN.md`, "Pairing
//! backend", for why this preserves every identity the scheme relies on.

use ark_bls12_381::{Bls12_381, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand::rngs::ThreadRng;

use crate::error::{HdwsaError, HdwsaResult};

/// An element of the prime-order scalar field Zr.
pub type Scalar = Fr;

/// A point on the pairing's source group, in the sense `spec.md` calls G1.
pub type G1Point = G1Affine;

/// An element of the pairing's target group GT (a pairing output).
pub type GtElement = PairingOutput<Bls12_381>;

/// The internal group-2 twin a G1 value needs whenever it appears as the
/// right-hand operand of a pairing (only `A_ID` and the generator `P` ever
/// do — see `DESIGN.md`). Never exposed outside this crate.
pub(crate) type G2Point = G2Affine;

/// Immutable curve parameters and the shared generator, created once by
/// [`PublicParams::setup`] and held for the life of the process.
///
/// Invariant: `p() != G1Point::zero()`.
#[derive(Clone, Debug)]
pub struct PublicParams {
    rbits: u32,
    qbits: u32,
    p1: G1Point,
    p2: G2Point,
    p_bytes: Vec<u8>,
    egg: GtElement,
}

impl PublicParams {
    /// `Setup(rbits, qbits) -> PublicParams`.
    ///
    /// `rbits`/`qbits` name the Type-A scalar-field and base-field bit
    /// widths from `spec.md` §6 (reference vectors `rbits=160, qbits=512`);
    /// the concrete backend here is the single fixed BLS12-381 curve, so
    /// they are retained as opaque metadata rather than as construction
    /// parameters (see `DESIGN.md`, Open Question "rbits/qbits").
    pub fn setup(rbits: u32, qbits: u32) -> Self {
        let mut rng = rand::thread_rng();

        // Rejection loop: Type-A generation samples from the full group
        // including the identity; resample until non-identity (spec.md §4.A).
        let p1 = loop {
            let candidate = G1Projective::rand(&mut rng);
            if !candidate.is_zero() {
                break candidate.into_affine();
            }
        };
        let p2 = loop {
            let candidate = G2Projective::rand(&mut rng);
            if !candidate.is_zero() {
                break candidate.into_affine();
            }
        };

        let egg = Bls12_381::pairing(p1, p2);
        let mut p_bytes = Vec::new();
        p1.serialize_compressed(&mut p_bytes)
            .expect("serializing the fixed generator cannot fail");

        log::trace!(target: "hdwsa::pairing", "Setup(rbits={rbits}, qbits={qbits})");

        Self {
            rbits,
            qbits,
            p1,
            p2,
            p_bytes,
            egg,
        }
    }

    pub fn rbits(&self) -> u32 {
        self.rbits
    }

    pub fn qbits(&self) -> u32 {
        self.qbits
    }

    /// The shared G1 generator `P`.
    pub fn p(&self) -> G1Point {
        self.p1
    }

    /// Canonical encoding of `P` (`PBytes` in `spec.md` §3), cached at setup.
    pub fn p_bytes(&self) -> &[u8] {
        &self.p_bytes
    }

    pub(crate) fn p2(&self) -> G2Point {
        self.p2
    }

    /// `e(P, P)`, precomputed once so `Sign`/`Verify` only ever need a GT
    /// exponentiation, matching `spec.md` §4.F's "either pairing-based
    /// formulation or direct GT-exponentiation... produces the identical
    /// GT value".
    pub(crate) fn egg(&self) -> GtElement {
        self.egg
    }

    pub(crate) fn pair(&self, g1: G1Point, g2: G2Point) -> GtElement {
        Bls12_381::pairing(g1, g2)
    }
}

/// Samples a uniformly random nonzero scalar, rejecting zero and resampling
/// (the rejection loops of `spec.md` §4.A/§4.D/§4.E/§4.F that draw from Zr).
pub(crate) fn sample_nonzero_scalar(rng: &mut ThreadRng) -> Scalar {
    loop {
        let candidate = Scalar::rand(rng);
        if !candidate.is_zero() {
            return candidate;
        }
    }
}

pub(crate) fn mul_g1(base: G1Point, scalar: Scalar) -> G1Point {
    (base * scalar).into_affine()
}

pub(crate) fn mul_g2(base: G2Point, scalar: Scalar) -> G2Point {
    (base * scalar).into_affine()
}

pub(crate) fn encode_g1(point: &G1Point) -> Vec<u8> {
    let mut bytes = Vec::new();
    point
        .serialize_compressed(&mut bytes)
        .expect("serializing a G1 point cannot fail");
    bytes
}

pub(crate) fn encode_g2(point: &G2Point) -> Vec<u8> {
    let mut bytes = Vec::new();
    point
        .serialize_compressed(&mut bytes)
        .expect("serializing a G2 point cannot fail");
    bytes
}

pub(crate) fn encode_gt(element: &GtElement) -> Vec<u8> {
    let mut bytes = Vec::new();
    element
        .serialize_compressed(&mut bytes)
        .expect("serializing a GT element cannot fail");
    bytes
}

pub(crate) fn write_g1(out: &mut Vec<u8>, point: &G1Point) {
    out.extend_from_slice(&encode_g1(point));
}

pub(crate) fn write_g2(out: &mut Vec<u8>, point: &G2Point) {
    out.extend_from_slice(&encode_g2(point));
}

pub(crate) fn write_scalar(out: &mut Vec<u8>, scalar: &Scalar) {
    scalar
        .serialize_compressed(out)
        .expect("serializing a scalar cannot fail");
}

pub(crate) fn read_g1(cursor: &mut &[u8]) -> HdwsaResult<G1Point> {
    G1Point::deserialize_compressed(cursor)
        .map_err(|e| HdwsaError::InvalidEncoding(format!("G1 element: {e}")))
}

pub(crate) fn read_g2(cursor: &mut &[u8]) -> HdwsaResult<G2Point> {
    G2Point::deserialize_compressed(cursor)
        .map_err(|e| HdwsaError::InvalidEncoding(format!("G2 element: {e}")))
}

pub(crate) fn read_scalar(cursor: &mut &[u8]) -> HdwsaResult<Scalar> {
    Scalar::deserialize_compressed(cursor)
        .map_err(|e| HdwsaError::InvalidEncoding(format!("scalar: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_generator_is_nonzero_and_deterministic_bytes_cache() {
        let pp = PublicParams::setup(160, 512);
        assert!(!pp.p().is_zero());
        assert_eq!(pp.p_bytes(), encode_g1(&pp.p()).as_slice());
        assert_eq!(pp.rbits(), 160);
        assert_eq!(pp.qbits(), 512);
    }

    #[test]
    fn egg_matches_live_pairing_of_generators() {
        let pp = PublicParams::setup(160, 512);
        assert_eq!(pp.egg(), pp.pair(pp.p(), pp.p2()));
    }
}
