//! Plain data records for wallet keys, DVK, DSK, and signatures
//! (`spec.md` §3). All value-typed: no aliasing contracts, callers may
//! freely copy and drop.

use ark_ff::Zero;

use crate::error::HdwsaResult;
use crate::pairing::{
    self, read_g1, read_g2, read_scalar, write_g1, write_g2, write_scalar, G1Point, G2Point,
    GtElement, Scalar,
};

/// A wallet's public key `(A_ID, B_ID) ∈ G1²`.
///
/// Invariant: both components are non-identity.
///
/// `A_ID` additionally carries an internal G2 twin (`a_id_twin`), never part
/// of the scheme's data model but required by the asymmetric pairing
/// backend every time `A_ID` appears as the right-hand side of `e(·,·)` —
/// see `pairing.rs` and `DESIGN.md`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WalletPublicKey {
    a_id: G1Point,
    pub(crate) a_id_twin: G2Point,
    b_id: G1Point,
}

impl WalletPublicKey {
    pub(crate) fn new(a_id: G1Point, a_id_twin: G2Point, b_id: G1Point) -> Self {
        Self {
            a_id,
            a_id_twin,
            b_id,
        }
    }

    pub fn a_id(&self) -> G1Point {
        self.a_id
    }

    pub fn b_id(&self) -> G1Point {
        self.b_id
    }

    /// Canonical persisted form: `A_ID ‖ A_ID_twin ‖ B_ID` (`spec.md` §6).
    /// The twin is carried because, unlike a genuine symmetric pairing
    /// where G1 and G2 coincide, it cannot be recomputed from `A_ID` alone.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        write_g1(&mut out, &self.a_id);
        write_g2(&mut out, &self.a_id_twin);
        write_g1(&mut out, &self.b_id);
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> HdwsaResult<Self> {
        let mut cursor = bytes;
        let a_id = read_g1(&mut cursor)?;
        let a_id_twin = read_g2(&mut cursor)?;
        let b_id = read_g1(&mut cursor)?;
        if a_id.is_zero() || a_id_twin.is_zero() || b_id.is_zero() {
            return Err(crate::error::HdwsaError::InvalidEncoding(
                "wallet public key component is the group identity".to_string(),
            ));
        }
        Ok(Self::new(a_id, a_id_twin, b_id))
    }
}

/// A wallet's secret key `(alpha, beta) ∈ Zr²` together with its embedded
/// public key (`spec.md` §3).
///
/// Invariant: `alpha != 0`, `beta != 0`, and `public` is consistent with
/// them (`public.a_id() == alpha * P`, `public.b_id() == beta * P`).
#[derive(Clone)]
pub struct WalletSecretKey {
    pub(crate) alpha: Scalar,
    pub(crate) beta: Scalar,
    public: WalletPublicKey,
}

impl WalletSecretKey {
    pub(crate) fn new(alpha: Scalar, beta: Scalar, public: WalletPublicKey) -> Self {
        Self {
            alpha,
            beta,
            public,
        }
    }

    pub fn public(&self) -> WalletPublicKey {
        self.public
    }
}

// Best-effort secret hygiene, matching the teacher's own manual zeroing
// idiom in `crypto.rs`: overwrite both secrets with zero on drop.
impl Drop for WalletSecretKey {
    fn drop(&mut self) {
        self.alpha = Scalar::zero();
        self.beta = Scalar::zero();
    }
}

impl std::fmt::Debug for WalletSecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSecretKey")
            .field("alpha", &"<redacted>")
            .field("beta", &"<redacted>")
            .field("public", &self.public)
            .finish()
    }
}

impl std::fmt::Debug for WalletPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletPublicKey")
            .field("a_id", &hex::encode(pairing::encode_g1(&self.a_id)))
            .field("b_id", &hex::encode(pairing::encode_g1(&self.b_id)))
            .finish_non_exhaustive()
    }
}

/// A per-transaction derived verification key: `(Q_r, Q_vk)` with
/// `Q_r ∈ G1`, `Q_vk ∈ GT` (`spec.md` §3). Ephemeral; no long-term
/// lifecycle.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Dvk {
    pub(crate) q_r: G1Point,
    pub(crate) q_vk: GtElement,
}

impl Dvk {
    pub fn q_r(&self) -> G1Point {
        self.q_r
    }

    pub fn q_vk(&self) -> GtElement {
        self.q_vk
    }
}

impl std::fmt::Debug for Dvk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dvk")
            .field("q_r", &hex::encode(pairing::encode_g1(&self.q_r)))
            .finish_non_exhaustive()
    }
}

/// A per-transaction derived signing key: `d ∈ G1` (`spec.md` §3).
/// Ephemeral, owner-held.
#[derive(Clone, Copy)]
pub struct Dsk {
    pub(crate) d: G1Point,
}

impl std::fmt::Debug for Dsk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dsk").finish_non_exhaustive()
    }
}

/// A signature `(h, Q_σ)` with `h ∈ Zr`, `Q_σ ∈ G1` (`spec.md` §3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    pub(crate) h: Scalar,
    pub(crate) q_sigma: G1Point,
}

impl Signature {
    pub fn h(&self) -> Scalar {
        self.h
    }

    pub fn q_sigma(&self) -> G1Point {
        self.q_sigma
    }

    /// Canonical persisted form: `h ‖ Q_σ` (`spec.md` §6).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        write_scalar(&mut out, &self.h);
        write_g1(&mut out, &self.q_sigma);
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> HdwsaResult<Self> {
        let mut cursor = bytes;
        let h = read_scalar(&mut cursor)?;
        let q_sigma = read_g1(&mut cursor)?;
        Ok(Self { h, q_sigma })
    }
}
