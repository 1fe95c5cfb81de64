//! Hierarchical Deterministic Wallet Signature Algorithm (HDWSA): an
//! identity-based, hierarchical key-derivation and signature scheme over a
//! pairing-friendly curve.
//!
//! From a single root wallet key pair, arbitrarily many child wallets can
//! be deterministically delegated by identity path ([`wallet`]); from any
//! wallet, unlinkable per-transaction derived verification/signing keys can
//! be produced ([`derive`]) and used to sign and verify messages
//! ([`sign`]). See the crate's `DESIGN.md` for how this maps onto the
//! underlying pairing backend.

pub mod derive;
pub mod error;
pub mod hash;
pub mod keys;
pub mod pairing;
pub mod sign;
pub mod wallet;

pub use derive::{sign_key_derive, verify_key_check, verify_key_derive};
pub use error::{HdwsaError, HdwsaResult};
pub use keys::{Dsk, Dvk, Signature, WalletPublicKey, WalletSecretKey};
pub use pairing::PublicParams;
pub use sign::{sign, verify};
pub use wallet::{root_wallet_keygen, wallet_key_delegate};
