use std::fmt;

/// Errors surfaced at the one boundary the scheme treats as untrusted input:
/// parsing a wallet public key or a signature back out of its canonical byte
/// form. Every other failure mode in this crate is either a precondition
/// violation (an `assert!` panic — see `wallet::root_wallet_keygen`) or a
/// cryptographic outcome returned as `bool` (`derive::verify_key_check`,
/// `sign::verify`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HdwsaError {
    /// Bytes did not decode to a valid curve/field element, or decoded to
    /// the group identity where the scheme's invariants forbid it.
    InvalidEncoding(String),
}

impl fmt::Display for HdwsaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HdwsaError::InvalidEncoding(msg) => write!(f, "invalid encoding: {msg}"),
        }
    }
}

impl std::error::Error for HdwsaError {}

pub type HdwsaResult<T> = Result<T, HdwsaError>;
