//! Error type shared by the fallible operations of the crate.
//!
//! Arithmetic on fixed-size inputs is total and never reports errors.
//! Failures only arise when decoding or checking untrusted public data:
//! point encodings, signatures and X25519 peer values.

use std::fmt;

/// Reasons an untrusted input was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A 32-byte point encoding has no matching point on the curve.
    InvalidPoint,
    /// The `S` half of a signature is not below the group order.
    NonCanonicalScalar,
    /// The verification equation did not hold.
    InvalidSignature,
    /// An X25519 agreement produced the all-zero shared secret, meaning the
    /// peer value was a low-order point.
    LowOrderPoint,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPoint => write!(f, "point encoding is not on the curve"),
            Error::NonCanonicalScalar => write!(f, "signature scalar is not reduced"),
            Error::InvalidSignature => write!(f, "signature does not verify"),
            Error::LowOrderPoint => write!(f, "peer public value has low order"),
        }
    }
}

impl std::error::Error for Error {}
