//! Curve25519 and Ed25519 primitives for verified-boot signing.
//!
//! This crate provides the elliptic-curve core used to sign and verify
//! boot-chain artifacts: arithmetic over GF(2²⁵⁵ − 19), the Edwards25519
//! group, scalars modulo the group order, Ed25519 key derivation and
//! signing, and the X25519 Montgomery ladder.
//!
//! The focus is on **predictable, constant-time arithmetic**. Every routine
//! that touches secret data runs the same instruction sequence for every
//! input and selects table entries with masked moves. The few variable-time
//! routines say so in their names or docs and are only reached with public
//! inputs (decoding, verification).
//!
//! # Module overview
//!
//! - `curve25519`
//!   Field, scalar and group arithmetic plus the scalar-multiplication
//!   strategies built on them. Point types are exposed for decoding,
//!   encoding and multiplication. Field elements stay internal.
//!
//! - `keys`
//!   Key material. Ed25519 keypairs derived from a 32-byte seed, and X25519
//!   key agreement on Montgomery `u` coordinates.
//!
//!   No signing or verification logic lives here, only key structure and
//!   derivation.
//!
//! - `signatures`
//!   Ed25519 signing and verification over a message and a key.
//!
//! - `hash`
//!   The SHA-512 boundary. Signing accepts any 64-byte `sha2::Digest`;
//!   the default is `Sha512`.
//!
//! - `error`
//!   The [`Error`] type returned when untrusted input is rejected.
//!
//! # Design goals
//!
//! - No heap allocations
//! - Fixed-size inputs and total functions wherever possible
//! - Constant-time and variable-time code paths kept in separate entry
//!   points
//! - Curve constants and tables compiled in, never computed at runtime
//!
//! # Logging
//!
//! Rejections of untrusted input are reported through the `log` facade at
//! `debug` level. Nothing derived from secret data is ever logged. The
//! crate installs no logger.

pub mod curve25519;
pub mod error;
pub mod hash;
pub mod keys;
pub mod signatures;

pub use error::Error;
