//! Asymmetric key material.
//!
//! ## Ed25519
//!
//! The `ed25519` module derives Ed25519 keypairs from a 32-byte seed over
//! the twisted Edwards curve on 𝔽ₚ, `p = 2²⁵⁵ − 19`. The private key is
//! stored as `seed ‖ public key`.
//!
//! ## X25519
//!
//! The `x25519` module implements Curve25519 Diffie–Hellman key agreement
//! with the Montgomery ladder from RFC 7748. It is meant for shared-secret
//! derivation, not for signatures.

pub mod ed25519;
pub mod x25519;
