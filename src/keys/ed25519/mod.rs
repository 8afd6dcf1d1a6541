//! Ed25519 key material.
//!
//! Keys are derived deterministically from a 32-byte seed. The private key
//! keeps the seed together with the public key it produces, in the 64-byte
//! `seed ‖ public` layout that signing consumes.
//!
//! ## Structure
//!
//! - `core`  
//!   Key types and seed expansion.
//!
//! Signing and verification live in [`crate::signatures::ed25519`].

mod core;

// Re-export the public API at the `ed25519` level.
pub use self::core::*;
