//! Ed25519 signatures (RFC 8032, pure variant).
//!
//! Signing is deterministic: the nonce is derived by hashing the secret
//! nonce prefix with the message, so the same key and message always give
//! byte-identical signatures.
//!
//! ## Structure
//!
//! - `core`  
//!   The signature type, signing, and verification.

mod core;

// Re-export the public API at the `ed25519` level.
pub use self::core::*;
