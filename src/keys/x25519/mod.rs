//! X25519 key agreement.
//!
//! Curve25519 Diffie–Hellman on Montgomery `u` coordinates, as in RFC 7748.
//!
//! ## Structure
//!
//! - `core`  
//!   The Montgomery ladder, base-point key derivation and the checked
//!   agreement wrapper.
//!
//! There is a single ladder implementation and no dispatch between
//! alternative backends.

mod core;

// Re-export the public API at the `x25519` level.
pub use self::core::*;
