//! Digital signature schemes.
//!
//! Each submodule implements one scheme with its own signature type and its
//! signing and verification rules. Key material lives in [`crate::keys`].

pub mod ed25519;
