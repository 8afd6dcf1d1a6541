//! Core Ed25519 key types.

use sha2::Digest;
use sha2::digest::consts::U64;

use crate::curve25519::scalar_mul::scalarmult_base;
use crate::hash::{Sha512, digest_chunks};

/// An Ed25519 public key: the 32-byte encoding of `a·B`.
///
/// The bytes are not validated on construction. Verification decodes them
/// and rejects encodings that are not on the curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    #[inline]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// An Ed25519 private key in its 64-byte `seed ‖ public key` form.
///
/// The secret scalar and nonce prefix are recomputed from the seed on every
/// signature rather than stored.
#[derive(Clone)]
pub struct PrivateKey([u8; 64]);

impl PrivateKey {
    /// Wraps a 64-byte `seed ‖ public key` buffer.
    ///
    /// The two halves are not checked against each other. A mismatched
    /// public half still signs, but the signatures will not verify.
    #[inline]
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }

    /// The 32-byte seed the key was derived from.
    pub fn seed(&self) -> [u8; 32] {
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&self.0[..32]);
        seed
    }

    /// The public key stored in the upper half.
    pub fn public_key(&self) -> PublicKey {
        let mut public = [0u8; 32];
        public.copy_from_slice(&self.0[32..]);
        PublicKey(public)
    }
}

/// Output of seed expansion: the clamped secret scalar and the nonce prefix.
pub(crate) struct ExpandedSecret {
    pub(crate) scalar: [u8; 32],
    pub(crate) prefix: [u8; 32],
}

/// Hashes a seed and clamps the low half into a secret scalar.
///
/// Clamping clears the three low bits (a multiple of the cofactor), clears
/// bit 255 and sets bit 254.
pub(crate) fn expand_seed<D>(seed: &[u8; 32]) -> ExpandedSecret
where
    D: Digest<OutputSize = U64>,
{
    let digest = digest_chunks::<D>(&[seed.as_slice()]);

    let mut scalar = [0u8; 32];
    let mut prefix = [0u8; 32];
    scalar.copy_from_slice(&digest[..32]);
    prefix.copy_from_slice(&digest[32..]);

    scalar[0] &= 248;
    scalar[31] &= 63;
    scalar[31] |= 64;

    ExpandedSecret { scalar, prefix }
}

/// Derives an Ed25519 keypair from a 32-byte seed.
///
/// The process is:
/// - Hash the seed with SHA-512
/// - Clamp the low half of the digest into the secret scalar `a`
/// - Compute the public key as the encoding of `a·B`
/// - Assemble the private key as `seed ‖ public`
///
/// Deterministic and total: the same seed always yields the same pair.
pub fn keypair_from_seed(seed: &[u8; 32]) -> (PublicKey, PrivateKey) {
    keypair_from_seed_with::<Sha512>(seed)
}

/// [`keypair_from_seed`] over a caller-chosen 64-byte hash.
pub fn keypair_from_seed_with<D>(seed: &[u8; 32]) -> (PublicKey, PrivateKey)
where
    D: Digest<OutputSize = U64>,
{
    let expanded = expand_seed::<D>(seed);
    let public = scalarmult_base(&expanded.scalar).to_bytes();

    let mut private = [0u8; 64];
    private[..32].copy_from_slice(seed);
    private[32..].copy_from_slice(&public);

    (PublicKey(public), PrivateKey(private))
}
