//! Core Ed25519 signing and verification.

use log::debug;
use sha2::Digest;
use sha2::digest::consts::U64;
use subtle::ConstantTimeEq;

use crate::curve25519::group::GeP3;
use crate::curve25519::scalar::{self, is_canonical, mul_add};
use crate::curve25519::scalar_mul::{double_scalarmult_vartime, scalarmult_base};
use crate::error::Error;
use crate::hash::{Sha512, digest_chunks};
use crate::keys::ed25519::{PrivateKey, PublicKey, expand_seed};

/// An Ed25519 signature `R ‖ S`.
///
/// `R` is a 32-byte point encoding, `S` a 32-byte little-endian scalar.
/// No validation happens at construction; verification checks both halves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature([u8; 64]);

impl Signature {
    #[inline]
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }

    /// Splits the signature into its `R` and `S` halves.
    pub fn split(&self) -> ([u8; 32], [u8; 32]) {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&self.0[..32]);
        s.copy_from_slice(&self.0[32..]);
        (r, s)
    }
}

/// Signs `message` with SHA-512 as the hash.
///
/// See [`sign_with`].
pub fn sign(message: &[u8], private: &PrivateKey) -> Signature {
    sign_with::<Sha512>(message, private)
}

/// Computes an Ed25519 signature over a message.
///
/// The signature is computed as:
///
/// ```text
/// (a, prefix) = expand(seed)
/// r = H(prefix ‖ M) mod ℓ
/// R = r·B
/// k = H(R ‖ A ‖ M) mod ℓ
/// S = (k·a + r) mod ℓ
/// ```
///
/// where `A` is the public half of the private key. The result is `R ‖ S`.
///
/// Signing never fails and never allocates. The multiplication by the base
/// point and the scalar arithmetic run in constant time.
pub fn sign_with<D>(message: &[u8], private: &PrivateKey) -> Signature
where
    D: Digest<OutputSize = U64>,
{
    let expanded = expand_seed::<D>(&private.seed());
    let public = private.public_key();

    let nonce = scalar::reduce(&digest_chunks::<D>(&[expanded.prefix.as_slice(), message]));
    let r = scalarmult_base(&nonce).to_bytes();

    let challenge = scalar::reduce(&digest_chunks::<D>(&[
        r.as_slice(),
        public.as_bytes().as_slice(),
        message,
    ]));
    let s = mul_add(&challenge, &expanded.scalar, &nonce);

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&r);
    signature[32..].copy_from_slice(&s);

    Signature(signature)
}

/// Verifies `signature` over `message` with SHA-512 as the hash.
///
/// Returns `true` if and only if the signature is valid. Use
/// [`verify_with`] to learn why a signature was rejected.
pub fn verify(signature: &Signature, message: &[u8], public: &PublicKey) -> bool {
    verify_with::<Sha512>(signature, message, public).is_ok()
}

/// Verifies an Ed25519 signature.
///
/// Verification proceeds as follows:
///
/// - Reject `S ≥ ℓ`
/// - Decode the public key `A`, rejecting encodings not on the curve
/// - Compute `k = H(R ‖ A ‖ M) mod ℓ`
/// - Compute `R' = k·(−A) + S·B` and compare its encoding with `R`
///
/// All inputs are public, so the variable-time double-base multiplication
/// is used. The final comparison is still constant time.
pub fn verify_with<D>(signature: &Signature, message: &[u8], public: &PublicKey) -> Result<(), Error>
where
    D: Digest<OutputSize = U64>,
{
    let (r, s) = signature.split();
    if !is_canonical(&s) {
        debug!("rejecting signature: S is not reduced modulo the group order");
        return Err(Error::NonCanonicalScalar);
    }

    let Some(a) = GeP3::from_bytes_vartime(public.as_bytes()) else {
        debug!("rejecting signature: public key is not a curve point");
        return Err(Error::InvalidPoint);
    };

    let challenge = scalar::reduce(&digest_chunks::<D>(&[
        r.as_slice(),
        public.as_bytes().as_slice(),
        message,
    ]));
    let check = double_scalarmult_vartime(&challenge, &-a, &s).to_bytes();

    if bool::from(check[..].ct_eq(&r[..])) {
        Ok(())
    } else {
        debug!("rejecting signature: verification equation does not hold");
        Err(Error::InvalidSignature)
    }
}
