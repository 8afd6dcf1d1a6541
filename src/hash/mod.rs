//! The SHA-512 boundary.
//!
//! Ed25519 consumes SHA-512 as a black box that maps a byte string, fed in
//! at most three chunks, to a 64-byte digest. Any [`Digest`] with a 64-byte
//! output can fill that role; the plain `sign`/`verify` entry points use
//! [`Sha512`].

use sha2::Digest;
use sha2::digest::consts::U64;

pub use sha2::Sha512;

/// Hashes the concatenation of `chunks` without copying them together.
pub(crate) fn digest_chunks<D>(chunks: &[&[u8]]) -> [u8; 64]
where
    D: Digest<OutputSize = U64>,
{
    let mut hasher = D::new();
    for chunk in chunks {
        hasher.update(chunk);
    }

    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunking_does_not_change_the_digest() {
        let whole = digest_chunks::<Sha512>(&[b"abcdef".as_slice()]);
        let split = digest_chunks::<Sha512>(&[b"ab".as_slice(), b"".as_slice(), b"cdef".as_slice()]);
        assert_eq!(whole, split);
    }

    #[test]
    fn empty_input_matches_known_digest() {
        let digest = digest_chunks::<Sha512>(&[]);
        assert_eq!(&digest[..4], &[0xcf, 0x83, 0xe1, 0x35]);
    }
}
