use log::debug;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::curve25519::field::FieldElement;
use crate::error::Error;

/// The `u` coordinate of the Curve25519 base point.
pub const BASEPOINT: [u8; 32] = {
    let mut u = [0u8; 32];
    u[0] = 9;
    u
};

/// Montgomery-ladder scalar multiplication on `u` coordinates.
///
/// ## Inputs
///
/// - `scalar`: 32 bytes, clamped internally (bits 0–2 and 255 cleared,
///   bit 254 set) as specified by RFC 7748.
/// - `point`: the 32-byte little-endian `u` coordinate. Bit 255 is ignored.
///
/// ## Algorithm
///
/// The ladder keeps two projective points `(x2 : z2)` and `(x3 : z3)`
/// whose difference is always the input point. For each of the 255 scalar
/// bits from the top, the pair is conditionally swapped according to the
/// XOR of the current and previous bit, then advanced with one combined
/// differential addition and doubling. One inversion at the end yields the
/// affine `u`.
///
/// An input of `u = 0` or a low-order point gives an all-zero output; this
/// function returns it unchanged. Use [`exchange`] to reject it.
///
/// ## Security
///
/// Constant time with respect to `scalar`. The swap is a masked exchange,
/// never a branch.
pub fn x_scalar_mult(scalar: &[u8; 32], point: &[u8; 32]) -> [u8; 32] {
    let mut e = *scalar;
    e[0] &= 248;
    e[31] &= 127;
    e[31] |= 64;

    let x1 = FieldElement::from_bytes(point);
    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;

    let mut swap = 0u8;
    for pos in (0..=254).rev() {
        let bit = 1 & (e[pos / 8] >> (pos & 7));
        swap ^= bit;
        FieldElement::conditional_swap(&mut x2, &mut x3, Choice::from(swap));
        FieldElement::conditional_swap(&mut z2, &mut z3, Choice::from(swap));
        swap = bit;

        let tmp0 = x3 - z3;
        let tmp1 = x2 - z2;
        let x2_sum = x2 + z2;
        let z2_sum = x3 + z3;

        z3 = tmp0 * x2_sum;
        z2 = z2_sum * tmp1;
        let tmp0_sq = tmp1.square();
        let tmp1_sq = x2_sum.square();

        let x3_sum = z3 + z2;
        let z2_diff = z3 - z2;
        x2 = tmp1_sq * tmp0_sq;
        let diff = tmp1_sq - tmp0_sq;

        z2 = z2_diff.square();
        z3 = diff.mul_121666();
        x3 = x3_sum.square();
        let tmp0_sum = tmp0_sq + z3;

        z3 = x1 * z2;
        z2 = diff * tmp0_sum;
    }

    FieldElement::conditional_swap(&mut x2, &mut x3, Choice::from(swap));
    FieldElement::conditional_swap(&mut z2, &mut z3, Choice::from(swap));

    (x2 * z2.invert()).to_bytes()
}

/// Derives the X25519 public value for a private scalar: the ladder applied
/// to [`BASEPOINT`].
pub fn public_from_private(private: &[u8; 32]) -> [u8; 32] {
    x_scalar_mult(private, &BASEPOINT)
}

/// Computes the shared secret with a peer's public value.
///
/// Fails with [`Error::LowOrderPoint`] when the result is all zeros, which
/// happens exactly when the peer value has small order and the secret would
/// not depend on the private scalar. The check runs in constant time.
pub fn exchange(private: &[u8; 32], peer: &[u8; 32]) -> Result<[u8; 32], Error> {
    let shared = x_scalar_mult(private, peer);

    if bool::from(shared[..].ct_eq(&[0u8; 32][..])) {
        debug!("rejecting X25519 agreement: peer value has low order");
        return Err(Error::LowOrderPoint);
    }

    Ok(shared)
}
