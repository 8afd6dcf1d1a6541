//! Finite field arithmetic for Curve25519 / Ed25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! ## Representation
//!
//! Field elements are 10 unsigned 32-bit limbs with alternating widths:
//!
//! ```text
//! [26, 25, 26, 25, 26, 25, 26, 25, 26, 25] bits
//! ```
//!
//! Limb `i` carries weight `2^⌈25.5·i⌉`. The representation is redundant:
//! limbs may exceed their nominal width, and how far they may exceed it is
//! tracked by the type.
//!
//! ## Magnitude regimes
//!
//! - [`FieldElement`] is **tight**: every limb is at most `0x4666666` (even
//!   index) or `0x2333333` (odd index). This is the state after a carry pass
//!   and the only state accepted for encoding and inversion.
//! - [`LooseFieldElement`] is **loose**: limbs are at most `0xd333332` /
//!   `0x6999999`, which is what one addition or subtraction of tight values
//!   produces.
//!
//! Addition, subtraction and negation take tight operands and produce loose
//! results. Multiplication and squaring accept either regime and always
//! produce a tight result. [`LooseFieldElement::carry`] brings a loose value
//! back to tight. Since loose values cannot be fed to `add` or `sub`, the
//! compiler enforces the carry discipline; debug builds also check the limb
//! bounds on every operation.
//!
//! ## Constant time
//!
//! Everything except [`LooseFieldElement::is_nonzero`] executes the same
//! instruction sequence for every input value. Loops only ever depend on limb
//! indices.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConditionallySelectable};

/// Width in bits of each limb.
const LIMB_BITS: [u32; 10] = [26, 25, 26, 25, 26, 25, 26, 25, 26, 25];

/// Bit offset of each limb inside the 255-bit little-endian encoding.
const LIMB_OFFSETS: [usize; 10] = [0, 26, 51, 77, 102, 128, 153, 179, 204, 230];

const MASK_26: u32 = (1 << 26) - 1;
const MASK_25: u32 = (1 << 25) - 1;

const TIGHT_BOUNDS: [u32; 10] = [
    0x4666666, 0x2333333, 0x4666666, 0x2333333, 0x4666666, 0x2333333, 0x4666666, 0x2333333,
    0x4666666, 0x2333333,
];

const LOOSE_BOUNDS: [u32; 10] = [
    0xd333332, 0x6999999, 0xd333332, 0x6999999, 0xd333332, 0x6999999, 0xd333332, 0x6999999,
    0xd333332, 0x6999999,
];

/// `2·p` in limb form. Added before subtracting so no limb goes negative.
const TWO_P: [u32; 10] = [
    0x7ffffda, 0x3fffffe, 0x7fffffe, 0x3fffffe, 0x7fffffe, 0x3fffffe, 0x7fffffe, 0x3fffffe,
    0x7fffffe, 0x3fffffe,
];

#[inline(always)]
fn limb_mask(index: usize) -> u32 {
    if index & 1 == 0 { MASK_26 } else { MASK_25 }
}

fn within(limbs: &[u32; 10], bounds: &[u32; 10]) -> bool {
    limbs.iter().zip(bounds).all(|(limb, bound)| limb <= bound)
}

/// Load 3 bytes from a little-endian byte slice into a `u64`.
///
/// Interprets `input[0..3]` as a 24-bit unsigned integer.
#[inline(always)]
pub(crate) fn load_3(input: &[u8]) -> u64 {
    (input[0] as u64) | ((input[1] as u64) << 8) | ((input[2] as u64) << 16)
}

/// Load 4 bytes from a little-endian byte slice into a `u64`.
///
/// Interprets `input[0..4]` as a 32-bit unsigned integer. Shared with the
/// scalar decoder, which slices its 21-bit limbs out of the same kind of
/// window.
#[inline(always)]
pub(crate) fn load_4(input: &[u8]) -> u64 {
    (input[0] as u64)
        | ((input[1] as u64) << 8)
        | ((input[2] as u64) << 16)
        | ((input[3] as u64) << 24)
}

/// Propagates carries through 64-bit limb accumulators and narrows them
/// back to tight 32-bit limbs.
///
/// The carry order interleaves the two halves of the element
/// (`0→1, 4→5, 1→2, 5→6, …`) so that each chain is short, then wraps the
/// overflow of limb 9 back into limb 0 with a factor of 19 and performs one
/// last `0→1` step.
fn carry_wide(mut h: [u64; 10]) -> FieldElement {
    for (a, b) in [(0, 4), (1, 5), (2, 6), (3, 7), (4, 8)] {
        for i in [a, b] {
            let carry = h[i] >> LIMB_BITS[i];
            h[i] &= limb_mask(i) as u64;
            h[i + 1] += carry;
        }
    }

    let carry = h[9] >> 25;
    h[9] &= MASK_25 as u64;
    h[0] += 19 * carry;

    let carry = h[0] >> 26;
    h[0] &= MASK_26 as u64;
    h[1] += carry;

    let out = FieldElement(h.map(|limb| limb as u32));
    out.debug_check();
    out
}

/// Schoolbook product of two limb vectors, reduced with `2²⁵⁵ ≡ 19`.
///
/// A product of two odd-index limbs lands one bit above the weight of its
/// output limb and is doubled. Products whose index sum reaches 10 wrap
/// around multiplied by 19.
fn mul_limbs(f: &[u32; 10], g: &[u32; 10]) -> FieldElement {
    let f = f.map(u64::from);
    let g = g.map(u64::from);
    let mut h = [0u64; 10];

    for i in 0..10 {
        for j in 0..10 {
            let term = (f[i] * g[j]) << (i & j & 1);
            if i + j < 10 {
                h[i + j] += term;
            } else {
                h[i + j - 10] += 19 * term;
            }
        }
    }

    carry_wide(h)
}

/// Squaring variant of [`mul_limbs`] that computes each cross product once.
fn square_limbs(f: &[u32; 10]) -> FieldElement {
    let f = f.map(u64::from);
    let mut h = [0u64; 10];

    for i in 0..10 {
        for j in i..10 {
            let doubling = (i & j & 1) + usize::from(i != j);
            let term = (f[i] * f[j]) << doubling;
            if i + j < 10 {
                h[i + j] += term;
            } else {
                h[i + j - 10] += 19 * term;
            }
        }
    }

    carry_wide(h)
}

/// A tightly bounded field element.
///
/// See the module documentation for the exact limb bounds.
#[derive(Clone, Copy)]
pub(crate) struct FieldElement(pub(crate) [u32; 10]);

/// A loosely bounded field element, as produced by addition, subtraction
/// and negation.
///
/// A loose value can be multiplied or squared directly. It must be carried
/// with [`LooseFieldElement::carry`] before it can be added, subtracted or
/// encoded.
#[derive(Clone, Copy)]
pub(crate) struct LooseFieldElement(pub(crate) [u32; 10]);

impl FieldElement {
    pub(crate) const ZERO: Self = Self([0; 10]);
    pub(crate) const ONE: Self = Self([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    #[inline(always)]
    fn debug_check(&self) {
        debug_assert!(
            within(&self.0, &TIGHT_BOUNDS),
            "field element exceeds tight bounds: {:?}",
            self.0
        );
    }

    /// Decodes a 32-byte little-endian buffer, ignoring bit 255.
    ///
    /// The top bit carries the x-sign in point encodings, so it is cleared
    /// before decoding. The result is not necessarily reduced below `p`.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut clean = *bytes;
        clean[31] &= 0x7f;
        Self::from_bytes_strict(&clean)
    }

    /// Decodes a 32-byte little-endian buffer whose bit 255 is clear.
    ///
    /// A set top bit is a caller bug and trips a debug assertion.
    pub(crate) fn from_bytes_strict(bytes: &[u8; 32]) -> Self {
        debug_assert_eq!(bytes[31] & 0x80, 0, "top bit must be clear");

        let mut limbs = [0u32; 10];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let offset = LIMB_OFFSETS[i];
            let word = load_4(&bytes[offset / 8..]) >> (offset % 8);
            *limb = (word as u32) & limb_mask(i);
        }

        Self(limbs)
    }

    /// Encodes the element canonically as 32 little-endian bytes.
    ///
    /// ## Algorithm
    ///
    /// A tight element is below `2p`, so at most one subtraction of `p` is
    /// needed. The quotient is computed without branching:
    ///
    /// ```text
    /// q = ⌊(h + 19) / 2²⁵⁵⌋ ∈ {0, 1}
    /// ```
    ///
    /// then `19·q` is added and bit 255 is dropped, which subtracts
    /// `q·p`. Bit 255 of the output is always zero.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        self.debug_check();
        let mut h = self.0;

        let mut q = (h[0] + 19) >> 26;
        for i in 1..10 {
            q = (h[i] + q) >> LIMB_BITS[i];
        }

        h[0] += 19 * q;
        for i in 0..9 {
            h[i + 1] += h[i] >> LIMB_BITS[i];
            h[i] &= limb_mask(i);
        }
        h[9] &= MASK_25;

        let mut out = [0u8; 32];
        let mut acc = 0u64;
        let mut bits = 0;
        let mut pos = 0;
        for (limb, width) in h.iter().zip(LIMB_BITS) {
            acc |= (*limb as u64) << bits;
            bits += width;
            while bits >= 8 {
                out[pos] = acc as u8;
                acc >>= 8;
                bits -= 8;
                pos += 1;
            }
        }
        out[31] = acc as u8;

        out
    }

    /// Returns the low bit of the canonical encoding.
    ///
    /// This is the sign convention for the x-coordinate of an encoded point.
    pub(crate) fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    /// Replaces `self` with `−self` when `choice` is set.
    pub(crate) fn conditional_negate(&mut self, choice: Choice) {
        let negated = (-*self).carry();
        self.conditional_assign(&negated, choice);
    }

    pub(crate) fn square(&self) -> Self {
        self.debug_check();
        square_limbs(&self.0)
    }

    /// Computes `2·f²`.
    pub(crate) fn double_square(&self) -> Self {
        let sq = self.square();
        (sq + sq).carry()
    }

    /// Squares `n` times in a row.
    fn square_times(&self, n: usize) -> Self {
        let mut out = *self;
        for _ in 0..n {
            out = out.square();
        }
        out
    }

    /// Computes `f^(2²⁵⁰ − 1)` and `f^11`.
    ///
    /// Both exponentiation chains share this prefix.
    fn pow2250m1_and_pow11(&self) -> (Self, Self) {
        let t0 = self.square(); // 2
        let t1 = t0.square_times(2); // 8
        let t1 = *self * t1; // 9
        let t0 = t0 * t1; // 11
        let t2 = t0.square(); // 22
        let t1 = t1 * t2; // 2^5 - 1
        let t2 = t1.square_times(5);
        let t1 = t2 * t1; // 2^10 - 1
        let t2 = t1.square_times(10);
        let t2 = t2 * t1; // 2^20 - 1
        let t3 = t2.square_times(20);
        let t2 = t3 * t2; // 2^40 - 1
        let t2 = t2.square_times(10);
        let t1 = t2 * t1; // 2^50 - 1
        let t2 = t1.square_times(50);
        let t2 = t2 * t1; // 2^100 - 1
        let t3 = t2.square_times(100);
        let t2 = t3 * t2; // 2^200 - 1
        let t2 = t2.square_times(50);
        let t1 = t2 * t1; // 2^250 - 1

        (t1, t0)
    }

    /// Computes the multiplicative inverse `f^(p − 2)`.
    ///
    /// The exponent is fixed, so the chain of squarings and multiplications
    /// never depends on the input. Zero maps to zero, which the X25519
    /// ladder relies on.
    pub(crate) fn invert(&self) -> Self {
        let (t1, t0) = self.pow2250m1_and_pow11();
        t1.square_times(5) * t0
    }

    /// Computes `f^((p − 5) / 8) = f^(2²⁵² − 3)`.
    ///
    /// Used by point decoding to extract square roots.
    pub(crate) fn pow22523(&self) -> Self {
        let (t1, _) = self.pow2250m1_and_pow11();
        t1.square_times(2) * *self
    }
}

impl LooseFieldElement {
    #[inline(always)]
    fn debug_check(&self) {
        debug_assert!(
            within(&self.0, &LOOSE_BOUNDS),
            "field element exceeds loose bounds: {:?}",
            self.0
        );
    }

    /// Propagates carries so that the result satisfies the tight bounds.
    pub(crate) fn carry(&self) -> FieldElement {
        self.debug_check();
        let mut h = self.0;

        for i in 0..9 {
            h[i + 1] += h[i] >> LIMB_BITS[i];
            h[i] &= limb_mask(i);
        }

        let carry = h[9] >> 25;
        h[9] &= MASK_25;
        h[0] += 19 * carry;

        let carry = h[0] >> 26;
        h[0] &= MASK_26;
        h[1] += carry;

        let out = FieldElement(h);
        out.debug_check();
        out
    }

    pub(crate) fn square(&self) -> FieldElement {
        self.debug_check();
        square_limbs(&self.0)
    }

    /// Multiplies by the Montgomery constant `(A + 2) / 4 = 121666`.
    pub(crate) fn mul_121666(&self) -> FieldElement {
        self.debug_check();
        carry_wide(self.0.map(|limb| limb as u64 * 121666))
    }

    /// Returns whether the value is not congruent to zero.
    ///
    /// Not constant time. Only used on public values.
    pub(crate) fn is_nonzero(&self) -> bool {
        self.carry().to_bytes() != [0u8; 32]
    }
}

impl From<FieldElement> for LooseFieldElement {
    /// Every tight value is also loose.
    fn from(fe: FieldElement) -> Self {
        Self(fe.0)
    }
}

impl Add for FieldElement {
    type Output = LooseFieldElement;

    fn add(self, rhs: Self) -> LooseFieldElement {
        self.debug_check();
        rhs.debug_check();
        let mut out = [0u32; 10];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = self.0[i] + rhs.0[i];
        }
        LooseFieldElement(out)
    }
}

impl Sub for FieldElement {
    type Output = LooseFieldElement;

    fn sub(self, rhs: Self) -> LooseFieldElement {
        self.debug_check();
        rhs.debug_check();
        let mut out = [0u32; 10];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = (self.0[i] + TWO_P[i]) - rhs.0[i];
        }
        LooseFieldElement(out)
    }
}

impl Neg for FieldElement {
    type Output = LooseFieldElement;

    fn neg(self) -> LooseFieldElement {
        FieldElement::ZERO - self
    }
}

macro_rules! impl_field_mul {
    ($lhs:ty, $rhs:ty) => {
        impl Mul<$rhs> for $lhs {
            type Output = FieldElement;

            fn mul(self, rhs: $rhs) -> FieldElement {
                self.debug_check();
                rhs.debug_check();
                mul_limbs(&self.0, &rhs.0)
            }
        }
    };
}

impl_field_mul!(FieldElement, FieldElement);
impl_field_mul!(FieldElement, LooseFieldElement);
impl_field_mul!(LooseFieldElement, FieldElement);
impl_field_mul!(LooseFieldElement, LooseFieldElement);

/// Masked limb selection shared by both regimes.
#[inline(always)]
fn select_limbs(a: &[u32; 10], b: &[u32; 10], choice: Choice) -> [u32; 10] {
    let mask = 0u32.wrapping_sub(choice.unwrap_u8() as u32);
    let mut out = *a;
    for (limb, other) in out.iter_mut().zip(b) {
        *limb ^= (*limb ^ other) & mask;
    }
    out
}

#[inline(always)]
fn swap_limbs(a: &mut [u32; 10], b: &mut [u32; 10], choice: Choice) {
    let mask = 0u32.wrapping_sub(choice.unwrap_u8() as u32);
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        let t = (*x ^ *y) & mask;
        *x ^= t;
        *y ^= t;
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(select_limbs(&a.0, &b.0, choice))
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        swap_limbs(&mut a.0, &mut b.0, choice);
    }
}

impl ConditionallySelectable for LooseFieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(select_limbs(&a.0, &b.0, choice))
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        swap_limbs(&mut a.0, &mut b.0, choice);
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({:?})", self.0)
    }
}

impl fmt::Debug for LooseFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LooseFieldElement({:?})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const P_BYTES: [u8; 32] = [
        0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ];

    fn small(n: u32) -> FieldElement {
        let mut bytes = [0u8; 32];
        bytes[..4].copy_from_slice(&n.to_le_bytes());
        FieldElement::from_bytes(&bytes)
    }

    prop_compose! {
        fn arb_field_bytes()(bytes in any::<[u8; 32]>()) -> [u8; 32] {
            let mut bytes = bytes;
            bytes[31] &= 0x7f;
            bytes
        }
    }

    #[test]
    fn to_bytes_reduces_p_to_zero() {
        assert_eq!(FieldElement::from_bytes(&P_BYTES).to_bytes(), [0u8; 32]);
    }

    #[test]
    fn to_bytes_reduces_p_plus_one() {
        let mut bytes = P_BYTES;
        bytes[0] += 1;
        assert_eq!(
            FieldElement::from_bytes(&bytes).to_bytes(),
            FieldElement::ONE.to_bytes()
        );
    }

    #[test]
    fn from_bytes_ignores_top_bit() {
        let mut bytes = [0x11u8; 32];
        let clear = FieldElement::from_bytes(&bytes).to_bytes();
        bytes[31] |= 0x80;
        assert_eq!(FieldElement::from_bytes(&bytes).to_bytes(), clear);
    }

    #[test]
    fn small_values_round_trip() {
        for n in [0u32, 1, 2, 19, 121666, u32::MAX] {
            let mut expected = [0u8; 32];
            expected[..4].copy_from_slice(&n.to_le_bytes());
            assert_eq!(small(n).to_bytes(), expected);
        }
    }

    #[test]
    fn subtraction_wraps_modulo_p() {
        // 0 - 1 = p - 1
        let mut expected = P_BYTES;
        expected[0] -= 1;
        let diff = (FieldElement::ZERO - FieldElement::ONE).carry();
        assert_eq!(diff.to_bytes(), expected);
    }

    #[test]
    fn mul_121666_matches_generic_mul() {
        let x = small(0xdead_beef).square();
        let expected = x * small(121666);
        let relaxed = LooseFieldElement::from(x);
        assert_eq!(relaxed.mul_121666().to_bytes(), expected.to_bytes());
    }

    #[test]
    fn invert_of_zero_is_zero() {
        assert_eq!(FieldElement::ZERO.invert().to_bytes(), [0u8; 32]);
    }

    #[test]
    fn conditional_swap_follows_choice() {
        let mut a = small(5);
        let mut b = small(7);

        FieldElement::conditional_swap(&mut a, &mut b, Choice::from(0));
        assert_eq!(a.to_bytes(), small(5).to_bytes());

        FieldElement::conditional_swap(&mut a, &mut b, Choice::from(1));
        assert_eq!(a.to_bytes(), small(7).to_bytes());
        assert_eq!(b.to_bytes(), small(5).to_bytes());
    }

    #[test]
    fn conditional_assign_follows_choice() {
        let mut a = LooseFieldElement::from(small(1));
        let b = LooseFieldElement::from(small(2));

        a.conditional_assign(&b, Choice::from(0));
        assert_eq!(a.carry().to_bytes(), small(1).to_bytes());
        a.conditional_assign(&b, Choice::from(1));
        assert_eq!(a.carry().to_bytes(), small(2).to_bytes());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "top bit must be clear")]
    fn strict_decode_rejects_top_bit() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x80;
        FieldElement::from_bytes_strict(&bytes);
    }

    proptest! {
        #[test]
        fn invert_is_multiplicative_inverse(bytes in arb_field_bytes()) {
            let x = FieldElement::from_bytes(&bytes);
            prop_assume!(x.to_bytes() != [0u8; 32]);
            prop_assert_eq!((x * x.invert()).to_bytes(), FieldElement::ONE.to_bytes());
        }

        #[test]
        fn square_agrees_with_mul(bytes in arb_field_bytes()) {
            let x = FieldElement::from_bytes(&bytes);
            prop_assert_eq!(x.square().to_bytes(), (x * x).to_bytes());
        }

        #[test]
        fn loose_operands_multiply_like_carried_ones(a in arb_field_bytes(), b in arb_field_bytes()) {
            let a = FieldElement::from_bytes(&a);
            let b = FieldElement::from_bytes(&b);
            let sum = a + b;
            let diff = a - b;
            prop_assert_eq!((sum * diff).to_bytes(), (sum.carry() * diff.carry()).to_bytes());
            prop_assert_eq!(sum.square().to_bytes(), sum.carry().square().to_bytes());
        }

        #[test]
        fn negation_cancels(bytes in arb_field_bytes()) {
            let x = FieldElement::from_bytes(&bytes);
            let neg = (-x).carry();
            prop_assert_eq!((x + neg).carry().to_bytes(), [0u8; 32]);
        }

        #[test]
        fn canonical_encoding_round_trips(bytes in arb_field_bytes()) {
            let encoded = FieldElement::from_bytes(&bytes).to_bytes();
            prop_assert_eq!(FieldElement::from_bytes_strict(&encoded).to_bytes(), encoded);
        }
    }
}
