//! Scalar arithmetic modulo the Ed25519 group order.
//!
//! ```text
//! ℓ = 2²⁵² + 27742317777372353535851937790883648493
//! ```
//!
//! Scalars travel as 32-byte little-endian integers. Internally they are
//! split into 21-bit signed limbs held in `i64`, which leaves enough
//! headroom for a full 12×12 limb product before any reduction.
//!
//! ## Reduction
//!
//! Since `2²⁵² ≡ −(ℓ − 2²⁵²) (mod ℓ)`, a limb at position `k ≥ 12` can be
//! folded into positions `k − 12 .. k − 6` by multiplying it with the 21-bit
//! digits of `ℓ − 2²⁵²`:
//!
//! ```text
//! 666643, 470296, 654183, −997805, 136657, −683901
//! ```
//!
//! A reduction alternates folding passes with carry passes until the value
//! fits in 12 limbs and lies in `[0, ℓ)`. The limb layout, fold constants
//! and carry order are those of the ref10 reduction. Every step is fixed,
//! so both [`reduce`] and [`mul_add`] run in constant time.
//!
//! The module also hosts the two variable-time helpers used by verification:
//! the canonicity check [`is_canonical`] and the signed-window recoding
//! [`slide`].

use super::field::{load_3, load_4};

/// Mask selecting the low 21 bits of a limb.
const MASK_21: i64 = (1 << 21) - 1;

/// Digits of `ℓ − 2²⁵²` in radix 2²¹, negated where the fold subtracts.
const FOLD: [i64; 6] = [666643, 470296, 654183, -997805, 136657, -683901];

/// `ℓ` as 32 little-endian bytes.
const L_BYTES: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// Splits a little-endian byte string into 21-bit limbs.
///
/// The last limb is left unmasked so it absorbs the remaining high bits.
fn load_limbs<const N: usize>(bytes: &[u8]) -> [i64; N] {
    let mut limbs = [0i64; N];
    let last = N - 1;

    for (i, limb) in limbs.iter_mut().enumerate() {
        let bit = 21 * i;
        let (offset, shift) = (bit / 8, bit % 8);
        let word = if i == last || shift + 21 > 24 {
            load_4(&bytes[offset..])
        } else {
            load_3(&bytes[offset..])
        };

        *limb = (word >> shift) as i64;
        if i != last {
            *limb &= MASK_21;
        }
    }

    limbs
}

/// Folds limb `index` into the six limbs starting at `index − 12`.
#[inline(always)]
fn fold(s: &mut [i64; 24], index: usize) {
    let top = s[index];
    for (k, coeff) in FOLD.iter().enumerate() {
        s[index - 12 + k] += top * coeff;
    }
    s[index] = 0;
}

/// Rounded carry from limb `i` into limb `i + 1`, leaving limb `i` in
/// `[−2²⁰, 2²⁰)`.
#[inline(always)]
fn carry_signed(s: &mut [i64; 24], i: usize) {
    let carry = (s[i] + (1 << 20)) >> 21;
    s[i + 1] += carry;
    s[i] -= carry << 21;
}

/// Floor carry from limb `i` into limb `i + 1`, leaving limb `i` in
/// `[0, 2²¹)`.
#[inline(always)]
fn carry_floor(s: &mut [i64; 24], i: usize) {
    let carry = s[i] >> 21;
    s[i + 1] += carry;
    s[i] -= carry << 21;
}

/// Rounded carries from `first` upward, even positions first, then odd
/// ones.
fn carry_signed_interleaved(s: &mut [i64; 24], first: usize, last_even: usize, last_odd: usize) {
    for i in (first..=last_even).step_by(2) {
        carry_signed(s, i);
    }
    for i in (first + 1..=last_odd).step_by(2) {
        carry_signed(s, i);
    }
}

/// Reduces a value spread over 24 limbs (each within the bounds left by a
/// rounded carry pass) to its canonical 32-byte encoding modulo `ℓ`.
fn reduce_limbs(mut s: [i64; 24]) -> [u8; 32] {
    for index in (18..=23).rev() {
        fold(&mut s, index);
    }
    carry_signed_interleaved(&mut s, 6, 16, 15);

    for index in (12..=17).rev() {
        fold(&mut s, index);
    }
    carry_signed_interleaved(&mut s, 0, 10, 11);

    // Two final folds of whatever spilled into limb 12. The first carry pass
    // pushes limb 11 over; the second stops at limb 10.
    fold(&mut s, 12);
    for i in 0..=11 {
        carry_floor(&mut s, i);
    }
    fold(&mut s, 12);
    for i in 0..=10 {
        carry_floor(&mut s, i);
    }

    pack(&s)
}

/// Packs twelve 21-bit limbs into 32 little-endian bytes.
fn pack(s: &[i64; 24]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut acc = 0u64;
    let mut bits = 0;
    let mut pos = 0;

    for limb in &s[..12] {
        acc |= (*limb as u64) << bits;
        bits += 21;
        while bits >= 8 && pos < 31 {
            out[pos] = acc as u8;
            acc >>= 8;
            bits -= 8;
            pos += 1;
        }
    }
    out[31] = acc as u8;

    out
}

/// Reduces a 512-bit little-endian integer modulo `ℓ`.
///
/// Every 64-byte input is a valid integer, so this cannot fail. The result
/// is the canonical representative in `[0, ℓ)`.
pub fn reduce(wide: &[u8; 64]) -> [u8; 32] {
    reduce_limbs(load_limbs::<24>(wide))
}

/// Computes `(a·b + c) mod ℓ`.
///
/// Inputs may be any 256-bit values; they need not be reduced. The 12×12
/// limb product is accumulated on top of `c`, carried once, then run through
/// the same reduction cascade as [`reduce`].
pub fn mul_add(a: &[u8; 32], b: &[u8; 32], c: &[u8; 32]) -> [u8; 32] {
    let a = load_limbs::<12>(a);
    let b = load_limbs::<12>(b);
    let c = load_limbs::<12>(c);

    let mut s = [0i64; 24];
    s[..12].copy_from_slice(&c);
    for i in 0..12 {
        for j in 0..12 {
            s[i + j] += a[i] * b[j];
        }
    }

    for i in (0..=22).step_by(2) {
        carry_signed(&mut s, i);
    }
    for i in (1..=21).step_by(2) {
        carry_signed(&mut s, i);
    }

    reduce_limbs(s)
}

/// Returns whether `s` is strictly less than `ℓ`.
///
/// Variable time. Only meant for public values such as the `S` half of a
/// signature under verification.
pub fn is_canonical(s: &[u8; 32]) -> bool {
    for (byte, l) in s.iter().zip(L_BYTES.iter()).rev() {
        if byte != l {
            return byte < l;
        }
    }
    false
}

/// Recodes a scalar into 256 signed digits for sliding-window multiplication.
///
/// ## Output
///
/// Each digit is zero or odd with magnitude at most 15, and
///
/// ```text
/// Σ r[i]·2ⁱ = a
/// ```
///
/// Scanning from the least-significant bit, each nonzero digit greedily
/// absorbs set bits up to six positions above it while the combined digit
/// stays within `[−15, 15]`. Absorbing by subtraction propagates a borrow
/// upward as a carry into the next zero digit.
///
/// ## Preconditions
///
/// `a < 2²⁵⁵`. A borrow out of the top digit has nowhere to go, so bit 255
/// must be clear. Reduced scalars always satisfy this. A set top bit trips a
/// debug assertion.
///
/// ## Timing
///
/// The control flow depends on the scalar bits. Use only with public
/// scalars.
pub fn slide(a: &[u8; 32]) -> [i8; 256] {
    debug_assert_eq!(a[31] & 0x80, 0, "slide needs a scalar below 2^255");

    let mut r = [0i8; 256];
    for (i, digit) in r.iter_mut().enumerate() {
        *digit = (1 & (a[i >> 3] >> (i & 7))) as i8;
    }

    for i in 0..256 {
        if r[i] == 0 {
            continue;
        }

        for b in 1..=6 {
            if i + b >= 256 {
                break;
            }
            if r[i + b] == 0 {
                continue;
            }

            let shifted = (r[i + b] as i32) << b;
            let current = r[i] as i32;
            if current + shifted <= 15 {
                r[i] = (current + shifted) as i8;
                r[i + b] = 0;
            } else if current - shifted >= -15 {
                r[i] = (current - shifted) as i8;
                for digit in r[i + b..].iter_mut() {
                    if *digit == 0 {
                        *digit = 1;
                        break;
                    }
                    *digit = 0;
                }
            } else {
                break;
            }
        }
    }

    r
}
