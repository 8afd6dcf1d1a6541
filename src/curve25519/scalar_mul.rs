//! Scalar multiplication on Edwards25519.
//!
//! Three strategies live here, with different timing contracts:
//!
//! | Function | Point | Timing |
//! |---|---|---|
//! | [`scalarmult_small_precomp`] / [`scalarmult_base`] | fixed, tabulated | constant |
//! | [`scalarmult`] | any | constant |
//! | [`double_scalarmult_vartime`] | any plus the base point | **variable** |
//!
//! The constant-time routines inspect every table entry on every step and
//! pick the right one with masked moves, so neither the branch pattern nor
//! the memory access pattern depends on the scalar. The variable-time
//! routine indexes tables directly and skips zero digits. It must only be
//! given public scalars, as in signature verification.
//!
//! The Montgomery-ladder X25519 multiplication lives in
//! [`crate::keys::x25519`], since it works on Montgomery `u` coordinates
//! rather than on these point types.

use log::trace;
use subtle::{ConditionallySelectable, ConstantTimeEq};

use super::field::FieldElement;
use super::group::{GeCached, GeP1P1, GeP2, GeP3, GePrecomp};
use super::scalar::slide;
use super::table::{BI, SMALL_PRECOMP};

/// Affine `(x, y)` byte encodings of the 15 nonzero comb combinations
/// accepted by [`scalarmult_small_precomp`].
///
/// Entry `i − 1` must hold `Σⱼ bitⱼ(i)·2⁶⁴ʲ·P` for the base point `P`, and
/// every coordinate must be canonical with bit 255 clear.
pub type CombTable = [[[u8; 32]; 2]; 15];

/// Computes `a·P` for the fixed point `P` described by `table`.
///
/// ## Algorithm
///
/// The scalar is read as four 64-bit rows stacked on top of each other
/// (a 4-tooth comb). Column `i` of the comb gathers bit `i` of each row
/// into a 4-bit index, and the table holds the matching combination of
/// `P, 2⁶⁴P, 2¹²⁸P, 2¹⁹²P`. Walking the columns from 63 down to 0, the
/// accumulator is doubled once and the selected entry is mixed-added.
///
/// The table is expanded into precomputed form on every call, which costs
/// 15 multiplications and keeps the compiled-in data compact.
///
/// ## Timing
///
/// Constant time in `a`. All 15 entries are read for every column.
pub fn scalarmult_small_precomp(a: &[u8; 32], table: &CombTable) -> GeP3 {
    let mut multiples = [GePrecomp::IDENTITY; 15];
    for (entry, [x, y]) in multiples.iter_mut().zip(table.iter()) {
        let x = FieldElement::from_bytes_strict(x);
        let y = FieldElement::from_bytes_strict(y);
        *entry = GePrecomp::from_affine(&x, &y);
    }

    let mut h = GeP3::IDENTITY;
    for i in (0..64).rev() {
        let mut index = 0u8;
        for j in 0..4 {
            let bit = 1 & (a[8 * j + i / 8] >> (i & 7));
            index |= bit << j;
        }

        let mut selected = GePrecomp::IDENTITY;
        for (j, multiple) in multiples.iter().enumerate() {
            selected.conditional_assign(multiple, index.ct_eq(&(j as u8 + 1)));
        }

        let cached = h.to_cached();
        h = GeP1P1::from_sum(&h, &cached).to_p3();
        h = GeP1P1::from_mixed_sum(&h, &selected).to_p3();
    }

    h
}

/// Computes `a·B` for the Ed25519 base point `B`.
///
/// Constant time in `a`.
pub fn scalarmult_base(a: &[u8; 32]) -> GeP3 {
    scalarmult_small_precomp(a, &SMALL_PRECOMP)
}

/// Computes `scalar·A` for an arbitrary point `A`.
///
/// ## Algorithm
///
/// Fixed 4-bit windows. The multiples `0·A ..= 15·A` are built once in
/// cached form (even ones by doubling, odd ones by adding `A`). The scalar
/// is then consumed one nibble at a time from the most significant end:
/// four doublings, a masked 16-way selection of the nibble's multiple, and
/// one addition.
///
/// ## Timing
///
/// Constant time in `scalar`. Every step reads all 16 entries.
pub fn scalarmult(scalar: &[u8; 32], a: &GeP3) -> GeP2 {
    let mut ai_p2 = [GeP2::IDENTITY; 8];
    let mut ai = [GeCached::IDENTITY; 16];

    ai[1] = a.to_cached();
    ai_p2[1] = a.to_p2();

    for i in (2..16).step_by(2) {
        let doubled = ai_p2[i / 2].double();
        ai[i] = doubled.to_cached();
        if i < 8 {
            ai_p2[i] = doubled.to_p2();
        }

        let sum = GeP1P1::from_sum(a, &ai[i]);
        ai[i + 1] = sum.to_cached();
        if i < 7 {
            ai_p2[i + 1] = sum.to_p2();
        }
    }

    let mut r = GeP2::IDENTITY;
    for i in (0..256).step_by(4) {
        for _ in 0..3 {
            r = r.double().to_p2();
        }
        let u = r.double().to_p3();

        let index = (scalar[31 - i / 8] >> (4 - (i & 4))) & 0xf;
        let mut selected = GeCached::IDENTITY;
        for (j, entry) in ai.iter().enumerate() {
            selected.conditional_assign(entry, index.ct_eq(&(j as u8)));
        }

        r = GeP1P1::from_sum(&u, &selected).to_p2();
    }

    r
}

/// Computes `a·A + b·B` where `B` is the Ed25519 base point.
///
/// ## Algorithm
///
/// Both scalars are recoded with [`slide`] into signed odd digits in
/// `[−15, 15]`. The odd multiples `A, 3A, …, 15A` are computed in cached
/// form; those of `B` come from a compiled-in table. Starting at the highest
/// nonzero digit of either scalar, each position doubles the accumulator
/// and adds or subtracts the multiple named by each nonzero digit.
///
/// ## Preconditions
///
/// Both `a` and `b` must be below `2²⁵⁵`, as every reduced scalar is. See
/// [`slide`].
///
/// ## Timing
///
/// **Variable time.** Branches and table indices depend on both scalars.
/// Only use this with public scalars, as in signature verification.
pub fn double_scalarmult_vartime(a: &[u8; 32], big_a: &GeP3, b: &[u8; 32]) -> GeP2 {
    let a_slide = slide(a);
    let b_slide = slide(b);

    let a2 = big_a.double().to_p3();
    let mut ai = [GeCached::IDENTITY; 8];
    ai[0] = big_a.to_cached();
    for k in 1..8 {
        ai[k] = GeP1P1::from_sum(&a2, &ai[k - 1]).to_cached();
    }

    trace!(
        "double scalar multiplication: {} + {} nonzero digits",
        a_slide.iter().filter(|&&d| d != 0).count(),
        b_slide.iter().filter(|&&d| d != 0).count(),
    );

    let mut r = GeP2::IDENTITY;
    let Some(top) = (0..256).rev().find(|&i| a_slide[i] != 0 || b_slide[i] != 0) else {
        return r;
    };

    for i in (0..=top).rev() {
        let mut t = r.double();

        let digit = a_slide[i];
        if digit > 0 {
            t = GeP1P1::from_sum(&t.to_p3(), &ai[(digit / 2) as usize]);
        } else if digit < 0 {
            t = GeP1P1::from_difference(&t.to_p3(), &ai[(-digit / 2) as usize]);
        }

        let digit = b_slide[i];
        if digit > 0 {
            t = GeP1P1::from_mixed_sum(&t.to_p3(), &BI[(digit / 2) as usize]);
        } else if digit < 0 {
            t = GeP1P1::from_mixed_difference(&t.to_p3(), &BI[(-digit / 2) as usize]);
        }

        r = t.to_p2();
    }

    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scalar_from_u64(n: u64) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[..8].copy_from_slice(&n.to_le_bytes());
        out
    }

    fn base() -> GeP3 {
        scalarmult_base(&scalar_from_u64(1))
    }

    #[test]
    fn base_multiple_of_one_is_base_point() {
        let mut expected = [0x66u8; 32];
        expected[0] = 0x58;
        assert_eq!(scalarmult_base(&scalar_from_u64(1)).to_bytes(), expected);
    }

    #[test]
    fn zero_scalar_gives_identity() {
        let zero = [0u8; 32];
        let identity = GeP3::IDENTITY.to_bytes();
        assert_eq!(scalarmult_base(&zero).to_bytes(), identity);
        assert_eq!(scalarmult(&zero, &base()).to_bytes(), identity);
        assert_eq!(
            double_scalarmult_vartime(&zero, &base(), &zero).to_bytes(),
            identity
        );
    }

    #[test]
    fn small_multiples_agree_with_repeated_addition() {
        let b = base();
        let cached = b.to_cached();
        let mut acc = GeP3::IDENTITY;
        for n in 0..20u64 {
            let k = scalar_from_u64(n);
            assert_eq!(scalarmult_base(&k).to_bytes(), acc.to_bytes(), "n = {n}");
            assert_eq!(scalarmult(&k, &b).to_bytes(), acc.to_bytes(), "n = {n}");
            acc = GeP1P1::from_sum(&acc, &cached).to_p3();
        }
    }

    #[test]
    fn table_odd_multiples_are_consistent() {
        let b = base();
        for (k, entry) in BI.iter().enumerate() {
            let expected = scalarmult_base(&scalar_from_u64(2 * k as u64 + 1));
            let from_table = GeP1P1::from_mixed_sum(&GeP3::IDENTITY, entry).to_p3();
            assert_eq!(from_table.to_bytes(), expected.to_bytes());
            let computed = scalarmult(&scalar_from_u64(2 * k as u64 + 1), &b);
            assert_eq!(computed.to_bytes(), expected.to_bytes());
        }
    }

    #[test]
    fn strategies_agree_at_largest_accepted_scalar() {
        let mut a = [0xffu8; 32];
        a[31] = 0x7f;
        let b = base();

        let constant_time = scalarmult(&a, &b).to_bytes();
        assert_eq!(scalarmult_base(&a).to_bytes(), constant_time);
        assert_eq!(
            double_scalarmult_vartime(&a, &b, &[0u8; 32]).to_bytes(),
            constant_time
        );
        assert_eq!(
            double_scalarmult_vartime(&[0u8; 32], &b, &a).to_bytes(),
            constant_time
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "below 2^255")]
    fn vartime_rejects_scalars_with_top_bit() {
        double_scalarmult_vartime(&[0xffu8; 32], &base(), &[0u8; 32]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn strategies_agree(a in any::<[u8; 32]>(), k in any::<[u8; 32]>()) {
            let mut a = a;
            a[31] &= 0x7f;
            let point = scalarmult_base(&k);

            let constant_time = scalarmult(&a, &point).to_bytes();
            let vartime = double_scalarmult_vartime(&a, &point, &[0u8; 32]).to_bytes();
            prop_assert_eq!(constant_time, vartime);

            let fixed = scalarmult_base(&a).to_bytes();
            let vartime_base = double_scalarmult_vartime(&[0u8; 32], &point, &a).to_bytes();
            prop_assert_eq!(fixed, vartime_base);
            prop_assert_eq!(scalarmult(&a, &base()).to_bytes(), fixed);
        }

        #[test]
        fn encoding_round_trips(k in any::<[u8; 32]>()) {
            let point = scalarmult_base(&k);
            let bytes = point.to_bytes();
            let decoded = GeP3::from_bytes_vartime(&bytes);
            prop_assert!(decoded.is_some());
            if let Some(decoded) = decoded {
                prop_assert_eq!(decoded.to_bytes(), bytes);
            }
        }
    }
}
