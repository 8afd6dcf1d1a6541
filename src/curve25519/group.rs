//! Edwards25519 group operations.
//!
//! The curve is the twisted Edwards curve
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²    over 𝔽ₚ, p = 2²⁵⁵ − 19
//! ```
//!
//! ## Coordinate systems
//!
//! Each formula is written for one specific pair of representations, and
//! conversions between them are explicit:
//!
//! - **GeP2**: projective `(X : Y : Z)`, the cheapest input for doubling.
//! - **GeP3**: extended `(X : Y : Z : T)` with `T = XY/Z`. Used for encoding,
//!   decoding, and as the left operand of every addition.
//! - **GeP1P1**: completed `((X : Z), (Y : T))`, the raw output of an
//!   addition or doubling before it is folded back into P2 or P3.
//! - **GeCached**: `(Y + X, Y − X, Z, 2d·T)`, a P3 point prepared for
//!   repeated use as the right operand of an addition.
//! - **GePrecomp**: `(y + x, y − x, 2d·x·y)` for an affine point (`Z = 1`),
//!   used for table entries.
//!
//! Outputs of additions and the cached/precomputed fields are loose field
//! elements. Conversions back to P2/P3 multiply them out, which leaves tight
//! coordinates again.
//!
//! ## Security properties
//!
//! Every operation except [`GeP3::from_bytes_vartime`] runs in constant time.
//! Decoding looks only at public data and branches on the validity of the
//! encoding.

use std::ops::Neg;

use log::debug;
use subtle::{Choice, ConditionallySelectable};

use super::field::{FieldElement, LooseFieldElement};
use super::table::{D, D2, SQRTM1};

/// Projective point `(X : Y : Z)` with `x = X/Z`, `y = Y/Z`.
#[derive(Clone, Copy, Debug)]
pub struct GeP2 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

/// Extended point `(X : Y : Z : T)` with `x = X/Z`, `y = Y/Z`, `xy = T/Z`.
///
/// This is the representation exchanged with callers: it is produced by
/// decoding and by fixed-base multiplication, and it is what gets encoded.
#[derive(Clone, Copy, Debug)]
pub struct GeP3 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

/// Completed point `((X : Z), (Y : T))`, with `x = X/Z` and `y = Y/T`.
///
/// Transient. Every addition and doubling produces one, and it is
/// immediately converted into the representation the caller needs next.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GeP1P1 {
    pub(crate) x: LooseFieldElement,
    pub(crate) y: LooseFieldElement,
    pub(crate) z: LooseFieldElement,
    pub(crate) t: LooseFieldElement,
}

/// Cached form of an extended point, ready to be added many times.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GeCached {
    pub(crate) yplusx: LooseFieldElement,
    pub(crate) yminusx: LooseFieldElement,
    pub(crate) z: LooseFieldElement,
    pub(crate) t2d: LooseFieldElement,
}

/// Precomputed form of an affine point, used in mixed additions.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GePrecomp {
    pub(crate) yplusx: LooseFieldElement,
    pub(crate) yminusx: LooseFieldElement,
    pub(crate) xy2d: LooseFieldElement,
}

const LOOSE_ZERO: LooseFieldElement = LooseFieldElement(FieldElement::ZERO.0);
const LOOSE_ONE: LooseFieldElement = LooseFieldElement(FieldElement::ONE.0);

/// Projects `(X : Y : Z)` to affine and encodes `y` with the sign of `x` in
/// bit 255.
fn encode(x: &FieldElement, y: &FieldElement, z: &FieldElement) -> [u8; 32] {
    let recip = z.invert();
    let x = *x * recip;
    let y = *y * recip;

    let mut out = y.to_bytes();
    out[31] ^= x.is_negative().unwrap_u8() << 7;
    out
}

impl GeP2 {
    /// The neutral element `(0 : 1 : 1)`.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    /// Encodes the point as 32 bytes: `y` canonically, the sign of `x` in
    /// the top bit.
    pub fn to_bytes(&self) -> [u8; 32] {
        encode(&self.x, &self.y, &self.z)
    }

    /// Doubles the point.
    ///
    /// ## Formula
    ///
    /// ```text
    /// X' = (X + Y)² − (Y² + X²)
    /// Y' = Y² + X²
    /// Z' = Y² − X²
    /// T' = 2Z² − (Y² − X²)
    /// ```
    pub(crate) fn double(&self) -> GeP1P1 {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz2 = self.z.double_square();
        let x_plus_y_sq = (self.x + self.y).square();

        let y = yy + xx;
        let z = yy - xx;
        let x = x_plus_y_sq - y.carry();
        let t = zz2 - z.carry();

        GeP1P1 { x, y, z, t }
    }
}

impl GeP3 {
    /// The neutral element `(0 : 1 : 1 : 0)`.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// Drops `T`.
    pub(crate) fn to_p2(&self) -> GeP2 {
        GeP2 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    pub(crate) fn to_cached(&self) -> GeCached {
        GeCached {
            yplusx: self.y + self.x,
            yminusx: self.y - self.x,
            z: self.z.into(),
            t2d: (self.t * D2).into(),
        }
    }

    /// Doubles the point by way of its projective form.
    pub(crate) fn double(&self) -> GeP1P1 {
        self.to_p2().double()
    }

    /// Encodes the point as 32 bytes: `y` canonically, the sign of `x` in
    /// the top bit.
    pub fn to_bytes(&self) -> [u8; 32] {
        encode(&self.x, &self.y, &self.z)
    }

    /// Decodes a 32-byte point encoding.
    ///
    /// ## Algorithm
    ///
    /// With `y` read from the low 255 bits, the curve equation gives
    ///
    /// ```text
    /// x² = u / v,    u = y² − 1,    v = d·y² + 1
    /// ```
    ///
    /// Because `p ≡ 5 (mod 8)`, the candidate
    ///
    /// ```text
    /// x = u · (u·v)^((p − 5) / 8)
    /// ```
    ///
    /// satisfies `v·x² = ±u` whenever a root exists. If the sign comes out
    /// wrong the candidate is multiplied by `√−1`. If neither sign matches
    /// there is no root and the encoding is rejected. Finally `x` is negated
    /// if its parity disagrees with bit 255.
    ///
    /// The value of `y` is not checked to be below `p`.
    ///
    /// ## Timing
    ///
    /// Variable time. The encoding is assumed to be public.
    pub fn from_bytes_vartime(bytes: &[u8; 32]) -> Option<Self> {
        let y = FieldElement::from_bytes(bytes);
        let z = FieldElement::ONE;

        let yy = y.square();
        let u = (yy - z).carry();
        let v = yy * D + z;
        let w = u * v;

        let mut x = w.pow22523() * u;

        let vxx = x.square() * v;
        if (vxx - u).is_nonzero() {
            if (vxx + u).is_nonzero() {
                debug!("rejecting point encoding: y has no matching x on the curve");
                return None;
            }
            x = x * SQRTM1;
        }

        let sign = Choice::from(bytes[31] >> 7);
        x.conditional_negate(x.is_negative() ^ sign);
        let t = x * y;

        Some(Self { x, y, z, t })
    }
}

impl Neg for GeP3 {
    type Output = GeP3;

    /// `−(x, y) = (−x, y)`.
    fn neg(self) -> GeP3 {
        GeP3 {
            x: (-self.x).carry(),
            y: self.y,
            z: self.z,
            t: (-self.t).carry(),
        }
    }
}

impl GeP1P1 {
    pub(crate) fn to_p2(&self) -> GeP2 {
        GeP2 {
            x: self.x * self.t,
            y: self.y * self.z,
            z: self.z * self.t,
        }
    }

    pub(crate) fn to_p3(&self) -> GeP3 {
        GeP3 {
            x: self.x * self.t,
            y: self.y * self.z,
            z: self.z * self.t,
            t: self.x * self.y,
        }
    }

    pub(crate) fn to_cached(&self) -> GeCached {
        self.to_p3().to_cached()
    }

    /// Computes `p + q` for a cached `q`.
    ///
    /// ## Formula
    ///
    /// ```text
    /// A = (Y₁ + X₁)·(Y₂ + X₂)      B = (Y₁ − X₁)·(Y₂ − X₂)
    /// C = 2d·T₁·T₂                 D = 2·Z₁·Z₂
    /// (X, Y, Z, T) = (A − B, A + B, D + C, D − C)
    /// ```
    ///
    /// The formula is unified, so it also holds for doubling and for the
    /// identity.
    pub(crate) fn from_sum(p: &GeP3, q: &GeCached) -> Self {
        Self::combine(p, &q.yplusx, &q.yminusx, &q.t2d, Some(&q.z), false)
    }

    /// Computes `p − q` for a cached `q`.
    ///
    /// Negating `q` swaps `Y + X` with `Y − X` and flips the sign of `T`,
    /// so this is [`GeP1P1::from_sum`] with those adjustments.
    pub(crate) fn from_difference(p: &GeP3, q: &GeCached) -> Self {
        Self::combine(p, &q.yminusx, &q.yplusx, &q.t2d, Some(&q.z), true)
    }

    /// Computes `p + q` for an affine precomputed `q`. Same as
    /// [`GeP1P1::from_sum`] with `Z₂ = 1`.
    pub(crate) fn from_mixed_sum(p: &GeP3, q: &GePrecomp) -> Self {
        Self::combine(p, &q.yplusx, &q.yminusx, &q.xy2d, None, false)
    }

    /// Computes `p − q` for an affine precomputed `q`.
    pub(crate) fn from_mixed_difference(p: &GeP3, q: &GePrecomp) -> Self {
        Self::combine(p, &q.yminusx, &q.yplusx, &q.xy2d, None, true)
    }

    /// Shared body of the four addition formulas.
    ///
    /// `q_z` is `None` for affine operands, in which case `D = 2·Z₁`.
    /// `subtract` only decides which of `D ± C` lands in `Z` and which in
    /// `T`. It is a fixed property of the call site, never secret.
    fn combine(
        p: &GeP3,
        q_plus: &LooseFieldElement,
        q_minus: &LooseFieldElement,
        q_t: &LooseFieldElement,
        q_z: Option<&LooseFieldElement>,
        subtract: bool,
    ) -> Self {
        let a = (p.y + p.x) * *q_plus;
        let b = (p.y - p.x) * *q_minus;
        let c = *q_t * p.t;
        let d = match q_z {
            Some(q_z) => {
                let zz = p.z * *q_z;
                (zz + zz).carry()
            }
            None => (p.z + p.z).carry(),
        };

        let x = a - b;
        let y = a + b;
        let (z, t) = if subtract { (d - c, d + c) } else { (d + c, d - c) };

        Self { x, y, z, t }
    }
}

impl GeCached {
    /// The neutral element `(1, 1, 1, 0)`.
    pub(crate) const IDENTITY: Self = Self {
        yplusx: LOOSE_ONE,
        yminusx: LOOSE_ONE,
        z: LOOSE_ONE,
        t2d: LOOSE_ZERO,
    };
}

impl GePrecomp {
    /// The neutral element `(1, 1, 0)`.
    pub(crate) const IDENTITY: Self = Self {
        yplusx: LOOSE_ONE,
        yminusx: LOOSE_ONE,
        xy2d: LOOSE_ZERO,
    };

    /// Builds the precomputed form of the affine point `(x, y)`.
    pub(crate) fn from_affine(x: &FieldElement, y: &FieldElement) -> Self {
        Self {
            yplusx: *y + *x,
            yminusx: *y - *x,
            xy2d: ((*x * *y) * D2).into(),
        }
    }
}

impl ConditionallySelectable for GeCached {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            yplusx: LooseFieldElement::conditional_select(&a.yplusx, &b.yplusx, choice),
            yminusx: LooseFieldElement::conditional_select(&a.yminusx, &b.yminusx, choice),
            z: LooseFieldElement::conditional_select(&a.z, &b.z, choice),
            t2d: LooseFieldElement::conditional_select(&a.t2d, &b.t2d, choice),
        }
    }
}

impl ConditionallySelectable for GePrecomp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            yplusx: LooseFieldElement::conditional_select(&a.yplusx, &b.yplusx, choice),
            yminusx: LooseFieldElement::conditional_select(&a.yminusx, &b.yminusx, choice),
            xy2d: LooseFieldElement::conditional_select(&a.xy2d, &b.xy2d, choice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve25519::table::SMALL_PRECOMP;

    /// Encoding of the base point `B = (x, 4/5)` with `x` even.
    const BASE_BYTES: [u8; 32] = [
        0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66,
    ];

    fn identity_bytes() -> [u8; 32] {
        let mut out = [0u8; 32];
        out[0] = 1;
        out
    }

    fn base() -> GeP3 {
        match GeP3::from_bytes_vartime(&BASE_BYTES) {
            Some(point) => point,
            None => panic!("base point must decode"),
        }
    }

    #[test]
    fn identity_encodes_as_one() {
        assert_eq!(GeP3::IDENTITY.to_bytes(), identity_bytes());
        assert_eq!(GeP2::IDENTITY.to_bytes(), identity_bytes());
    }

    #[test]
    fn base_point_round_trips() {
        let b = base();
        assert_eq!(b.to_bytes(), BASE_BYTES);
        assert_eq!(b.to_p2().to_bytes(), BASE_BYTES);
    }

    #[test]
    fn base_point_matches_table_coordinates() {
        let b = base();
        let recip = b.z.invert();
        assert_eq!((b.x * recip).to_bytes(), SMALL_PRECOMP[0][0]);
        assert_eq!((b.y * recip).to_bytes(), SMALL_PRECOMP[0][1]);
    }

    #[test]
    fn rejects_y_without_root() {
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        assert!(GeP3::from_bytes_vartime(&bytes).is_none());
        bytes[31] |= 0x80;
        assert!(GeP3::from_bytes_vartime(&bytes).is_none());
    }

    #[test]
    fn sign_bit_selects_negation() {
        let mut bytes = BASE_BYTES;
        bytes[31] |= 0x80;
        let neg = match GeP3::from_bytes_vartime(&bytes) {
            Some(point) => point,
            None => panic!("negated base point must decode"),
        };
        assert_eq!(neg.to_bytes(), bytes);
        assert_eq!((-base()).to_bytes(), bytes);
    }

    #[test]
    fn doubling_agrees_with_self_addition() {
        let b = base();
        let doubled = b.double().to_p3();
        let added = GeP1P1::from_sum(&b, &b.to_cached()).to_p3();
        assert_eq!(doubled.to_bytes(), added.to_bytes());
    }

    #[test]
    fn difference_undoes_sum() {
        let b = base();
        let two_b = b.double().to_p3();
        let back = GeP1P1::from_difference(&two_b, &b.to_cached()).to_p3();
        assert_eq!(back.to_bytes(), BASE_BYTES);
    }

    #[test]
    fn mixed_formulas_agree_with_cached_ones() {
        let b = base();
        let recip = b.z.invert();
        let precomp = GePrecomp::from_affine(&(b.x * recip), &(b.y * recip));
        let two_b = b.double().to_p3();

        let mixed = GeP1P1::from_mixed_sum(&two_b, &precomp).to_p3();
        let cached = GeP1P1::from_sum(&two_b, &b.to_cached()).to_p3();
        assert_eq!(mixed.to_bytes(), cached.to_bytes());

        let back = GeP1P1::from_mixed_difference(&two_b, &precomp).to_p2();
        assert_eq!(back.to_bytes(), BASE_BYTES);
    }

    #[test]
    fn adding_identity_is_neutral() {
        let b = base();
        let sum = GeP1P1::from_sum(&b, &GeCached::IDENTITY).to_p3();
        assert_eq!(sum.to_bytes(), BASE_BYTES);
        let sum = GeP1P1::from_mixed_sum(&b, &GePrecomp::IDENTITY).to_p3();
        assert_eq!(sum.to_bytes(), BASE_BYTES);
    }

    #[test]
    fn cached_selection_follows_choice() {
        let b = base().to_cached();
        let mut selected = GeCached::IDENTITY;
        selected.conditional_assign(&b, Choice::from(0));
        let p = GeP1P1::from_sum(&GeP3::IDENTITY, &selected).to_p3();
        assert_eq!(p.to_bytes(), identity_bytes());

        selected.conditional_assign(&b, Choice::from(1));
        let p = GeP1P1::from_sum(&GeP3::IDENTITY, &selected).to_p3();
        assert_eq!(p.to_bytes(), BASE_BYTES);
    }
}
