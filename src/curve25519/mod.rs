//! Curve25519 / Edwards25519 arithmetic.
//!
//! The layers build on each other, leaves first:
//!
//! - `field`: arithmetic in GF(2²⁵⁵ − 19) with tight and loose limb bounds.
//! - [`scalar`]: reduction and multiply-add modulo the group order `ℓ`.
//! - [`group`]: point representations, addition, doubling, encoding.
//! - [`scalar_mul`]: fixed-base, variable-base and double-base
//!   multiplication.
//! - `table`: compiled-in curve constants and base-point tables.
//!
//! Field elements and the intermediate point forms stay private to the
//! crate. Callers work with byte encodings, [`group::GeP3`] and
//! [`group::GeP2`].

pub(crate) mod field;
pub mod group;
pub mod scalar;
pub mod scalar_mul;
pub(crate) mod table;
