//! Fixed-capacity bitsets for face enumeration.
//!
//! A face of a polytope is stored as the set of its vertices, one bit per
//! vertex, packed into 64-bit limbs. [`Bitset`] offers the membership,
//! scanning and set-algebra primitives that face-lattice algorithms run in
//! their innermost loops; [`scan`] exposes the same scanning kernels over raw
//! limb slices.

pub mod bitset;
pub mod constants;
pub mod error;
pub mod limb;
mod persist;
mod random;
pub mod scan;
pub mod scan_stats;

pub use bitset::Bitset;
pub use error::BitsetError;
pub use scan::{SetBits, first_set_at_or_after};
