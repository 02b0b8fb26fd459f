//! Random bitsets drawn from a caller-owned generator.
//!
//! Nothing here touches a global generator; seed a `StdRng` with
//! `SeedableRng::seed_from_u64` for reproducible runs.

use rand::Rng;

use crate::bitset::Bitset;
use crate::constants::LIMB_BITS;
use crate::error::BitsetError;
use crate::limb::{clear_lowest, first_in_limb_nonzero};

impl Bitset {
    /// Creates a bitset whose capacity bits are each set with probability 1/2.
    ///
    /// # Arguments
    ///
    /// * `face_length` - Number of limbs.
    /// * `rng` - Generator to draw from.
    pub fn random<R: Rng + ?Sized>(face_length: usize, rng: &mut R) -> Self {
        let mut bitset = Bitset::new(face_length);
        for limb in bitset.limbs_mut() {
            *limb = rng.random::<u64>();
        }
        bitset
    }

    /// Creates a bitset where each index below `size` is present with probability `p`.
    ///
    /// Indices at or above `size` stay clear.
    ///
    /// # Arguments
    ///
    /// * `face_length` - Number of limbs.
    /// * `size` - Logical size of the ground set.
    /// * `p` - Probability of membership.
    /// * `rng` - Generator to draw from.
    ///
    /// # Returns
    ///
    /// * `Err(BitsetError::IndexOutOfBounds)` - If `size` exceeds the capacity.
    /// * `Err(BitsetError::InvalidProbability)` - If `p` is not in `0.0..=1.0` (NaN included).
    pub fn random_with_density<R: Rng + ?Sized>(
        face_length: usize,
        size: usize,
        p: f64,
        rng: &mut R,
    ) -> Result<Self, BitsetError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(BitsetError::InvalidProbability(p));
        }
        let mut bitset = Bitset::new(face_length);
        if size > bitset.capacity() {
            return Err(BitsetError::IndexOutOfBounds {
                index: size,
                capacity: bitset.capacity(),
            });
        }
        for n in 0..size {
            if rng.random_bool(p) {
                bitset.insert_unchecked(n);
            }
        }
        Ok(bitset)
    }

    /// Returns a member chosen uniformly at random, or `None` if the set is empty.
    pub fn random_member<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let count = self.count();
        if count == 0 {
            return None;
        }

        let mut k = rng.random_range(0..count);
        for (i, &limb) in self.limbs().iter().enumerate() {
            let ones = limb.count_ones() as usize;
            if k >= ones {
                k -= ones;
                continue;
            }

            let mut limb = limb;
            for _ in 0..k {
                limb = clear_lowest(limb);
            }
            return Some(i * LIMB_BITS + first_in_limb_nonzero(limb));
        }

        unreachable!("member rank {k} beyond population count");
    }
}
