//! Limb pattern helpers.
//!
//! Every function here takes a bit index `n` and looks only at `n % 64`;
//! combining the result with the right limb (`n >> 6`) is up to the caller.

use crate::constants::{BIT_MASK, INDEX_SHIFT};

/// Returns the index of the limb holding bit `n`.
#[inline(always)]
pub const fn limb_index(n: usize) -> usize {
    n >> INDEX_SHIFT
}

/// Returns a limb with only bit `n % 64` set.
///
/// # Arguments
///
/// * `n` - Bit index, interpreted modulo 64.
#[inline(always)]
pub const fn single_bit_mask(n: usize) -> u64 {
    1u64 << (n & BIT_MASK)
}

/// Returns a limb with every bit set except bit `n % 64`.
///
/// # Arguments
///
/// * `n` - Bit index, interpreted modulo 64.
#[inline(always)]
pub const fn all_but_bit_mask(n: usize) -> u64 {
    !single_bit_mask(n)
}

/// Returns a limb with the lowest `n % 64` bits set.
///
/// Bit `n % 64` and everything above it are clear, so `0` for `n % 64 == 0`.
///
/// # Arguments
///
/// * `n` - Bit index, interpreted modulo 64.
#[inline(always)]
pub const fn low_bits_mask(n: usize) -> u64 {
    single_bit_mask(n).wrapping_sub(1)
}

/// Returns the index of the lowest set bit of `limb`.
///
/// # Returns
///
/// `Some(index)` in `0..64`, or `None` if the limb is zero.
#[inline(always)]
pub const fn first_in_limb(limb: u64) -> Option<usize> {
    if limb == 0 {
        None
    } else {
        Some(limb.trailing_zeros() as usize)
    }
}

/// Returns the index of the lowest set bit of a nonzero `limb`.
///
/// # Panics
///
/// Panics if `limb` is zero in debug mode. In release builds a zero limb
/// yields 64.
#[inline(always)]
pub fn first_in_limb_nonzero(limb: u64) -> usize {
    debug_assert!(limb != 0, "first_in_limb_nonzero called on zero limb");
    limb.trailing_zeros() as usize
}

/// Returns the index of the highest set bit of `limb`, or `None` if it is zero.
#[inline(always)]
pub const fn last_in_limb(limb: u64) -> Option<usize> {
    if limb == 0 {
        None
    } else {
        Some(63 - limb.leading_zeros() as usize)
    }
}

/// Returns `limb` with its lowest set bit cleared.
#[inline(always)]
pub const fn clear_lowest(limb: u64) -> u64 {
    limb & limb.wrapping_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bit_mask() {
        assert_eq!(single_bit_mask(0), 1);
        assert_eq!(single_bit_mask(5), 0b100000);
        assert_eq!(single_bit_mask(63), 0x8000000000000000);
        // Only n % 64 matters.
        assert_eq!(single_bit_mask(64), 1);
        assert_eq!(single_bit_mask(130), 0b100);
    }

    #[test]
    fn test_all_but_bit_mask() {
        assert_eq!(all_but_bit_mask(0), u64::MAX - 1);
        assert_eq!(all_but_bit_mask(63), 0x7FFFFFFFFFFFFFFF);
        assert_eq!(all_but_bit_mask(70), !0b1000000u64);
        for n in 0..128 {
            assert_eq!(all_but_bit_mask(n).count_ones(), 63);
            assert_eq!(all_but_bit_mask(n) & single_bit_mask(n), 0);
        }
    }

    #[test]
    fn test_low_bits_mask() {
        assert_eq!(low_bits_mask(0), 0);
        assert_eq!(low_bits_mask(1), 1);
        assert_eq!(low_bits_mask(8), 0xFF);
        assert_eq!(low_bits_mask(63), 0x7FFFFFFFFFFFFFFF);
        assert_eq!(low_bits_mask(64), 0);
        assert_eq!(low_bits_mask(72), 0xFF);
        for n in 0..64 {
            assert_eq!(low_bits_mask(n).count_ones() as usize, n);
        }
    }

    #[test]
    fn test_masks_at_usize_max() {
        assert_eq!(single_bit_mask(usize::MAX), 0x8000000000000000);
        assert_eq!(low_bits_mask(usize::MAX), 0x7FFFFFFFFFFFFFFF);
    }

    #[test]
    fn test_limb_index() {
        assert_eq!(limb_index(0), 0);
        assert_eq!(limb_index(63), 0);
        assert_eq!(limb_index(64), 1);
        assert_eq!(limb_index(130), 2);
    }

    #[test]
    fn test_first_in_limb() {
        assert_eq!(first_in_limb(0), None);
        assert_eq!(first_in_limb(1), Some(0));
        assert_eq!(first_in_limb(0b1011000), Some(3));
        assert_eq!(first_in_limb(0x8000000000000000), Some(63));
        assert_eq!(first_in_limb_nonzero(0b1011000), 3);
        assert_eq!(first_in_limb_nonzero(u64::MAX), 0);
    }

    #[test]
    fn test_last_in_limb() {
        assert_eq!(last_in_limb(0), None);
        assert_eq!(last_in_limb(1), Some(0));
        assert_eq!(last_in_limb(0b1011000), Some(6));
        assert_eq!(last_in_limb(u64::MAX), Some(63));
    }

    #[test]
    fn test_clear_lowest() {
        assert_eq!(clear_lowest(0), 0);
        assert_eq!(clear_lowest(0b1011000), 0b1010000);
        assert_eq!(clear_lowest(0x8000000000000000), 0);
    }
}
