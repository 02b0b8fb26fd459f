//! Ordered scanning over raw limb slices.
//!
//! These kernels work on `&[u64]` so that callers holding limbs in their own
//! buffers can use them directly. [`Bitset`](crate::bitset::Bitset) wraps
//! them with its own face length.

use std::iter::FusedIterator;

use crate::constants::{INDEX_SHIFT, LIMB_BITS};
use crate::limb::{
    first_in_limb, first_in_limb_nonzero, last_in_limb, limb_index, low_bits_mask,
};
use crate::scan_stats::record_scan;

/// Finds the smallest set bit at or after `n` among the first `word_count` limbs.
///
/// # Arguments
///
/// * `limbs` - Limb storage; only `limbs[..word_count]` is read.
/// * `word_count` - Number of limbs to scan.
/// * `n` - First bit index to consider.
///
/// # Returns
///
/// `Some(k)` with `n <= k < word_count * 64` and bit `k` set, such that no bit
/// in `n..k` is set. `None` if no bit in `n..word_count * 64` is set.
///
/// # Panics
///
/// Panics if `word_count > limbs.len()`.
#[inline]
pub fn first_set_at_or_after(limbs: &[u64], word_count: usize, n: usize) -> Option<usize> {
    let limbs = &limbs[..word_count];
    let i = limb_index(n);
    if i >= word_count {
        return None;
    }

    if let Some(bit) = first_in_limb(limbs[i] & !low_bits_mask(n)) {
        record_scan(1);
        return Some((i << INDEX_SHIFT) | bit);
    }

    for (j, &limb) in limbs.iter().enumerate().skip(i + 1) {
        if limb != 0 {
            record_scan(j - i + 1);
            return Some((j << INDEX_SHIFT) | first_in_limb_nonzero(limb));
        }
    }

    record_scan(word_count - i);
    None
}

/// Finds the smallest clear bit at or after `n` among the first `word_count` limbs.
///
/// # Returns
///
/// `Some(k)` with `n <= k < word_count * 64` and bit `k` clear, or `None` if
/// every bit in `n..word_count * 64` is set.
///
/// # Panics
///
/// Panics if `word_count > limbs.len()`.
pub fn first_clear_at_or_after(limbs: &[u64], word_count: usize, n: usize) -> Option<usize> {
    let limbs = &limbs[..word_count];
    let i = limb_index(n);
    if i >= word_count {
        return None;
    }

    if let Some(bit) = first_in_limb(!limbs[i] & !low_bits_mask(n)) {
        return Some((i << INDEX_SHIFT) | bit);
    }

    limbs
        .iter()
        .enumerate()
        .skip(i + 1)
        .find(|&(_, &limb)| limb != u64::MAX)
        .map(|(j, &limb)| (j << INDEX_SHIFT) | first_in_limb_nonzero(!limb))
}

/// Finds the smallest index at or after `n` where `a` and `b` differ.
///
/// # Panics
///
/// Panics if `word_count` exceeds the length of either slice.
pub fn first_diff_at_or_after(a: &[u64], b: &[u64], word_count: usize, n: usize) -> Option<usize> {
    let (a, b) = (&a[..word_count], &b[..word_count]);
    let i = limb_index(n);
    if i >= word_count {
        return None;
    }

    if let Some(bit) = first_in_limb((a[i] ^ b[i]) & !low_bits_mask(n)) {
        return Some((i << INDEX_SHIFT) | bit);
    }

    a.iter()
        .zip(b)
        .enumerate()
        .skip(i + 1)
        .find(|&(_, (&x, &y))| x != y)
        .map(|(j, (&x, &y))| (j << INDEX_SHIFT) | first_in_limb_nonzero(x ^ y))
}

/// Finds the largest set bit among the first `word_count` limbs.
///
/// # Panics
///
/// Panics if `word_count > limbs.len()`.
pub fn last_set(limbs: &[u64], word_count: usize) -> Option<usize> {
    limbs[..word_count]
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, &limb)| last_in_limb(limb).map(|bit| i * LIMB_BITS + bit))
}

/// An iterator that yields each set bit index of a limb slice in increasing order.
///
/// Each step is one [`first_set_at_or_after`] call starting just past the
/// previous result.
#[derive(Debug, Clone)]
pub struct SetBits<'a> {
    limbs: &'a [u64],
    next: usize,
}

impl<'a> SetBits<'a> {
    /// Creates a new `SetBits` over all of `limbs`.
    #[inline]
    pub fn new(limbs: &'a [u64]) -> SetBits<'a> {
        SetBits { limbs, next: 0 }
    }

    /// Creates a new `SetBits` starting at bit index `n`.
    #[inline]
    pub fn starting_at(limbs: &'a [u64], n: usize) -> SetBits<'a> {
        SetBits { limbs, next: n }
    }
}

impl Iterator for SetBits<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let found = first_set_at_or_after(self.limbs, self.limbs.len(), self.next);
        match found {
            Some(k) => self.next = k + 1,
            // Park past the end once exhausted.
            None => self.next = self.limbs.len() * LIMB_BITS,
        }
        found
    }
}

impl FusedIterator for SetBits<'_> {}
