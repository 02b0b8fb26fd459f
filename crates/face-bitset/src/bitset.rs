//! Fixed-capacity bitset over 64-bit limbs.
//!
//! A [`Bitset`] represents a subset of `0..face_length * 64`, typically the
//! vertices of one face of a polytope. The number of limbs is chosen at
//! construction and never changes.
//!
//! Bits at or above the caller's logical size but below the capacity are
//! padding. Nothing here treats them specially: [`Bitset::complement`] and
//! [`Bitset::fill`] set them, and scans report them. Callers that iterate up
//! to the capacity must keep them clear, for example with
//! [`Bitset::retain_below`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use aligned_vec::{AVec, ConstAlign, avec};

use crate::constants::{CACHE_LINE_SIZE, LIMB_BITS};
use crate::error::BitsetError;
use crate::limb::{
    all_but_bit_mask, clear_lowest, first_in_limb_nonzero, limb_index, low_bits_mask,
    single_bit_mask,
};
use crate::scan::{
    SetBits, first_clear_at_or_after, first_diff_at_or_after, first_set_at_or_after, last_set,
};

pub(crate) type Limbs = AVec<u64, ConstAlign<CACHE_LINE_SIZE>>;

/// Fixed-length bitset whose limbs live in one cache-line aligned buffer.
#[derive(Clone)]
pub struct Bitset {
    limbs: Limbs,
}

impl Bitset {
    /// Creates an empty bitset with `face_length` limbs.
    ///
    /// # Arguments
    ///
    /// * `face_length` - Number of 64-bit limbs; the capacity is `face_length * 64`.
    pub fn new(face_length: usize) -> Self {
        Bitset {
            limbs: avec![[CACHE_LINE_SIZE]|0u64; face_length],
        }
    }

    /// Creates an empty bitset with just enough limbs to hold indices `0..bits`.
    pub fn with_capacity_for(bits: usize) -> Self {
        Bitset::new(bits.div_ceil(LIMB_BITS))
    }

    /// Wraps an already aligned limb buffer.
    pub(crate) fn from_aligned_limbs(limbs: Limbs) -> Self {
        Bitset { limbs }
    }

    /// Creates a bitset holding a copy of `limbs`.
    pub fn from_limbs(limbs: &[u64]) -> Self {
        let mut bitset = Bitset::new(limbs.len());
        bitset.limbs.copy_from_slice(limbs);
        bitset
    }

    /// Creates a bitset with `face_length` limbs containing exactly `indices`.
    ///
    /// # Returns
    ///
    /// * `Ok(Bitset)` - If every index is below the capacity.
    /// * `Err(BitsetError::IndexOutOfBounds)` - For the first index that is not.
    pub fn from_indices<I>(face_length: usize, indices: I) -> Result<Self, BitsetError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut bitset = Bitset::new(face_length);
        for n in indices {
            bitset.insert(n)?;
        }
        Ok(bitset)
    }

    /// Returns the number of limbs.
    #[inline(always)]
    pub fn face_length(&self) -> usize {
        self.limbs.len()
    }

    /// Returns the number of representable indices (`face_length * 64`).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.limbs.len() * LIMB_BITS
    }

    /// Returns the raw limbs.
    #[inline(always)]
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Returns the raw limbs mutably. Padding hygiene is up to the caller.
    #[inline(always)]
    pub fn limbs_mut(&mut self) -> &mut [u64] {
        &mut self.limbs
    }

    #[inline(always)]
    fn check_index(&self, n: usize) -> Result<(), BitsetError> {
        if limb_index(n) < self.limbs.len() {
            Ok(())
        } else {
            Err(BitsetError::IndexOutOfBounds {
                index: n,
                capacity: self.capacity(),
            })
        }
    }

    #[inline(always)]
    fn check_same_length(&self, other: &Bitset) -> Result<(), BitsetError> {
        if self.limbs.len() == other.limbs.len() {
            Ok(())
        } else {
            Err(BitsetError::SizeMismatch {
                left: self.limbs.len(),
                right: other.limbs.len(),
            })
        }
    }

    // Membership

    /// Checks whether `n` is in the set.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Whether bit `n` is set.
    /// * `Err(BitsetError::IndexOutOfBounds)` - If `n >= capacity`.
    #[inline(always)]
    pub fn contains(&self, n: usize) -> Result<bool, BitsetError> {
        self.check_index(n)?;
        Ok(self.contains_unchecked(n))
    }

    /// Adds `n` to the set. Adding a member again changes nothing.
    ///
    /// # Returns
    ///
    /// `Err(BitsetError::IndexOutOfBounds)` if `n >= capacity`; the set is
    /// left untouched in that case.
    #[inline(always)]
    pub fn insert(&mut self, n: usize) -> Result<(), BitsetError> {
        self.check_index(n)?;
        self.insert_unchecked(n);
        Ok(())
    }

    /// Removes `n` from the set. Removing a non-member changes nothing.
    ///
    /// # Returns
    ///
    /// `Err(BitsetError::IndexOutOfBounds)` if `n >= capacity`; the set is
    /// left untouched in that case.
    #[inline(always)]
    pub fn remove(&mut self, n: usize) -> Result<(), BitsetError> {
        self.check_index(n)?;
        self.remove_unchecked(n);
        Ok(())
    }

    /// Checks whether `n` is in the set without returning an error.
    ///
    /// # Panics
    ///
    /// Panics if `n >= capacity`.
    #[inline(always)]
    pub fn contains_unchecked(&self, n: usize) -> bool {
        debug_assert!(n < self.capacity(), "index {n} out of bounds");
        self.limbs[limb_index(n)] & single_bit_mask(n) != 0
    }

    /// Adds `n` to the set without returning an error.
    ///
    /// # Panics
    ///
    /// Panics if `n >= capacity`.
    #[inline(always)]
    pub fn insert_unchecked(&mut self, n: usize) {
        debug_assert!(n < self.capacity(), "index {n} out of bounds");
        self.limbs[limb_index(n)] |= single_bit_mask(n);
    }

    /// Removes `n` from the set without returning an error.
    ///
    /// # Panics
    ///
    /// Panics if `n >= capacity`.
    #[inline(always)]
    pub fn remove_unchecked(&mut self, n: usize) {
        debug_assert!(n < self.capacity(), "index {n} out of bounds");
        self.limbs[limb_index(n)] &= all_but_bit_mask(n);
    }

    /// Inserts `n` if `value` is true, removes it otherwise.
    pub fn set_to(&mut self, n: usize, value: bool) -> Result<(), BitsetError> {
        if value {
            self.insert(n)
        } else {
            self.remove(n)
        }
    }

    /// Toggles membership of `n`.
    pub fn flip(&mut self, n: usize) -> Result<(), BitsetError> {
        self.check_index(n)?;
        self.limbs[limb_index(n)] ^= single_bit_mask(n);
        Ok(())
    }

    // Scanning

    /// Returns the smallest member `>= n`, or `None` if there is none.
    ///
    /// Calling this with `n = 0` and then `previous + 1` visits every member
    /// once in increasing order.
    #[inline(always)]
    pub fn next_set(&self, n: usize) -> Option<usize> {
        first_set_at_or_after(&self.limbs, self.limbs.len(), n)
    }

    /// Returns the smallest non-member `>= n` below the capacity.
    pub fn next_clear(&self, n: usize) -> Option<usize> {
        first_clear_at_or_after(&self.limbs, self.limbs.len(), n)
    }

    /// Returns the smallest index `>= n` on which `self` and `other` disagree.
    pub fn next_diff(&self, other: &Bitset, n: usize) -> Result<Option<usize>, BitsetError> {
        self.check_same_length(other)?;
        Ok(first_diff_at_or_after(
            &self.limbs,
            &other.limbs,
            self.limbs.len(),
            n,
        ))
    }

    /// Returns the smallest member.
    #[inline(always)]
    pub fn first(&self) -> Option<usize> {
        self.next_set(0)
    }

    /// Returns the largest member.
    pub fn last(&self) -> Option<usize> {
        last_set(&self.limbs, self.limbs.len())
    }

    /// Returns the smallest index below the capacity that is not a member.
    pub fn first_in_complement(&self) -> Option<usize> {
        self.next_clear(0)
    }

    /// Removes and returns the smallest member.
    pub fn pop_first(&mut self) -> Option<usize> {
        let (i, limb) = self
            .limbs
            .iter()
            .enumerate()
            .find(|&(_, &limb)| limb != 0)
            .map(|(i, &limb)| (i, limb))?;
        self.limbs[i] = clear_lowest(limb);
        Some(i * LIMB_BITS + first_in_limb_nonzero(limb))
    }

    /// Returns an iterator over the members in increasing order.
    #[inline]
    pub fn iter(&self) -> SetBits<'_> {
        SetBits::new(&self.limbs)
    }

    // Whole-set queries and updates

    /// Returns the number of members.
    #[inline]
    pub fn count(&self) -> usize {
        self.limbs.iter().map(|limb| limb.count_ones() as usize).sum()
    }

    /// Checks if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.limbs.fill(0);
    }

    /// Sets every bit up to the capacity, padding included.
    pub fn fill(&mut self) {
        self.limbs.fill(u64::MAX);
    }

    /// Makes the set exactly `0..n`.
    ///
    /// # Returns
    ///
    /// `Err(BitsetError::IndexOutOfBounds)` if `n > capacity`.
    pub fn set_first_n(&mut self, n: usize) -> Result<(), BitsetError> {
        if n > self.capacity() {
            return Err(BitsetError::IndexOutOfBounds {
                index: n,
                capacity: self.capacity(),
            });
        }
        let full = limb_index(n);
        self.limbs[..full].fill(u64::MAX);
        if full < self.limbs.len() {
            self.limbs[full] = low_bits_mask(n);
            self.limbs[full + 1..].fill(0);
        }
        Ok(())
    }

    /// Clears every bit at index `n` and above. Does nothing if `n >= capacity`.
    pub fn retain_below(&mut self, n: usize) {
        let i = limb_index(n);
        if i < self.limbs.len() {
            self.limbs[i] &= low_bits_mask(n);
            self.limbs[i + 1..].fill(0);
        }
    }

    /// Overwrites this set with the contents of `other`.
    pub fn copy_from(&mut self, other: &Bitset) -> Result<(), BitsetError> {
        self.check_same_length(other)?;
        self.limbs.copy_from_slice(&other.limbs);
        Ok(())
    }

    /// Compares two sets of the same face length.
    ///
    /// Unlike `==`, this reports a face length mismatch as an error instead
    /// of answering `false`.
    pub fn equals(&self, other: &Bitset) -> Result<bool, BitsetError> {
        self.check_same_length(other)?;
        Ok(self.limbs() == other.limbs())
    }

    /// Checks whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &Bitset) -> Result<bool, BitsetError> {
        self.check_same_length(other)?;
        Ok(self
            .limbs
            .iter()
            .zip(other.limbs.iter())
            .all(|(&a, &b)| a & !b == 0))
    }

    /// Checks whether every member of `other` is also in `self`.
    pub fn is_superset(&self, other: &Bitset) -> Result<bool, BitsetError> {
        other.is_subset(self)
    }

    /// Checks whether the two sets share no member.
    pub fn is_disjoint(&self, other: &Bitset) -> Result<bool, BitsetError> {
        self.check_same_length(other)?;
        Ok(self
            .limbs
            .iter()
            .zip(other.limbs.iter())
            .all(|(&a, &b)| a & b == 0))
    }

    /// Compares the sorted member lists of both sets lexicographically.
    pub fn lex_cmp(&self, other: &Bitset) -> Result<Ordering, BitsetError> {
        let Some(d) = self.next_diff(other, 0)? else {
            return Ok(Ordering::Equal);
        };
        // Both lists agree below `d`; the one holding `d` is smaller unless the
        // other list stops there.
        let (holder, rest) = if self.contains_unchecked(d) {
            (Ordering::Less, other)
        } else {
            (Ordering::Greater, self)
        };
        if rest.next_set(d + 1).is_some() {
            Ok(holder)
        } else {
            Ok(holder.reverse())
        }
    }

    // Set algebra

    fn zip_with(
        &self,
        other: &Bitset,
        op: impl Fn(u64, u64) -> u64,
    ) -> Result<Bitset, BitsetError> {
        self.check_same_length(other)?;
        let mut result = Bitset::new(self.limbs.len());
        for ((r, &a), &b) in result
            .limbs
            .iter_mut()
            .zip(self.limbs.iter())
            .zip(other.limbs.iter())
        {
            *r = op(a, b);
        }
        Ok(result)
    }

    fn zip_assign(
        &mut self,
        other: &Bitset,
        op: impl Fn(u64, u64) -> u64,
    ) -> Result<(), BitsetError> {
        self.check_same_length(other)?;
        for (a, &b) in self.limbs.iter_mut().zip(other.limbs.iter()) {
            *a = op(*a, b);
        }
        Ok(())
    }

    /// Returns the members common to both sets.
    pub fn intersection(&self, other: &Bitset) -> Result<Bitset, BitsetError> {
        self.zip_with(other, |a, b| a & b)
    }

    /// Returns the members of either set.
    pub fn union(&self, other: &Bitset) -> Result<Bitset, BitsetError> {
        self.zip_with(other, |a, b| a | b)
    }

    /// Returns the members of `self` that are not in `other`.
    pub fn difference(&self, other: &Bitset) -> Result<Bitset, BitsetError> {
        self.zip_with(other, |a, b| a & !b)
    }

    /// Returns the members of exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &Bitset) -> Result<Bitset, BitsetError> {
        self.zip_with(other, |a, b| a ^ b)
    }

    /// Returns every index below the capacity that is not a member, padding included.
    pub fn complement(&self) -> Bitset {
        let mut result = self.clone();
        result.complement_in_place();
        result
    }

    /// Keeps only the members also in `other`.
    pub fn intersect_with(&mut self, other: &Bitset) -> Result<(), BitsetError> {
        self.zip_assign(other, |a, b| a & b)
    }

    /// Adds every member of `other`.
    pub fn union_with(&mut self, other: &Bitset) -> Result<(), BitsetError> {
        self.zip_assign(other, |a, b| a | b)
    }

    /// Removes every member of `other`.
    pub fn difference_with(&mut self, other: &Bitset) -> Result<(), BitsetError> {
        self.zip_assign(other, |a, b| a & !b)
    }

    /// Toggles every member of `other`.
    pub fn symmetric_difference_with(&mut self, other: &Bitset) -> Result<(), BitsetError> {
        self.zip_assign(other, |a, b| a ^ b)
    }

    /// Flips every bit up to the capacity, padding included.
    pub fn complement_in_place(&mut self) {
        for limb in self.limbs.iter_mut() {
            *limb = !*limb;
        }
    }
}

// Comparison and hashing

impl PartialEq for Bitset {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.limbs() == other.limbs()
    }
}

impl Eq for Bitset {}

impl Hash for Bitset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs().hash(state);
    }
}

// Operator trait implementations
//
// Operators cannot return a `Result`, so a face length mismatch panics.

fn or_panic<T>(result: Result<T, BitsetError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

impl std::ops::BitAnd for &Bitset {
    type Output = Bitset;

    fn bitand(self, rhs: Self) -> Self::Output {
        or_panic(self.intersection(rhs))
    }
}

impl std::ops::BitOr for &Bitset {
    type Output = Bitset;

    fn bitor(self, rhs: Self) -> Self::Output {
        or_panic(self.union(rhs))
    }
}

impl std::ops::BitXor for &Bitset {
    type Output = Bitset;

    fn bitxor(self, rhs: Self) -> Self::Output {
        or_panic(self.symmetric_difference(rhs))
    }
}

impl std::ops::Sub for &Bitset {
    type Output = Bitset;

    fn sub(self, rhs: Self) -> Self::Output {
        or_panic(self.difference(rhs))
    }
}

impl std::ops::Not for &Bitset {
    type Output = Bitset;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl std::ops::BitAndAssign<&Bitset> for Bitset {
    fn bitand_assign(&mut self, rhs: &Bitset) {
        or_panic(self.intersect_with(rhs));
    }
}

impl std::ops::BitOrAssign<&Bitset> for Bitset {
    fn bitor_assign(&mut self, rhs: &Bitset) {
        or_panic(self.union_with(rhs));
    }
}

impl std::ops::BitXorAssign<&Bitset> for Bitset {
    fn bitxor_assign(&mut self, rhs: &Bitset) {
        or_panic(self.symmetric_difference_with(rhs));
    }
}

impl std::ops::SubAssign<&Bitset> for Bitset {
    fn sub_assign(&mut self, rhs: &Bitset) {
        or_panic(self.difference_with(rhs));
    }
}

// Iterator support

impl<'a> IntoIterator for &'a Bitset {
    type Item = usize;
    type IntoIter = SetBits<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<usize> for Bitset {
    /// Inserts every index.
    ///
    /// # Panics
    ///
    /// Panics on the first index at or beyond the capacity.
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for n in iter {
            or_panic(self.insert(n));
        }
    }
}

// Text form

impl fmt::Display for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &limb in self.limbs.iter() {
            for bit in 0..LIMB_BITS {
                if (limb >> bit) & 1 != 0 {
                    write!(f, "1")?;
                } else {
                    write!(f, "0")?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitset")
            .field("face_length", &self.face_length())
            .field("members", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl FromStr for Bitset {
    type Err = BitsetError;

    /// Parses a string of `'0'` and `'1'`, index 0 first.
    ///
    /// The string is taken as is; surrounding whitespace is an invalid character.
    ///
    /// # Returns
    ///
    /// * `Ok(Bitset)` - With `len / 64` limbs.
    /// * `Err(BitsetError::InvalidChar)` - On any other character.
    /// * `Err(BitsetError::InvalidLength)` - If the length is not a multiple of 64.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = s.chars().find(|&c| c != '0' && c != '1') {
            return Err(BitsetError::InvalidChar(c));
        }
        if s.len() % LIMB_BITS != 0 {
            return Err(BitsetError::InvalidLength { len: s.len() });
        }

        let mut bitset = Bitset::new(s.len() / LIMB_BITS);
        for (n, _) in s.bytes().enumerate().filter(|&(_, b)| b == b'1') {
            bitset.insert_unchecked(n);
        }
        Ok(bitset)
    }
}
