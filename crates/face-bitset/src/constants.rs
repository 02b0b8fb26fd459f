//! Global constants

/// Number of bits in one limb.
pub const LIMB_BITS: usize = 64;

/// Shift turning a bit index into a limb index (`n >> INDEX_SHIFT == n / LIMB_BITS`).
pub const INDEX_SHIFT: u32 = 6;

/// Mask extracting the bit position inside a limb (`n & BIT_MASK == n % LIMB_BITS`).
pub const BIT_MASK: usize = LIMB_BITS - 1;

/// Size of a CPU cache line in bytes. Limb buffers are aligned to it.
pub const CACHE_LINE_SIZE: usize = 64;
