//! Scan statistics, collected only with the `scan-stats` feature.
//!
//! Counters are process-wide and updated with relaxed atomics, so workers
//! scanning their own bitsets in parallel can share them.

#[cfg(feature = "scan-stats")]
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "scan-stats")]
static SCANS: AtomicU64 = AtomicU64::new(0);
#[cfg(feature = "scan-stats")]
static LIMBS_READ: AtomicU64 = AtomicU64::new(0);

/// Snapshot of the scan counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStats {
    /// Number of `first_set_at_or_after` calls.
    pub scans: u64,
    /// Number of limbs those calls read.
    pub limbs_read: u64,
}

impl ScanStats {
    /// Average number of limbs read per scan, or 0.0 without scans.
    pub fn limbs_per_scan(&self) -> f64 {
        if self.scans == 0 {
            0.0
        } else {
            self.limbs_read as f64 / self.scans as f64
        }
    }
}

/// Records one scan that read `limbs` limbs.
#[cfg(feature = "scan-stats")]
#[inline(always)]
pub(crate) fn record_scan(limbs: usize) {
    SCANS.fetch_add(1, Ordering::Relaxed);
    LIMBS_READ.fetch_add(limbs as u64, Ordering::Relaxed);
}

#[cfg(not(feature = "scan-stats"))]
#[inline(always)]
pub(crate) fn record_scan(_limbs: usize) {}

/// Returns the current counters.
#[cfg(feature = "scan-stats")]
pub fn snapshot() -> ScanStats {
    ScanStats {
        scans: SCANS.load(Ordering::Relaxed),
        limbs_read: LIMBS_READ.load(Ordering::Relaxed),
    }
}

/// Returns the current counters. Always zero without the `scan-stats` feature.
#[cfg(not(feature = "scan-stats"))]
pub fn snapshot() -> ScanStats {
    ScanStats::default()
}

/// Resets all counters to zero.
pub fn reset() {
    #[cfg(feature = "scan-stats")]
    SCANS.store(0, Ordering::Relaxed);
    #[cfg(feature = "scan-stats")]
    LIMBS_READ.store(0, Ordering::Relaxed);
}
