//! Diagnostic counters for a solver run.

use crate::safe_set::SafeSet;
use seki_core::Color;
use seki_region::Decomposition;

/// Counters describing how much of a position a run proved.
///
/// Logging and test diagnostics only — not part of the functional
/// contract. Mirrors what the solver knows at the end of a
/// `find_safe_points` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Regions across both colors.
    pub total_regions: usize,
    /// Regions whose points were all proven safe.
    pub proved_regions: usize,
    /// Blocks across both colors.
    pub total_blocks: usize,
    /// Blocks whose stones overlap the proven points.
    pub proved_blocks: usize,
    /// Chain merges applied during the run.
    pub merges: usize,
}

impl SolverStats {
    /// Collect counters from a finished run.
    pub fn collect(decomp: &Decomposition, safe: &SafeSet, merges: usize) -> Self {
        let proved = safe.both();
        let mut stats = SolverStats {
            merges,
            ..SolverStats::default()
        };
        for color in Color::both() {
            for &rid in decomp.regions_of(color) {
                stats.total_regions += 1;
                if decomp.region(rid).points().is_subset_of(&proved) {
                    stats.proved_regions += 1;
                }
            }
            for &bid in decomp.blocks_of(color) {
                stats.total_blocks += 1;
                if decomp.block(bid).stones().overlaps(&proved) {
                    stats.proved_blocks += 1;
                }
            }
        }
        stats
    }
}
