//! The full solver: chain merging, vitality, and territory criteria.

use crate::healthy::{compute_healthy, HealthyMode};
use crate::life::{find_test_sets, test_alive};
use crate::merge::merge_chains;
use crate::safe_set::SafeSet;
use crate::source::DecompositionSource;
use crate::stats::SolverStats;
use crate::territory::is_territory;
use seki_board::Board;
use seki_core::{Color, RegionId};
use seki_region::{Decomposition, RegionFlag};

/// The extended static safety solver.
///
/// Runs the base unconditional-life criterion over *chains* — groups
/// merged across vital connection regions — with the vitality-extended
/// healthy predicate, then applies two further criteria: two-eye
/// sufficient regions, and surrounded regions (singly and in pairs)
/// passing the static territory test. Every addition re-checks the
/// safe-set disjointness invariant.
#[derive(Debug)]
pub struct SafetySolver<'a> {
    board: &'a Board,
    regions: DecompositionSource<'a>,
    stats: SolverStats,
}

impl<'a> SafetySolver<'a> {
    /// Build a solver owning its decomposition.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            regions: DecompositionSource::owned(board),
            stats: SolverStats::default(),
        }
    }

    /// Build a solver borrowing a caller-owned decomposition.
    pub fn with_decomposition(board: &'a Board, regions: &'a mut Decomposition) -> Self {
        Self {
            board,
            regions: DecompositionSource::Borrowed(regions),
            stats: SolverStats::default(),
        }
    }

    /// The board under analysis.
    pub fn board(&self) -> &Board {
        self.board
    }

    /// The decomposition in use.
    pub fn regions(&self) -> &Decomposition {
        self.regions.get()
    }

    /// Counters from the most recent run.
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Prove safe points with the full criteria set.
    ///
    /// Idempotent for an unchanged board: the decomposition scan is
    /// hash-gated; groups, merges, healthy links, and safe marks are
    /// recomputed from scratch in deterministic order.
    pub fn find_safe_points(&mut self) -> SafeSet {
        let board = self.board;
        let decomp = self.regions.get_mut();
        decomp.ensure_current(board);
        decomp.generate_groups();
        let merges = merge_chains(decomp, board);
        compute_healthy(decomp, board, HealthyMode::WithVitality);

        let mut safe = SafeSet::new();
        for color in Color::both() {
            for set in find_test_sets(decomp, color) {
                test_alive(decomp, set, &mut safe, color);
            }
        }
        safe.assert_disjoint();

        find_two_vital_areas(decomp, board, &mut safe);
        safe.assert_disjoint();

        for color in Color::both() {
            find_surrounded_safe_areas(decomp, board, &mut safe, color);
            safe.assert_disjoint();
        }

        self.stats = SolverStats::collect(self.regions.get(), &safe, merges);
        safe
    }
}

/// Mark two-eye-sufficient regions safe outright.
///
/// A region disjoint from every proven point that statically yields two
/// eyes is safe independent of its neighbors' aliveness.
fn find_two_vital_areas(decomp: &mut Decomposition, board: &Board, safe: &mut SafeSet) {
    for color in Color::both() {
        for rid in decomp.regions_of(color).to_vec() {
            let untouched = {
                let pts = decomp.region(rid).points();
                pts.is_disjoint_from(safe.get(Color::Black))
                    && pts.is_disjoint_from(safe.get(Color::White))
            };
            if untouched && decomp.flag(rid, RegionFlag::TwoVital, board) {
                safe.add(color, decomp.region(rid).points());
                decomp.mark_region_safe(rid);
                safe.assert_disjoint();
            }
        }
    }
}

/// Prove surrounded single regions safe, to a fixpoint, then try
/// region pairs.
///
/// A region qualifies when it is not yet safe, touches at least one
/// safe block, is disjoint from every proven point, and passes the
/// territory test. Proving one region can seal another, so the scan
/// restarts after every addition.
fn find_surrounded_safe_areas(
    decomp: &mut Decomposition,
    board: &Board,
    safe: &mut SafeSet,
    color: Color,
) {
    decomp.set_safe_flags(safe.get(Color::Black), safe.get(Color::White));
    loop {
        let any_safe = safe.both();
        let mut found = None;
        for rid in decomp.regions_of(color).to_vec() {
            if !decomp.region(rid).is_safe()
                && decomp.some_adjacent_block_safe(rid)
                && decomp.region(rid).points().is_disjoint_from(&any_safe)
                && is_territory(
                    decomp,
                    board,
                    decomp.region(rid).points(),
                    safe.get(color),
                    color,
                )
            {
                found = Some(rid);
                break;
            }
        }
        let Some(rid) = found else {
            break;
        };
        safe.add(color, decomp.region(rid).points());
        decomp.mark_region_safe(rid);
        decomp.set_safe_flags(safe.get(Color::Black), safe.get(Color::White));
    }
    find_surrounded_region_pairs(decomp, board, safe, color);
}

/// Prove region pairs safe, to a fixpoint.
///
/// Two regions sharing an unsafe block can seal it between them: the
/// block becomes interior to their union, which may pass the territory
/// test although neither region does alone. Only the union is added.
fn find_surrounded_region_pairs(
    decomp: &mut Decomposition,
    board: &Board,
    safe: &mut SafeSet,
    color: Color,
) {
    loop {
        let Some((r1, r2)) = find_safe_pair(decomp, board, safe, color) else {
            break;
        };
        let union = decomp
            .region(r1)
            .points()
            .union(decomp.region(r2).points());
        safe.add(color, &union);
        decomp.set_safe_flags(safe.get(Color::Black), safe.get(Color::White));
        safe.assert_disjoint();
    }
}

/// Scan all region pairs of `color` for one whose union is territory.
fn find_safe_pair(
    decomp: &Decomposition,
    board: &Board,
    safe: &SafeSet,
    color: Color,
) -> Option<(RegionId, RegionId)> {
    let any_safe = safe.both();
    let rids = decomp.regions_of(color);
    for &r1 in rids {
        if decomp.region(r1).is_safe()
            || !decomp.some_adjacent_block_safe(r1)
            || decomp.region(r1).points().overlaps(&any_safe)
        {
            continue;
        }
        for &r2 in rids {
            if r2 == r1 || decomp.region(r2).points().overlaps(&any_safe) {
                continue;
            }
            if !have_shared_unsafe_block(decomp, r1, r2) {
                continue;
            }
            let union = decomp
                .region(r1)
                .points()
                .union(decomp.region(r2).points());
            if is_territory(decomp, board, &union, safe.get(color), color) {
                return Some((r1, r2));
            }
        }
    }
    None
}

/// `true` if the regions share a block that is not safe.
fn have_shared_unsafe_block(decomp: &Decomposition, r1: RegionId, r2: RegionId) -> bool {
    decomp.region(r1).blocks().iter().any(|&bid| {
        !decomp.block(bid).is_safe() && decomp.region(r2).blocks().contains(&bid)
    })
}
