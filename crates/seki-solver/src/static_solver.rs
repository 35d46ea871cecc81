//! The base solver: the classical unconditional-life criterion.

use crate::healthy::{compute_healthy, HealthyMode};
use crate::life::{find_test_sets, test_alive};
use crate::safe_set::SafeSet;
use crate::source::DecompositionSource;
use crate::stats::SolverStats;
use seki_board::Board;
use seki_core::Color;
use seki_region::Decomposition;

/// Benson-style static safety: healthy regions plus the
/// unconditional-life fixpoint, with no chain merging and the plain
/// stone-liberty healthy predicate.
///
/// The solver may own its decomposition or borrow a caller-owned one;
/// either way the decomposition is reused across invocations as long as
/// the board's content hash is unchanged.
#[derive(Debug)]
pub struct StaticSafetySolver<'a> {
    board: &'a Board,
    regions: DecompositionSource<'a>,
    stats: SolverStats,
}

impl<'a> StaticSafetySolver<'a> {
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

    /// Prove safe points using the unconditional-life criterion alone.
    ///
    /// Idempotent for an unchanged board: the decomposition scan is
    /// hash-gated and all derived state is recomputed from scratch.
    pub fn find_safe_points(&mut self) -> SafeSet {
        let decomp = self.regions.get_mut();
        decomp.ensure_current(self.board);
        decomp.generate_groups();
        compute_healthy(decomp, self.board, HealthyMode::StoneLiberties);

        let mut safe = SafeSet::new();
        for color in Color::both() {
            for set in find_test_sets(decomp, color) {
                test_alive(decomp, set, &mut safe, color);
            }
        }
        self.stats = SolverStats::collect(self.regions.get(), &safe, 0);
        safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seki_core::PointSet;

    #[test]
    fn two_eyed_ring_is_alive_with_its_eyes() {
        // A group surrounded entirely by its own liberties, holding two
        // eyes: the whole board is proven for black.
        let board = Board::from_diagram(
            "X X X
             X . X
             . X X",
        )
        .unwrap();
        let mut solver = StaticSafetySolver::new(&board);
        let safe = solver.find_safe_points();
        let everything: PointSet = board.points().collect();
        assert_eq!(safe.get(Color::Black), &everything);
        assert!(safe.get(Color::White).is_empty());
    }

    #[test]
    fn empty_board_proves_nothing() {
        let board = Board::from_diagram(". .\n. .").unwrap();
        let mut solver = StaticSafetySolver::new(&board);
        assert!(solver.find_safe_points().is_empty());
    }

    #[test]
    fn single_eye_is_not_enough() {
        let board = Board::from_diagram(
            "X X X
             X . X
             X X X",
        )
        .unwrap();
        let mut solver = StaticSafetySolver::new(&board);
        assert!(solver.find_safe_points().is_empty());
    }

    #[test]
    fn runs_are_idempotent() {
        let board = Board::from_diagram(
            "X X X X X
             X . X . X
             X X X X X
             . . . . .
             . . . . .",
        )
        .unwrap();
        let mut solver = StaticSafetySolver::new(&board);
        let first = solver.find_safe_points();
        let second = solver.find_safe_points();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn borrowed_decomposition_is_reused_not_destroyed() {
        let board = Board::from_diagram(
            "X X X X X
             X . X . X
             X X X X X
             . . . . .
             . . . . .",
        )
        .unwrap();
        let mut decomp = Decomposition::build(&board);
        let safe = {
            let mut solver = StaticSafetySolver::with_decomposition(&board, &mut decomp);
            solver.find_safe_points()
        };
        assert!(!safe.is_empty());
        // The caller still owns a current decomposition.
        assert!(decomp.is_up_to_date(&board));
        assert_eq!(decomp.rebuild_count(), 0);
    }
}
