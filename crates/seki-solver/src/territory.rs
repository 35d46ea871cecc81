//! Static territory tests for surrounded areas.

use seki_board::Board;
use seki_core::{Color, PointSet, Pt};
use seki_region::Decomposition;

/// Close `area` over its interior blocks: own-color blocks whose every
/// liberty lies inside the area live or die with it, so their stones
/// join the area for boundary purposes.
fn close_over_interior_blocks(
    decomp: &Decomposition,
    area: &PointSet,
    color: Color,
) -> PointSet {
    let mut closed = area.clone();
    for &bid in decomp.blocks_of(color) {
        let block = decomp.block(bid);
        if !block.liberties().is_empty() && block.liberties().is_subset_of(area) {
            closed.union_with(block.stones());
        }
    }
    closed
}

/// Could the opponent conceivably build two eyes inside `area`?
///
/// Two eyes need two non-adjacent empty points; a point touching one of
/// the color's safe stones can never become an opponent eye. The test
/// errs toward `true` — claiming possible life where there is none only
/// keeps a region unproven.
fn might_make_life(board: &Board, area: &PointSet, safe_own: &PointSet) -> bool {
    let eye_candidates: Vec<Pt> = area
        .iter()
        .filter(|&p| {
            board.is_empty_point(p)
                && !board.neighbors(p).iter().any(|n| safe_own.contains(*n))
        })
        .collect();
    eye_candidates
        .iter()
        .enumerate()
        .any(|(i, &p1)| {
            eye_candidates[i + 1..]
                .iter()
                .any(|&p2| !p1.is_adjacent_to(p2))
        })
}

/// The static territory test.
///
/// `area` is territory for `color` when, after absorbing interior
/// blocks, every point bordering the closed area is one of the color's
/// already-safe stones, and the opponent cannot make two eyes inside.
/// The absorption rule is what lets a union of two regions pass where
/// neither alone does: a block whose liberties straddle both regions
/// becomes interior only in the union.
pub fn is_territory(
    decomp: &Decomposition,
    board: &Board,
    area: &PointSet,
    safe_own: &PointSet,
    color: Color,
) -> bool {
    if area.is_empty() {
        return false;
    }
    let closed = close_over_interior_blocks(decomp, area, color);
    for p in closed.iter() {
        for n in board.neighbors(p) {
            if closed.contains(n) {
                continue;
            }
            if board.color_at(n) != Some(color) || !safe_own.contains(n) {
                return false;
            }
        }
    }
    !might_make_life(board, &closed, safe_own)
}
