//! Chain-merge passes over vital connection regions.

use seki_board::Board;
use seki_core::{Color, GroupId, RegionId};
use seki_region::{Decomposition, MergeCondition, RegionFlag};

/// One merge the scan decided on, applied after the scan completes.
struct PlannedMerge {
    c1: GroupId,
    c2: GroupId,
    region: RegionId,
    condition: MergeCondition,
}

/// Merge groups of every color to a fixpoint.
///
/// Per color, regions are scanned for two justifications:
///
/// 1. a one-vital region joining exactly two groups through at least two
///    distinct connection points — merged under
///    [`MergeCondition::TwoLiberties`];
/// 2. a one-vital corridor joining exactly two groups, not yet used for
///    a merge — merged under [`MergeCondition::BySearch`].
///
/// Each applied merge remaps region membership and invalidates affected
/// flags, which can enable further merges, so the scan restarts until a
/// full pass finds nothing. Merging strictly shrinks the active list,
/// bounding the passes by the group count. Returns the number of merges
/// applied.
pub fn merge_chains(decomp: &mut Decomposition, board: &Board) -> usize {
    let mut merges = 0;
    for color in Color::both() {
        for rid in decomp.regions_of(color).to_vec() {
            decomp.flag(rid, RegionFlag::OneVital, board);
        }
        while let Some(m) = find_merge(decomp, board, color) {
            decomp.merge_groups(m.c1, m.c2, m.region, m.condition, board);
            merges += 1;
        }
    }
    merges
}

/// Scan the color's regions for the first applicable merge.
fn find_merge(decomp: &mut Decomposition, board: &Board, color: Color) -> Option<PlannedMerge> {
    for rid in decomp.regions_of(color).to_vec() {
        if decomp.region(rid).is_used_for_merge() {
            continue;
        }
        let Some((c1, c2)) = decomp.find_two_mergeable_groups(rid) else {
            continue;
        };
        if decomp.flag(rid, RegionFlag::OneVitalConnection, board)
            && decomp.connection_points(rid, c1, c2, board).len() >= 2
        {
            let (lib1, lib2) = decomp
                .find_two_free_liberties(rid, c1, c2, board)
                .expect("two connection points imply two free liberties");
            return Some(PlannedMerge {
                c1,
                c2,
                region: rid,
                condition: MergeCondition::TwoLiberties { lib1, lib2 },
            });
        }
        if decomp.flag(rid, RegionFlag::OneVital, board)
            && decomp.flag(rid, RegionFlag::Corridor, board)
        {
            return Some(PlannedMerge {
                c1,
                c2,
                region: rid,
                condition: MergeCondition::BySearch,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared(diagram: &str) -> (Board, Decomposition) {
        let board = Board::from_diagram(diagram).unwrap();
        let mut decomp = Decomposition::build(&board);
        decomp.generate_groups();
        (board, decomp)
    }

    #[test]
    fn bridge_with_two_connection_points_merges_by_liberties() {
        // Left and right groups joined by a walled bridge column with
        // four connection points.
        let (board, mut decomp) = prepared(
            "X X . . .
             X X . X X
             . X . X .
             X X . X X
             X X . X X",
        );
        let before = decomp.active_groups(Color::Black).len();
        let merges = merge_chains(&mut decomp, &board);
        assert_eq!(merges, 1);
        assert_eq!(decomp.active_groups(Color::Black).len(), before - 1);
        let chain = *decomp.active_groups(Color::Black).iter().next().unwrap();
        match decomp.group(chain).condition() {
            Some(MergeCondition::TwoLiberties { lib1, lib2 }) => {
                assert_ne!(lib1, lib2);
            }
            other => panic!("expected a two-liberties merge, got {other:?}"),
        }
    }

    #[test]
    fn shared_diagonal_point_merges_by_search() {
        // Two blocks meeting a single shared liberty at diagonal
        // contact: a one-point vital corridor.
        let (board, mut decomp) = prepared(
            "X X X . .
             X . X . .
             X X . X X
             . . X X .
             . . X X X",
        );
        let merges = merge_chains(&mut decomp, &board);
        assert_eq!(merges, 1);
        let chain = decomp
            .active_groups(Color::Black)
            .iter()
            .copied()
            .find(|&g| decomp.group(g).is_chain())
            .unwrap();
        assert_eq!(decomp.group(chain).condition(), Some(MergeCondition::BySearch));
    }

    #[test]
    fn open_regions_never_justify_a_merge() {
        // Two stones in the open: the shared region has interior points
        // touching no stone, so it is not one-vital.
        let (board, mut decomp) = prepared(
            "X . . . X
             . . . . .
             . . . . .
             . . . . .
             . . . . .",
        );
        assert_eq!(merge_chains(&mut decomp, &board), 0);
        assert_eq!(decomp.active_groups(Color::Black).len(), 2);
    }

    #[test]
    fn merging_collapses_a_chain_of_groups() {
        // Three groups strung along the diagonal, consecutive pairs
        // meeting at one-point vital corridors; the second merge joins
        // the first chain with the remaining group.
        let (board, mut decomp) = prepared(
            "X X X . . . .
             X . X . . . .
             X X . X . . .
             . . X X . . .
             . . X X . . .
             . . X . X . .
             . . . X X . .",
        );
        assert_eq!(decomp.active_groups(Color::Black).len(), 3);
        let merges = merge_chains(&mut decomp, &board);
        assert_eq!(merges, 2);
        assert_eq!(decomp.active_groups(Color::Black).len(), 1);
        let last = *decomp.active_groups(Color::Black).iter().next().unwrap();
        assert!(decomp.group(last).is_chain());
        assert_eq!(decomp.group(last).blocks().len(), 3);
    }
}
