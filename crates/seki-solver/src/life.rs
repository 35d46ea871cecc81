//! The unconditional-life fixpoint (generalized Benson criterion).

use crate::safe_set::SafeSet;
use indexmap::IndexSet;
use seki_core::{Color, GroupId, RegionId};
use seki_region::Decomposition;

/// Partition the active groups of `color` into maximal
/// closure-connected test sets.
///
/// Two groups are closure-connected when they share a healthy region;
/// the fixpoint never removes a group because of a region outside its
/// own test set, so partitioning bounds the work to within clusters.
pub fn find_test_sets(decomp: &Decomposition, color: Color) -> Vec<IndexSet<GroupId>> {
    let mut sets = Vec::new();
    let mut done: IndexSet<GroupId> = IndexSet::new();
    for &gid in decomp.active_groups(color) {
        if done.contains(&gid) {
            continue;
        }
        let set = find_closure(decomp, gid);
        done.extend(set.iter().copied());
        sets.push(set);
    }
    sets
}

/// Expand `start` to every group transitively reachable through shared
/// healthy regions.
fn find_closure(decomp: &Decomposition, start: GroupId) -> IndexSet<GroupId> {
    let mut set: IndexSet<GroupId> = IndexSet::new();
    set.insert(start);
    let mut to_test = vec![start];
    while let Some(gid) = to_test.pop() {
        for &rid in decomp.group(gid).healthy() {
            for &other in decomp.region(rid).groups() {
                if !set.contains(&other) && decomp.group(other).contains_healthy(rid) {
                    set.insert(other);
                    to_test.push(other);
                }
            }
        }
    }
    set
}

/// `true` if every group adjacent to `rid` belongs to `set`.
fn is_surrounded(decomp: &Decomposition, rid: RegionId, set: &IndexSet<GroupId>) -> bool {
    decomp.region(rid).groups().iter().all(|g| set.contains(g))
}

/// Run the unconditional-life fixpoint over one test set.
///
/// Each round restricts the candidate regions to those fully surrounded
/// by the current set, then collects every group with fewer than two
/// healthy regions among the candidates; removals are applied only
/// after the scan. The set shrinks monotonically, so the loop
/// terminates within `set.len()` rounds. Survivors are unconditionally
/// alive: their stones are added to `safe`, along with every surviving
/// candidate region that is healthy for a survivor.
pub fn test_alive(
    decomp: &mut Decomposition,
    mut set: IndexSet<GroupId>,
    safe: &mut SafeSet,
    color: Color,
) {
    let mut candidates: Vec<RegionId> = decomp.regions_of(color).to_vec();
    loop {
        candidates.retain(|&rid| is_surrounded(decomp, rid, &set));
        let removals: Vec<GroupId> = set
            .iter()
            .copied()
            .filter(|&gid| {
                let healthy_here = decomp
                    .group(gid)
                    .healthy()
                    .iter()
                    .filter(|&rid| candidates.contains(rid))
                    .count();
                healthy_here < 2
            })
            .collect();
        if removals.is_empty() {
            break;
        }
        for gid in removals {
            let removed = set.shift_remove(&gid);
            assert!(removed, "fixpoint removal of a group not in the set");
        }
    }

    if set.is_empty() {
        return;
    }
    for &gid in &set {
        decomp.mark_group_safe(gid);
        safe.add(color, decomp.group(gid).stones());
    }
    for rid in candidates {
        let healthy_for_survivor = decomp
            .region(rid)
            .healthy_groups()
            .iter()
            .any(|g| set.contains(g));
        if healthy_for_survivor {
            decomp.mark_region_safe(rid);
            safe.add(color, decomp.region(rid).points());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::healthy::{compute_healthy, HealthyMode};
    use seki_board::Board;

    fn prepared(diagram: &str) -> (Board, Decomposition) {
        let board = Board::from_diagram(diagram).unwrap();
        let mut decomp = Decomposition::build(&board);
        decomp.generate_groups();
        (board, decomp)
    }

    #[test]
    fn two_eyed_group_survives() {
        let (board, mut decomp) = prepared(
            "X X X X X
             X . X . X
             X X X X X
             . . . . .
             . . . . .",
        );
        compute_healthy(&mut decomp, &board, HealthyMode::StoneLiberties);
        let mut safe = SafeSet::new();
        for set in find_test_sets(&decomp, Color::Black) {
            test_alive(&mut decomp, set, &mut safe, Color::Black);
        }
        // The group and both eyes are proven; the open bottom is not.
        assert_eq!(safe.get(Color::Black).len(), 13 + 2);
    }

    #[test]
    fn one_eyed_group_is_removed() {
        let (board, mut decomp) = prepared(
            "X X X
             X . X
             X X X",
        );
        compute_healthy(&mut decomp, &board, HealthyMode::StoneLiberties);
        let mut safe = SafeSet::new();
        for set in find_test_sets(&decomp, Color::Black) {
            test_alive(&mut decomp, set, &mut safe, Color::Black);
        }
        assert!(safe.is_empty());
    }

    #[test]
    fn test_sets_split_unrelated_clusters() {
        // Two independent two-eyed groups: separate closures.
        let (board, mut decomp) = prepared(
            "X X X X X . . . .
             X . X . X . . . .
             X X X X X . . . .
             . . . . . . . . .
             . . . . . . . . .
             . . . . X X X X X
             . . . . X . X . X
             . . . . X X X X X
             . . . . . . . . .",
        );
        compute_healthy(&mut decomp, &board, HealthyMode::StoneLiberties);
        let sets = find_test_sets(&decomp, Color::Black);
        assert_eq!(sets.len(), 2);
        assert!(sets.iter().all(|s| s.len() == 1));
    }

    #[test]
    fn removal_cascade_terminates_and_proves_nothing() {
        // Five solid columns joined by corridors; the outer columns have
        // a single healthy region each, and their removal unravels the
        // whole set one layer per round.
        let (board, mut decomp) = prepared(
            "X . X . X . X . X
             X . X . X . X . X
             X . X . X . X . X
             X . X . X . X . X
             X . X . X . X . X
             X . X . X . X . X
             X . X . X . X . X
             X . X . X . X . X
             X . X . X . X . X",
        );
        compute_healthy(&mut decomp, &board, HealthyMode::StoneLiberties);
        let sets = find_test_sets(&decomp, Color::Black);
        assert_eq!(sets.len(), 1);
        let mut safe = SafeSet::new();
        for set in sets {
            test_alive(&mut decomp, set, &mut safe, Color::Black);
        }
        assert!(safe.is_empty());
    }
}
