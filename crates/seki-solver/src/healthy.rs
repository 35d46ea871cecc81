//! The healthy-region relationship.

use seki_board::Board;
use seki_core::Color;
use seki_region::{Decomposition, RegionFlag};

/// Which healthy predicate a solver pass evaluates.
///
/// The base Benson criterion uses [`StoneLiberties`](HealthyMode::StoneLiberties);
/// the full solver widens it with static vitality. An explicit mode
/// keeps one shared fixpoint driver for both layers instead of
/// overriding the predicate per solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthyMode {
    /// A region is healthy for a group iff every empty region point is a
    /// liberty of the group: the group could fill the region without
    /// losing it.
    StoneLiberties,
    /// [`StoneLiberties`](HealthyMode::StoneLiberties), or the region is
    /// statically one-vital.
    WithVitality,
}

/// Evaluate the healthy predicate for one region/group pair.
pub fn region_healthy_for_group(
    mode: HealthyMode,
    decomp: &mut Decomposition,
    board: &Board,
    rid: seki_core::RegionId,
    gid: seki_core::GroupId,
) -> bool {
    if all_empty_points_are_liberties(decomp, board, rid, gid) {
        return true;
    }
    mode == HealthyMode::WithVitality && decomp.flag(rid, RegionFlag::OneVital, board)
}

fn all_empty_points_are_liberties(
    decomp: &Decomposition,
    board: &Board,
    rid: seki_core::RegionId,
    gid: seki_core::GroupId,
) -> bool {
    let liberties = decomp.group(gid).liberties();
    decomp
        .region(rid)
        .points()
        .iter()
        .filter(|&p| board.is_empty_point(p))
        .all(|p| liberties.contains(p))
}

/// Record healthy links for every region of every color.
///
/// For each region the predicate is evaluated once per adjacent group,
/// guarded by the region's healthy-computed mark, and recorded
/// symmetrically (region lists group, group lists region).
pub fn compute_healthy(decomp: &mut Decomposition, board: &Board, mode: HealthyMode) {
    for color in Color::both() {
        for rid in decomp.regions_of(color).to_vec() {
            if decomp.healthy_computed(rid) {
                continue;
            }
            decomp.set_healthy_computed(rid);
            for gid in decomp.region(rid).groups().iter().copied().collect::<Vec<_>>() {
                if region_healthy_for_group(mode, decomp, board, rid, gid) {
                    decomp.add_healthy(rid, gid);
                }
            }
        }
    }
}
