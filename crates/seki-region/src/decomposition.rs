//! The decomposition: block/region arenas, group tracking, and merging.

use crate::block::Block;
use crate::group::{Group, MergeCondition};
use crate::region::{Region, RegionFlag};
use indexmap::IndexSet;
use seki_board::{Board, PositionHash};
use seki_core::{BlockId, ByColor, Color, GroupId, PointSet, Pt, RegionId};

/// Blocks, regions, and active groups derived from one board position.
///
/// Built by a connected-component scan over the board and cached against
/// the board's content hash: [`ensure_current`](Decomposition::ensure_current)
/// rebuilds only when the position actually changed, and otherwise just
/// resets the per-invocation solver state (groups, flags, safe marks).
///
/// Blocks and regions are fixed for a given position. Groups start as
/// one per block ([`generate_groups`](Decomposition::generate_groups))
/// and are merged into chains by
/// [`merge_groups`](Decomposition::merge_groups); each merge strictly
/// shrinks the color's active group list and remaps region membership,
/// so a group can never belong to two chains.
#[derive(Clone, Debug)]
pub struct Decomposition {
    size: u8,
    hash: PositionHash,
    blocks: Vec<Block>,
    regions: Vec<Region>,
    groups: Vec<Group>,
    blocks_by_color: ByColor<Vec<BlockId>>,
    regions_by_color: ByColor<Vec<RegionId>>,
    active_groups: ByColor<IndexSet<GroupId>>,
    block_at: Vec<Option<BlockId>>,
    group_of_block: Vec<Option<GroupId>>,
    rebuild_count: u64,
}

impl Decomposition {
    /// Scan `board` into blocks and per-color regions.
    pub fn build(board: &Board) -> Self {
        let mut decomp = Self {
            size: board.size(),
            hash: board.position_hash(),
            blocks: Vec::new(),
            regions: Vec::new(),
            groups: Vec::new(),
            blocks_by_color: ByColor::default(),
            regions_by_color: ByColor::default(),
            active_groups: ByColor::default(),
            block_at: vec![None; board.size() as usize * board.size() as usize],
            group_of_block: Vec::new(),
            rebuild_count: 0,
        };
        decomp.scan(board);
        decomp
    }

    /// Hash of the position this decomposition was built from.
    pub fn board_hash(&self) -> PositionHash {
        self.hash
    }

    /// `true` if the decomposition still matches `board`.
    pub fn is_up_to_date(&self, board: &Board) -> bool {
        self.hash == board.position_hash()
    }

    /// Make the decomposition match `board`.
    ///
    /// A changed position triggers a silent full rebuild; an unchanged
    /// one only resets per-invocation state (cached flags, groups,
    /// healthy links, safe marks), forcing lazy recomputation downstream.
    pub fn ensure_current(&mut self, board: &Board) {
        if self.is_up_to_date(board) {
            self.reinitialize();
        } else {
            let rebuilds = self.rebuild_count + 1;
            *self = Self::build(board);
            self.rebuild_count = rebuilds;
        }
    }

    /// Number of full rebuilds this instance has performed. Diagnostic
    /// only; used by tests to confirm the hash gate works.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Reset all per-invocation state, keeping the scanned blocks and
    /// regions.
    pub fn reinitialize(&mut self) {
        for region in &mut self.regions {
            region.reset();
        }
        for block in &mut self.blocks {
            block.set_safe(false);
        }
        self.groups.clear();
        self.group_of_block = vec![None; self.blocks.len()];
        *self.active_groups.get_mut(Color::Black) = IndexSet::new();
        *self.active_groups.get_mut(Color::White) = IndexSet::new();
    }

    // ── Scanning ────────────────────────────────────────────────

    fn scan(&mut self, board: &Board) {
        self.scan_blocks(board);
        for color in Color::both() {
            self.scan_regions(board, color);
        }
        self.group_of_block = vec![None; self.blocks.len()];
    }

    fn scan_blocks(&mut self, board: &Board) {
        for start in board.points() {
            let Some(color) = board.color_at(start) else {
                continue;
            };
            if self.block_at_point(start).is_some() {
                continue;
            }
            let id = BlockId(self.blocks.len() as u32);
            let mut stones = PointSet::new();
            let mut liberties = PointSet::new();
            let mut stack = vec![start];
            while let Some(p) = stack.pop() {
                if stones.contains(p) {
                    continue;
                }
                stones.insert(p);
                for n in board.neighbors(p) {
                    match board.color_at(n) {
                        Some(c) if c == color && !stones.contains(n) => stack.push(n),
                        None => {
                            liberties.insert(n);
                        }
                        _ => {}
                    }
                }
            }
            for p in stones.iter() {
                let idx = self.point_index(board, p);
                self.block_at[idx] = Some(id);
            }
            self.blocks.push(Block::new(color, stones, liberties));
            self.blocks_by_color.get_mut(color).push(id);
        }
    }

    fn scan_regions(&mut self, board: &Board, color: Color) {
        let mut claimed = PointSet::new();
        for start in board.points() {
            if board.color_at(start) == Some(color) || claimed.contains(start) {
                continue;
            }
            let id = RegionId(self.regions.len() as u32);
            let mut points = PointSet::new();
            let mut adjacent = IndexSet::new();
            let mut stack = vec![start];
            while let Some(p) = stack.pop() {
                if points.contains(p) {
                    continue;
                }
                points.insert(p);
                claimed.insert(p);
                for n in board.neighbors(p) {
                    if board.color_at(n) == Some(color) {
                        let idx = self.point_index(board, n);
                        let block = self.block_at[idx]
                            .expect("stone without a block after the block scan");
                        adjacent.insert(block);
                    } else if !points.contains(n) {
                        stack.push(n);
                    }
                }
            }
            self.regions.push(Region::new(color, points, adjacent));
            self.regions_by_color.get_mut(color).push(id);
        }
    }

    fn point_index(&self, board: &Board, p: Pt) -> usize {
        p.row() as usize * board.size() as usize + p.col() as usize
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The block covering point `p`, if `p` holds a stone.
    pub fn block_at_point(&self, p: Pt) -> Option<BlockId> {
        self.block_at[p.row() as usize * self.size as usize + p.col() as usize]
    }

    /// All blocks of `color`, in scan order.
    pub fn blocks_of(&self, color: Color) -> &[BlockId] {
        self.blocks_by_color.get(color)
    }

    /// All regions of `color`, in scan order.
    pub fn regions_of(&self, color: Color) -> &[RegionId] {
        self.regions_by_color.get(color)
    }

    /// The active groups of `color`: not-yet-merged groups, duplicate-free.
    pub fn active_groups(&self, color: Color) -> &IndexSet<GroupId> {
        self.active_groups.get(color)
    }

    /// Look up a block.
    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id.0 as usize]
    }

    /// Look up a region.
    pub fn region(&self, id: RegionId) -> &Region {
        &self.regions[id.0 as usize]
    }

    /// Look up a group.
    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.0 as usize]
    }

    /// The active group containing `block`, once groups are generated.
    pub fn group_of_block(&self, block: BlockId) -> Option<GroupId> {
        self.group_of_block[block.0 as usize]
    }

    // ── Groups and merging ──────────────────────────────────────

    /// Wrap every block in a fresh single-block group and record group
    /// adjacency on every region.
    ///
    /// Called once per solver invocation, after
    /// [`ensure_current`](Decomposition::ensure_current).
    pub fn generate_groups(&mut self) {
        assert!(
            self.groups.is_empty(),
            "groups already generated for this invocation"
        );
        for color in Color::both() {
            for &bid in self.blocks_by_color.get(color) {
                let id = GroupId(self.groups.len() as u32);
                let block = &self.blocks[bid.0 as usize];
                self.groups.push(Group::from_block(
                    color,
                    bid,
                    block.stones().clone(),
                    block.liberties().clone(),
                ));
                self.group_of_block[bid.0 as usize] = Some(id);
                let inserted = self.active_groups.get_mut(color).insert(id);
                assert!(inserted, "active group list must stay duplicate-free");
            }
        }
        for rid in 0..self.regions.len() {
            let groups = self.current_groups_for(RegionId(rid as u32));
            self.regions[rid].set_groups(groups);
        }
    }

    fn current_groups_for(&self, rid: RegionId) -> IndexSet<GroupId> {
        self.regions[rid.0 as usize]
            .blocks()
            .iter()
            .map(|&bid| {
                self.group_of_block[bid.0 as usize]
                    .expect("region references a block with no group")
            })
            .collect()
    }

    /// Merge active groups `c1` and `c2` into a chain justified by
    /// region `rid` under `condition`.
    ///
    /// The justifying region is marked used (a region may justify at
    /// most one merge), both constituents leave the color's active list,
    /// and every region of the color whose membership changed is
    /// reinitialized with its vital flag recomputed. Returns the chain's
    /// ID.
    ///
    /// # Panics
    ///
    /// Panics on any merge-protocol violation: merging a group with
    /// itself or across colors, reusing a justifying region, or merging
    /// a group that is not active.
    pub fn merge_groups(
        &mut self,
        c1: GroupId,
        c2: GroupId,
        rid: RegionId,
        condition: MergeCondition,
        board: &Board,
    ) -> GroupId {
        assert_ne!(c1, c2, "cannot merge a group with itself");
        let color = self.groups[c1.0 as usize].color();
        assert_eq!(
            color,
            self.groups[c2.0 as usize].color(),
            "cannot merge groups of different colors"
        );
        self.regions[rid.0 as usize].mark_used_for_merge();

        let id = GroupId(self.groups.len() as u32);
        let chain = Group::chain(
            &self.groups[c1.0 as usize],
            &self.groups[c2.0 as usize],
            (c1, c2),
            condition,
        );
        self.groups.push(chain);

        let active = self.active_groups.get_mut(color);
        assert!(active.shift_remove(&c1), "merged group {c1} was not active");
        assert!(active.shift_remove(&c2), "merged group {c2} was not active");
        assert!(
            active.insert(id),
            "active group list must stay duplicate-free"
        );

        for i in 0..self.groups[id.0 as usize].blocks().len() {
            let bid = self.groups[id.0 as usize].blocks()[i];
            self.group_of_block[bid.0 as usize] = Some(id);
        }

        self.reinitialize_after_merge(color, board);
        id
    }

    /// Recompute group adjacency for every region of `color`, dropping
    /// cached flags and recomputing the vital flag for regions whose
    /// membership changed.
    fn reinitialize_after_merge(&mut self, color: Color, board: &Board) {
        let rids: Vec<RegionId> = self.regions_by_color.get(color).clone();
        for rid in rids {
            let groups = self.current_groups_for(rid);
            let region = &mut self.regions[rid.0 as usize];
            if groups != *region.groups() {
                region.set_groups(groups);
                region.invalidate_after_merge();
                let _ = self.flag(rid, RegionFlag::OneVital, board);
            }
        }
    }

    // ── Region predicates ───────────────────────────────────────

    /// Evaluate a region flag, computing and caching it on first use.
    pub fn flag(&mut self, rid: RegionId, flag: RegionFlag, board: &Board) -> bool {
        if let Some(v) = self.regions[rid.0 as usize].cached_flag(flag) {
            return v;
        }
        let v = match flag {
            RegionFlag::OneVital => self.compute_one_vital(rid, board),
            RegionFlag::OneVitalConnection => {
                self.flag(rid, RegionFlag::OneVital, board)
                    && self.regions[rid.0 as usize].groups().len() == 2
            }
            RegionFlag::TwoVital => {
                self.flag(rid, RegionFlag::OneVital, board) && self.has_miai_eye_points(rid)
            }
            RegionFlag::Corridor => self.compute_corridor(rid),
        };
        self.regions[rid.0 as usize].cache_flag(flag, v);
        v
    }

    /// A region is one-vital when it holds no opponent stones and every
    /// point touches a stone of the owning color: an eye space with no
    /// interior an invader could use.
    fn compute_one_vital(&self, rid: RegionId, board: &Board) -> bool {
        let region = &self.regions[rid.0 as usize];
        let color = region.color();
        region.points().iter().all(|p| {
            board.is_empty_point(p)
                && board
                    .neighbors(p)
                    .iter()
                    .any(|&n| board.color_at(n) == Some(color))
        })
    }

    /// Two eye points the opponent cannot spoil with a single stone:
    /// non-adjacent, with disjoint in-region neighborhoods of at most
    /// one point each, together covering the whole region.
    fn has_miai_eye_points(&self, rid: RegionId) -> bool {
        let region = &self.regions[rid.0 as usize];
        let pts: Vec<Pt> = region.points().iter().collect();
        let nbrs_of = |p: Pt| -> Vec<Pt> {
            pts.iter().copied().filter(|&q| p.is_adjacent_to(q)).collect()
        };
        for (i, &p1) in pts.iter().enumerate() {
            for &p2 in pts.iter().skip(i + 1) {
                if p1.is_adjacent_to(p2) {
                    continue;
                }
                let n1 = nbrs_of(p1);
                let n2 = nbrs_of(p2);
                if n1.len() > 1 || n2.len() > 1 {
                    continue;
                }
                if n1.iter().any(|q| n2.contains(q)) {
                    continue;
                }
                if 2 + n1.len() + n2.len() == pts.len() {
                    return true;
                }
            }
        }
        false
    }

    /// Width-one passage: at most two in-region neighbors per point and
    /// no 2x2 square inside the region.
    fn compute_corridor(&self, rid: RegionId) -> bool {
        let region = &self.regions[rid.0 as usize];
        let points = region.points();
        for p in points.iter() {
            let in_region = |q: Pt| points.contains(q);
            let degree = points.iter().filter(|&q| p.is_adjacent_to(q)).count();
            if degree > 2 {
                return false;
            }
            let (r, c) = (p.row(), p.col());
            if in_region(Pt::new(r, c + 1))
                && in_region(Pt::new(r + 1, c))
                && in_region(Pt::new(r + 1, c + 1))
            {
                return false;
            }
        }
        true
    }

    /// Empty region points adjacent to stones of both groups: the
    /// candidate connection liberties between them.
    pub fn connection_points(
        &self,
        rid: RegionId,
        g1: GroupId,
        g2: GroupId,
        board: &Board,
    ) -> Vec<Pt> {
        let region = &self.regions[rid.0 as usize];
        let s1 = self.groups[g1.0 as usize].stones();
        let s2 = self.groups[g2.0 as usize].stones();
        region
            .points()
            .iter()
            .filter(|&p| {
                board.is_empty_point(p) && {
                    let ns = board.neighbors(p);
                    ns.iter().any(|n| s1.contains(*n)) && ns.iter().any(|n| s2.contains(*n))
                }
            })
            .collect()
    }

    /// Two distinct free liberties in the region, the first reaching
    /// `g1` and the second `g2`, preferring a non-adjacent pair.
    pub fn find_two_free_liberties(
        &self,
        rid: RegionId,
        g1: GroupId,
        g2: GroupId,
        board: &Board,
    ) -> Option<(Pt, Pt)> {
        let region = &self.regions[rid.0 as usize];
        let libs = |gid: GroupId| -> Vec<Pt> {
            let stones = self.groups[gid.0 as usize].stones();
            region
                .points()
                .iter()
                .filter(|&p| {
                    board.is_empty_point(p)
                        && board.neighbors(p).iter().any(|n| stones.contains(*n))
                })
                .collect()
        };
        let libs1 = libs(g1);
        let libs2 = libs(g2);
        let mut fallback = None;
        for &p1 in &libs1 {
            for &p2 in &libs2 {
                if p1 == p2 {
                    continue;
                }
                if !p1.is_adjacent_to(p2) {
                    return Some((p1, p2));
                }
                if fallback.is_none() {
                    fallback = Some((p1, p2));
                }
            }
        }
        fallback
    }

    /// The two groups a region joins, when it joins exactly two.
    pub fn find_two_mergeable_groups(&self, rid: RegionId) -> Option<(GroupId, GroupId)> {
        let groups = self.regions[rid.0 as usize].groups();
        if groups.len() == 2 {
            let mut it = groups.iter();
            Some((*it.next()?, *it.next()?))
        } else {
            None
        }
    }

    // ── Solver bookkeeping ──────────────────────────────────────

    /// Record `region` as healthy for `group`, symmetrically.
    pub fn add_healthy(&mut self, rid: RegionId, gid: GroupId) {
        self.regions[rid.0 as usize].add_healthy_group(gid);
        self.groups[gid.0 as usize].add_healthy(rid);
    }

    /// Whether healthy links for `rid` have been computed this invocation.
    pub fn healthy_computed(&self, rid: RegionId) -> bool {
        self.regions[rid.0 as usize].healthy_computed()
    }

    /// Mark healthy links for `rid` computed.
    pub fn set_healthy_computed(&mut self, rid: RegionId) {
        self.regions[rid.0 as usize].set_healthy_computed();
    }

    /// Mark a group and all its constituent blocks safe.
    pub fn mark_group_safe(&mut self, gid: GroupId) {
        self.groups[gid.0 as usize].set_safe(true);
        for i in 0..self.groups[gid.0 as usize].blocks().len() {
            let bid = self.groups[gid.0 as usize].blocks()[i];
            self.blocks[bid.0 as usize].set_safe(true);
        }
    }

    /// Mark a region safe.
    pub fn mark_region_safe(&mut self, rid: RegionId) {
        self.regions[rid.0 as usize].set_safe(true);
    }

    /// Refresh block and region safe marks from accumulated safe points.
    ///
    /// A block is safe once all its stones are in its color's safe set;
    /// a region once all its points are in its color's safe set.
    pub fn set_safe_flags(&mut self, black: &PointSet, white: &PointSet) {
        for block in &mut self.blocks {
            let own = match block.color() {
                Color::Black => black,
                Color::White => white,
            };
            if !block.stones().is_empty() && block.stones().is_subset_of(own) {
                block.set_safe(true);
            }
        }
        for region in &mut self.regions {
            let own = match region.color() {
                Color::Black => black,
                Color::White => white,
            };
            if !region.points().is_empty() && region.points().is_subset_of(own) {
                region.set_safe(true);
            }
        }
    }

    /// `true` if any block adjacent to `rid` is safe.
    pub fn some_adjacent_block_safe(&self, rid: RegionId) -> bool {
        self.regions[rid.0 as usize]
            .blocks()
            .iter()
            .any(|&bid| self.blocks[bid.0 as usize].is_safe())
    }
}
