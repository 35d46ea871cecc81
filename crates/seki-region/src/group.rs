//! Groups: the solver's unit of safety analysis.

use seki_core::{BlockId, Color, PointSet, Pt, RegionId};

/// Why two groups were merged into a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeCondition {
    /// Connectivity was justified by a search-style criterion (a vital
    /// corridor joining exactly two groups).
    BySearch,
    /// Connectivity is guaranteed by two distinct free liberties found
    /// in the justifying region, one reachable per constituent.
    TwoLiberties {
        /// A free liberty of the first constituent.
        lib1: Pt,
        /// A free liberty of the second constituent.
        lib2: Pt,
    },
}

/// A group: one block, or a chain of blocks merged for safety analysis.
///
/// Groups carry the per-invocation solver state (healthy-region list,
/// safe mark). A chain additionally records which groups it merged and
/// under what [`MergeCondition`]; its constituents leave the active list
/// when the chain is created and never return.
#[derive(Clone, Debug)]
pub struct Group {
    color: Color,
    blocks: Vec<BlockId>,
    stones: PointSet,
    liberties: PointSet,
    healthy: Vec<RegionId>,
    safe: bool,
    merged_from: Option<(seki_core::GroupId, seki_core::GroupId)>,
    condition: Option<MergeCondition>,
}

impl Group {
    pub(crate) fn from_block(color: Color, id: BlockId, stones: PointSet, liberties: PointSet) -> Self {
        Self {
            color,
            blocks: vec![id],
            stones,
            liberties,
            healthy: Vec::new(),
            safe: false,
            merged_from: None,
            condition: None,
        }
    }

    pub(crate) fn chain(
        a: &Group,
        b: &Group,
        ids: (seki_core::GroupId, seki_core::GroupId),
        condition: MergeCondition,
    ) -> Self {
        let mut blocks = a.blocks.clone();
        blocks.extend_from_slice(&b.blocks);
        Self {
            color: a.color,
            blocks,
            stones: a.stones.union(&b.stones),
            liberties: a.liberties.union(&b.liberties),
            healthy: Vec::new(),
            safe: false,
            merged_from: Some(ids),
            condition: Some(condition),
        }
    }

    /// The group's color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The constituent blocks, in merge order.
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// Union of the constituent blocks' stones.
    pub fn stones(&self) -> &PointSet {
        &self.stones
    }

    /// Union of the constituent blocks' liberties.
    pub fn liberties(&self) -> &PointSet {
        &self.liberties
    }

    /// Regions currently recorded as healthy for this group.
    pub fn healthy(&self) -> &[RegionId] {
        &self.healthy
    }

    /// `true` if `region` is in the group's healthy list.
    pub fn contains_healthy(&self, region: RegionId) -> bool {
        self.healthy.contains(&region)
    }

    pub(crate) fn add_healthy(&mut self, region: RegionId) {
        self.healthy.push(region);
    }

    /// `true` once the solver has proven the group safe.
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    pub(crate) fn set_safe(&mut self, safe: bool) {
        self.safe = safe;
    }

    /// `true` if this group is a chain produced by merging.
    pub fn is_chain(&self) -> bool {
        self.merged_from.is_some()
    }

    /// The merge condition, for chains.
    pub fn condition(&self) -> Option<MergeCondition> {
        self.condition
    }
}
