//! Regions: per-color maximal connected areas not held by that color.

use indexmap::IndexSet;
use seki_core::{BlockId, Color, GroupId, PointSet};

/// A lazily computed boolean region predicate.
///
/// Flag values are cached per region; the cache is dropped whenever the
/// region's group membership changes (after a merge) or the whole
/// decomposition is reinitialized, so stale values are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionFlag {
    /// The region is a static eye space: it holds no opponent stones and
    /// every point touches a stone of the owning color.
    OneVital,
    /// [`OneVital`](RegionFlag::OneVital), and the region joins exactly
    /// two groups — a candidate for connection merging.
    OneVitalConnection,
    /// The region alone always yields two eyes for its color: it splits
    /// into two single-point eyes the opponent cannot spoil with one
    /// stone.
    TwoVital,
    /// Width-one passage: every point has at most two region neighbors
    /// and no 2x2 square lies inside the region.
    Corridor,
}

pub(crate) const FLAG_COUNT: usize = 4;

impl RegionFlag {
    pub(crate) fn index(self) -> usize {
        match self {
            RegionFlag::OneVital => 0,
            RegionFlag::OneVitalConnection => 1,
            RegionFlag::TwoVital => 2,
            RegionFlag::Corridor => 3,
        }
    }
}

/// A maximal connected set of points not held by one color.
///
/// For color `c` the region's points are empty points and opponent
/// stones; its boundary consists entirely of `c` stones and board edges.
/// The region lists the adjacent `c` blocks (fixed by the decomposition
/// scan) and the adjacent active groups (updated as merges happen).
#[derive(Clone, Debug)]
pub struct Region {
    color: Color,
    points: PointSet,
    blocks: IndexSet<BlockId>,
    groups: IndexSet<GroupId>,
    healthy_groups: Vec<GroupId>,
    flag_value: [bool; FLAG_COUNT],
    flag_computed: [bool; FLAG_COUNT],
    healthy_computed: bool,
    used_for_merge: bool,
    safe: bool,
}

impl Region {
    pub(crate) fn new(color: Color, points: PointSet, blocks: IndexSet<BlockId>) -> Self {
        Self {
            color,
            points,
            blocks,
            groups: IndexSet::new(),
            healthy_groups: Vec::new(),
            flag_value: [false; FLAG_COUNT],
            flag_computed: [false; FLAG_COUNT],
            healthy_computed: false,
            used_for_merge: false,
            safe: false,
        }
    }

    /// The color whose safety this region is evaluated for.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The region's points (empty points and opponent stones).
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Adjacent blocks of the region's color, in scan order.
    pub fn blocks(&self) -> &IndexSet<BlockId> {
        &self.blocks
    }

    /// Adjacent active groups, in scan order.
    ///
    /// Empty until groups have been generated for the current solver
    /// invocation.
    pub fn groups(&self) -> &IndexSet<GroupId> {
        &self.groups
    }

    /// Groups the region has been recorded healthy for.
    pub fn healthy_groups(&self) -> &[GroupId] {
        &self.healthy_groups
    }

    /// `true` once this region has justified a merge. A region may
    /// justify at most one.
    pub fn is_used_for_merge(&self) -> bool {
        self.used_for_merge
    }

    /// `true` once the solver has proven the region safe.
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    pub(crate) fn cached_flag(&self, flag: RegionFlag) -> Option<bool> {
        let i = flag.index();
        self.flag_computed[i].then_some(self.flag_value[i])
    }

    pub(crate) fn cache_flag(&mut self, flag: RegionFlag, value: bool) {
        let i = flag.index();
        self.flag_value[i] = value;
        self.flag_computed[i] = true;
    }

    pub(crate) fn healthy_computed(&self) -> bool {
        self.healthy_computed
    }

    pub(crate) fn set_healthy_computed(&mut self) {
        self.healthy_computed = true;
    }

    pub(crate) fn add_healthy_group(&mut self, group: GroupId) {
        self.healthy_groups.push(group);
    }

    pub(crate) fn set_groups(&mut self, groups: IndexSet<GroupId>) {
        self.groups = groups;
    }

    pub(crate) fn mark_used_for_merge(&mut self) {
        assert!(
            !self.used_for_merge,
            "region already justified a merge; a region may justify at most one"
        );
        self.used_for_merge = true;
    }

    pub(crate) fn set_safe(&mut self, safe: bool) {
        self.safe = safe;
    }

    /// Drop all per-invocation state: cached flags, healthy links, group
    /// adjacency, and the safe and merge marks.
    pub(crate) fn reset(&mut self) {
        self.groups.clear();
        self.healthy_groups.clear();
        self.flag_computed = [false; FLAG_COUNT];
        self.healthy_computed = false;
        self.used_for_merge = false;
        self.safe = false;
    }

    /// Drop cached state that depends on group membership, keeping the
    /// merge mark. Called when a merge changes the region's group list.
    pub(crate) fn invalidate_after_merge(&mut self) {
        self.healthy_groups.clear();
        self.flag_computed = [false; FLAG_COUNT];
        self.healthy_computed = false;
    }
}
