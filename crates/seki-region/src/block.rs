//! Blocks: maximal connected same-color stone groups.

use seki_core::{Color, PointSet};

/// A maximal connected group of same-colored stones.
///
/// Blocks are immutable once the decomposition scan has produced them,
/// except for the safe mark, which the solver sets when the block's
/// group is proven unconditionally alive.
#[derive(Clone, Debug)]
pub struct Block {
    color: Color,
    stones: PointSet,
    liberties: PointSet,
    safe: bool,
}

impl Block {
    pub(crate) fn new(color: Color, stones: PointSet, liberties: PointSet) -> Self {
        Self {
            color,
            stones,
            liberties,
            safe: false,
        }
    }

    /// The block's color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The stones forming the block.
    pub fn stones(&self) -> &PointSet {
        &self.stones
    }

    /// The block's liberties: empty points adjacent to its stones.
    pub fn liberties(&self) -> &PointSet {
        &self.liberties
    }

    /// `true` once the solver has proven the block safe.
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    pub(crate) fn set_safe(&mut self, safe: bool) {
        self.safe = safe;
    }
}
