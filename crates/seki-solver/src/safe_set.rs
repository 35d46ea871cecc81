//! The accumulated safe-point classification.

use seki_core::{ByColor, Color, PointSet};
use std::fmt;

/// Per-color sets of points proven safe.
///
/// The two sets are disjoint by invariant: every addition re-checks the
/// invariant immediately, and a violation aborts the process — it is a
/// solver logic fault, never a recoverable condition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SafeSet {
    points: ByColor<PointSet>,
}

impl SafeSet {
    /// The empty classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Points proven safe for `color`.
    pub fn get(&self, color: Color) -> &PointSet {
        self.points.get(color)
    }

    /// All proven points of both colors.
    pub fn both(&self) -> PointSet {
        self.points
            .get(Color::Black)
            .union(self.points.get(Color::White))
    }

    /// `true` if neither color has any proven point.
    pub fn is_empty(&self) -> bool {
        self.points.get(Color::Black).is_empty() && self.points.get(Color::White).is_empty()
    }

    /// Add `points` to `color`'s safe set.
    ///
    /// # Panics
    ///
    /// Panics if the addition makes the two color sets overlap.
    pub fn add(&mut self, color: Color, points: &PointSet) {
        self.points.get_mut(color).union_with(points);
        self.assert_disjoint();
    }

    /// Check the disjointness invariant.
    ///
    /// # Panics
    ///
    /// Panics if the per-color sets share a point.
    pub fn assert_disjoint(&self) {
        assert!(
            self.points
                .get(Color::Black)
                .is_disjoint_from(self.points.get(Color::White)),
            "safe sets overlap: black {} white {}",
            self.points.get(Color::Black),
            self.points.get(Color::White),
        );
    }
}

impl fmt::Display for SafeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "black {} white {}",
            self.points.get(Color::Black),
            self.points.get(Color::White)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seki_core::Pt;

    fn set(pts: &[(u8, u8)]) -> PointSet {
        pts.iter().map(|&(r, c)| Pt::new(r, c)).collect()
    }

    #[test]
    fn add_accumulates_per_color() {
        let mut safe = SafeSet::new();
        safe.add(Color::Black, &set(&[(0, 0), (0, 1)]));
        safe.add(Color::White, &set(&[(4, 4)]));
        safe.add(Color::Black, &set(&[(0, 1), (1, 0)]));
        assert_eq!(safe.get(Color::Black).len(), 3);
        assert_eq!(safe.get(Color::White).len(), 1);
        assert_eq!(safe.both().len(), 4);
    }

    #[test]
    #[should_panic(expected = "safe sets overlap")]
    fn overlapping_addition_aborts() {
        let mut safe = SafeSet::new();
        safe.add(Color::Black, &set(&[(2, 2)]));
        safe.add(Color::White, &set(&[(2, 2)]));
    }

    #[test]
    fn empty_set_is_empty() {
        let safe = SafeSet::new();
        assert!(safe.is_empty());
        assert!(safe.both().is_empty());
        safe.assert_disjoint();
    }
}
