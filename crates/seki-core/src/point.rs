//! Board points and ordered point sets.

use std::collections::BTreeSet;
use std::fmt;

/// A point on the board, addressed by zero-based row and column.
///
/// Rows count from the bottom of the printed board, columns from the
/// left, matching the conventional Go coordinate display: `Pt::new(0, 0)`
/// prints as `A1`, `Pt::new(3, 2)` as `C4`. The column letter skips `I`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pt {
    row: u8,
    col: u8,
}

/// Column letters used for display, with `I` omitted.
const COL_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

impl Pt {
    /// Build a point from zero-based row and column.
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Zero-based row (counted from the bottom edge).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Zero-based column (counted from the left edge).
    pub fn col(self) -> u8 {
        self.col
    }

    /// `true` if `other` shares an edge with `self`.
    pub fn is_adjacent_to(self, other: Pt) -> bool {
        let dr = (self.row as i16 - other.row as i16).abs();
        let dc = (self.col as i16 - other.col as i16).abs();
        dr + dc == 1
    }
}

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = COL_LETTERS[self.col as usize] as char;
        write!(f, "{}{}", letter, self.row as u16 + 1)
    }
}

/// An ordered set of board points.
///
/// Backed by a `BTreeSet`, so iteration order is the point order
/// (row-major from the bottom-left) regardless of insertion order. Every
/// set the solver exposes — liberties, region points, safe points — is a
/// `PointSet`, which is what makes repeated solver runs bit-identical.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: BTreeSet<Pt>,
}

impl PointSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Insert a point. Returns `true` if it was not already present.
    pub fn insert(&mut self, p: Pt) -> bool {
        self.points.insert(p)
    }

    /// Remove a point. Returns `true` if it was present.
    pub fn remove(&mut self, p: Pt) -> bool {
        self.points.remove(&p)
    }

    /// Membership test.
    pub fn contains(&self, p: Pt) -> bool {
        self.points.contains(&p)
    }

    /// Iterate the points in board order.
    pub fn iter(&self) -> impl Iterator<Item = Pt> + '_ {
        self.points.iter().copied()
    }

    /// Add every point of `other` to `self`.
    pub fn union_with(&mut self, other: &PointSet) {
        self.points.extend(other.points.iter().copied());
    }

    /// The union of two sets as a new set.
    pub fn union(&self, other: &PointSet) -> PointSet {
        let mut out = self.clone();
        out.union_with(other);
        out
    }

    /// `true` if the sets share at least one point.
    pub fn overlaps(&self, other: &PointSet) -> bool {
        // Iterate the smaller side.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|p| large.contains(p))
    }

    /// `true` if the sets share no point.
    pub fn is_disjoint_from(&self, other: &PointSet) -> bool {
        !self.overlaps(other)
    }

    /// `true` if every point of `self` is in `other`.
    pub fn is_subset_of(&self, other: &PointSet) -> bool {
        self.iter().all(|p| other.contains(p))
    }
}

impl FromIterator<Pt> for PointSet {
    fn from_iter<I: IntoIterator<Item = Pt>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Pt> for PointSet {
    fn extend<I: IntoIterator<Item = Pt>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = Pt;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, Pt>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter().copied()
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, p) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Point display ───────────────────────────────────────────

    #[test]
    fn display_skips_i_column() {
        assert_eq!(Pt::new(0, 0).to_string(), "A1");
        assert_eq!(Pt::new(3, 2).to_string(), "C4");
        assert_eq!(Pt::new(0, 7).to_string(), "H1");
        assert_eq!(Pt::new(0, 8).to_string(), "J1");
        assert_eq!(Pt::new(18, 18).to_string(), "T19");
    }

    #[test]
    fn adjacency_is_edge_sharing() {
        let p = Pt::new(2, 2);
        assert!(p.is_adjacent_to(Pt::new(1, 2)));
        assert!(p.is_adjacent_to(Pt::new(2, 3)));
        assert!(!p.is_adjacent_to(Pt::new(3, 3)));
        assert!(!p.is_adjacent_to(p));
    }

    // ── Set algebra ─────────────────────────────────────────────

    fn set(pts: &[(u8, u8)]) -> PointSet {
        pts.iter().map(|&(r, c)| Pt::new(r, c)).collect()
    }

    #[test]
    fn union_and_overlap() {
        let a = set(&[(0, 0), (0, 1)]);
        let b = set(&[(0, 1), (1, 1)]);
        assert!(a.overlaps(&b));
        assert_eq!(a.union(&b).len(), 3);
        let c = set(&[(4, 4)]);
        assert!(a.is_disjoint_from(&c));
    }

    #[test]
    fn subset() {
        let a = set(&[(0, 0)]);
        let b = set(&[(0, 0), (0, 1)]);
        assert!(a.is_subset_of(&b));
        assert!(!b.is_subset_of(&a));
        assert!(PointSet::new().is_subset_of(&a));
    }

    #[test]
    fn iteration_is_sorted_regardless_of_insertion() {
        let mut s = PointSet::new();
        s.insert(Pt::new(5, 5));
        s.insert(Pt::new(0, 0));
        s.insert(Pt::new(2, 7));
        let order: Vec<Pt> = s.iter().collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }

    // ── Properties ──────────────────────────────────────────────

    fn arb_set() -> impl Strategy<Value = PointSet> {
        proptest::collection::vec((0u8..9, 0u8..9), 0..20)
            .prop_map(|v| v.into_iter().map(|(r, c)| Pt::new(r, c)).collect())
    }

    proptest! {
        #[test]
        fn union_contains_both(a in arb_set(), b in arb_set()) {
            let u = a.union(&b);
            prop_assert!(a.is_subset_of(&u));
            prop_assert!(b.is_subset_of(&u));
            prop_assert!(u.len() <= a.len() + b.len());
        }

        #[test]
        fn overlap_symmetric(a in arb_set(), b in arb_set()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            prop_assert_eq!(a.is_disjoint_from(&b), !a.overlaps(&b));
        }
    }
}
