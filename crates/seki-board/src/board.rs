//! The board position type.

use crate::error::BoardError;
use crate::hash::{fnv1a, PositionHash};
use seki_core::{Color, Pt};
use smallvec::SmallVec;
use std::fmt;

/// A square board position.
///
/// Points are addressed by [`Pt`] with zero-based row (from the bottom)
/// and column (from the left). The board holds stone placement only; it
/// enforces no game rules beyond "one stone per point". Sizes from 1 to
/// 25 are supported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    stones: Vec<Option<Color>>,
}

impl Board {
    /// Maximum supported board size.
    pub const MAX_SIZE: usize = 25;

    /// Create an empty board of the given size.
    ///
    /// Returns `Err(BoardError::SizeOutOfRange)` unless
    /// `1 <= size <= 25`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seki_board::Board;
    ///
    /// let board = Board::new(9).unwrap();
    /// assert_eq!(board.size(), 9);
    /// assert_eq!(board.points().count(), 81);
    /// ```
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(BoardError::SizeOutOfRange { size });
        }
        Ok(Self {
            size: size as u8,
            stones: vec![None; size * size],
        })
    }

    /// Board side length.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// `true` if `p` lies on the board.
    pub fn contains(&self, p: Pt) -> bool {
        p.row() < self.size && p.col() < self.size
    }

    fn index(&self, p: Pt) -> usize {
        p.row() as usize * self.size as usize + p.col() as usize
    }

    /// All points in board order (row-major from the bottom-left).
    pub fn points(&self) -> impl Iterator<Item = Pt> + '_ {
        let size = self.size;
        (0..size).flat_map(move |r| (0..size).map(move |c| Pt::new(r, c)))
    }

    /// Stone color at `p`, or `None` if the point is empty.
    ///
    /// # Panics
    ///
    /// Panics if `p` is off the board; callers iterate board points, so
    /// an off-board query is a logic fault.
    pub fn color_at(&self, p: Pt) -> Option<Color> {
        assert!(self.contains(p), "query off board: {p}");
        self.stones[self.index(p)]
    }

    /// `true` if `p` is on the board and empty.
    pub fn is_empty_point(&self, p: Pt) -> bool {
        self.contains(p) && self.stones[self.index(p)].is_none()
    }

    /// The 4-connected neighbors of `p` that lie on the board.
    ///
    /// Edge points have 3 neighbors, corners 2. Order is deterministic:
    /// south, north, west, east.
    pub fn neighbors(&self, p: Pt) -> SmallVec<[Pt; 4]> {
        let mut out = SmallVec::new();
        let (r, c) = (p.row(), p.col());
        if r > 0 {
            out.push(Pt::new(r - 1, c));
        }
        if r + 1 < self.size {
            out.push(Pt::new(r + 1, c));
        }
        if c > 0 {
            out.push(Pt::new(r, c - 1));
        }
        if c + 1 < self.size {
            out.push(Pt::new(r, c + 1));
        }
        out
    }

    /// Place a stone of `color` on the empty point `p`.
    pub fn put_stone(&mut self, p: Pt, color: Color) -> Result<(), BoardError> {
        if !self.contains(p) {
            return Err(BoardError::PointOffBoard {
                point: p,
                size: self.size,
            });
        }
        let idx = self.index(p);
        if self.stones[idx].is_some() {
            return Err(BoardError::PointOccupied { point: p });
        }
        self.stones[idx] = Some(color);
        Ok(())
    }

    /// Remove the stone on `p`.
    pub fn remove_stone(&mut self, p: Pt) -> Result<(), BoardError> {
        if !self.contains(p) {
            return Err(BoardError::PointOffBoard {
                point: p,
                size: self.size,
            });
        }
        let idx = self.index(p);
        if self.stones[idx].is_none() {
            return Err(BoardError::PointEmpty { point: p });
        }
        self.stones[idx] = None;
        Ok(())
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.stones.iter().filter(|s| s.is_some()).count()
    }

    /// Content hash of the position.
    ///
    /// Computed on demand (FNV-1a over size and stone contents); equal
    /// positions of equal size always hash equal within a process.
    pub fn position_hash(&self) -> PositionHash {
        let content = self.stones.iter().map(|s| match s {
            None => 0u8,
            Some(Color::Black) => 1,
            Some(Color::White) => 2,
        });
        PositionHash(fnv1a(std::iter::once(self.size).chain(content)))
    }
}

impl fmt::Display for Board {
    /// Renders the position as a diagram, top row first: `X` black,
    /// `O` white, `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in (0..self.size).rev() {
            for c in 0..self.size {
                let ch = match self.stones[self.index(Pt::new(r, c))] {
                    None => '.',
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                };
                write!(f, "{ch}")?;
                if c + 1 < self.size {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_bad_sizes() {
        assert!(matches!(
            Board::new(0),
            Err(BoardError::SizeOutOfRange { size: 0 })
        ));
        assert!(matches!(
            Board::new(26),
            Err(BoardError::SizeOutOfRange { size: 26 })
        ));
        assert!(Board::new(1).is_ok());
        assert!(Board::new(25).is_ok());
    }

    // ── Neighbors ───────────────────────────────────────────────

    #[test]
    fn neighbors_interior_edge_corner() {
        let b = Board::new(5).unwrap();
        assert_eq!(b.neighbors(Pt::new(2, 2)).len(), 4);
        assert_eq!(b.neighbors(Pt::new(0, 2)).len(), 3);
        assert_eq!(b.neighbors(Pt::new(0, 0)).len(), 2);
        assert_eq!(b.neighbors(Pt::new(4, 4)).len(), 2);
    }

    #[test]
    fn single_point_board_has_no_neighbors() {
        let b = Board::new(1).unwrap();
        assert!(b.neighbors(Pt::new(0, 0)).is_empty());
    }

    // ── Mutation ────────────────────────────────────────────────

    #[test]
    fn put_and_remove() {
        let mut b = Board::new(5).unwrap();
        let p = Pt::new(1, 1);
        b.put_stone(p, Color::Black).unwrap();
        assert_eq!(b.color_at(p), Some(Color::Black));
        assert!(matches!(
            b.put_stone(p, Color::White),
            Err(BoardError::PointOccupied { .. })
        ));
        b.remove_stone(p).unwrap();
        assert!(b.is_empty_point(p));
        assert!(matches!(
            b.remove_stone(p),
            Err(BoardError::PointEmpty { .. })
        ));
    }

    #[test]
    fn off_board_is_rejected() {
        let mut b = Board::new(3).unwrap();
        let p = Pt::new(3, 0);
        assert!(matches!(
            b.put_stone(p, Color::Black),
            Err(BoardError::PointOffBoard { .. })
        ));
    }

    // ── Hashing ─────────────────────────────────────────────────

    #[test]
    fn hash_tracks_content() {
        let mut b = Board::new(9).unwrap();
        let h0 = b.position_hash();
        b.put_stone(Pt::new(4, 4), Color::Black).unwrap();
        let h1 = b.position_hash();
        assert_ne!(h0, h1);
        b.remove_stone(Pt::new(4, 4)).unwrap();
        assert_eq!(b.position_hash(), h0);
    }

    #[test]
    fn hash_distinguishes_colors() {
        let mut black = Board::new(9).unwrap();
        let mut white = Board::new(9).unwrap();
        black.put_stone(Pt::new(0, 0), Color::Black).unwrap();
        white.put_stone(Pt::new(0, 0), Color::White).unwrap();
        assert_ne!(black.position_hash(), white.position_hash());
    }

    #[test]
    fn hash_distinguishes_sizes() {
        assert_ne!(
            Board::new(5).unwrap().position_hash(),
            Board::new(6).unwrap().position_hash()
        );
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbors_are_symmetric(size in 2u8..10, r in 0u8..10, c in 0u8..10) {
            let b = Board::new(size as usize).unwrap();
            let p = Pt::new(r % size, c % size);
            for n in b.neighbors(p) {
                prop_assert!(b.neighbors(n).contains(&p));
            }
        }

        #[test]
        fn neighbors_are_adjacent_and_on_board(size in 1u8..10, r in 0u8..10, c in 0u8..10) {
            let b = Board::new(size as usize).unwrap();
            let p = Pt::new(r % size, c % size);
            for n in b.neighbors(p) {
                prop_assert!(b.contains(n));
                prop_assert!(p.is_adjacent_to(n));
            }
        }
    }
}
