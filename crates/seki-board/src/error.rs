//! Error types for board construction and position setup.

use seki_core::Pt;
use std::fmt;

/// Errors arising from board construction, stone placement, or diagram
/// parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The requested board size is outside `1..=25`.
    SizeOutOfRange {
        /// The offending size.
        size: usize,
    },
    /// A point lies outside the board.
    PointOffBoard {
        /// The offending point.
        point: Pt,
        /// The board size.
        size: u8,
    },
    /// Attempted to place a stone on an occupied point.
    PointOccupied {
        /// The occupied point.
        point: Pt,
    },
    /// Attempted to remove a stone from an empty point.
    PointEmpty {
        /// The empty point.
        point: Pt,
    },
    /// A position diagram could not be parsed.
    BadDiagram {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOutOfRange { size } => {
                write!(f, "board size {size} outside supported range 1..=25")
            }
            Self::PointOffBoard { point, size } => {
                write!(f, "point {point} off a {size}x{size} board")
            }
            Self::PointOccupied { point } => write!(f, "point {point} is occupied"),
            Self::PointEmpty { point } => write!(f, "point {point} is empty"),
            Self::BadDiagram { reason } => write!(f, "bad diagram: {reason}"),
        }
    }
}

impl std::error::Error for BoardError {}
