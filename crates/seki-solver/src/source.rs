//! Ownership of the decomposition a solver works on.

use seki_board::Board;
use seki_region::Decomposition;

/// Where a solver's decomposition lives.
///
/// The mode is fixed at solver construction: a solver either owns its
/// decomposition (built from the board and dropped with the solver) or
/// borrows one supplied by the caller, which survives the solver and is
/// never destroyed by it. Sharing a caller-owned decomposition lets
/// several analyses over the same position reuse one scan.
#[derive(Debug)]
pub enum DecompositionSource<'a> {
    /// The solver owns its decomposition.
    Owned(Decomposition),
    /// The decomposition belongs to the caller.
    Borrowed(&'a mut Decomposition),
}

impl<'a> DecompositionSource<'a> {
    /// Build an owned decomposition from `board`.
    pub fn owned(board: &Board) -> Self {
        Self::Owned(Decomposition::build(board))
    }

    /// Shared access to the decomposition.
    pub fn get(&self) -> &Decomposition {
        match self {
            Self::Owned(d) => d,
            Self::Borrowed(d) => d,
        }
    }

    /// Mutable access to the decomposition.
    pub fn get_mut(&mut self) -> &mut Decomposition {
        match self {
            Self::Owned(d) => d,
            Self::Borrowed(d) => d,
        }
    }
}
