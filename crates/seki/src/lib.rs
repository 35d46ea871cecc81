//! Seki: a static life-and-death safety solver for Go-like board games.
//!
//! Given a board position, Seki proves — without game-tree search — that
//! certain stone groups and empty regions are unconditionally safe, and
//! returns a disjoint per-color set of proven-safe points. It is sound
//! but incomplete: points it marks safe can never be lost, while points
//! it cannot prove are simply left open.
//!
//! This is the top-level facade crate re-exporting the public API of the
//! Seki sub-crates; adding `seki` as a single dependency is sufficient
//! for most users.
//!
//! # Quick start
//!
//! ```rust
//! use seki::prelude::*;
//!
//! // A black group with two eyes, surrounded by its own liberties.
//! let board = Board::from_diagram(
//!     "X X X
//!      X . X
//!      . X X",
//! )
//! .unwrap();
//!
//! let mut solver = SafetySolver::new(&board);
//! let safe = solver.find_safe_points();
//! assert_eq!(safe.get(Color::Black).len(), 9);
//! assert!(safe.get(Color::White).is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `seki-core` | Colors, points, point sets, arena IDs |
//! | [`board`] | `seki-board` | Board positions, diagrams, content hashing |
//! | [`region`] | `seki-region` | Block/region/chain decomposition |
//! | [`solver`] | `seki-solver` | The base and full safety solvers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: colors, points, point sets, and arena IDs (`seki-core`).
pub use seki_core as core;

/// Board positions and content hashing (`seki-board`).
pub use seki_board as board;

/// Block, region, and chain decomposition (`seki-region`).
pub use seki_region as region;

/// The safety solvers and their supporting types (`seki-solver`).
pub use seki_solver as solver;

/// The types most callers need.
pub mod prelude {
    pub use seki_board::{Board, BoardError};
    pub use seki_core::{ByColor, Color, PointSet, Pt};
    pub use seki_region::Decomposition;
    pub use seki_solver::{SafeSet, SafetySolver, SolverStats, StaticSafetySolver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn facade_round_trip() {
        let board = Board::from_diagram("X .\n. .").unwrap();
        let mut solver = SafetySolver::new(&board);
        let safe = solver.find_safe_points();
        assert!(safe.get(Color::Black).is_empty());
        assert!(safe.get(Color::White).is_empty());
    }
}
