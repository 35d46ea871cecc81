//! Benchmark profiles for the Seki safety solver.
//!
//! Provides deterministic position generators shared by the criterion
//! benches and ad-hoc profiling:
//!
//! - [`random_position`]: seeded random stones at a given density
//! - [`walled_position`]: alternating living walls, a merge- and
//!   fixpoint-heavy shape

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seki_board::Board;
use seki_core::{Color, Pt};

/// A seeded random position of the given size and stone density.
///
/// The same seed always produces the same position, keeping benchmark
/// runs comparable across machines.
pub fn random_position(size: usize, fill: f64, seed: u64) -> Board {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = Board::new(size).unwrap();
    for r in 0..size as u8 {
        for c in 0..size as u8 {
            if rng.random_bool(fill) {
                let color = if rng.random_bool(0.5) {
                    Color::Black
                } else {
                    Color::White
                };
                board.put_stone(Pt::new(r, c), color).unwrap();
            }
        }
    }
    board
}

/// Alternating solid columns and empty corridors.
///
/// Every corridor is healthy for both neighboring columns, producing
/// large closure-connected test sets and a long removal cascade: a
/// worst-ish case for the unconditional-life fixpoint.
pub fn walled_position(size: usize) -> Board {
    let mut board = Board::new(size).unwrap();
    for c in (0..size as u8).step_by(2) {
        for r in 0..size as u8 {
            board.put_stone(Pt::new(r, c), Color::Black).unwrap();
        }
    }
    board
}
