//! Board positions for the Seki safety solver.
//!
//! A [`Board`] is a square grid of points, each empty or holding a stone.
//! It answers the static queries the solver needs — stone color,
//! 4-neighbor adjacency, emptiness — and carries a content hash used to
//! detect position changes between solver invocations. The board knows
//! nothing about game rules: stones are placed and removed directly when
//! setting up a position, and the solver never mutates it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod diagram;
pub mod error;
pub mod hash;

pub use board::Board;
pub use error::BoardError;
pub use hash::PositionHash;
