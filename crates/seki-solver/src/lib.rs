//! Static life-and-death safety solvers for the Seki workspace.
//!
//! Given a board position, the solvers prove — without game-tree
//! search — that certain stone groups and regions are unconditionally
//! safe, and return a disjoint per-color [`SafeSet`] of proven points.
//! They are sound but deliberately incomplete: a point they mark safe
//! can never be lost, while a safe point they fail to prove costs only
//! precision, never correctness.
//!
//! Two layers are provided:
//!
//! - [`StaticSafetySolver`] — the classical Benson criterion: healthy
//!   regions plus the unconditional-life fixpoint over closure-connected
//!   test sets.
//! - [`SafetySolver`] — the full solver: chain merging over vital
//!   connection regions, a vitality-extended healthy predicate,
//!   two-eye-sufficient regions, and surrounded single-region and
//!   region-pair territory criteria.
//!
//! Both are driven by [`find_safe_points`](SafetySolver::find_safe_points),
//! which is idempotent for an unchanged board (hash-gated decomposition
//! reuse).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod healthy;
pub mod life;
pub mod merge;
pub mod safe_set;
pub mod solver;
pub mod source;
pub mod static_solver;
pub mod stats;
pub mod territory;

pub use healthy::HealthyMode;
pub use safe_set::SafeSet;
pub use solver::SafetySolver;
pub use source::DecompositionSource;
pub use static_solver::StaticSafetySolver;
pub use stats::SolverStats;
