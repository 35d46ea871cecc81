//! Board decomposition for the Seki safety solver.
//!
//! A [`Decomposition`] partitions a board into **blocks** (maximal
//! connected same-color stone groups) and per-color **regions** (maximal
//! connected areas of points not held by that color), and tracks which
//! blocks border which regions. On top of the static partition it
//! maintains **groups**: the solver's unit of analysis, starting as one
//! group per block and shrinking as groups are merged into chains.
//!
//! Everything lives in arenas addressed by typed IDs
//! ([`BlockId`](seki_core::BlockId), [`RegionId`](seki_core::RegionId),
//! [`GroupId`](seki_core::GroupId)); merging is an ID-remap over region
//! membership sets, so no reference can dangle.
//!
//! The decomposition is rebuilt only when the board's content hash
//! changes; region predicates (vitality, corridor shape) are computed
//! lazily and cached per flag until a merge or rebuild invalidates them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod decomposition;
pub mod group;
pub mod region;

pub use block::Block;
pub use decomposition::Decomposition;
pub use group::{Group, MergeCondition};
pub use region::{Region, RegionFlag};
