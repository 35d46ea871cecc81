//! Strongly-typed arena identifiers.
//!
//! Blocks, regions, and groups live in arenas owned by the decomposition;
//! every cross-reference between them is one of these IDs. Replacing two
//! merged groups with their chain is an ID-remap pass over region
//! membership sets, so no reference can dangle.

use std::fmt;

/// Identifies a block (maximal connected same-color stone group) within a
/// decomposition.
///
/// Blocks are created during the decomposition scan and assigned
/// sequential IDs. `BlockId(n)` is the n-th block found by the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

impl From<u32> for BlockId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a region (per-color maximal connected area of points not
/// held by that color) within a decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

impl From<u32> for RegionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a group: the solver's unit of safety analysis.
///
/// A group is either a single block or a chain produced by merging two
/// earlier groups. Merging allocates a fresh `GroupId`; the constituents
/// keep their IDs but leave the active list and are never reactivated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

impl From<u32> for GroupId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
