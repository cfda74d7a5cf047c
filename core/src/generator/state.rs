//! State Snapshot - Save/Restore Generator State
//!
//! Serializable record of a seeded generator's complete state. Restoring a
//! snapshot reproduces the draw sequence bit for bit, including a pending
//! 32-bit half-word left over from narrowing a 64-bit draw.
//!
//! # Critical Invariants
//!
//! - **Determinism**: restore then draw equals never having snapshotted
//! - **Tag Matching**: a snapshot only loads into a facade of the same
//!   algorithm and snapshot version

use serde::{Deserialize, Serialize};

use super::Algorithm;

/// Current snapshot layout version. Bumped if a family's word layout ever
/// changes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Complete generator state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Which family produced this snapshot (checked on restore)
    pub algorithm: Algorithm,

    /// Snapshot layout version (checked on restore)
    pub version: u32,

    /// Flat state words in the family's documented order
    pub words: Vec<u64>,

    /// Draw position for block generators (mt19937, dsfmt) and the buffer
    /// cursor for counter-based families; `None` elsewhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Pending high half-word from a split 64-bit draw, 64-bit-native
    /// families only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carry: Option<u32>,
}
