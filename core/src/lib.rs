//! Pseudorandom Bit Generator Library
//!
//! Eleven interchangeable pseudorandom bit generator families behind one
//! facade, with deterministic seeding, state snapshots, and jump-ahead
//! stream splitting where the family's mathematics provides it.
//!
//! # Architecture
//!
//! - **generator**: the `Generator` facade, `Algorithm` registry, errors,
//!   and the serializable `StateSnapshot`
//! - **families**: one module per algorithm (mt19937, dsfmt, pcg32, pcg64,
//!   philox, threefry, xoshiro256, xoshiro512, sfc64, jsf64, gjrand)
//! - **jump**: shared GF(2) polynomial jump machinery for the linear
//!   families
//! - **entropy**: `SeedMaterial`, the SHA-256 counter-mode seed expander
//!
//! # Critical Invariants
//!
//! 1. Same algorithm + same seed words = bit-identical sequences
//! 2. Snapshot restore reproduces the stream exactly, half-word buffer
//!    included
//! 3. Families without a defined jump fail loudly; there is no silent
//!    sequential fallback
//! 4. A `Generator` is single-threaded; use one instance per worker and
//!    split streams by jump, stream key, or `SeedMaterial::spawn`

// Module declarations
pub mod entropy;
pub(crate) mod families;
pub mod generator;
pub(crate) mod jump;

// Re-exports for convenience
pub use entropy::SeedMaterial;
pub use generator::{
    Algorithm, Generator, GeneratorError, StateSnapshot, SNAPSHOT_VERSION,
};
