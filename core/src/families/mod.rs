//! Generator Families
//!
//! One module per algorithm. Each family is a private struct with a fused
//! step/output draw, fixed-layout state words for snapshotting, and its
//! own jump support where the mathematics provides one. The
//! [`crate::generator`] facade is the public surface.

pub(crate) mod dsfmt;
pub(crate) mod gjrand;
pub(crate) mod jsf64;
pub(crate) mod mt19937;
pub(crate) mod pcg32;
pub(crate) mod pcg64;
pub(crate) mod philox;
pub(crate) mod sfc64;
pub(crate) mod threefry;
pub(crate) mod xoshiro256;
pub(crate) mod xoshiro512;
