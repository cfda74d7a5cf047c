//! Generator Facade - Uniform Access to Every Family
//!
//! One `Generator` type fronts all eleven families: seed it, draw 32- or
//! 64-bit words or doubles, snapshot and restore state, and (where the
//! family defines them) jump ahead or select a stream.
//!
//! # Critical Invariants
//!
//! - **Determinism**: same algorithm + same seed words = same sequence
//! - **Narrowing**: a 64-bit-native draw serves two `next_u32` calls, low
//!   half first; the buffered high half is part of snapshot state
//! - **Widening**: 32-bit-native families compose `next_u64` high word
//!   first
//! - **No silent fallback**: families without jump support return
//!   `UnsupportedOperation`, never a sequential emulation

pub mod state;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::families::{
    dsfmt, gjrand, jsf64, mt19937, pcg32, pcg64, philox, sfc64, threefry, xoshiro256, xoshiro512,
};
use crate::families::{
    dsfmt::Dsfmt, gjrand::Gjrand, jsf64::Jsf64, mt19937::Mt19937, pcg32::Pcg32, pcg64::Pcg64,
    philox::Philox, sfc64::Sfc64, threefry::ThreeFry, xoshiro256::Xoshiro256,
    xoshiro512::Xoshiro512,
};

pub use state::{StateSnapshot, SNAPSHOT_VERSION};

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by facade operations. All are synchronous; nothing is
/// retried internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Seed material too short for {algorithm}: required {required} word(s), provided {provided}")]
    InvalidSeed {
        algorithm: Algorithm,
        required: usize,
        provided: usize,
    },

    #[error("Invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("Incompatible state snapshot: expected {expected}, found {found}")]
    IncompatibleState { expected: String, found: String },

    #[error("Generator has not been seeded")]
    NotSeeded,

    #[error("{algorithm} does not support {operation}")]
    UnsupportedOperation {
        algorithm: Algorithm,
        operation: &'static str,
    },
}

// ============================================================================
// Algorithm Registry
// ============================================================================

/// The available generator families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Mt19937,
    Dsfmt,
    Pcg32,
    Pcg64,
    Philox,
    Threefry,
    Xoshiro256,
    Xoshiro512,
    Sfc64,
    Jsf64,
    Gjrand,
}

impl Algorithm {
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Mt19937,
        Algorithm::Dsfmt,
        Algorithm::Pcg32,
        Algorithm::Pcg64,
        Algorithm::Philox,
        Algorithm::Threefry,
        Algorithm::Xoshiro256,
        Algorithm::Xoshiro512,
        Algorithm::Sfc64,
        Algorithm::Jsf64,
        Algorithm::Gjrand,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Mt19937 => "mt19937",
            Algorithm::Dsfmt => "dsfmt",
            Algorithm::Pcg32 => "pcg32",
            Algorithm::Pcg64 => "pcg64",
            Algorithm::Philox => "philox",
            Algorithm::Threefry => "threefry",
            Algorithm::Xoshiro256 => "xoshiro256",
            Algorithm::Xoshiro512 => "xoshiro512",
            Algorithm::Sfc64 => "sfc64",
            Algorithm::Jsf64 => "jsf64",
            Algorithm::Gjrand => "gjrand",
        }
    }

    pub fn from_name(name: &str) -> Option<Algorithm> {
        Algorithm::ALL.iter().copied().find(|a| a.name() == name)
    }

    /// Fewest entropy words `seed` accepts.
    pub fn min_seed_words(&self) -> usize {
        match self {
            Algorithm::Mt19937 => mt19937::SEED_WORDS,
            Algorithm::Dsfmt => dsfmt::SEED_WORDS,
            Algorithm::Pcg32 => pcg32::SEED_WORDS,
            Algorithm::Pcg64 => pcg64::SEED_WORDS,
            Algorithm::Philox => philox::SEED_WORDS,
            Algorithm::Threefry => threefry::SEED_WORDS,
            Algorithm::Xoshiro256 => xoshiro256::SEED_WORDS,
            Algorithm::Xoshiro512 => xoshiro512::SEED_WORDS,
            Algorithm::Sfc64 => sfc64::SEED_WORDS,
            Algorithm::Jsf64 => jsf64::SEED_WORDS,
            Algorithm::Gjrand => gjrand::SEED_WORDS,
        }
    }

    /// Whether the family natively emits 32-bit words. The facade widens
    /// and narrows around this.
    pub fn native_bits(&self) -> u32 {
        match self {
            Algorithm::Mt19937 | Algorithm::Dsfmt | Algorithm::Pcg32 => 32,
            _ => 64,
        }
    }

    pub fn supports_jump(&self) -> bool {
        !matches!(
            self,
            Algorithm::Sfc64 | Algorithm::Jsf64 | Algorithm::Gjrand
        )
    }

    pub fn supports_advance(&self) -> bool {
        matches!(
            self,
            Algorithm::Pcg32 | Algorithm::Pcg64 | Algorithm::Philox | Algorithm::Threefry
        )
    }

    pub fn supports_streams(&self) -> bool {
        matches!(self, Algorithm::Philox | Algorithm::Threefry)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Facade
// ============================================================================

#[derive(Debug, Clone)]
enum Core {
    Mt19937(Mt19937),
    Dsfmt(Dsfmt),
    Pcg32(Pcg32),
    Pcg64(Pcg64),
    Philox(Philox),
    Threefry(ThreeFry),
    Xoshiro256(Xoshiro256),
    Xoshiro512(Xoshiro512),
    Sfc64(Sfc64),
    Jsf64(Jsf64),
    Gjrand(Gjrand),
}

/// Uniform generator facade. Starts unseeded; `seed` or `set_state` makes
/// it draw-ready. Re-seeding a seeded facade is allowed and replaces the
/// state wholesale.
#[derive(Debug, Clone)]
pub struct Generator {
    algorithm: Algorithm,
    core: Option<Core>,
    /// Buffered high half of a split 64-bit draw.
    carry: Option<u32>,
}

impl Generator {
    pub fn new(algorithm: Algorithm) -> Self {
        Generator {
            algorithm,
            core: None,
            carry: None,
        }
    }

    /// Builds and seeds in one step.
    pub fn seeded(algorithm: Algorithm, entropy: &[u64]) -> Result<Self, GeneratorError> {
        let mut gen = Generator::new(algorithm);
        gen.seed(entropy)?;
        Ok(gen)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn is_seeded(&self) -> bool {
        self.core.is_some()
    }

    /// Consumes entropy words and installs a fresh state. Extra words
    /// beyond the family minimum are ignored by families with fixed-width
    /// seeding and folded in by keyed ones (mt19937, dsfmt).
    pub fn seed(&mut self, entropy: &[u64]) -> Result<(), GeneratorError> {
        let required = self.algorithm.min_seed_words();
        if entropy.len() < required {
            return Err(GeneratorError::InvalidSeed {
                algorithm: self.algorithm,
                required,
                provided: entropy.len(),
            });
        }
        self.core = Some(match self.algorithm {
            Algorithm::Mt19937 => Core::Mt19937(Mt19937::seed(entropy)),
            Algorithm::Dsfmt => Core::Dsfmt(Dsfmt::seed(entropy)),
            Algorithm::Pcg32 => Core::Pcg32(Pcg32::seed(entropy)),
            Algorithm::Pcg64 => Core::Pcg64(Pcg64::seed(entropy)),
            Algorithm::Philox => Core::Philox(Philox::seed(entropy)),
            Algorithm::Threefry => Core::Threefry(ThreeFry::seed(entropy)),
            Algorithm::Xoshiro256 => Core::Xoshiro256(Xoshiro256::seed(entropy)),
            Algorithm::Xoshiro512 => Core::Xoshiro512(Xoshiro512::seed(entropy)),
            Algorithm::Sfc64 => Core::Sfc64(Sfc64::seed(entropy)),
            Algorithm::Jsf64 => Core::Jsf64(Jsf64::seed(entropy)),
            Algorithm::Gjrand => Core::Gjrand(Gjrand::seed(entropy)),
        });
        self.carry = None;
        Ok(())
    }

    fn core_mut(&mut self) -> Result<&mut Core, GeneratorError> {
        self.core.as_mut().ok_or(GeneratorError::NotSeeded)
    }

    fn core_ref(&self) -> Result<&Core, GeneratorError> {
        self.core.as_ref().ok_or(GeneratorError::NotSeeded)
    }

    /// One full-width 64-bit draw. For 32-bit-native families this is two
    /// native draws, high word first. A pending narrowing carry is left
    /// untouched.
    pub fn next_u64(&mut self) -> Result<u64, GeneratorError> {
        let core = self.core_mut()?;
        Ok(match core {
            Core::Mt19937(g) => ((g.next_u32() as u64) << 32) | g.next_u32() as u64,
            Core::Dsfmt(g) => ((g.next_u32() as u64) << 32) | g.next_u32() as u64,
            Core::Pcg32(g) => ((g.next_u32() as u64) << 32) | g.next_u32() as u64,
            Core::Pcg64(g) => g.next_u64(),
            Core::Philox(g) => g.next_u64(),
            Core::Threefry(g) => g.next_u64(),
            Core::Xoshiro256(g) => g.next_u64(),
            Core::Xoshiro512(g) => g.next_u64(),
            Core::Sfc64(g) => g.next_u64(),
            Core::Jsf64(g) => g.next_u64(),
            Core::Gjrand(g) => g.next_u64(),
        })
    }

    /// One 32-bit draw. 64-bit-native families split a native draw: low
    /// half now, high half buffered for the next call.
    pub fn next_u32(&mut self) -> Result<u32, GeneratorError> {
        if self.algorithm.native_bits() == 32 {
            return Ok(match self.core_mut()? {
                Core::Mt19937(g) => g.next_u32(),
                Core::Dsfmt(g) => g.next_u32(),
                Core::Pcg32(g) => g.next_u32(),
                _ => unreachable!("core matches algorithm"),
            });
        }
        if let Some(pending) = self.carry.take() {
            return Ok(pending);
        }
        let draw = self.next_u64()?;
        self.carry = Some((draw >> 32) as u32);
        Ok(draw as u32)
    }

    /// Uniform double in [0, 1) with 53 significant bits.
    pub fn next_double(&mut self) -> Result<f64, GeneratorError> {
        match self.algorithm {
            // native path: bits of a double in [1, 2)
            Algorithm::Dsfmt => match self.core_mut()? {
                Core::Dsfmt(g) => Ok(g.next_double()),
                _ => unreachable!("core matches algorithm"),
            },
            Algorithm::Mt19937 | Algorithm::Pcg32 => {
                let a = (self.next_u32()? >> 5) as f64;
                let b = (self.next_u32()? >> 6) as f64;
                Ok((a * 67_108_864.0 + b) / 9_007_199_254_740_992.0)
            }
            _ => Ok((self.next_u64()? >> 11) as f64 * (1.0 / 9_007_199_254_740_992.0)),
        }
    }

    /// Jumps ahead by `n` family jump quanta (see each family's module
    /// docs for the quantum). Any pending narrowing carry is discarded:
    /// stream position after a jump is a block boundary.
    ///
    /// Cost is O(1) in `n` for the congruential and counter families but
    /// linear in `n` for the polynomial families (mt19937, dsfmt,
    /// xoshiro256/512), one table application per quantum. `n` is meant
    /// to be a worker index, not an arbitrary distance; the quanta are
    /// already 2^128 draws or more apart.
    pub fn jump(&mut self, n: u64) -> Result<(), GeneratorError> {
        let algorithm = self.algorithm;
        match self.core_mut()? {
            Core::Mt19937(g) => g.jump(n),
            Core::Dsfmt(g) => g.jump(n),
            Core::Pcg32(g) => g.advance(n.wrapping_mul(pcg32::JUMP_QUANTUM)),
            Core::Pcg64(g) => g.advance((n as u128) << 64),
            Core::Philox(g) => g.jump(n),
            Core::Threefry(g) => g.jump(n),
            Core::Xoshiro256(g) => {
                for _ in 0..n {
                    g.jump();
                }
            }
            Core::Xoshiro512(g) => {
                for _ in 0..n {
                    g.jump();
                }
            }
            Core::Sfc64(_) | Core::Jsf64(_) | Core::Gjrand(_) => {
                return Err(GeneratorError::UnsupportedOperation {
                    algorithm,
                    operation: "jump",
                })
            }
        }
        self.carry = None;
        Ok(())
    }

    /// Advances exactly `delta` draws (counter blocks for philox and
    /// threefry) in O(log delta) or O(1). Congruential and counter-based
    /// families only.
    pub fn advance(&mut self, delta: u128) -> Result<(), GeneratorError> {
        let algorithm = self.algorithm;
        match self.core_mut()? {
            Core::Pcg32(g) => g.advance(delta as u64),
            Core::Pcg64(g) => g.advance(delta),
            Core::Philox(g) => g.advance(delta),
            Core::Threefry(g) => g.advance(delta),
            _ => {
                return Err(GeneratorError::UnsupportedOperation {
                    algorithm,
                    operation: "advance",
                })
            }
        }
        self.carry = None;
        Ok(())
    }

    /// Re-keys a counter-based family to an independent stream in O(1).
    /// Distinct keys give disjoint output streams by construction.
    pub fn set_stream(&mut self, key: &[u64]) -> Result<(), GeneratorError> {
        let algorithm = self.algorithm;
        let required = match algorithm {
            Algorithm::Philox => philox::KEY_WORDS,
            Algorithm::Threefry => threefry::KEY_WORDS,
            _ => {
                return Err(GeneratorError::UnsupportedOperation {
                    algorithm,
                    operation: "set_stream",
                })
            }
        };
        if key.len() < required {
            return Err(GeneratorError::InvalidSeed {
                algorithm,
                required,
                provided: key.len(),
            });
        }
        match self.core_mut()? {
            Core::Philox(g) => g.set_stream(key),
            Core::Threefry(g) => g.set_stream(key),
            _ => unreachable!("guarded by the algorithm match above"),
        }
        self.carry = None;
        Ok(())
    }

    pub fn get_state(&self) -> Result<StateSnapshot, GeneratorError> {
        let (words, index) = match self.core_ref()? {
            Core::Mt19937(g) => (g.state_words(), Some(g.index())),
            Core::Dsfmt(g) => (g.state_words(), Some(g.index())),
            Core::Pcg32(g) => (g.state_words(), None),
            Core::Pcg64(g) => (g.state_words(), None),
            Core::Philox(g) => (g.state_words(), Some(g.buffer_pos())),
            Core::Threefry(g) => (g.state_words(), Some(g.buffer_pos())),
            Core::Xoshiro256(g) => (g.state_words(), None),
            Core::Xoshiro512(g) => (g.state_words(), None),
            Core::Sfc64(g) => (g.state_words(), None),
            Core::Jsf64(g) => (g.state_words(), None),
            Core::Gjrand(g) => (g.state_words(), None),
        };
        Ok(StateSnapshot {
            algorithm: self.algorithm,
            version: SNAPSHOT_VERSION,
            words,
            index,
            carry: self.carry,
        })
    }

    /// Restores a snapshot, transitioning an unseeded facade to seeded.
    /// The snapshot must carry this facade's algorithm tag and version.
    pub fn set_state(&mut self, snapshot: &StateSnapshot) -> Result<(), GeneratorError> {
        if snapshot.algorithm != self.algorithm {
            return Err(GeneratorError::IncompatibleState {
                expected: self.algorithm.name().to_string(),
                found: snapshot.algorithm.name().to_string(),
            });
        }
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(GeneratorError::IncompatibleState {
                expected: format!("snapshot version {}", SNAPSHOT_VERSION),
                found: format!("snapshot version {}", snapshot.version),
            });
        }
        if self.algorithm.native_bits() == 32 && snapshot.carry.is_some() {
            return Err(GeneratorError::InvalidState {
                reason: format!("{} snapshots do not carry a half-word", self.algorithm),
            });
        }
        let index = |required: bool| -> Result<usize, GeneratorError> {
            match (required, snapshot.index) {
                (true, Some(i)) => Ok(i),
                (true, None) => Err(GeneratorError::InvalidState {
                    reason: format!("{} snapshot requires an index", self.algorithm),
                }),
                (false, Some(_)) => Err(GeneratorError::InvalidState {
                    reason: format!("{} snapshots do not carry an index", self.algorithm),
                }),
                (false, None) => Ok(0),
            }
        };
        let core = match self.algorithm {
            Algorithm::Mt19937 => Core::Mt19937(Mt19937::from_state_words(
                &snapshot.words,
                index(true)?,
            )?),
            Algorithm::Dsfmt => {
                Core::Dsfmt(Dsfmt::from_state_words(&snapshot.words, index(true)?)?)
            }
            Algorithm::Pcg32 => {
                index(false)?;
                Core::Pcg32(Pcg32::from_state_words(&snapshot.words)?)
            }
            Algorithm::Pcg64 => {
                index(false)?;
                Core::Pcg64(Pcg64::from_state_words(&snapshot.words)?)
            }
            Algorithm::Philox => Core::Philox(Philox::from_state_words(
                &snapshot.words,
                index(true)?,
            )?),
            Algorithm::Threefry => Core::Threefry(ThreeFry::from_state_words(
                &snapshot.words,
                index(true)?,
            )?),
            Algorithm::Xoshiro256 => {
                index(false)?;
                Core::Xoshiro256(Xoshiro256::from_state_words(&snapshot.words)?)
            }
            Algorithm::Xoshiro512 => {
                index(false)?;
                Core::Xoshiro512(Xoshiro512::from_state_words(&snapshot.words)?)
            }
            Algorithm::Sfc64 => {
                index(false)?;
                Core::Sfc64(Sfc64::from_state_words(&snapshot.words)?)
            }
            Algorithm::Jsf64 => {
                index(false)?;
                Core::Jsf64(Jsf64::from_state_words(&snapshot.words)?)
            }
            Algorithm::Gjrand => {
                index(false)?;
                Core::Gjrand(Gjrand::from_state_words(&snapshot.words)?)
            }
        };
        self.core = Some(core);
        self.carry = snapshot.carry;
        Ok(())
    }
}
