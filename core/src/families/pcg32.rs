//! PCG32 - permuted congruential generator, 64-bit state, 32-bit output
//!
//! # Algorithm
//!
//! The state advances through a plain 64-bit linear congruential step.
//! Output applies the XSH-RR permutation (xorshift-high, random rotate) to
//! the *pre-step* state, destroying the low-bit correlations of the raw
//! LCG. The increment is the stream identity: any odd increment yields a
//! distinct full-period (2^64) sequence over the same multiplier.
//!
//! # Streams and advance
//!
//! `advance` moves the state as if `delta` steps had been taken, in
//! O(log delta) work, using the standard LCG power identity. The jump
//! quantum for this family is 2^32, partitioning the 2^64 period into
//! 2^32 non-overlapping substreams.

use crate::generator::GeneratorError;

const MULTIPLIER: u64 = 6364136223846793005;

pub(crate) const SEED_WORDS: usize = 2;
pub(crate) const STATE_WORDS: usize = 2;

/// Jump quantum: one `jump` equals this many transition steps.
pub(crate) const JUMP_QUANTUM: u64 = 1 << 32;

#[derive(Debug, Clone)]
pub(crate) struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Pcg32 {
    /// Seeds from `[initial_state, stream]`. The stream word is forced odd
    /// by shifting in a set bit, so every seeding yields a valid stream.
    pub(crate) fn seed(entropy: &[u64]) -> Self {
        let mut gen = Self {
            state: 0,
            increment: (entropy[1] << 1) | 1,
        };
        gen.step();
        gen.state = gen.state.wrapping_add(entropy[0]);
        gen.step();
        gen
    }

    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Exact state advance by `delta` steps in O(log delta).
    pub(crate) fn advance(&mut self, delta: u64) {
        let mut acc_mult: u64 = 1;
        let mut acc_plus: u64 = 0;
        let mut cur_mult = MULTIPLIER;
        let mut cur_plus = self.increment;
        let mut delta = delta;
        while delta > 0 {
            if delta & 1 == 1 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            }
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            delta >>= 1;
        }
        self.state = acc_mult.wrapping_mul(self.state).wrapping_add(acc_plus);
    }

    pub(crate) fn state_words(&self) -> Vec<u64> {
        vec![self.state, self.increment]
    }

    pub(crate) fn from_state_words(words: &[u64]) -> Result<Self, GeneratorError> {
        if words.len() != STATE_WORDS {
            return Err(GeneratorError::InvalidState {
                reason: format!("pcg32 expects {} state words, got {}", STATE_WORDS, words.len()),
            });
        }
        if words[1] & 1 == 0 {
            return Err(GeneratorError::InvalidState {
                reason: "pcg32 increment must be odd".to_string(),
            });
        }
        Ok(Self {
            state: words[0],
            increment: words[1],
        })
    }
}
