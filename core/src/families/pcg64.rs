//! PCG64 - permuted congruential generator, 128-bit state, 64-bit output
//!
//! The 128-bit LCG state advances first; output applies the XSL-RR
//! permutation (xor of the state halves, rotated by the top six bits) to
//! the post-step state. The 128-bit odd increment is the stream identity:
//! two generators over the same multiplier with different odd increments
//! produce provably non-identical full-period (2^128) sequences.
//!
//! The jump quantum is 2^64 transition steps, applied through the exact
//! O(log delta) `advance`.

use crate::generator::GeneratorError;

const MULTIPLIER: u128 = 0x2360_ED05_1FC6_5DA4_4385_DF64_9FCC_F645;

pub(crate) const SEED_WORDS: usize = 4;
pub(crate) const STATE_WORDS: usize = 4;

/// Jump quantum: one `jump` equals this many transition steps.
pub(crate) const JUMP_QUANTUM: u128 = 1 << 64;

#[derive(Debug, Clone)]
pub(crate) struct Pcg64 {
    state: u128,
    increment: u128,
}

impl Pcg64 {
    /// Seeds from `[state_hi, state_lo, stream_hi, stream_lo]`. The stream
    /// pair is forced odd, so every seeding selects a valid stream.
    pub(crate) fn seed(entropy: &[u64]) -> Self {
        let initial = ((entropy[0] as u128) << 64) | entropy[1] as u128;
        let stream = ((entropy[2] as u128) << 64) | entropy[3] as u128;
        let mut gen = Self {
            state: 0,
            increment: (stream << 1) | 1,
        };
        gen.step();
        gen.state = gen.state.wrapping_add(initial);
        gen.step();
        gen
    }

    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.step();
        let xored = ((self.state >> 64) as u64) ^ self.state as u64;
        let rot = (self.state >> 122) as u32;
        xored.rotate_right(rot)
    }

    /// Exact state advance by `delta` steps in O(log delta).
    pub(crate) fn advance(&mut self, delta: u128) {
        let mut acc_mult: u128 = 1;
        let mut acc_plus: u128 = 0;
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
        vec![
            (self.state >> 64) as u64,
            self.state as u64,
            (self.increment >> 64) as u64,
            self.increment as u64,
        ]
    }

    pub(crate) fn from_state_words(words: &[u64]) -> Result<Self, GeneratorError> {
        if words.len() != STATE_WORDS {
            return Err(GeneratorError::InvalidState {
                reason: format!("pcg64 expects {} state words, got {}", STATE_WORDS, words.len()),
            });
        }
        if words[3] & 1 == 0 {
            return Err(GeneratorError::InvalidState {
                reason: "pcg64 increment must be odd".to_string(),
            });
        }
        Ok(Self {
            state: ((words[0] as u128) << 64) | words[1] as u128,
            increment: ((words[2] as u128) << 64) | words[3] as u128,
        })
    }
}
