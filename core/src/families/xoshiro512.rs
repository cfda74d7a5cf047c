//! xoshiro512** - larger-state variant of xoshiro256**
//!
//! Eight 64-bit words, period 2^512 - 1. Same ** output scrambler over
//! word 1, same forbidden all-zero state, same polynomial jump technique
//! with a quantum of 2^256 steps.

use crate::generator::GeneratorError;
use crate::jump::{jump_by_polynomial, LinearState};

const ZERO_FIXUP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Coefficients of z^(2^256) mod the characteristic polynomial. Generated
/// offline; equals the published reference jump constants.
const JUMP_POLY: [u64; 8] = [
    0x33ED_89B6_E7A3_53F9,
    0x7600_83D7_9553_23BE,
    0x2837_F2FB_B5F2_2FAE,
    0x4B8C_5674_D309_511C,
    0xB11A_C47A_7BA2_8C25,
    0xF1BE_7667_092B_CC1C,
    0x5385_1EFD_B6DF_0AAF,
    0x1EBB_C8B2_3EAF_25DB,
];

pub(crate) const SEED_WORDS: usize = 8;
pub(crate) const STATE_WORDS: usize = 8;

#[derive(Debug, Clone)]
pub(crate) struct Xoshiro512 {
    s: [u64; 8],
}

impl Xoshiro512 {
    pub(crate) fn seed(entropy: &[u64]) -> Self {
        let mut s = [0u64; 8];
        s.copy_from_slice(&entropy[..8]);
        if s.iter().all(|&w| w == 0) {
            s[0] = ZERO_FIXUP;
        }
        Self { s }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        let result = self.s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        self.step();
        result
    }

    pub(crate) fn jump(&mut self) {
        *self = jump_by_polynomial(self, &JUMP_POLY);
    }

    pub(crate) fn state_words(&self) -> Vec<u64> {
        self.s.to_vec()
    }

    pub(crate) fn from_state_words(words: &[u64]) -> Result<Self, GeneratorError> {
        if words.len() != STATE_WORDS {
            return Err(GeneratorError::InvalidState {
                reason: format!(
                    "xoshiro512 expects {} state words, got {}",
                    STATE_WORDS,
                    words.len()
                ),
            });
        }
        if words.iter().all(|&w| w == 0) {
            return Err(GeneratorError::InvalidState {
                reason: "xoshiro512 state must not be all zero".to_string(),
            });
        }
        let mut s = [0u64; 8];
        s.copy_from_slice(words);
        Ok(Self { s })
    }
}

impl LinearState for Xoshiro512 {
    fn zeroed() -> Self {
        Self { s: [0; 8] }
    }

    fn step(&mut self) {
        let s = &mut self.s;
        let t = s[1] << 11;
        s[2] ^= s[0];
        s[5] ^= s[1];
        s[1] ^= s[2];
        s[7] ^= s[3];
        s[3] ^= s[4];
        s[4] ^= s[5];
        s[0] ^= s[6];
        s[6] ^= s[7];
        s[6] ^= t;
        s[7] = s[7].rotate_left(21);
    }

    fn xor_into(&self, acc: &mut Self) {
        for i in 0..8 {
            acc.s[i] ^= self.s[i];
        }
    }
}
