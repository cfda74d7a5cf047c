//! gjrand - David Blackman's small chaotic generator
//!
//! Four 64-bit words advanced by a fused add/rotate/xor step. The fourth
//! word is a Weyl-style counter incremented by a fixed odd constant each
//! step, so the transition has no fixed point and the all-zero state is
//! harmless. No jump algorithm is published for this family; stream
//! separation relies on distinct seeds.

use crate::generator::GeneratorError;

const WEYL_INCREMENT: u64 = 0x55AA_96A5;
const SEED_DISCARD: usize = 14;

pub(crate) const SEED_WORDS: usize = 2;
pub(crate) const STATE_WORDS: usize = 4;

#[derive(Debug, Clone)]
pub(crate) struct Gjrand {
    s: [u64; 4],
}

impl Gjrand {
    pub(crate) fn seed(entropy: &[u64]) -> Self {
        let mut gen = Self {
            s: [entropy[0], entropy[1], 2000001, 0],
        };
        for _ in 0..SEED_DISCARD {
            gen.next_u64();
        }
        gen
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        let s = &mut self.s;
        s[1] = s[1].wrapping_add(s[2]);
        s[0] = s[0].rotate_left(32);
        s[2] ^= s[1];
        s[3] = s[3].wrapping_add(WEYL_INCREMENT);
        s[0] = s[0].wrapping_add(s[1]);
        s[2] = s[2].rotate_left(23);
        s[1] ^= s[0];
        s[0] = s[0].wrapping_add(s[2]);
        s[1] = s[1].rotate_left(19);
        s[2] = s[2].wrapping_add(s[0]);
        s[1] = s[1].wrapping_add(s[3]);
        s[0]
    }

    pub(crate) fn state_words(&self) -> Vec<u64> {
        self.s.to_vec()
    }

    pub(crate) fn from_state_words(words: &[u64]) -> Result<Self, GeneratorError> {
        if words.len() != STATE_WORDS {
            return Err(GeneratorError::InvalidState {
                reason: format!(
                    "gjrand expects {} state words, got {}",
                    STATE_WORDS,
                    words.len()
                ),
            });
        }
        Ok(Self {
            s: [words[0], words[1], words[2], words[3]],
        })
    }
}
