//! jsf64 - Bob Jenkins' small fast 64-bit generator
//!
//! Three rotate/add/xor operations over four 64-bit words, with the output
//! fused into the transition. Fast and statistically strong, but there is
//! no published jump algorithm for this family: parallel use must rely on
//! well-separated seeds, which is weaker than the non-overlap guarantee the
//! jumpable families provide. Callers are expected to prefer those families
//! when stream disjointness matters.

use crate::generator::GeneratorError;

/// Forced value of the first state word at seed time. Guarantees the
/// post-mix state can never be all-zero regardless of entropy input.
const SEED_CONST: u64 = 0xF1EA_5EED;

/// Rounds discarded after seeding so the entropy diffuses through all
/// four words before the first visible output.
const SEED_DISCARD: usize = 20;

pub(crate) const SEED_WORDS: usize = 3;
pub(crate) const STATE_WORDS: usize = 4;

#[derive(Debug, Clone)]
pub(crate) struct Jsf64 {
    s: [u64; 4],
}

impl Jsf64 {
    pub(crate) fn seed(entropy: &[u64]) -> Self {
        let mut gen = Self {
            s: [SEED_CONST, entropy[0], entropy[1], entropy[2]],
        };
        for _ in 0..SEED_DISCARD {
            gen.next_u64();
        }
        gen
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        let s = &mut self.s;
        let e = s[0].wrapping_sub(s[1].rotate_left(7));
        s[0] = s[1] ^ s[2].rotate_left(13);
        s[1] = s[2].wrapping_add(s[3].rotate_left(37));
        s[2] = s[3].wrapping_add(e);
        s[3] = e.wrapping_add(s[0]);
        s[3]
    }

    pub(crate) fn state_words(&self) -> Vec<u64> {
        self.s.to_vec()
    }

    pub(crate) fn from_state_words(words: &[u64]) -> Result<Self, GeneratorError> {
        if words.len() != STATE_WORDS {
            return Err(GeneratorError::InvalidState {
                reason: format!("jsf64 expects {} state words, got {}", STATE_WORDS, words.len()),
            });
        }
        if words.iter().all(|&w| w == 0) {
            // The all-zero state is a fixed point of the transition.
            return Err(GeneratorError::InvalidState {
                reason: "jsf64 state must not be all zero".to_string(),
            });
        }
        Ok(Self {
            s: [words[0], words[1], words[2], words[3]],
        })
    }
}
