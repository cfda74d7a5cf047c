//! Philox-4x64-10 - counter-based generator (Random123 family)
//!
//! # Algorithm
//!
//! State is a 256-bit counter plus a 128-bit key; there is no evolving
//! recurrence. Each block increments the counter and runs ten keyed
//! multiply/xor mixing rounds over the four counter words, yielding four
//! output words that are buffered and served one at a time. The counter
//! wraps on overflow; wraparound is full-period behavior, not an error.
//!
//! # Streams
//!
//! Because successive counters have no sequential dependency, disjoint
//! counters or disjoint keys guarantee disjoint outputs. `set_stream`
//! rewrites the key in O(1), which is the preferred way to split streams;
//! `jump` adds 2^128 to the counter and `advance` adds an arbitrary delta.

use crate::generator::GeneratorError;

const ROUNDS: usize = 10;
const MULT0: u64 = 0xD2E7_470E_E14C_6C93;
const MULT1: u64 = 0xCA5A_8263_9512_1157;
const WEYL0: u64 = 0x9E37_79B9_7F4A_7C15;
const WEYL1: u64 = 0xBB67_AE85_84CA_A73B;

const BUFFER_SIZE: usize = 4;

pub(crate) const SEED_WORDS: usize = 2;
pub(crate) const KEY_WORDS: usize = 2;
/// ctr[4] + key[2] + buffer[4]
pub(crate) const STATE_WORDS: usize = 10;

#[derive(Debug, Clone)]
pub(crate) struct Philox {
    ctr: [u64; 4],
    key: [u64; 2],
    buffer: [u64; 4],
    buffer_pos: usize,
}

#[inline]
fn mulhilo(a: u64, b: u64) -> (u64, u64) {
    let p = (a as u128) * (b as u128);
    ((p >> 64) as u64, p as u64)
}

fn block(ctr: &[u64; 4], key: &[u64; 2]) -> [u64; 4] {
    let mut c = *ctr;
    let (mut k0, mut k1) = (key[0], key[1]);
    for _ in 0..ROUNDS {
        let (hi0, lo0) = mulhilo(MULT0, c[0]);
        let (hi1, lo1) = mulhilo(MULT1, c[2]);
        c = [hi1 ^ c[1] ^ k0, lo1, hi0 ^ c[3] ^ k1, lo0];
        k0 = k0.wrapping_add(WEYL0);
        k1 = k1.wrapping_add(WEYL1);
    }
    c
}

impl Philox {
    pub(crate) fn seed(entropy: &[u64]) -> Self {
        Self {
            ctr: [0; 4],
            key: [entropy[0], entropy[1]],
            buffer: [0; 4],
            buffer_pos: BUFFER_SIZE,
        }
    }

    fn increment(&mut self) {
        for word in self.ctr.iter_mut() {
            *word = word.wrapping_add(1);
            if *word != 0 {
                break;
            }
        }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        if self.buffer_pos < BUFFER_SIZE {
            let out = self.buffer[self.buffer_pos];
            self.buffer_pos += 1;
            return out;
        }
        self.increment();
        self.buffer = block(&self.ctr, &self.key);
        self.buffer_pos = 1;
        self.buffer[0]
    }

    /// O(1) stream selection: rewrite the key, discard buffered output.
    pub(crate) fn set_stream(&mut self, key: &[u64]) {
        self.key = [key[0], key[1]];
        self.buffer_pos = BUFFER_SIZE;
    }

    /// Adds `delta` to the 256-bit counter (counter blocks, four outputs
    /// per block). Wraps modulo 2^256.
    pub(crate) fn advance(&mut self, delta: u128) {
        let mut carry = delta;
        for word in self.ctr.iter_mut() {
            if carry == 0 {
                break;
            }
            let total = *word as u128 + (carry & u64::MAX as u128);
            *word = total as u64;
            carry = (carry >> 64) + (total >> 64);
        }
        self.buffer_pos = BUFFER_SIZE;
    }

    /// Jump quantum 2^128 counter blocks: adds `n` to the counter's upper
    /// 128-bit half.
    pub(crate) fn jump(&mut self, n: u64) {
        let total = self.ctr[2] as u128 + n as u128;
        self.ctr[2] = total as u64;
        self.ctr[3] = self.ctr[3].wrapping_add((total >> 64) as u64);
        self.buffer_pos = BUFFER_SIZE;
    }

    pub(crate) fn state_words(&self) -> Vec<u64> {
        let mut words = Vec::with_capacity(STATE_WORDS);
        words.extend_from_slice(&self.ctr);
        words.extend_from_slice(&self.key);
        words.extend_from_slice(&self.buffer);
        words
    }

    pub(crate) fn from_state_words(
        words: &[u64],
        buffer_pos: usize,
    ) -> Result<Self, GeneratorError> {
        if words.len() != STATE_WORDS {
            return Err(GeneratorError::InvalidState {
                reason: format!("philox expects {} state words, got {}", STATE_WORDS, words.len()),
            });
        }
        if buffer_pos > BUFFER_SIZE {
            return Err(GeneratorError::InvalidState {
                reason: format!("philox buffer position {} out of range", buffer_pos),
            });
        }
        Ok(Self {
            ctr: [words[0], words[1], words[2], words[3]],
            key: [words[4], words[5]],
            buffer: [words[6], words[7], words[8], words[9]],
            buffer_pos,
        })
    }

    pub(crate) fn buffer_pos(&self) -> usize {
        self.buffer_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_keyed() {
        let mut a = Philox::seed(&[1, 2]);
        let mut b = Philox::seed(&[1, 3]);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn advance_matches_block_consumption() {
        // One counter step produces four buffered outputs, so consuming
        // 4 * k outputs lands on the same counter as advance(k).
        let mut drawn = Philox::seed(&[9, 9]);
        let mut advanced = Philox::seed(&[9, 9]);
        for _ in 0..4 * 25 {
            drawn.next_u64();
        }
        advanced.advance(25);
        assert_eq!(drawn.state_words()[..6], advanced.state_words()[..6]);
        assert_eq!(drawn.next_u64(), advanced.next_u64());
    }

    #[test]
    fn jump_offsets_counter_high_half() {
        let mut gen = Philox::seed(&[0, 0]);
        gen.jump(3);
        assert_eq!(gen.state_words()[2], 3);
        assert_eq!(gen.state_words()[0], 0);
    }

    #[test]
    fn counter_wraps_without_error() {
        let mut gen =
            Philox::from_state_words(&[u64::MAX, u64::MAX, u64::MAX, u64::MAX, 1, 2, 0, 0, 0, 0], 4)
                .unwrap();
        gen.next_u64();
        assert_eq!(gen.state_words()[..4], [0, 0, 0, 0]);
    }

    #[test]
    fn set_stream_discards_buffer() {
        let mut gen = Philox::seed(&[4, 5]);
        let first = gen.next_u64();
        gen.set_stream(&[6, 7]);
        let rekeyed = gen.next_u64();
        assert_ne!(first, rekeyed);
        assert_eq!(gen.buffer_pos(), 1);
    }
}
