//! ThreeFry-4x64-20 - counter-based generator built on the Threefish
//! block cipher's mixing function.
//!
//! # Algorithm
//!
//! Same counter/key/buffer shell as Philox: a 256-bit counter is
//! incremented and encrypted under a 256-bit key to produce four buffered
//! output words. The cipher runs 20 rounds of add/rotate/xor mixing with a
//! key-schedule injection every four rounds. ThreeFry uses no
//! multiplications, which makes it the stronger (and slower) of the two
//! counter-based families here.

use crate::generator::GeneratorError;

const ROUNDS: usize = 20;
const KEY_PARITY: u64 = 0x1BD1_1BDA_A9FC_1A22;
const ROTATIONS: [[u32; 2]; 8] = [
    [14, 16],
    [52, 57],
    [23, 40],
    [5, 37],
    [25, 33],
    [46, 12],
    [58, 22],
    [32, 32],
];

const BUFFER_SIZE: usize = 4;

pub(crate) const SEED_WORDS: usize = 4;
pub(crate) const KEY_WORDS: usize = 4;
/// ctr[4] + key[4] + buffer[4]
pub(crate) const STATE_WORDS: usize = 12;

#[derive(Debug, Clone)]
pub(crate) struct ThreeFry {
    ctr: [u64; 4],
    key: [u64; 4],
    buffer: [u64; 4],
    buffer_pos: usize,
}

fn block(ctr: &[u64; 4], key: &[u64; 4]) -> [u64; 4] {
    let ks = [
        key[0],
        key[1],
        key[2],
        key[3],
        key[0] ^ key[1] ^ key[2] ^ key[3] ^ KEY_PARITY,
    ];
    let mut x = [
        ctr[0].wrapping_add(ks[0]),
        ctr[1].wrapping_add(ks[1]),
        ctr[2].wrapping_add(ks[2]),
        ctr[3].wrapping_add(ks[3]),
    ];
    for round in 0..ROUNDS {
        let [r0, r1] = ROTATIONS[round % 8];
        x[0] = x[0].wrapping_add(x[1]);
        x[1] = x[1].rotate_left(r0) ^ x[0];
        x[2] = x[2].wrapping_add(x[3]);
        x[3] = x[3].rotate_left(r1) ^ x[2];
        x.swap(1, 3);
        if round % 4 == 3 {
            let q = (round / 4 + 1) as u64;
            for i in 0..4 {
                x[i] = x[i].wrapping_add(ks[(round / 4 + 1 + i) % 5]);
            }
            x[3] = x[3].wrapping_add(q);
        }
    }
    x
}

impl ThreeFry {
    pub(crate) fn seed(entropy: &[u64]) -> Self {
        Self {
            ctr: [0; 4],
            key: [entropy[0], entropy[1], entropy[2], entropy[3]],
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

    pub(crate) fn set_stream(&mut self, key: &[u64]) {
        self.key = [key[0], key[1], key[2], key[3]];
        self.buffer_pos = BUFFER_SIZE;
    }

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
                reason: format!(
                    "threefry expects {} state words, got {}",
                    STATE_WORDS,
                    words.len()
                ),
            });
        }
        if buffer_pos > BUFFER_SIZE {
            return Err(GeneratorError::InvalidState {
                reason: format!("threefry buffer position {} out of range", buffer_pos),
            });
        }
        Ok(Self {
            ctr: [words[0], words[1], words[2], words[3]],
            key: [words[4], words[5], words[6], words[7]],
            buffer: [words[8], words[9], words[10], words[11]],
            buffer_pos,
        })
    }

    pub(crate) fn buffer_pos(&self) -> usize {
        self.buffer_pos
    }
}
