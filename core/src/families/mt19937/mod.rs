//! MT19937 Mersenne Twister - 32-bit output, period 2^19937 - 1.
//!
//! # Algorithm
//!
//! Classic Matsumoto/Nishimura generator: 624 words of 32-bit state,
//! twisted GFSR recurrence regenerated a block at a time, tempering on
//! output. Seeding uses `init_by_array` over the 32-bit halves of the
//! entropy words, so results line up with the reference implementation's
//! test vectors.
//!
//! # Jump
//!
//! The recurrence is linear over GF(2), so jumping 2^128 draws is a
//! polynomial evaluation: the characteristic-polynomial remainder of
//! z^(2^128) (precomputed in `params`) is applied to the state with the
//! square-free Horner walk in [`crate::jump`]. The block-generation state
//! `(arr, index)` is first normalized to the sliding window at the current
//! draw position.

mod params;

use crate::generator::GeneratorError;
use crate::jump::{jump_by_polynomial, LinearState};

pub(crate) const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;

const INIT_SEED: u32 = 19_650_218;
const INIT_MULT: u32 = 1_812_433_253;
const MIX_MULT_1: u32 = 1_664_525;
const MIX_MULT_2: u32 = 1_566_083_941;

pub(crate) const SEED_WORDS: usize = 1;
pub(crate) const STATE_WORDS: usize = N;

#[derive(Debug, Clone)]
pub(crate) struct Mt19937 {
    mt: [u32; N],
    mti: usize,
}

#[inline]
fn twist(upper: u32, lower: u32, skip: u32) -> u32 {
    let y = (upper & UPPER_MASK) | (lower & LOWER_MASK);
    let mut x = skip ^ (y >> 1);
    if y & 1 != 0 {
        x ^= MATRIX_A;
    }
    x
}

#[inline]
fn temper(mut y: u32) -> u32 {
    y ^= y >> 11;
    y ^= (y << 7) & 0x9D2C_5680;
    y ^= (y << 15) & 0xEFC6_0000;
    y ^ (y >> 18)
}

/// Entropy words split into 32-bit key halves, low half first.
pub(crate) fn entropy_to_key(entropy: &[u64]) -> Vec<u32> {
    entropy
        .iter()
        .flat_map(|&w| [w as u32, (w >> 32) as u32])
        .collect()
}

fn init_genrand_sized(seed: u32, n: usize) -> Vec<u32> {
    let mut mt = vec![0u32; n];
    mt[0] = seed;
    for i in 1..n {
        mt[i] = INIT_MULT
            .wrapping_mul(mt[i - 1] ^ (mt[i - 1] >> 30))
            .wrapping_add(i as u32);
    }
    mt
}

/// Knuth-style key mixing from the reference `init_by_array`, over an
/// arbitrary state size. dSFMT seeds its own, larger pool through this
/// same schedule.
pub(crate) fn init_by_array_sized(key: &[u32], n: usize) -> Vec<u32> {
    let mut mt = init_genrand_sized(INIT_SEED, n);
    let mut i = 1usize;
    let mut j = 0usize;
    for _ in 0..n.max(key.len()) {
        mt[i] = (mt[i] ^ (mt[i - 1] ^ (mt[i - 1] >> 30)).wrapping_mul(MIX_MULT_1))
            .wrapping_add(key[j])
            .wrapping_add(j as u32);
        i += 1;
        j += 1;
        if i >= n {
            mt[0] = mt[n - 1];
            i = 1;
        }
        if j >= key.len() {
            j = 0;
        }
    }
    for _ in 0..n - 1 {
        mt[i] = (mt[i] ^ (mt[i - 1] ^ (mt[i - 1] >> 30)).wrapping_mul(MIX_MULT_2))
            .wrapping_sub(i as u32);
        i += 1;
        if i >= n {
            mt[0] = mt[n - 1];
            i = 1;
        }
    }
    mt[0] = 0x8000_0000;
    mt
}

impl Mt19937 {
    pub(crate) fn init_by_array(key: &[u32]) -> Self {
        let mixed = init_by_array_sized(key, N);
        let mut mt = [0u32; N];
        mt.copy_from_slice(&mixed);
        Self { mt, mti: N }
    }

    pub(crate) fn seed(entropy: &[u64]) -> Self {
        Self::init_by_array(&entropy_to_key(entropy))
    }

    fn generate_block(&mut self) {
        for kk in 0..N - M {
            self.mt[kk] = twist(self.mt[kk], self.mt[kk + 1], self.mt[kk + M]);
        }
        for kk in N - M..N - 1 {
            self.mt[kk] = twist(self.mt[kk], self.mt[kk + 1], self.mt[kk + M - N]);
        }
        self.mt[N - 1] = twist(self.mt[N - 1], self.mt[0], self.mt[M - 1]);
        self.mti = 0;
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        if self.mti >= N {
            self.generate_block();
        }
        let y = self.mt[self.mti];
        self.mti += 1;
        temper(y)
    }

    /// Jumps `n * 2^128` draws ahead.
    pub(crate) fn jump(&mut self, n: u64) {
        let mut window = Window::from_generator(self);
        for _ in 0..n {
            window = jump_by_polynomial(&window, &params::JUMP_POLY);
        }
        self.mt = window.canonical();
        self.mti = 0;
    }

    pub(crate) fn state_words(&self) -> Vec<u64> {
        self.mt.iter().map(|&w| w as u64).collect()
    }

    pub(crate) fn index(&self) -> usize {
        self.mti
    }

    pub(crate) fn from_state_words(words: &[u64], index: usize) -> Result<Self, GeneratorError> {
        if words.len() != STATE_WORDS {
            return Err(GeneratorError::InvalidState {
                reason: format!(
                    "mt19937 expects {} state words, got {}",
                    STATE_WORDS,
                    words.len()
                ),
            });
        }
        if index > N {
            return Err(GeneratorError::InvalidState {
                reason: format!("mt19937 index {} out of range 0..={}", index, N),
            });
        }
        let mut mt = [0u32; N];
        for (slot, &word) in mt.iter_mut().zip(words) {
            if word > u32::MAX as u64 {
                return Err(GeneratorError::InvalidState {
                    reason: "mt19937 state words must fit in 32 bits".to_string(),
                });
            }
            *slot = word as u32;
        }
        if mt.iter().all(|&w| w == 0) {
            // fixed point of the twist: every draw would temper to 0
            return Err(GeneratorError::InvalidState {
                reason: "mt19937 state must not be all zero".to_string(),
            });
        }
        Ok(Self { mt, mti: index })
    }
}

/// Sliding-window view of the recurrence for GF(2) jumps. `arr[base]` is
/// the oldest live word; one `step` replaces it with the word 624 positions
/// ahead and advances `base`.
#[derive(Clone)]
struct Window {
    arr: [u32; N],
    base: usize,
}

impl Window {
    /// Normalizes `(arr, mti)` to the window at the current draw position
    /// by stepping once per already-consumed word.
    fn from_generator(gen: &Mt19937) -> Self {
        let mut window = Window { arr: gen.mt, base: 0 };
        for _ in 0..gen.mti {
            window.step();
        }
        window
    }

    #[inline]
    fn at(&self, offset: usize) -> u32 {
        let mut i = self.base + offset;
        if i >= N {
            i -= N;
        }
        self.arr[i]
    }

    fn canonical(&self) -> [u32; N] {
        let mut out = [0u32; N];
        for (j, slot) in out.iter_mut().enumerate() {
            *slot = self.at(j);
        }
        out
    }
}

impl LinearState for Window {
    fn zeroed() -> Self {
        Window { arr: [0; N], base: 0 }
    }

    fn step(&mut self) {
        let next = twist(self.at(0), self.at(1), self.at(M));
        self.arr[self.base] = next;
        self.base += 1;
        if self.base >= N {
            self.base = 0;
        }
    }

    fn xor_into(&self, acc: &mut Self) {
        debug_assert_eq!(acc.base, 0);
        for j in 0..N {
            acc.arr[j] ^= self.at(j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // First outputs of init_by_array {0x123, 0x234, 0x345, 0x456} from the
    // reference mt19937ar.c distribution.
    #[test]
    fn reference_sequence() {
        let mut gen = Mt19937::init_by_array(&[0x123, 0x234, 0x345, 0x456]);
        let expected = [
            1067595299u32,
            955945823,
            477289528,
            4107218783,
            4228976476,
        ];
        for &want in &expected {
            assert_eq!(gen.next_u32(), want);
        }
    }

    #[test]
    fn entropy_key_splits_low_half_first() {
        assert_eq!(
            entropy_to_key(&[0x1111_2222_3333_4444]),
            vec![0x3333_4444, 0x1111_2222]
        );
    }

    #[test]
    fn window_round_trips_generator_state() {
        let mut gen = Mt19937::init_by_array(&[42]);
        for _ in 0..100 {
            gen.next_u32();
        }
        let window = Window::from_generator(&gen);
        let mut restored = Mt19937 {
            mt: window.canonical(),
            mti: 0,
        };
        let mut original = gen.clone();
        for _ in 0..2000 {
            assert_eq!(restored.next_u32(), original.next_u32());
        }
    }

    #[test]
    fn test_polynomial_matches_stepping() {
        // z^1024 mod p applied to the window must equal 1024 raw steps.
        let gen = Mt19937::init_by_array(&[7, 8, 9]);
        let start = Window::from_generator(&gen);
        let jumped = jump_by_polynomial(&start, &params::TEST_POLY_2_10);
        let mut stepped = start.clone();
        for _ in 0..1024 {
            stepped.step();
        }
        assert_eq!(jumped.canonical(), stepped.canonical());
    }

    #[test]
    fn test_polynomial_matches_stepping_2_20() {
        let gen = Mt19937::init_by_array(&[0xDEAD, 0xBEEF]);
        let start = Window::from_generator(&gen);
        let jumped = jump_by_polynomial(&start, &params::TEST_POLY_2_20);
        let mut stepped = start.clone();
        for _ in 0..1 << 20 {
            stepped.step();
        }
        assert_eq!(jumped.canonical(), stepped.canonical());
    }

    // draw k then jump and jump then draw k both land k + 2^128 draws in,
    // which exercises the mid-block window normalization.
    #[test]
    fn jump_commutes_with_drawing() {
        let mut a = Mt19937::init_by_array(&[5]);
        let mut b = Mt19937::init_by_array(&[5]);
        for _ in 0..37 {
            a.next_u32();
        }
        a.jump(1);
        b.jump(1);
        for _ in 0..37 {
            b.next_u32();
        }
        for _ in 0..50 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn rejects_oversized_state_word() {
        let mut words = vec![0u64; STATE_WORDS];
        words[10] = 1 << 33;
        assert!(Mt19937::from_state_words(&words, 0).is_err());
    }

    #[test]
    fn rejects_all_zero_state() {
        let words = vec![0u64; STATE_WORDS];
        let err = Mt19937::from_state_words(&words, 0).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidState { .. }));
    }
}
