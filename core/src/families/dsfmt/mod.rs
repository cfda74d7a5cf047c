//! dSFMT-19937 - SIMD-oriented Fast Mersenne Twister generating doubles
//! directly, period 2^19937 - 1.
//!
//! # Algorithm
//!
//! 191 x 128-bit state words plus a 128-bit "lung", regenerated a block at
//! a time. Every 64-bit lane keeps the IEEE-754 pattern of a double in
//! [1, 2): the recurrence only touches the 52 mantissa bits, so the
//! exponent field stays 0x3FF and a draw is a plain bit reinterpretation.
//! Doubles subtract 1.0 to land in [0, 1); integer draws take the low 32
//! mantissa bits of each lane.
//!
//! Seeding mixes the entropy key through the same Knuth schedule MT19937
//! uses, sized for this state, then forces the [1, 2) form and applies the
//! period certification tweak to the lung.
//!
//! # Jump
//!
//! Linear over GF(2) like MT19937. One jump unit is 2^128 draws, which is
//! 2^127 recursions, so the lane parity of the draw index survives a jump.

mod params;

use crate::generator::GeneratorError;
use crate::jump::{jump_by_polynomial, LinearState};

use super::mt19937::init_by_array_sized;

pub(crate) const N: usize = 191;
const POS1: usize = 117;
const SL1: u32 = 19;
const SR: u32 = 12;
const MSK1: u64 = 0x000F_FAFF_FFFF_F3FB;
const MSK2: u64 = 0x000F_FDFF_FC90_FFFD;
const FIX1: u64 = 0x9001_4964_B32F_4329;
const FIX2: u64 = 0x3B8D_12AC_548A_7C7A;
const PCV1: u64 = 0x3D84_E1AC_0DC8_2B47;
const PCV2: u64 = 0x0000_0000_0000_0001;
const LOW_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
const HIGH_CONST: u64 = 0x3FF0_0000_0000_0000;

pub(crate) const SEED_WORDS: usize = 1;
/// 2N mantissa lanes plus the two lung lanes.
pub(crate) const STATE_WORDS: usize = 2 * N + 2;

#[derive(Debug, Clone)]
pub(crate) struct Dsfmt {
    w: [u64; 2 * N],
    lung: [u64; 2],
    idx: usize,
}

/// One 128-bit recursion. Returns the replacement lanes and the new lung.
#[inline]
fn recursion(a0: u64, a1: u64, b0: u64, b1: u64, l0: u64, l1: u64) -> (u64, u64, u64, u64) {
    let nl0 = (a0 << SL1) ^ (l1 >> 32) ^ (l1 << 32) ^ b0;
    let nl1 = (a1 << SL1) ^ (l0 >> 32) ^ (l0 << 32) ^ b1;
    let r0 = (nl0 >> SR) ^ (nl0 & MSK1) ^ a0;
    let r1 = (nl1 >> SR) ^ (nl1 & MSK2) ^ a1;
    (r0, r1, nl0, nl1)
}

impl Dsfmt {
    pub(crate) fn seed(entropy: &[u64]) -> Self {
        let key = super::mt19937::entropy_to_key(entropy);
        let mixed = init_by_array_sized(&key, (N + 1) * 4);
        let mut w64 = [0u64; 2 * N + 2];
        for (i, slot) in w64.iter_mut().enumerate() {
            *slot = ((mixed[2 * i + 1] as u64) << 32) | mixed[2 * i] as u64;
        }
        let mut w = [0u64; 2 * N];
        for i in 0..2 * N {
            w[i] = (w64[i] & LOW_MASK) | HIGH_CONST;
        }
        let mut gen = Self {
            w,
            lung: [w64[2 * N], w64[2 * N + 1]],
            idx: 2 * N,
        };
        gen.certify();
        gen
    }

    /// Period certification: flips one lung bit unless the inner product
    /// with the parity-check vector is already odd.
    fn certify(&mut self) {
        let t0 = self.lung[0] ^ FIX1;
        let t1 = self.lung[1] ^ FIX2;
        let inner = (t0 & PCV1) ^ (t1 & PCV2);
        if inner.count_ones() & 1 != 1 {
            self.lung[1] ^= 1;
        }
    }

    fn regenerate(&mut self) {
        for i in 0..N {
            let b = if i + POS1 >= N { i + POS1 - N } else { i + POS1 };
            let (r0, r1, l0, l1) = recursion(
                self.w[2 * i],
                self.w[2 * i + 1],
                self.w[2 * b],
                self.w[2 * b + 1],
                self.lung[0],
                self.lung[1],
            );
            self.w[2 * i] = r0;
            self.w[2 * i + 1] = r1;
            self.lung = [l0, l1];
        }
        self.idx = 0;
    }

    /// Raw draw: the bit pattern of a double in [1, 2).
    pub(crate) fn next_raw(&mut self) -> u64 {
        if self.idx >= 2 * N {
            self.regenerate();
        }
        let v = self.w[self.idx];
        self.idx += 1;
        v
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        self.next_raw() as u32
    }

    pub(crate) fn next_double(&mut self) -> f64 {
        f64::from_bits(self.next_raw()) - 1.0
    }

    /// Jumps `n * 2^128` draws (`n * 2^127` recursions). The draw index's
    /// lane parity is preserved.
    pub(crate) fn jump(&mut self, n: u64) {
        let mut window = Window::from_generator(self);
        for _ in 0..n {
            window = jump_by_polynomial(&window, &params::JUMP_POLY);
        }
        let (w, lung) = window.canonical();
        self.w = w;
        self.lung = lung;
        self.idx &= 1;
    }

    pub(crate) fn state_words(&self) -> Vec<u64> {
        let mut words = Vec::with_capacity(STATE_WORDS);
        words.extend_from_slice(&self.w);
        words.extend_from_slice(&self.lung);
        words
    }

    pub(crate) fn index(&self) -> usize {
        self.idx
    }

    pub(crate) fn from_state_words(words: &[u64], index: usize) -> Result<Self, GeneratorError> {
        if words.len() != STATE_WORDS {
            return Err(GeneratorError::InvalidState {
                reason: format!(
                    "dsfmt expects {} state words, got {}",
                    STATE_WORDS,
                    words.len()
                ),
            });
        }
        if index > 2 * N {
            return Err(GeneratorError::InvalidState {
                reason: format!("dsfmt index {} out of range 0..={}", index, 2 * N),
            });
        }
        let mut w = [0u64; 2 * N];
        for (slot, &word) in w.iter_mut().zip(words) {
            if word & !LOW_MASK != HIGH_CONST {
                return Err(GeneratorError::InvalidState {
                    reason: "dsfmt mantissa lanes must carry the [1, 2) exponent".to_string(),
                });
            }
            *slot = word;
        }
        let lung = [words[2 * N], words[2 * N + 1]];
        if lung == [0, 0] && w.iter().all(|&word| word & LOW_MASK == 0) {
            // the zero vector of the recursion: every double would be 0.0
            return Err(GeneratorError::InvalidState {
                reason: "dsfmt mantissa and lung bits must not be all zero".to_string(),
            });
        }
        Ok(Self {
            w,
            lung,
            idx: index,
        })
    }
}

/// Sliding-window view for GF(2) jumps: 191 state words (128-bit, stored
/// as lane pairs) plus the lung, with `base` marking the oldest word.
#[derive(Clone)]
struct Window {
    arr: [u64; 2 * N],
    lung: [u64; 2],
    base: usize,
}

impl Window {
    /// Steps once per fully consumed 128-bit word, putting the window at
    /// the current draw position. A half-consumed word (odd index) stays.
    fn from_generator(gen: &Dsfmt) -> Self {
        let mut window = Window {
            arr: gen.w,
            lung: gen.lung,
            base: 0,
        };
        for _ in 0..gen.idx >> 1 {
            window.step();
        }
        window
    }

    #[inline]
    fn lane(&self, word: usize, half: usize) -> u64 {
        let mut i = self.base + word;
        if i >= N {
            i -= N;
        }
        self.arr[2 * i + half]
    }

    fn canonical(&self) -> ([u64; 2 * N], [u64; 2]) {
        let mut out = [0u64; 2 * N];
        for j in 0..N {
            out[2 * j] = self.lane(j, 0);
            out[2 * j + 1] = self.lane(j, 1);
        }
        (out, self.lung)
    }
}

impl LinearState for Window {
    fn zeroed() -> Self {
        Window {
            arr: [0; 2 * N],
            lung: [0; 2],
            base: 0,
        }
    }

    fn step(&mut self) {
        let (r0, r1, l0, l1) = recursion(
            self.lane(0, 0),
            self.lane(0, 1),
            self.lane(POS1, 0),
            self.lane(POS1, 1),
            self.lung[0],
            self.lung[1],
        );
        self.arr[2 * self.base] = r0;
        self.arr[2 * self.base + 1] = r1;
        self.lung = [l0, l1];
        self.base += 1;
        if self.base >= N {
            self.base = 0;
        }
    }

    fn xor_into(&self, acc: &mut Self) {
        debug_assert_eq!(acc.base, 0);
        for j in 0..N {
            acc.arr[2 * j] ^= self.lane(j, 0);
            acc.arr[2 * j + 1] ^= self.lane(j, 1);
        }
        acc.lung[0] ^= self.lung[0];
        acc.lung[1] ^= self.lung[1];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut gen = Dsfmt::seed(&[0x0123_4567_89AB_CDEF]);
        for _ in 0..2000 {
            let x = gen.next_double();
            assert!((0.0..1.0).contains(&x), "out of range: {x}");
        }
    }

    #[test]
    fn mantissa_form_survives_regeneration() {
        let mut gen = Dsfmt::seed(&[7]);
        for _ in 0..3 * 2 * N {
            let raw = gen.next_raw();
            assert_eq!(raw & !LOW_MASK, HIGH_CONST);
        }
    }

    #[test]
    fn certification_makes_parity_odd() {
        let gen = Dsfmt::seed(&[99]);
        let t0 = gen.lung[0] ^ FIX1;
        let t1 = gen.lung[1] ^ FIX2;
        let inner = (t0 & PCV1) ^ (t1 & PCV2);
        assert_eq!(inner.count_ones() & 1, 1);
    }

    #[test]
    fn window_round_trips_generator_state() {
        let mut gen = Dsfmt::seed(&[3]);
        for _ in 0..250 {
            gen.next_raw();
        }
        let window = Window::from_generator(&gen);
        let (w, lung) = window.canonical();
        let mut restored = Dsfmt {
            w,
            lung,
            idx: gen.idx & 1,
        };
        let mut original = gen.clone();
        for _ in 0..2000 {
            assert_eq!(restored.next_raw(), original.next_raw());
        }
    }

    #[test]
    fn test_polynomial_matches_stepping() {
        let gen = Dsfmt::seed(&[11, 22]);
        let start = Window::from_generator(&gen);
        let jumped = jump_by_polynomial(&start, &params::TEST_POLY_2_10);
        let mut stepped = start.clone();
        for _ in 0..1024 {
            stepped.step();
        }
        let (jw, jl) = jumped.canonical();
        let (sw, sl) = stepped.canonical();
        assert_eq!(jw, sw);
        assert_eq!(jl, sl);
    }

    #[test]
    fn test_polynomial_matches_stepping_2_20() {
        let gen = Dsfmt::seed(&[0xABCD]);
        let start = Window::from_generator(&gen);
        let jumped = jump_by_polynomial(&start, &params::TEST_POLY_2_20);
        let mut stepped = start.clone();
        for _ in 0..1 << 20 {
            stepped.step();
        }
        let (jw, jl) = jumped.canonical();
        let (sw, sl) = stepped.canonical();
        assert_eq!(jw, sw);
        assert_eq!(jl, sl);
    }

    #[test]
    fn jump_preserves_lane_parity() {
        let mut gen = Dsfmt::seed(&[5]);
        for _ in 0..7 {
            gen.next_raw();
        }
        gen.jump(1);
        assert_eq!(gen.index(), 1);
    }

    #[test]
    fn jump_commutes_with_drawing() {
        // draw k then jump equals jump then draw k
        let mut a = Dsfmt::seed(&[5]);
        let mut b = Dsfmt::seed(&[5]);
        for _ in 0..6 {
            a.next_raw();
        }
        a.jump(1);
        b.jump(1);
        for _ in 0..6 {
            b.next_raw();
        }
        for _ in 0..100 {
            assert_eq!(a.next_raw(), b.next_raw());
        }
    }

    #[test]
    fn rejects_lane_without_exponent_bits() {
        let mut words = vec![HIGH_CONST; STATE_WORDS];
        words[0] = 0x1234;
        assert!(Dsfmt::from_state_words(&words, 0).is_err());
    }

    #[test]
    fn rejects_zero_mantissa_and_lung() {
        // exponent-only lanes with an empty lung are the recursion's
        // zero vector
        let mut words = vec![HIGH_CONST; STATE_WORDS];
        words[2 * N] = 0;
        words[2 * N + 1] = 0;
        let err = Dsfmt::from_state_words(&words, 0).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidState { .. }));

        words[2 * N] = 1;
        assert!(Dsfmt::from_state_words(&words, 0).is_ok());
    }
}
