//! Polynomial jump-ahead over GF(2) for the linear-transition families
//!
//! Every shift-register and twisted-GFSR family in this crate has a state
//! transition that is linear over GF(2). Advancing such a generator by N
//! steps is multiplication by the N-th power of the transition matrix; that
//! power is represented as the polynomial `c(z) = z^N mod p(z)`, where
//! `p` is the minimal polynomial of the transition, and applied with the
//! accumulate-and-step scheme: walking the coefficient bits of `c` from
//! lowest to highest, xor the current state into an accumulator wherever
//! the coefficient is set, stepping the state once per bit.
//!
//! The polynomials are large precomputed constants generated offline and
//! stored next to each family (`params` submodules); they are never
//! recomputed at runtime. The coefficients must be reproduced bit-for-bit:
//! a wrong table silently lands streams on overlapping sections of the
//! sequence instead of failing, which is why each family cross-checks the
//! machinery against brute-force stepping at small distances in its tests.

/// A generator state whose transition is linear over GF(2).
///
/// `xor_into` must xor this state's content into `acc` with window
/// alignment honored: `acc` is always a freshly zeroed, base-aligned
/// state, while `self` may have advanced its circular base.
pub(crate) trait LinearState: Clone {
    fn zeroed() -> Self;
    /// Advance by one transition step.
    fn step(&mut self);
    fn xor_into(&self, acc: &mut Self);
}

/// Computes `T^N(start)` where the polynomial is `z^N mod p`, stored as
/// little-endian 64-bit words (global coefficient index = 64·word + bit).
pub(crate) fn jump_by_polynomial<S: LinearState>(start: &S, poly: &[u64]) -> S {
    let mut acc = S::zeroed();
    let mut cur = start.clone();
    let top = highest_set_bit(poly);
    for i in 0..=top {
        if (poly[i / 64] >> (i % 64)) & 1 == 1 {
            cur.xor_into(&mut acc);
        }
        if i < top {
            cur.step();
        }
    }
    acc
}

fn highest_set_bit(poly: &[u64]) -> usize {
    for (w, &word) in poly.iter().enumerate().rev() {
        if word != 0 {
            return w * 64 + (63 - word.leading_zeros() as usize);
        }
    }
    0
}
