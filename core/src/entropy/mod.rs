//! Seed Material - Default Entropy Provider
//!
//! The facade consumes plain `&[u64]` entropy and trusts it to be well
//! distributed. `SeedMaterial` is the shipped way to get such words from a
//! convenience seed: SHA-256 in counter mode whitens whatever the caller
//! provides, so `from_seed(0)` and `from_seed(1)` yield unrelated word
//! streams.
//!
//! # Determinism
//!
//! `generate` is a pure function of the entropy words, the spawn path,
//! and the requested length; `spawn` derives child material by extending
//! the spawn path, giving parallel workers disjoint, reproducible seeds.
//! The entropy word count is hashed ahead of the words themselves, so a
//! spawned child never aliases flat multi-word entropy:
//! `from_seed(s).spawn(i)` and `from_entropy(&[s, i])` generate unrelated
//! streams.

use sha2::{Digest, Sha256};

/// Deterministic seed-word expander.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedMaterial {
    entropy: Vec<u64>,
    path: Vec<u64>,
}

impl SeedMaterial {
    /// Wraps caller-provided entropy words.
    pub fn from_entropy(entropy: &[u64]) -> Self {
        SeedMaterial {
            entropy: entropy.to_vec(),
            path: Vec::new(),
        }
    }

    /// Single-integer convenience seed.
    pub fn from_seed(seed: u64) -> Self {
        SeedMaterial {
            entropy: vec![seed],
            path: Vec::new(),
        }
    }

    /// Child material for a parallel worker. Children of the same parent
    /// with distinct indices generate unrelated words.
    pub fn spawn(&self, index: u64) -> Self {
        let mut path = self.path.clone();
        path.push(index);
        SeedMaterial {
            entropy: self.entropy.clone(),
            path,
        }
    }

    /// Expands to `n` whitened words: digest `i` hashes the entropy word
    /// count, every entropy word, the spawn path, and the counter `i`,
    /// all little-endian, and contributes four little-endian words.
    pub fn generate(&self, n: usize) -> Vec<u64> {
        let mut out = Vec::with_capacity(n.next_multiple_of(4));
        let mut counter = 0u64;
        while out.len() < n {
            let mut hasher = Sha256::new();
            hasher.update((self.entropy.len() as u64).to_le_bytes());
            for word in self.entropy.iter().chain(&self.path) {
                hasher.update(word.to_le_bytes());
            }
            hasher.update(counter.to_le_bytes());
            let digest = hasher.finalize();
            for chunk in digest.chunks_exact(8) {
                out.push(u64::from_le_bytes(chunk.try_into().unwrap()));
            }
            counter += 1;
        }
        out.truncate(n);
        out
    }
}
