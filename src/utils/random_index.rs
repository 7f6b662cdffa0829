//! Injectable sources of random choices.
//!
//! Dealing, rollouts, expansion and direction tie-breaks never touch a global
//! generator: they take a `&mut impl ChoiceSource`, so tests can swap in a
//! scripted sequence and replays stay reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something that can pick an index uniformly from `0..len`.
pub trait ChoiceSource {
    /// Returns an index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Draws a fresh 64-bit seed, used to deal the next round of a match.
    fn next_seed(&mut self) -> u64;
}

/// `StdRng`-backed choices; deterministic when built from a seed.
#[derive(Debug, Clone)]
pub struct SeededChoices {
    rng: StdRng,
}

impl SeededChoices {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the OS when `seed` is `None`.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self {
                rng: StdRng::from_os_rng(),
            },
        }
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl ChoiceSource for SeededChoices {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick called with an empty range");
        self.rng.random_range(0..len)
    }

    fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}

/// Replays a fixed cycle of indices, each reduced modulo the requested length.
#[derive(Debug, Clone)]
pub struct ScriptedChoices {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedChoices {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Always picks the first candidate.
    pub fn first() -> Self {
        Self::new(vec![0])
    }

    fn advance(&mut self) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value
    }
}

impl ChoiceSource for ScriptedChoices {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick called with an empty range");
        self.advance() % len
    }

    fn next_seed(&mut self) -> u64 {
        self.advance() as u64
    }
}
