//! Random word lists for benchmarking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct GeneratorConfig {
    pub num_words: usize,
    pub word_length: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            num_words: 1000,
            word_length: 1000,
            seed: 0,
        }
    }
}

fn word(rng: &mut StdRng, length: usize) -> String {
    (0..length)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}

/// Lowercase ASCII words, uniformly random.
///
/// Per-word seeds are drawn up front from a generator seeded with `config.seed`, so the
/// list is the same for a given config however rayon splits the work.
pub fn word_list(config: &GeneratorConfig) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let seeds = (0..config.num_words)
        .map(|_| rng.gen::<u64>())
        .collect::<Vec<_>>();

    seeds
        .into_par_iter()
        .map(|seed| word(&mut StdRng::seed_from_u64(seed), config.word_length))
        .collect()
}
