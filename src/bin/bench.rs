use std::time::Instant;

use clap::Parser;
use tracing::info;

use common_letters::generate::{word_list, GeneratorConfig};
use common_letters::letters::Semantics;

/// Times both extraction variants on a random word list.
#[derive(Parser, Debug)]
#[command(about)]
struct Args {
    /// Number of words to generate.
    #[arg(long, default_value_t = 1000)]
    words: usize,

    /// Length of each word.
    #[arg(long, default_value_t = 1000)]
    length: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long)]
    run_multiset: bool,

    #[arg(long)]
    run_presence: bool,
}

impl Args {
    // Neither flag means both.
    fn variants(&self) -> Vec<Semantics> {
        match (self.run_multiset, self.run_presence) {
            (false, false) | (true, true) => vec![Semantics::Multiset, Semantics::Presence],
            (true, false) => vec![Semantics::Multiset],
            (false, true) => vec![Semantics::Presence],
        }
    }
}

pub fn main() -> anyhow::Result<()> {
    common_letters::init_tracing("bench=info,common_letters=info,warn")?;
    let args = Args::parse();

    let config = GeneratorConfig {
        num_words: args.words,
        word_length: args.length,
        seed: args.seed,
    };

    let start = Instant::now();
    let words = word_list(&config);
    info!(
        words = config.num_words,
        length = config.word_length,
        seed = config.seed,
        elapsed = ?start.elapsed(),
        "generated test data"
    );

    for semantics in args.variants() {
        let start = Instant::now();
        let letters = semantics.extract(&words);
        let elapsed = start.elapsed();

        info!(%semantics, letters = letters.len(), ?elapsed, "extraction finished");
        println!("{}: {:?}", semantics, elapsed);
    }

    Ok(())
}
