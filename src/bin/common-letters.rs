use std::io::{Read, Write};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use tracing::debug;

use common_letters::letters::{try_common_letters, Semantics};
use common_letters::parser::parse_word_list;

/// Prints the letters shared by every word read from stdin, one word per line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// How repeated letters are treated: "multiset" or "presence".
    #[arg(long, default_value_t = Semantics::Multiset)]
    semantics: Semantics,

    /// Printed between letters.
    #[arg(long, default_value = "")]
    separator: String,
}

fn run(args: &Args, mut input: impl Read, mut output: impl Write) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    input
        .read_to_end(&mut buf)
        .context("failed to read input")?;

    let words = parse_word_list(&buf).context("malformed word list")?;
    debug!(words = words.len(), semantics = %args.semantics, "parsed word list");

    let letters = try_common_letters(&words, args.semantics)?;
    debug!(letters = letters.len(), "extracted common letters");

    writeln!(output, "{}", letters.iter().join(&args.separator))
        .context("failed to write output")?;

    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    common_letters::init_tracing("warn")?;
    let args = Args::parse();

    run(&args, std::io::stdin().lock(), std::io::stdout().lock())
}
