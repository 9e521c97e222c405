
use std::path::PathBuf;
use clap::Parser;
use rand::{SeedableRng, rngs::SmallRng};

use sonnet_finder::finder::{EngineConfig, compose, print_stanzas};
use sonnet_finder::tsv;

/// Combines candidate phrases previously saved by sonnet_finder into a
/// rhyming sonnet.
#[derive(Parser, Debug)]
#[command()]
struct Args {
  /// TSV file of candidate phrases.
  #[arg()]
  tsvfile: PathBuf,

  /// Similarity threshold for slant rhymes: 0.0 rhymes conservatively, -0.6 is
  /// the value used by Ghazvininejad et al.
  #[arg(short, long, default_value_t = -0.6, allow_negative_numbers = true)]
  similarity: f64,

  #[arg(long)]
  seed: Option<u64>,

  /// Output debug-level info about what is going on.
  #[arg(long)]
  debug: bool,
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();

  env_logger::Builder::from_default_env()
    .filter_level(if args.debug { log::LevelFilter::Debug } else { log::LevelFilter::Info })
    .init();

  let classes = tsv::load(&args.tsvfile)?;

  let config = EngineConfig {
    similarity_limit: args.similarity,
    ..EngineConfig::default()
  };

  let mut rng = match args.seed {
    Some(seed) => SmallRng::seed_from_u64(seed),
    None => SmallRng::from_entropy()
  };

  print_stanzas(&compose(&classes, &config, &mut rng));
  Ok(())
}
