
use std::path::PathBuf;
use clap::Parser;
use console::style;
use log::{debug, info};
use rand::{SeedableRng, rngs::SmallRng};

use sonnet_finder::dictionary::CmuDictionary;
use sonnet_finder::finder::{EngineConfig, SonnetFinder, compose, print_stanzas, read_lines};
use sonnet_finder::rhyme::{classify_slant, classify_strict};
use sonnet_finder::tsv;

/// Finds snippets in iambic pentameter in an English-language text and tries to
/// combine them into a rhyming sonnet.
#[derive(Parser, Debug)]
#[command()]
struct Args {
  /// Text file to produce a sonnet from.
  #[arg()]
  textfile: PathBuf,

  /// Write all candidate phrases with their slant rhyme classes here, as TSV.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Similarity threshold for slant rhymes: 0.0 rhymes conservatively, -0.6 is
  /// the value used by Ghazvininejad et al.
  #[arg(short, long, default_value_t = -0.6, allow_negative_numbers = true)]
  similarity: f64,

  /// Pronouncing dictionary in CMU format.
  #[arg(short, long, default_value = "res/cmudict.dict")]
  dictionary: PathBuf,

  /// Seed for the random choices, for reproducible output.
  #[arg(long)]
  seed: Option<u64>,

  /// Print the stanzas as JSON.
  #[arg(long)]
  json: bool,

  /// Output debug-level info about what is going on.
  #[arg(long)]
  debug: bool,
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();

  env_logger::Builder::from_default_env()
    .filter_level(if args.debug { log::LevelFilter::Debug } else { log::LevelFilter::Info })
    .init();

  let dictionary = CmuDictionary::load(&args.dictionary)?;
  let finder = SonnetFinder::new(dictionary);
  let config = EngineConfig {
    similarity_limit: args.similarity,
    ..EngineConfig::default()
  };

  let lines = read_lines(&args.textfile)?;
  let candidates = finder.scan_lines(&lines);
  debug!("Found {} different strict rhyme classes.", classify_strict(&candidates).len());
  let classes = classify_slant(&candidates);

  if let Some(output) = &args.output {
    tsv::save(output, &classes)?;
    info!("Wrote candidates to {}", style(output.display()).magenta());
  }

  let mut rng = match args.seed {
    Some(seed) => SmallRng::seed_from_u64(seed),
    None => SmallRng::from_entropy()
  };
  let stanzas = compose(&classes, &config, &mut rng);

  if args.json {
    println!("{}", serde_json::to_string_pretty(&stanzas)?);
  }
  else {
    print_stanzas(&stanzas);
  }
  Ok(())
}
