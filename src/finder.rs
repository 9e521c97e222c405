
use std::{fs::File, io::{BufRead, BufReader}, path::Path};
use anyhow::Context;
use console::style;
use itertools::Itertools;
use log::{debug, info, warn};
use rand::Rng;
use rayon::prelude::*;

use crate::compatibility::RhymeChecker;
use crate::dictionary::Pronouncer;
use crate::extraction::{Candidate, extract_phrases};
use crate::pairing::{Stanza, find_rhyme_pairs, assemble_stanzas};
use crate::rhyme::SlantClasses;
use crate::similarity::{SimilarityScorer, DEFAULT_SIMILARITY_LIMIT};
use crate::text::{is_natural_language, split_sentences};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
  pub similarity_limit: f64,
  /// Quatrains before the closing couplet.
  pub max_stanzas: usize
}

impl EngineConfig {
  pub fn checker(&self) -> RhymeChecker {
    RhymeChecker::new(SimilarityScorer::new(self.similarity_limit))
  }
}

impl Default for EngineConfig {
  fn default() -> Self {
    EngineConfig {
      similarity_limit: DEFAULT_SIMILARITY_LIMIT,
      max_stanzas: 3
    }
  }
}

pub struct SonnetFinder<P> {
  pronouncer: P
}

/// Non-empty lines of a text file, trimmed.
pub fn read_lines<Q: AsRef<Path>>(path: Q) -> anyhow::Result<Vec<String>> {
  let path = path.as_ref();
  let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
  let mut lines = vec![];
  for line in BufReader::new(file).lines() {
    let line = line.with_context(|| format!("Failed to read {:?}", path))?;
    let line = line.trim();
    if !line.is_empty() {
      lines.push(line.to_owned());
    }
  }
  debug!("Read {} lines from {:?}", lines.len(), path);
  Ok(lines)
}

impl<P: Pronouncer + Sync> SonnetFinder<P> {
  pub fn new(pronouncer: P) -> SonnetFinder<P> {
    SonnetFinder { pronouncer }
  }

  /// Candidates from one line of prose. Sentences that fail to pronounce are
  /// skipped.
  pub fn scan_line(&self, line: &str) -> Vec<Candidate> {
    let mut candidates = vec![];

    for sentence in split_sentences(line) {
      if !is_natural_language(&sentence) {
        continue;
      }
      // Compounds are pronounced better word by word.
      let sentence = sentence.replace('-', " - ");

      match self.pronouncer.pronounce(&sentence) {
        Ok(p) => candidates.extend(extract_phrases(&p.words, &p.pronunciation)),
        Err(e) => warn!("Skipping sentence {:?}: {}", sentence, e)
      }
    }

    candidates
  }

  /// Candidates from every line, scanned in parallel, in line order.
  pub fn scan_lines(&self, lines: &[String]) -> Vec<Candidate> {
    let per_line: Vec<Vec<Candidate>> = lines.par_iter().map(|line| self.scan_line(line)).collect();
    let candidates: Vec<Candidate> = per_line.into_iter().flatten().collect();
    info!("Extracted {} candidate phrases.", candidates.len());
    candidates
  }
}

/// Pairs up rhymes within the slant classes and lays the pairs out as stanzas.
pub fn compose<R: Rng>(classes: &SlantClasses, config: &EngineConfig, rng: &mut R) -> Vec<Stanza> {
  debug!("Found {} different slant rhyme classes.", classes.len());
  for (key, members) in classes.iter().filter(|(_, ms)| ms.len() > 1) {
    debug!("{}: {}", key, members.iter().map(|p| p.text()).join(" / "));
  }
  debug!("Trying to find rhyming pairs using similarity limit {} ...", config.similarity_limit);

  let pairs = find_rhyme_pairs(classes, &config.checker(), rng);
  info!("Found {} rhyme classes with paired phrases.", pairs.len());

  assemble_stanzas(&pairs, config.max_stanzas, rng)
}

pub fn print_stanzas(stanzas: &[Stanza]) {
  for stanza in stanzas {
    println!();
    for line in stanza.lines() {
      println!("{}", style(line).yellow().italic());
    }
  }
  println!();
}
