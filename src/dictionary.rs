
use std::{collections::HashMap, io::{self, BufRead, BufReader}, fs::File, path::Path};
use anyhow::{Context, bail};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::phonemes::{Phoneme, Token, Pronunciation, join_words};
use crate::text::{normalize, tokenize, is_punctuation};

/// A sentence as words, and a pronunciation with one word group per word.
#[derive(Clone, Debug, PartialEq)]
pub struct Pronouncement {
  pub words: Vec<String>,
  pub pronunciation: Pronunciation
}

/// Turns a sentence into phonemes.
pub trait Pronouncer {
  fn pronounce(&self, sentence: &str) -> anyhow::Result<Pronouncement>;
}

/// Pronunciations in the format of the CMU pronouncing dictionary:
///
/// ```text
/// ;;; comment
/// aluminium AH0 L UW1 M IH0 N AH0 M
/// aluminium(2) AE2 L Y UW1 M IH0 N AH0 M
/// achill AE1 K IH0 L # place, irish
/// ```
#[derive(Clone, Debug, Default)]
pub struct CmuDictionary {
  entries: HashMap<String, Vec<Vec<Phoneme>>>
}

fn parse_line(line: &str) -> Option<(String, Vec<Phoneme>)> {
  lazy_static! {
    static ref COMMENT_STRIPPING_RE: Regex = Regex::new(r"\s*\#.*").unwrap();
  }

  if line.starts_with(";;;") {
    return None;
  }
  let line = COMMENT_STRIPPING_RE.replace(line, "");
  let mut tokens = line.split_whitespace();
  let word_and_number = tokens.next()?;
  let word = word_and_number.split('(').next()?.to_lowercase();

  match tokens.map(|t| t.parse()).collect::<anyhow::Result<Vec<Phoneme>>>() {
    Ok(pronunciation) if !pronunciation.is_empty() => Some((word, pronunciation)),
    Ok(_) => None,
    Err(e) => {
      debug!("Skipping dictionary line {:?}: {}", line, e);
      None
    }
  }
}

impl CmuDictionary {
  pub fn new() -> CmuDictionary {
    CmuDictionary::default()
  }

  pub fn from_reader<R: BufRead>(reader: R) -> io::Result<CmuDictionary> {
    let mut dictionary = CmuDictionary::new();
    for line in reader.lines() {
      if let Some((word, pronunciation)) = parse_line(&line?) {
        dictionary.insert(&word, pronunciation);
      }
    }
    Ok(dictionary)
  }

  pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<CmuDictionary> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open dictionary {:?}", path))?;
    let dictionary = CmuDictionary::from_reader(BufReader::new(file))
      .with_context(|| format!("Failed to read dictionary {:?}", path))?;
    debug!("Loaded {} words from {:?}", dictionary.len(), path);
    Ok(dictionary)
  }

  /// Adds a pronunciation after any the word already has.
  pub fn insert(&mut self, word: &str, pronunciation: Vec<Phoneme>) {
    self.entries.entry(word.to_lowercase()).or_default().push(pronunciation);
  }

  /// The first listed pronunciation of a word.
  pub fn lookup(&self, word: &str) -> Option<&[Phoneme]> {
    self.entries.get(word).and_then(|ps| ps.first()).map(|p| p.as_slice())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Pronouncer for CmuDictionary {
  fn pronounce(&self, sentence: &str) -> anyhow::Result<Pronouncement> {
    let words = tokenize(&normalize(sentence));
    let mut groups = vec![];

    for word in &words {
      if is_punctuation(word) {
        groups.push(vec![Token::Artifact(word.clone())]);
      }
      else if let Some(phonemes) = self.lookup(word) {
        groups.push(phonemes.iter().map(|p| Token::Phone(*p)).collect());
      }
      else {
        bail!("No pronunciation for {:?}", word);
      }
    }

    Ok(Pronouncement { words, pronunciation: join_words(groups) })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::phonemes::{encode, parse_pronunciation};

  const SAMPLE: &str = ";;; sample
the DH AH0
the(2) DH AH1
cat K AE1 T
o'er OW1 R # poetic
bogus K Q Z
";

  #[test]
  fn test_loading() {
    let dictionary = CmuDictionary::from_reader(SAMPLE.as_bytes()).unwrap();
    assert_eq!(dictionary.len(), 3);
    // the(2) is listed second
    assert_eq!(encode(dictionary.lookup("the").unwrap()), "DH AH0");
    assert_eq!(encode(dictionary.lookup("o'er").unwrap()), "OW1 R");
    assert!(dictionary.lookup("bogus").is_none());
  }

  #[test]
  fn test_pronounce() {
    let dictionary = CmuDictionary::from_reader(SAMPLE.as_bytes()).unwrap();
    let p = dictionary.pronounce("The cat, o'er the cat.").unwrap();
    assert_eq!(p.words, vec!["the", "cat", ",", "o'er", "the", "cat", "."]);
    assert_eq!(p.pronunciation, parse_pronunciation("DH AH0 | K AE1 T | , | OW1 R | DH AH0 | K AE1 T | ."));
  }

  #[test]
  fn test_unknown_word() {
    let dictionary = CmuDictionary::from_reader(SAMPLE.as_bytes()).unwrap();
    let err = dictionary.pronounce("The dog.").unwrap_err();
    assert!(err.to_string().contains("dog"));
  }

  #[test]
  fn test_load_from_file() {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    let dictionary = CmuDictionary::load(file.path()).unwrap();
    assert_eq!(dictionary.len(), 3);
    assert!(CmuDictionary::load("no/such/dictionary.dict").is_err());
  }
}
