
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::extraction::Candidate;
use crate::phonemes::Phoneme;

/// Stands in for the consonants between the two vowels of a slant key.
pub const WILDCARD: &str = "*";
const KEY_SEPARATOR: &str = "-";

#[derive(Clone, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RhymeKey(String);

impl RhymeKey {
  pub fn new(text: &str) -> RhymeKey {
    RhymeKey(text.to_owned())
  }

  fn from_parts(parts: &[String]) -> RhymeKey {
    RhymeKey(parts.join(KEY_SEPARATOR))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for RhymeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A candidate reduced to what rhyme checking needs: its words, and its
/// phonemes from the last stressed vowel on.
#[derive(Clone, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Phrase {
  pub words: Vec<String>,
  pub tail: Vec<Phoneme>
}

impl Phrase {
  pub fn last_word(&self) -> Option<&str> {
    self.words.last().map(|w| w.as_str())
  }

  pub fn text(&self) -> String {
    self.words.join(" ")
  }
}

pub type StrictClasses = BTreeMap<RhymeKey, BTreeSet<Candidate>>;
pub type SlantClasses = BTreeMap<RhymeKey, BTreeSet<Phrase>>;

/// Every phoneme back to and including the last stressed vowel.
pub fn strict_key(candidate: &Candidate) -> RhymeKey {
  let mut parts = vec![];
  for p in candidate.phonemes().rev() {
    let p = p.folded();
    parts.push(p.to_string());
    if p.is_primary() {
      break;
    }
  }
  parts.reverse();
  RhymeKey::from_parts(&parts)
}

/// A coarser key than `strict_key`: the final consonants and vowels up to the
/// last stressed vowel, with everything consonantal before the last vowel
/// collapsed into one wildcard. Returns the key along with the phoneme tail it
/// was read from.
pub fn slant_key(candidate: &Candidate) -> (RhymeKey, Vec<Phoneme>) {
  let mut parts = vec![];
  let mut tail = vec![];
  let mut vowels_seen = 0;
  let mut inserted_wildcard = false;

  for p in candidate.phonemes().rev() {
    let p = p.folded();
    tail.push(p);

    if !p.is_syllabic() {
      if vowels_seen == 0 {
        parts.push(p.to_string());
      }
      else if vowels_seen == 1 && !inserted_wildcard {
        parts.push(WILDCARD.to_owned());
        inserted_wildcard = true;
      }
    }
    else {
      if vowels_seen < 2 {
        parts.push(p.to_string());
      }
      vowels_seen = if p.is_primary() { 2 } else { 1 };
    }

    if vowels_seen > 1 {
      break;
    }
  }

  parts.reverse();
  tail.reverse();
  (RhymeKey::from_parts(&parts), tail)
}

pub fn classify_strict(candidates: &[Candidate]) -> StrictClasses {
  let mut classes = StrictClasses::new();
  for candidate in candidates {
    classes.entry(strict_key(candidate)).or_default().insert(candidate.clone());
  }
  classes
}

pub fn classify_slant(candidates: &[Candidate]) -> SlantClasses {
  let mut classes = SlantClasses::new();
  for candidate in candidates {
    let (key, tail) = slant_key(candidate);
    classes.entry(key).or_default().insert(Phrase { words: candidate.words.clone(), tail });
  }
  classes
}
