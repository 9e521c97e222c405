
use std::collections::BTreeMap;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Serialize, Deserialize};

use crate::compatibility::RhymeChecker;
use crate::rhyme::{Phrase, RhymeKey, SlantClasses};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RhymePair {
  pub first: Vec<String>,
  pub second: Vec<String>
}

pub type RhymePairs = BTreeMap<RhymeKey, Vec<RhymePair>>;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Stanza {
  /// Two rhyme pairs interleaved ABAB.
  Quatrain([String; 4]),
  Couplet([String; 2])
}

impl Stanza {
  pub fn lines(&self) -> &[String] {
    match self {
      Stanza::Quatrain(lines) => &lines[..],
      Stanza::Couplet(lines) => &lines[..]
    }
  }
}

/// Pairs up phrases within each class. Members are shuffled, then each one
/// popped off the end is paired with the first remaining member it rhymes with.
/// A member that finds no partner when popped is not tried again.
pub fn find_rhyme_pairs<R: Rng>(classes: &SlantClasses, checker: &RhymeChecker, rng: &mut R) -> RhymePairs {
  let mut pairs = RhymePairs::new();

  for (key, members) in classes {
    if members.len() < 2 {
      continue;
    }
    let mut phrases: Vec<&Phrase> = members.iter().collect();
    phrases.shuffle(rng);

    while let Some(p1) = phrases.pop() {
      if let Some(p2) = phrases.iter().find(|p2| checker.can_rhyme(p1, p2)) {
        debug!("{} / {}", p1.text(), p2.text());
        pairs.entry(key.clone()).or_default().push(RhymePair {
          first: p1.words.clone(),
          second: p2.words.clone()
        });
      }
    }
  }

  pairs
}

/// Draws up to `max_quatrains` quatrains from distinct rhyme classes, then a
/// closing couplet if any class is left over.
pub fn assemble_stanzas<R: Rng>(pairs: &RhymePairs, max_quatrains: usize, rng: &mut R) -> Vec<Stanza> {
  let mut classes: Vec<&Vec<RhymePair>> = pairs.values().filter(|ps| !ps.is_empty()).collect();
  classes.shuffle(rng);

  let mut stanzas = vec![];
  let mut quatrains = 0;

  while quatrains < max_quatrains && classes.len() > 1 {
    let (Some(class_a), Some(class_b)) = (classes.pop(), classes.pop()) else {
      break;
    };
    let (Some(a), Some(b)) = (class_a.choose(rng), class_b.choose(rng)) else {
      break;
    };
    stanzas.push(Stanza::Quatrain([
      a.first.join(" "),
      b.first.join(" "),
      a.second.join(" "),
      b.second.join(" "),
    ]));
    quatrains += 1;
  }

  if let Some(pair) = classes.pop().and_then(|class| class.choose(rng)) {
    stanzas.push(Stanza::Couplet([pair.first.join(" "), pair.second.join(" ")]));
  }

  stanzas
}
