
use log::debug;
use serde::{Serialize, Deserialize};

use crate::phonemes::{Token, Phoneme};
use crate::stress::analyze;
use crate::meter::scan_pentameter;
use crate::text::is_punctuation;

/// A run of words that scans as iambic pentameter, with the pronunciation of
/// exactly those words.
#[derive(Clone, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Candidate {
  pub words: Vec<String>,
  pub pronunciation: Vec<Token>
}

impl Candidate {
  pub fn phonemes(&self) -> impl DoubleEndedIterator<Item = &Phoneme> {
    self.pronunciation.iter().filter_map(|t| t.phoneme())
  }

  pub fn text(&self) -> String {
    self.words.join(" ")
  }
}

/// Finds the pentameter phrases in a sentence, given its words and a
/// pronunciation holding one word group per word.
pub fn extract_phrases(words: &[String], pron: &[Token]) -> Vec<Candidate> {
  let pattern = analyze(pron);
  let groups: Vec<&[Token]> = pron.split(|t| *t == Token::WordBreak).collect();
  let mut res = vec![];

  for m in scan_pentameter(&pattern) {
    for ending in m.endings() {
      let first = pattern.word_index[m.start];
      let last = pattern.word_index[m.start + ending.syllables()];

      let mut phrase = words[first.min(words.len()) .. last.min(words.len())].to_vec();
      if phrase.last().map_or(false, |w| is_punctuation(w)) {
        phrase.pop();
      }
      if phrase.is_empty() {
        continue;
      }

      let pronunciation: Vec<Token> = groups[first.min(groups.len()) .. last.min(groups.len())]
        .iter().flat_map(|g| g.iter().cloned()).collect();

      debug!("{}", phrase.join(" "));
      res.push(Candidate { words: phrase, pronunciation });
    }
  }

  res
}
