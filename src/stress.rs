
use crate::phonemes::Token;

/// Scansion of a sentence pronunciation: one entry per syllable.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StressPattern {
  /// `'0'` or `'1'` per vowel, in order.
  pub stress: String,
  /// True where the vowel is the first of its word.
  pub boundaries: Vec<bool>,
  /// Index of the word each vowel belongs to, followed by the number of words.
  pub word_index: Vec<usize>
}

impl StressPattern {
  pub fn len(&self) -> usize {
    self.stress.len()
  }

  pub fn is_empty(&self) -> bool {
    self.stress.is_empty()
  }
}

pub fn analyze(pron: &[Token]) -> StressPattern {
  // Stress digits with a space for every word break, so word-final runs can be found.
  let mut spaced: String = pron.iter().filter_map(|t| match t {
    Token::Phone(p) => p.stress.map(|s| s.folded().digit()),
    Token::WordBreak => Some(' '),
    Token::Artifact(_) => None
  }).collect();

  // A word ending in primary-unstressed-unstressed scans like one ending 101.
  // See Ghazvininejad et al. 2016, section 3.
  spaced = spaced.replace("100 ", "101 ");
  if spaced.ends_with("100") {
    spaced.truncate(spaced.len() - 3);
    spaced.push_str("101");
  }

  let mut stress = String::new();
  let mut boundaries = vec![];
  let mut word_index = vec![];
  let mut word = 0;
  let mut prev = ' ';

  for c in spaced.chars() {
    if c == ' ' {
      word += 1;
    }
    else {
      stress.push(c);
      boundaries.push(prev == ' ');
      word_index.push(word);
    }
    prev = c;
  }
  word_index.push(word + 1);

  StressPattern { stress, boundaries, word_index }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::phonemes::parse_pronunciation;

  #[test]
  fn test_stress_and_boundaries() {
    let pron = parse_pronunciation("DH AH0 | K AE1 T | W AA1 Z | S IH1 T IH0 NG | .");
    let pattern = analyze(&pron);
    assert_eq!(pattern.stress, "01110");
    assert_eq!(pattern.boundaries, vec![true, true, true, true, false]);
    assert_eq!(pattern.word_index, vec![0, 1, 2, 3, 3, 5]);
  }

  #[test]
  fn test_secondary_stress_counts_as_primary() {
    let pattern = analyze(&parse_pronunciation("AE2 N T IY0 K W EY1 T AH0 D"));
    assert_eq!(pattern.stress, "1010");
  }

  #[test]
  fn test_word_final_100_scans_as_101() {
    // "beautiful day"
    let pattern = analyze(&parse_pronunciation("B Y UW1 T AH0 F AH0 L | D EY1"));
    assert_eq!(pattern.stress, "1011");
    // "so beautiful", at the very end
    let pattern = analyze(&parse_pronunciation("S OW1 | B Y UW1 T AH0 F AH0 L"));
    assert_eq!(pattern.stress, "1101");
  }

  #[test]
  fn test_100_spanning_words_is_kept() {
    let pattern = analyze(&parse_pronunciation("K AE1 T | AH0 | AH0"));
    assert_eq!(pattern.stress, "100");
  }

  #[test]
  fn test_artifacts_are_words_without_vowels() {
    let pattern = analyze(&parse_pronunciation("HH AY1 | , | DH EH1 R"));
    assert_eq!(pattern.stress, "11");
    assert_eq!(pattern.word_index, vec![0, 2, 3]);
  }

  #[test]
  fn test_idempotent() {
    let pron = parse_pronunciation("AH0 B AW1 T | DH AH0 | R IH1 V ER0 | B AE1 NG K");
    assert_eq!(analyze(&pron), analyze(&pron));
    let pattern = analyze(&pron);
    assert_eq!(pattern.boundaries.len(), pattern.len());
    assert_eq!(pattern.word_index.len(), pattern.len() + 1);
  }
}
