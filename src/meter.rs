
use crate::stress::StressPattern;

pub const IAMBIC_PENTAMETER: &[u8; 10] = b"0101010101";

/// A word-aligned stretch of iambic pentameter within a stress pattern.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MeterMatch {
  pub start: usize,
  /// The window ends where a word ends.
  pub masculine: bool,
  /// The window plus one further unstressed syllable ends where a word ends.
  pub feminine: bool
}

impl MeterMatch {
  pub fn endings(&self) -> impl Iterator<Item = Ending> {
    let masculine = if self.masculine { Some(Ending::Masculine) } else { None };
    let feminine = if self.feminine { Some(Ending::Feminine) } else { None };
    masculine.into_iter().chain(feminine)
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Ending {
  Masculine,
  Feminine
}

impl Ending {
  pub fn syllables(&self) -> usize {
    match self {
      Ending::Masculine => IAMBIC_PENTAMETER.len(),
      Ending::Feminine => IAMBIC_PENTAMETER.len() + 1
    }
  }
}

/// Every start position, overlapping ones included, where ten alternating
/// syllables begin on a word and end cleanly on one.
pub fn scan_pentameter(pattern: &StressPattern) -> impl Iterator<Item = MeterMatch> + '_ {
  let n = pattern.len();
  let width = IAMBIC_PENTAMETER.len();
  let stress = pattern.stress.as_bytes();

  (0 .. (n + 1).saturating_sub(width)).filter_map(move |i| {
    if &stress[i .. i + width] != IAMBIC_PENTAMETER || !pattern.boundaries[i] {
      return None;
    }

    let end = i + width;
    let mut masculine = false;
    let mut feminine = false;

    if n <= end {
      masculine = true;
    }
    else {
      if pattern.boundaries[end] {
        masculine = true;
      }
      if stress[end] == b'0' && (n <= end + 1 || pattern.boundaries[end + 1]) {
        feminine = true;
      }
    }

    if masculine || feminine {
      Some(MeterMatch { start: i, masculine, feminine })
    }
    else {
      None
    }
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pattern(stress: &str, boundaries: &str) -> StressPattern {
    let boundaries: Vec<bool> = boundaries.chars().map(|c| c == '1').collect();
    let mut word_index = vec![];
    let mut word = 0;
    for (i, &b) in boundaries.iter().enumerate() {
      if b && i > 0 {
        word += 1;
      }
      word_index.push(word);
    }
    word_index.push(word + 1);
    StressPattern { stress: stress.to_owned(), boundaries, word_index }
  }

  #[test]
  fn test_exact_line() {
    let p = pattern("0101010101", "1111111111");
    let matches: Vec<MeterMatch> = scan_pentameter(&p).collect();
    assert_eq!(matches, vec![MeterMatch { start: 0, masculine: true, feminine: false }]);
  }

  #[test]
  fn test_too_short() {
    let p = pattern("010101010", "111111111");
    assert_eq!(scan_pentameter(&p).count(), 0);
    assert_eq!(scan_pentameter(&pattern("", "")).count(), 0);
  }

  #[test]
  fn test_start_must_be_on_word_boundary() {
    let p = pattern("10101010101", "10111111111");
    assert_eq!(scan_pentameter(&p).count(), 0);
  }

  #[test]
  fn test_feminine_ending() {
    // ten syllables then one unstressed syllable closing the last word
    let p = pattern("01010101010", "11111111110");
    let matches: Vec<MeterMatch> = scan_pentameter(&p).collect();
    assert_eq!(matches, vec![MeterMatch { start: 0, masculine: false, feminine: true }]);
  }

  #[test]
  fn test_both_endings() {
    let p = pattern("010101010101", "111111111111");
    let matches: Vec<MeterMatch> = scan_pentameter(&p).collect();
    assert_eq!(matches, vec![
      MeterMatch { start: 0, masculine: true, feminine: true },
      MeterMatch { start: 2, masculine: true, feminine: false },
    ]);
    assert_eq!(matches[0].endings().collect::<Vec<_>>(), vec![Ending::Masculine, Ending::Feminine]);
  }

  #[test]
  fn test_window_ending_mid_word_is_discarded() {
    // the tenth syllable runs on into a stressed one of the same word
    let p = pattern("01010101011", "11111111110");
    assert_eq!(scan_pentameter(&p).count(), 0);
  }
}
