
use std::collections::HashMap;
use lazy_static::lazy_static;

use crate::phonemes::{Phoneme, Sound};

/// Conservative enough that only near-interchangeable sounds count as similar.
pub const DEFAULT_SIMILARITY_LIMIT: f64 = -0.05;

/// Score given to pairs the table does not list.
pub const UNLISTED_SCORE: f64 = -99.0;

// Similarity scores for pairs of distinct sounds, from Hirjee & Brown (2010),
// tables 1 and 2, keeping only pairs scoring -1.0 or higher.
// <https://kb.osu.edu/bitstream/handle/1811/48548/1/EMR000091a-Hirjee_Brown.pdf>
const SIMILARITY_SCORES: [(Sound, Sound, f64); 110] = {
  use Sound::*;
  [
    (Aa, Ah, -0.8), (Aa, Ao, 1.6), (Aa, Er, -0.6), (Aa, Ow, -1.0),
    (Ah, Eh, -0.6), (Ah, Er, -0.2), (Ah, Ih, -0.3), (Ah, Ow, -1.0), (Ah, Oy, -0.6), (Ah, Uh, -0.9),
    (Ao, Aw, -1.0), (Ao, Ow, -0.3), (Ao, Oy, -0.4), (Ao, Uh, 1.1),
    (Aw, Ay, -0.3),
    (Eh, Ih, 0.2),
    (Ih, Iy, -0.9), (Ih, Oy, 0.2),
    (Oy, Uh, 0.1),
    (Uh, Uw, -0.5),

    (B, D, 1.1), (B, Dh, 0.4), (B, G, 1.9), (B, Jh, 1.9), (B, L, -0.3), (B, M, -0.5),
    (B, P, 0.1), (B, R, -0.9), (B, T, -1.0), (B, V, 2.3), (B, Z, 0.3),
    (Ch, F, -0.3), (Ch, G, 0.2), (Ch, Jh, 0.4), (Ch, K, 1.5), (Ch, P, 1.1), (Ch, S, 0.3),
    (Ch, Sh, 0.6), (Ch, T, 0.9), (Ch, Th, 1.4),
    (D, G, 0.1), (D, Jh, 0.2), (D, R, -0.9), (D, T, 0.2), (D, Th, 0.0), (D, V, -0.2), (D, Z, 0.0),
    (Dh, K, -0.4), (Dh, L, -0.2), (Dh, T, -0.3), (Dh, Th, 1.3), (Dh, V, 2.3), (Dh, Z, 1.1),
    (F, K, -0.3), (F, P, 1.1), (F, S, 1.0), (F, Sh, 1.2), (F, T, -0.9), (F, Th, 4.0), (F, V, 0.6),
    (G, Jh, 1.8), (G, K, 0.0), (G, L, -0.2), (G, M, -1.0), (G, P, -0.7), (G, R, -0.8),
    (G, V, 0.3), (G, Z, -0.3),
    (Jh, M, 0.1), (Jh, N, -0.5), (Jh, P, -0.2), (Jh, R, -0.3), (Jh, S, -0.6), (Jh, Sh, 0.6),
    (Jh, V, 1.4), (Jh, Z, 1.0), (Jh, Zh, 4.1),
    (K, P, 1.7), (K, S, -0.7), (K, Sh, -0.6), (K, T, 0.9), (K, Th, 0.5),
    (L, R, -0.5),
    (M, N, 1.8), (M, Ng, 0.7), (M, Th, 0.4), (M, V, -0.6),
    (N, Ng, 1.2), (N, R, -1.0), (N, Sh, -0.7), (N, Th, -0.6),
    (P, Sh, -0.7), (P, T, 1.1), (P, Th, 0.9), (P, V, -0.5),
    (R, Sh, -0.8),
    (S, Sh, 2.4), (S, T, -1.0), (S, Th, 1.0), (S, Z, 0.5), (S, Zh, 0.0),
    (Sh, T, -0.6), (Sh, Z, -0.2), (Sh, Zh, 3.6),
    (T, Th, 1.6), (T, V, -0.8),
    (Th, V, 0.5),
    (V, Z, -0.4), (V, Zh, 1.6),
    (Z, Zh, 3.0),
  ]
};

lazy_static! {
  static ref SCORE_TABLE: HashMap<(Sound, Sound), f64> =
    SIMILARITY_SCORES.iter().map(|&(a, b, score)| ((a, b), score)).collect();
}

/// Table score for two sounds, in either order.
pub fn table_score(a: Sound, b: Sound) -> Option<f64> {
  SCORE_TABLE.get(&(a, b)).or_else(|| SCORE_TABLE.get(&(b, a))).copied()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimilarityScorer {
  limit: f64
}

impl Default for SimilarityScorer {
  fn default() -> Self {
    SimilarityScorer::new(DEFAULT_SIMILARITY_LIMIT)
  }
}

impl SimilarityScorer {
  /// Pairs scoring strictly above `limit` are similar. 0.0 rhymes
  /// conservatively; -0.6 is the value used by Ghazvininejad et al. (2016).
  pub fn new(limit: f64) -> SimilarityScorer {
    SimilarityScorer { limit }
  }

  pub fn score(&self, a: Sound, b: Sound) -> f64 {
    table_score(a, b).unwrap_or(UNLISTED_SCORE)
  }

  pub fn are_similar(&self, a: &Phoneme, b: &Phoneme) -> bool {
    if a == b {
      return true;
    }
    // The table knows sounds only; a stress mismatch is never similar.
    a.stress == b.stress && self.score(a.sound, b.sound) > self.limit
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::phonemes::Stress;

  fn c(sound: Sound) -> Phoneme {
    Phoneme::consonant(sound)
  }

  #[test]
  fn test_table_is_symmetric_and_unique() {
    for (a, b, _) in SIMILARITY_SCORES {
      assert_ne!(a, b);
      assert!(!SCORE_TABLE.contains_key(&(b, a)), "{:?}/{:?} listed twice", a, b);
      assert_eq!(table_score(a, b), table_score(b, a));
    }
    assert_eq!(SCORE_TABLE.len(), SIMILARITY_SCORES.len());
  }

  #[test]
  fn test_reflexive() {
    let scorer = SimilarityScorer::new(100.0);
    for s in Sound::ALL {
      assert!(scorer.are_similar(&c(s), &c(s)));
      let v = Phoneme::new(s, Some(Stress::Unstressed));
      assert!(scorer.are_similar(&v, &v));
    }
  }

  #[test]
  fn test_symmetric() {
    for limit in [-0.6, DEFAULT_SIMILARITY_LIMIT, 0.0] {
      let scorer = SimilarityScorer::new(limit);
      for a in Sound::ALL {
        for b in Sound::ALL {
          assert_eq!(scorer.are_similar(&c(a), &c(b)), scorer.are_similar(&c(b), &c(a)));
        }
      }
    }
  }

  #[test]
  fn test_limits() {
    let conservative = SimilarityScorer::new(0.0);
    let default = SimilarityScorer::default();
    let loose = SimilarityScorer::new(-0.6);

    // D/T scores 0.2
    assert!(conservative.are_similar(&c(Sound::D), &c(Sound::T)));
    // G/K scores 0.0, which is not above the conservative limit
    assert!(!conservative.are_similar(&c(Sound::G), &c(Sound::K)));
    assert!(default.are_similar(&c(Sound::G), &c(Sound::K)));
    // L/R scores -0.5
    assert!(!default.are_similar(&c(Sound::L), &c(Sound::R)));
    assert!(loose.are_similar(&c(Sound::L), &c(Sound::R)));
    // S/T scores -1.0
    assert!(!loose.are_similar(&c(Sound::S), &c(Sound::T)));
  }

  #[test]
  fn test_unlisted_pairs_are_dissimilar() {
    assert_eq!(table_score(Sound::T, Sound::W), None);
    let scorer = SimilarityScorer::new(-50.0);
    assert_eq!(scorer.score(Sound::T, Sound::W), UNLISTED_SCORE);
    assert!(!scorer.are_similar(&c(Sound::T), &c(Sound::W)));
  }

  #[test]
  fn test_vowels_compare_with_equal_stress() {
    let scorer = SimilarityScorer::new(-0.6);
    let ah = Phoneme::new(Sound::Ah, Some(Stress::Unstressed));
    let ih = Phoneme::new(Sound::Ih, Some(Stress::Unstressed));
    let ih1 = Phoneme::new(Sound::Ih, Some(Stress::Primary));
    assert!(scorer.are_similar(&ah, &ih));
    assert!(!scorer.are_similar(&ah, &ih1));
  }
}
