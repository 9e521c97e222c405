
use crate::phonemes::{Phoneme, Sound, encode};
use crate::rhyme::Phrase;
use crate::similarity::SimilarityScorer;

/// Decides whether two phrases from the same slant rhyme class rhyme.
///
/// This follows the approximate rhyme check of Ghazvininejad et al. (2016),
/// section 5.2 <https://aclanthology.org/D16-1126>: past the stressed vowel, the
/// phrases must end in the same unstressed vowel, and the consonants between
/// must agree at one edge and be similar at the other.
#[derive(Clone, Copy, Debug, Default)]
pub struct RhymeChecker {
  scorer: SimilarityScorer
}

/// The parts of a rhyme tail that take part in the comparison.
#[derive(Debug, PartialEq)]
struct TailShape {
  vowel: Phoneme,
  consonants: Vec<Phoneme>,
  final_vowel: Option<Phoneme>
}

fn split_r_colored(tail: &[Phoneme]) -> Vec<Phoneme> {
  tail.iter().flat_map(|p| {
    if p.sound == Sound::Er {
      vec![Phoneme::new(Sound::Uh, p.stress), Phoneme::consonant(Sound::R)]
    }
    else {
      vec![*p]
    }
  }).collect()
}

fn shape(tail: &[Phoneme]) -> TailShape {
  let mut consonants = vec![];
  let mut final_vowel = None;

  // Walking back from the end: the last unstressed vowel, then whatever
  // separates it from the stressed vowel.
  for p in tail[1 ..].iter().rev() {
    if p.is_unstressed() {
      if final_vowel.is_none() {
        final_vowel = Some(*p);
      }
    }
    else if final_vowel.is_some() {
      consonants.push(*p);
    }
  }
  consonants.reverse();

  TailShape { vowel: tail[0], consonants, final_vowel }
}

impl RhymeChecker {
  pub fn new(scorer: SimilarityScorer) -> RhymeChecker {
    RhymeChecker { scorer }
  }

  pub fn can_rhyme(&self, a: &Phrase, b: &Phrase) -> bool {
    assert!(a.tail.first().map_or(false, |p| p.is_primary()), "{}", encode(&a.tail));
    assert!(b.tail.first().map_or(false, |p| p.is_primary()), "{}", encode(&b.tail));

    // A word does not rhyme with itself.
    if a.last_word() == b.last_word() {
      return false;
    }
    if a.tail == b.tail {
      return true;
    }

    let a = shape(&split_r_colored(&a.tail));
    let b = shape(&split_r_colored(&b.tail));

    if a.vowel != b.vowel || a.final_vowel != b.final_vowel {
      return false;
    }
    let (x1, x2) = (&a.consonants, &b.consonants);
    let (Some(first1), Some(first2)) = (x1.first(), x2.first()) else {
      return false;
    };
    let (last1, last2) = (&x1[x1.len() - 1], &x2[x2.len() - 1]);

    if x1.len() == 1 && x2.len() == 1 {
      return self.scorer.are_similar(first1, first2);
    }
    if x1.iter().filter(|p| p.is_unstressed()).count() != x2.iter().filter(|p| p.is_unstressed()).count() {
      return false;
    }

    (first1 == first2 && self.scorer.are_similar(last1, last2))
      || (last1 == last2 && self.scorer.are_similar(first1, first2))
  }
}
