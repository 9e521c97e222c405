
use std::fmt;
use std::str::FromStr;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Deserialize};

/// One of the 39 ARPAbet sounds used by the CMU pronouncing dictionary.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sound {
  Aa, Ae, Ah, Ao, Aw, Ay, Eh, Er, Ey, Ih, Iy, Ow, Oy, Uh, Uw,
  B, Ch, D, Dh, F, G, Hh, Jh, K, L, M, N, Ng, P, R, S, Sh, T, Th, V, W, Y, Z, Zh
}

impl Sound {
  pub const ALL: [Sound; 39] = {
    use Sound::*;
    [
      Aa, Ae, Ah, Ao, Aw, Ay, Eh, Er, Ey, Ih, Iy, Ow, Oy, Uh, Uw,
      B, Ch, D, Dh, F, G, Hh, Jh, K, L, M, N, Ng, P, R, S, Sh, T, Th, V, W, Y, Z, Zh
    ]
  };

  pub fn name(&self) -> &'static str {
    use Sound::*;
    match self {
      Aa => "AA", Ae => "AE", Ah => "AH", Ao => "AO", Aw => "AW", Ay => "AY", Eh => "EH",
      Er => "ER", Ey => "EY", Ih => "IH", Iy => "IY", Ow => "OW", Oy => "OY", Uh => "UH",
      Uw => "UW", B => "B", Ch => "CH", D => "D", Dh => "DH", F => "F", G => "G", Hh => "HH",
      Jh => "JH", K => "K", L => "L", M => "M", N => "N", Ng => "NG", P => "P", R => "R",
      S => "S", Sh => "SH", T => "T", Th => "TH", V => "V", W => "W", Y => "Y", Z => "Z",
      Zh => "ZH"
    }
  }

  pub fn from_name(text: &str) -> Option<Self> {
    Sound::ALL.iter().copied().find(|s| s.name() == text)
  }
}

/// The stress digit a vowel carries in the dictionary.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stress {
  Unstressed,
  Primary,
  Secondary
}

impl Stress {
  pub fn from_digit(c: char) -> Option<Self> {
    match c {
      '0' => Some(Stress::Unstressed),
      '1' => Some(Stress::Primary),
      '2' => Some(Stress::Secondary),
      _ => None
    }
  }

  pub fn digit(&self) -> char {
    match self {
      Stress::Unstressed => '0',
      Stress::Primary => '1',
      Stress::Secondary => '2'
    }
  }

  /// Secondary stress counts as primary everywhere in the rhyme engine.
  pub fn folded(&self) -> Stress {
    match self {
      Stress::Secondary => Stress::Primary,
      s => *s
    }
  }
}

/// A sound plus the stress digit written after it, if any.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Phoneme {
  pub sound: Sound,
  pub stress: Option<Stress>
}

impl Phoneme {
  pub fn new(sound: Sound, stress: Option<Stress>) -> Phoneme {
    Phoneme { sound, stress }
  }

  pub fn consonant(sound: Sound) -> Phoneme {
    Phoneme { sound, stress: None }
  }

  /// Carries a stress digit. A vowel written without one behaves like a consonant,
  /// which is how the dictionary data treats it.
  pub fn is_syllabic(&self) -> bool {
    self.stress.is_some()
  }

  pub fn is_primary(&self) -> bool {
    self.stress.map(|s| s.folded()) == Some(Stress::Primary)
  }

  pub fn is_unstressed(&self) -> bool {
    self.stress == Some(Stress::Unstressed)
  }

  pub fn folded(&self) -> Phoneme {
    Phoneme { sound: self.sound, stress: self.stress.map(|s| s.folded()) }
  }
}

impl fmt::Display for Phoneme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.sound.name())?;
    if let Some(stress) = self.stress {
      write!(f, "{}", stress.digit())?;
    }
    Ok(())
  }
}

impl FromStr for Phoneme {
  type Err = anyhow::Error;

  fn from_str(t: &str) -> Result<Self, Self::Err> {
    lazy_static! {
      static ref PHONEME_RE: Regex = Regex::new(r"^([A-Z]+)([012])?$").unwrap();
    }

    let caps = PHONEME_RE.captures(t)
      .ok_or_else(|| anyhow::anyhow!("Unrecognized sound: {}", t))?;
    let sound = Sound::from_name(&caps[1])
      .ok_or_else(|| anyhow::anyhow!("Unrecognized sound: {}", t))?;
    let stress = caps.get(2).and_then(|m| m.as_str().chars().next()).and_then(Stress::from_digit);
    Ok(Phoneme { sound, stress })
  }
}

/// One element of a sentence pronunciation.
///
/// Besides phonemes a pronunciation carries the breaks between words and
/// anything else the phoneme source emitted (punctuation, mostly), which never
/// takes part in scansion or rhyme.
#[derive(Clone, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Token {
  Phone(Phoneme),
  WordBreak,
  Artifact(String)
}

impl Token {
  pub fn parse(t: &str) -> Token {
    if t == " " {
      return Token::WordBreak;
    }
    match t.parse::<Phoneme>() {
      Ok(p) => Token::Phone(p),
      Err(_) => Token::Artifact(t.to_owned())
    }
  }

  pub fn phoneme(&self) -> Option<&Phoneme> {
    match self {
      Token::Phone(p) => Some(p),
      _ => None
    }
  }
}

pub type Pronunciation = Vec<Token>;

/// Joins per-word token groups with a single break between consecutive words.
pub fn join_words(groups: Vec<Vec<Token>>) -> Pronunciation {
  let mut res = vec![];
  for (i, group) in groups.into_iter().enumerate() {
    if i > 0 {
      res.push(Token::WordBreak);
    }
    res.extend(group);
  }
  res
}

/// Reads a pronunciation written as `DH AH0 | K AE1 T | .`, words separated by `|`.
pub fn parse_pronunciation(text: &str) -> Pronunciation {
  join_words(text.split('|').map(|word| {
    word.split_whitespace().map(Token::parse).collect()
  }).collect())
}

pub fn parse_phonemes(text: &str) -> anyhow::Result<Vec<Phoneme>> {
  text.split_whitespace().map(|t| t.parse()).collect()
}

pub fn encode(phonemes: &[Phoneme]) -> String {
  phonemes.iter().join(" ")
}
