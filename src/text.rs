
use lazy_static::lazy_static;
use regex::{Regex, Captures};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Crude check that a line is prose rather than a formula, table or heading.
pub fn is_natural_language(line: &str) -> bool {
  let line = line.trim();
  if line.chars().count() < 5 {
    return false;
  }
  // TeX math
  if line.contains('\\') || line.starts_with('$') || line.ends_with('$') {
    return false;
  }
  // too few words
  if line.matches(' ').count() < 2 {
    return false;
  }
  // column layout or a rule
  if line.contains("   ") || line.replace('-', "").trim().is_empty() {
    return false;
  }
  true
}

const ABBREVIATIONS: &[&str] = &["mr", "mrs", "dr", "st", "e.g", "i.e", "etc", "vs"];

/// An abbreviation from the list, or a single-letter initial. The pronoun "I"
/// is not an initial.
fn is_abbreviation(word: &str) -> bool {
  let word = word.trim_start_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
  let stem = word.trim_end_matches('.');
  let mut letters = stem.chars();
  let initial = match (letters.next(), letters.next()) {
    (Some(c), None) => c.is_alphabetic() && c != 'i',
    _ => false
  };
  initial || ABBREVIATIONS.contains(&stem)
}

/// Splits a line into sentences after `.`, `!` or `?` when the next sentence
/// visibly starts: whitespace, then a capital, a digit or an opening quote.
pub fn split_sentences(line: &str) -> Vec<String> {
  let chars: Vec<char> = line.chars().collect();
  let mut sentences = vec![];
  let mut start = 0;
  let mut i = 0;

  while i < chars.len() {
    if !matches!(chars[i], '.' | '!' | '?') {
      i += 1;
      continue;
    }
    let mut end = i + 1;
    while end < chars.len() && matches!(chars[end], '.' | '!' | '?' | '"' | '\'' | ')' | ']' | '’' | '”') {
      end += 1;
    }
    let mut next = end;
    while next < chars.len() && chars[next].is_whitespace() {
      next += 1;
    }
    let starts_sentence = next > end && next < chars.len()
      && (chars[next].is_uppercase() || chars[next].is_ascii_digit() || matches!(chars[next], '"' | '\'' | '“' | '‘' | '('));

    let word: String = chars[start .. i + 1].iter().collect::<String>()
      .split_whitespace().last().unwrap_or("").to_owned();

    if starts_sentence && !(chars[i] == '.' && is_abbreviation(&word)) {
      let sentence: String = chars[start .. end].iter().collect();
      sentences.push(sentence.trim().to_owned());
      start = next;
    }
    i = end;
  }

  let rest: String = chars[start ..].iter().collect();
  if !rest.trim().is_empty() {
    sentences.push(rest.trim().to_owned());
  }
  sentences
}

const ONES: [&str; 20] = [
  "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
  "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen"
];
const TENS: [&str; 10] = ["", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"];

fn below_thousand(n: u64) -> Vec<String> {
  let mut words = vec![];
  if n >= 100 {
    words.push(ONES[(n / 100) as usize].to_owned());
    words.push("hundred".to_owned());
  }
  let rest = n % 100;
  if rest == 0 && n >= 100 {
    return words;
  }
  if rest < 20 {
    words.push(ONES[rest as usize].to_owned());
  }
  else if rest % 10 == 0 {
    words.push(TENS[(rest / 10) as usize].to_owned());
  }
  else {
    words.push(format!("{}-{}", TENS[(rest / 10) as usize], ONES[(rest % 10) as usize]));
  }
  words
}

/// Spells out a cardinal below one million; larger numbers are read digit by digit.
pub fn spell_number(n: u64) -> String {
  if n >= 1_000_000 {
    return n.to_string().chars()
      .filter_map(|c| c.to_digit(10))
      .map(|d| ONES[d as usize])
      .collect::<Vec<_>>().join(" ");
  }
  let mut words = vec![];
  if n >= 1000 {
    words.extend(below_thousand(n / 1000));
    words.push("thousand".to_owned());
    if n % 1000 == 0 {
      return words.join(" ");
    }
    words.extend(below_thousand(n % 1000));
  }
  else {
    words.extend(below_thousand(n));
  }
  words.join(" ")
}

pub fn spell_ordinal(n: u64) -> String {
  let cardinal = spell_number(n);
  let split = cardinal.rfind(|c: char| c == ' ' || c == '-').map_or(0, |i| i + 1);
  let (head, last) = cardinal.split_at(split);
  let last = match last {
    "one" => "first".to_owned(),
    "two" => "second".to_owned(),
    "three" => "third".to_owned(),
    "five" => "fifth".to_owned(),
    "eight" => "eighth".to_owned(),
    "nine" => "ninth".to_owned(),
    "twelve" => "twelfth".to_owned(),
    w if w.ends_with('y') => format!("{}ieth", &w[.. w.len() - 1]),
    w => format!("{}th", w)
  };
  format!("{}{}", head, last)
}

pub fn expand_numbers(text: &str) -> String {
  lazy_static! {
    static ref NUMBER_RE: Regex = Regex::new(r"\b(\d{1,3}(?:,\d{3})+|\d+)(st|nd|rd|th)?\b").unwrap();
  }

  NUMBER_RE.replace_all(text, |caps: &Captures| {
    let digits = caps[1].replace(',', "");
    match digits.parse::<u64>() {
      Ok(n) if caps.get(2).is_some() => spell_ordinal(n),
      Ok(n) => spell_number(n),
      Err(_) => digits.chars().filter_map(|c| c.to_digit(10)).map(|d| ONES[d as usize]).collect::<Vec<_>>().join(" ")
    }
  }).into_owned()
}

/// Brings text into the form the pronouncing dictionary is keyed by:
/// numerals spelled out, accents dropped, lowercase, and nothing outside
/// `[ a-z'.,?!-]`.
pub fn normalize(text: &str) -> String {
  lazy_static! {
    static ref DISALLOWED_RE: Regex = Regex::new(r"[^ a-z'.,?!\-]").unwrap();
  }

  let text = expand_numbers(text);
  let text: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
  let text = text.to_lowercase();
  let text = DISALLOWED_RE.replace_all(&text, "");
  text.replace("i.e.", "that is").replace("e.g.", "for example")
}

pub fn tokenize(normalized: &str) -> Vec<String> {
  lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"[a-z']*[a-z][a-z']*|\.+|,+|\?+|!+|-+|'+|[^\sa-z]").unwrap();
  }

  TOKEN_RE.find_iter(normalized).map(|m| m.as_str().to_owned()).collect()
}

pub fn is_punctuation(token: &str) -> bool {
  !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}
