
use std::{fs::File, io, path::Path};
use anyhow::{Context, anyhow, bail};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use crate::phonemes::{encode, parse_phonemes};
use crate::rhyme::{Phrase, RhymeKey, SlantClasses};

/// Writes one `words<TAB>key<TAB>phonemes` line per phrase.
pub fn write_slant_classes<W: io::Write>(writer: W, classes: &SlantClasses) -> anyhow::Result<()> {
  let mut writer = WriterBuilder::new()
    .delimiter(b'\t')
    .has_headers(false)
    .quote_style(QuoteStyle::Never)
    .from_writer(writer);

  for (key, phrases) in classes {
    for phrase in phrases {
      writer.write_record([phrase.text().as_str(), key.as_str(), encode(&phrase.tail).as_str()])?;
    }
  }
  writer.flush()?;
  Ok(())
}

pub fn read_slant_classes<R: io::Read>(reader: R) -> anyhow::Result<SlantClasses> {
  let mut reader = ReaderBuilder::new()
    .delimiter(b'\t')
    .has_headers(false)
    .flexible(true)
    .quoting(false)
    .from_reader(reader);

  let mut classes = SlantClasses::new();

  for (i, record) in reader.records().enumerate() {
    let record = record?;
    let line = record.position().map_or(i as u64 + 1, |p| p.line());
    if record.iter().all(|field| field.trim().is_empty()) {
      continue;
    }
    if record.len() != 3 {
      bail!("Line {}: expected 3 tab-separated fields, found {}", line, record.len());
    }

    let words: Vec<String> = record[0].trim().split(' ').map(|w| w.to_owned()).collect();
    let key = RhymeKey::new(record[1].trim());
    let tail = parse_phonemes(&record[2]).with_context(|| format!("Line {}", line))?;
    if !tail.first().map_or(false, |p| p.is_primary()) {
      return Err(anyhow!("Line {}: rhyme {:?} does not start on a stressed vowel", line, &record[2]));
    }

    classes.entry(key).or_default().insert(Phrase { words, tail });
  }

  Ok(classes)
}

pub fn save<P: AsRef<Path>>(path: P, classes: &SlantClasses) -> anyhow::Result<()> {
  let path = path.as_ref();
  let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
  write_slant_classes(file, classes)
}

pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<SlantClasses> {
  let path = path.as_ref();
  let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
  read_slant_classes(file).with_context(|| format!("Failed to read {:?}", path))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::extraction::Candidate;
  use crate::phonemes::parse_pronunciation;
  use crate::rhyme::classify_slant;

  fn candidate(text: &str, pron: &str) -> Candidate {
    Candidate {
      words: text.split_whitespace().map(|w| w.to_owned()).collect(),
      pronunciation: parse_pronunciation(pron)
    }
  }

  fn sample_classes() -> SlantClasses {
    classify_slant(&[
      candidate("and sat upon the mat", "AH0 N D | S AE1 T | AH0 P AA1 N | DH AH0 | M AE1 T"),
      candidate("and wore a little hat", "AH0 N D | W AO1 R | AH0 | L IH1 T AH0 L | HH AE1 T | ."),
      candidate("the master's", "DH AH0 | M AE2 S T ER0 Z"),
      candidate("the faster", "DH AH0 | F AE1 S T ER0"),
    ])
  }

  #[test]
  fn test_format() {
    let mut out = vec![];
    write_slant_classes(&mut out, &sample_classes()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("and sat upon the mat\tAE1-T\tAE1 T\n"));
    assert!(text.contains("the master's\tAE1-*-ER0-Z\tAE1 S T ER0 Z\n"));
    assert_eq!(text.lines().count(), 4);
  }

  #[test]
  fn test_read_back() {
    let classes = sample_classes();
    let mut out = vec![];
    write_slant_classes(&mut out, &classes).unwrap();
    assert_eq!(read_slant_classes(out.as_slice()).unwrap(), classes);
  }

  #[test]
  fn test_blank_lines_and_errors() {
    let classes = read_slant_classes("a mat\tAE1-T\tAE1 T\n\n   \na hat\tAE1-T\tAE1 T\n".as_bytes()).unwrap();
    assert_eq!(classes[&RhymeKey::new("AE1-T")].len(), 2);

    assert!(read_slant_classes("a mat\tAE1-T\n".as_bytes()).is_err());
    assert!(read_slant_classes("a mat\tAE1-T\tAE1 QQ\n".as_bytes()).is_err());
    assert!(read_slant_classes("a mat\tT\tT\n".as_bytes()).is_err());
  }

  #[test]
  fn test_file_round_trip() {
    let file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    let classes = sample_classes();
    save(file.path(), &classes).unwrap();
    assert_eq!(load(file.path()).unwrap(), classes);
  }
}
