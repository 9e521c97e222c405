
pub mod phonemes;
pub mod stress;
pub mod meter;
pub mod extraction;
pub mod rhyme;
pub mod similarity;
pub mod compatibility;
pub mod pairing;
pub mod text;
pub mod dictionary;
pub mod tsv;
pub mod finder;
