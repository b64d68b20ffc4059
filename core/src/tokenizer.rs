use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

/// Options applied to words that survive stop-word filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizeOptions {
    /// Fold each counted word to its English stem.
    pub stem: bool,
}

/// Split text into lowercase word tokens: NFKC normalization, lowercase,
/// then maximal runs of word characters. Runs of anything else separate
/// tokens, so punctuation never reaches the counts.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    WORD_RE
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub(crate) fn stem(token: &str) -> String {
    STEMMER.stem(token).to_string()
}
