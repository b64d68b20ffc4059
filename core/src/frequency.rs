use crate::stopwords::StopWords;
use crate::tokenizer::{self, TokenizeOptions};
use crate::Tag;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Frequency of every counted word in one document (or one merged batch
/// of documents). Built fresh per run; hosts retain it between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every non-stop word of a line-oriented reader.
    pub fn from_reader<R: Read>(
        reader: R,
        stops: &StopWords,
        opts: &TokenizeOptions,
    ) -> Result<Self> {
        let mut table = Self::new();
        let reader = BufReader::new(reader);
        for line in reader.lines() {
            let line = line.context("reading document")?;
            table.count_line(&line, stops, opts);
        }
        Ok(table)
    }

    fn count_line(&mut self, line: &str, stops: &StopWords, opts: &TokenizeOptions) {
        for token in tokenizer::tokenize(line) {
            if stops.contains(&token) {
                continue;
            }
            let word = if opts.stem {
                tokenizer::stem(&token)
            } else {
                token
            };
            *self.counts.entry(word).or_insert(0) += 1;
        }
    }

    /// Fold another table's counts into this one.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Ranked listing: count descending, ties broken by word ascending.
    /// Display and save both use this order.
    pub fn ranked(&self) -> Vec<Tag> {
        let mut tags: Vec<Tag> = self
            .counts
            .iter()
            .map(|(word, count)| Tag {
                word: word.clone(),
                count: *count,
            })
            .collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        tags
    }
}

/// Open a document and count its words against the stop-word set.
/// Returns a fresh table; on failure the caller's retained table is
/// untouched.
pub fn process_path<P: AsRef<Path>>(
    path: P,
    stops: &StopWords,
    opts: &TokenizeOptions,
) -> Result<FrequencyTable> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("opening document {}", path.display()))?;
    let table = FrequencyTable::from_reader(file, stops, opts)?;
    tracing::debug!(path = %path.display(), words = table.len(), "counted document");
    Ok(table)
}
