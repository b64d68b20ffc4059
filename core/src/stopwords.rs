use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Words excluded from frequency counting. Entries are stored lowercase;
/// lookups expect the already-lowercased tokens the tokenizer produces.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builtin English list, for hosts running without a user-supplied file.
    pub fn english() -> Self {
        let words = stop_words::get(stop_words::LANGUAGE::English)
            .iter()
            .map(|w| w.to_string())
            .collect();
        Self { words }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.trim().to_lowercase()).collect(),
        }
    }

    /// Load one word per line: trimmed, lowercased, inserted. Loads are
    /// additive across calls; blank lines are skipped. A failed open
    /// leaves the set untouched. Returns the number of newly inserted
    /// words.
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("opening stop-word file {}", path.display()))?;
        let reader = BufReader::new(file);

        let mut inserted = 0;
        for line in reader.lines() {
            let line =
                line.with_context(|| format!("reading stop-word file {}", path.display()))?;
            let word = line.trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if self.words.insert(word) {
                inserted += 1;
            }
        }
        tracing::debug!(path = %path.display(), inserted, total = self.words.len(), "loaded stop words");
        Ok(inserted)
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.trim().to_lowercase());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_trimmed_lowercase_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  The ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "ON").unwrap();
        writeln!(file, "the").unwrap();

        let mut stops = StopWords::new();
        let inserted = stops.load_path(file.path()).unwrap();

        assert_eq!(inserted, 2);
        assert_eq!(stops.len(), 2);
        assert!(stops.contains("the"));
        assert!(stops.contains("on"));
        assert!(!stops.contains("cat"));
    }

    #[test]
    fn loads_are_additive() {
        let mut first = tempfile::NamedTempFile::new().unwrap();
        writeln!(first, "the").unwrap();
        let mut second = tempfile::NamedTempFile::new().unwrap();
        writeln!(second, "on").unwrap();

        let mut stops = StopWords::new();
        stops.load_path(first.path()).unwrap();
        stops.load_path(second.path()).unwrap();

        assert!(stops.contains("the"));
        assert!(stops.contains("on"));
        assert_eq!(stops.len(), 2);
    }

    #[test]
    fn empty_file_leaves_set_unchanged() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut stops = StopWords::from_list(&["the"]);
        let inserted = stops.load_path(file.path()).unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(stops.len(), 1);
    }

    #[test]
    fn missing_file_is_not_found_and_does_not_mutate() {
        let mut stops = StopWords::from_list(&["the"]);
        let err = stops.load_path("/nonexistent/stopwords.txt").unwrap_err();

        assert!(crate::is_not_found(&err));
        assert_eq!(stops.len(), 1);
    }

    #[test]
    fn english_list_has_common_words() {
        let stops = StopWords::english();
        assert!(stops.contains("the"));
        assert!(stops.contains("and"));
        assert!(!stops.contains("ferris"));
    }
}
