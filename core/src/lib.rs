pub mod frequency;
pub mod output;
pub mod stopwords;
pub mod tokenizer;

pub use frequency::{process_path, FrequencyTable};
pub use stopwords::StopWords;

use serde::{Deserialize, Serialize};

/// A word and its occurrence count in the processed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub word: String,
    pub count: u64,
}

/// True when `err` bottoms out in a missing or unreadable path, so hosts
/// can tell "file not found" apart from everything else.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
        .any(|io| io.kind() == std::io::ErrorKind::NotFound)
}
