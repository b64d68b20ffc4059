use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tagsift_core::output;
use tagsift_core::tokenizer::TokenizeOptions;
use tagsift_core::{frequency, FrequencyTable, StopWords};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tagsift")]
#[command(about = "Extract ranked word-frequency tags from text documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count word frequencies in a document file or a directory of documents
    Extract {
        /// Input document file, or a directory walked for *.txt and *.md files
        #[arg(long)]
        input: PathBuf,
        /// Stop-word file, one word per line; repeatable, loaded additively
        #[arg(long = "stop-words")]
        stop_words: Vec<PathBuf>,
        /// Seed the stop-word set with the builtin English list
        #[arg(long, default_value_t = false)]
        builtin_stopwords: bool,
        /// Fold counted words to their English stems
        #[arg(long, default_value_t = false)]
        stem: bool,
        /// Write the listing to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
        /// Keep only the first N tags of the ranked listing
        #[arg(long)]
        top: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            stop_words,
            builtin_stopwords,
            stem,
            output,
            format,
            top,
        } => extract(
            &input,
            &stop_words,
            builtin_stopwords,
            stem,
            output.as_deref(),
            format,
            top,
        ),
    }
}

fn extract(
    input: &Path,
    stop_word_files: &[PathBuf],
    builtin_stopwords: bool,
    stem: bool,
    output: Option<&Path>,
    format: Format,
    top: Option<usize>,
) -> Result<()> {
    let mut stops = if builtin_stopwords {
        StopWords::english()
    } else {
        StopWords::new()
    };
    for file in stop_word_files {
        let inserted = stops.load_path(file)?;
        tracing::info!(file = %file.display(), inserted, "loaded stop words");
    }

    let files = collect_documents(input)?;
    if files.is_empty() {
        bail!("no documents found under {}", input.display());
    }

    let opts = TokenizeOptions { stem };
    let mut table = FrequencyTable::new();
    for file in &files {
        table.merge(frequency::process_path(file, &stops, &opts)?);
    }
    tracing::info!(
        documents = files.len(),
        distinct_words = table.len(),
        "counted documents"
    );

    let mut tags = table.ranked();
    if let Some(top) = top {
        tags.truncate(top);
    }

    match (output, format) {
        (Some(path), Format::Text) => output::save_tags(&tags, path)?,
        (Some(path), Format::Json) => output::save_json(&tags, path)?,
        (None, Format::Text) => print!("{}", output::render(&tags)),
        (None, Format::Json) => {
            output::write_json(&tags, std::io::stdout().lock())?;
            println!();
        }
    }
    Ok(())
}

/// A file input is taken as-is; a directory is walked for text documents.
fn collect_documents(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_file() {
            if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                if matches!(ext, "txt" | "md") {
                    files.push(path.to_path_buf());
                }
            }
        }
    }
    files.sort();
    Ok(files)
}
