use crate::Tag;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render tags for display, one `word: count` line per tag.
pub fn render(tags: &[Tag]) -> String {
    let mut out = String::new();
    for tag in tags {
        out.push_str(&format!("{}: {}\n", tag.word, tag.count));
    }
    out
}

/// Save tags as text in the same `word: count` form the display uses.
pub fn save_tags<P: AsRef<Path>>(tags: &[Tag], path: P) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("creating tag file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for tag in tags {
        writeln!(writer, "{}: {}", tag.word, tag.count)
            .with_context(|| format!("writing tag file {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("writing tag file {}", path.display()))?;
    Ok(())
}

/// Write tags as a JSON array of `{"word", "count"}` objects.
pub fn write_json<W: Write>(tags: &[Tag], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, tags).context("serializing tags")?;
    Ok(())
}

pub fn save_json<P: AsRef<Path>>(tags: &[Tag], path: P) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("creating tag file {}", path.display()))?;
    write_json(tags, BufWriter::new(file))
}
