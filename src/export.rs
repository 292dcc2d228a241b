//! Write the notes index as JSON for the static homepage.
//!
//! The homepage script fetches `data/notes.json` and renders the category
//! filter and note list from it, so the document is pretty-printed with
//! two-space indentation and non-ASCII titles are left as-is.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::index::build_index;
use crate::models::NotesIndex;

/// Serialize the index the way it is written to disk.
pub fn to_json(index: &NotesIndex) -> Result<String> {
    Ok(serde_json::to_string_pretty(index)?)
}

/// Write `index` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_index(path: &Path, index: &NotesIndex) -> Result<()> {
    let json = to_json(index)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "index written");
    Ok(())
}

/// Run the build command: scan `root` and write the index.
///
/// `output` overrides the configured path. With `dry_run` the JSON goes to
/// stdout and nothing is written.
pub fn run_build(root: &Path, config: &Config, output: Option<&Path>, dry_run: bool) -> Result<()> {
    let index = build_index(root, config)?;

    if dry_run {
        println!("{}", to_json(&index)?);
        return Ok(());
    }

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => config.output_path(root),
    };
    write_index(&path, &index)?;

    println!("Wrote {} with {} notes.", path.display(), index.total);
    Ok(())
}
