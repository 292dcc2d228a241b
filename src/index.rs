//! Note extraction and aggregation into the index document.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::path::{Component, Path};

use crate::config::Config;
use crate::discover::discover_categories;
use crate::models::{Category, CategorySummary, Note, NotesIndex, ALL_CATEGORY_KEY};
use crate::slug::slugify;
use crate::title::pretty_title;

/// Format of `generatedAt`.
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Scan `root` and assemble the index, stamped with the current local time.
pub fn build_index(root: &Path, config: &Config) -> Result<NotesIndex> {
    let categories = discover_categories(root, config)?;
    assemble_index(root, &categories, &config.index.all_label, Local::now())
}

/// Build notes for already discovered categories and put the document
/// together.
pub fn assemble_index(
    root: &Path,
    categories: &[Category],
    all_label: &str,
    generated_at: DateTime<Local>,
) -> Result<NotesIndex> {
    let mut notes = Vec::new();
    for category in categories {
        for file in &category.files {
            notes.push(build_note(root, file, category)?);
        }
    }

    warn_duplicate_ids(&notes);
    sort_notes(&mut notes);

    let mut summaries = Vec::with_capacity(categories.len() + 1);
    summaries.push(CategorySummary {
        key: ALL_CATEGORY_KEY.to_string(),
        name: all_label.to_string(),
        count: notes.len(),
    });
    summaries.extend(categories.iter().map(|c| CategorySummary {
        key: c.key.clone(),
        name: c.name.clone(),
        count: c.file_count(),
    }));

    tracing::info!(
        categories = categories.len(),
        notes = notes.len(),
        "index assembled"
    );

    Ok(NotesIndex {
        generated_at: generated_at.format(GENERATED_AT_FORMAT).to_string(),
        total: notes.len(),
        categories: summaries,
        notes,
    })
}

/// Metadata for one note file. Only the filesystem metadata is read.
pub fn build_note(root: &Path, file: &Path, category: &Category) -> Result<Note> {
    let metadata = std::fs::metadata(file)
        .with_context(|| format!("Failed to stat {}", file.display()))?;
    let modified = metadata
        .modified()
        .with_context(|| format!("No modification time for {}", file.display()))?;
    let mtime: DateTime<Local> = DateTime::from(modified);

    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Note {
        id: slugify(&format!("{}-{}", category.key, stem)),
        title: pretty_title(&stem),
        file_name,
        path: relative_posix(root, file)?,
        category: category.key.clone(),
        category_name: category.name.clone(),
        updated_at: mtime.format("%Y-%m-%d").to_string(),
        updated_at_ts: epoch_seconds(&mtime),
    })
}

/// Most recent first; equal timestamps by title, later title first.
pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by(|a, b| {
        (b.updated_at_ts, &b.title).cmp(&(a.updated_at_ts, &a.title))
    });
}

/// Whole seconds since the epoch, truncated toward zero.
fn epoch_seconds(mtime: &DateTime<Local>) -> i64 {
    let secs = mtime.timestamp();
    if secs < 0 && mtime.timestamp_subsec_nanos() != 0 {
        secs + 1
    } else {
        secs
    }
}

fn relative_posix(root: &Path, file: &Path) -> Result<String> {
    let relative = file.strip_prefix(root).with_context(|| {
        format!("{} is not under {}", file.display(), root.display())
    })?;

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    Ok(parts.join("/"))
}

fn warn_duplicate_ids(notes: &[Note]) {
    let mut seen = HashSet::new();
    for note in notes {
        if !seen.insert(note.id.as_str()) {
            tracing::warn!(id = %note.id, path = %note.path, "duplicate note id");
        }
    }
}
