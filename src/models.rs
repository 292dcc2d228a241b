//! Core data models for the notes index.
//!
//! [`Category`] is produced by discovery and never serialized directly;
//! [`Note`], [`CategorySummary`] and [`NotesIndex`] make up the JSON
//! document read by the homepage.

use serde::Serialize;
use std::path::PathBuf;

/// Key of the synthetic category that covers every note.
pub const ALL_CATEGORY_KEY: &str = "all";

/// A category directory that survived discovery.
#[derive(Debug, Clone)]
pub struct Category {
    /// Slug, unique within a run.
    pub key: String,
    pub name: String,
    pub dir: PathBuf,
    /// Note files in file-name order.
    pub files: Vec<PathBuf>,
}

impl Category {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Metadata for one note file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub file_name: String,
    /// Relative to the root, `/`-separated on every platform.
    pub path: String,
    pub category: String,
    pub category_name: String,
    /// Local date of the last modification, `YYYY-MM-DD`.
    pub updated_at: String,
    pub updated_at_ts: i64,
}

/// One entry of the category filter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub name: String,
    pub count: usize,
}

/// The document written to `data/notes.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesIndex {
    pub generated_at: String,
    pub total: usize,
    pub categories: Vec<CategorySummary>,
    pub notes: Vec<Note>,
}
