//! Category discovery.
//!
//! Every immediate subdirectory of the root that holds at least one note file
//! is a category. Hidden and ignored directories are skipped, keys are made
//! unique in case-insensitive name order, and the result is ordered by the
//! configured priority list.

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::models::Category;
use crate::slug::{category_key, KeyAllocator};
use crate::title::pretty_category_name;

pub fn discover_categories(root: &Path, config: &Config) -> Result<Vec<Category>> {
    if !root.is_dir() {
        anyhow::bail!("Notes root is not a directory: {}", root.display());
    }

    let cats = &config.categories;
    let note_matcher = note_matcher(&config.index.note_glob)?;
    let exclude_set = build_globset(&cats.exclude_globs)?;

    let mut keys = KeyAllocator::new();
    let mut discovered = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by(|a, b| {
            let a = a.file_name().to_string_lossy().to_lowercase();
            let b = b.file_name().to_string_lossy().to_lowercase();
            a.cmp(&b)
        });

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to list {}", root.display()))?;
        let dir = entry.path();
        // Follow symlinked directories
        if !dir.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') || cats.ignored_dirs.iter().any(|d| *d == name) {
            tracing::debug!(dir = %name, "skipping ignored directory");
            continue;
        }
        if exclude_set.is_match(&name) {
            tracing::debug!(dir = %name, "skipping excluded directory");
            continue;
        }

        let files = list_note_files(dir, &note_matcher)?;
        if files.is_empty() {
            tracing::debug!(dir = %name, "skipping directory without notes");
            continue;
        }

        let key = keys.allocate(&category_key(&name));
        let display = pretty_category_name(&name, &cats.name_overrides);
        tracing::debug!(dir = %name, key = %key, notes = files.len(), "found category");

        discovered.push(Category {
            key,
            name: display,
            dir: dir.to_path_buf(),
            files,
        });
    }

    sort_categories(&mut discovered, &cats.order);
    Ok(discovered)
}

/// Priority keys first in list order, the rest after; ties by lower-cased
/// display name. Stable, so equal entries keep directory order.
pub fn sort_categories(categories: &mut [Category], order: &[String]) {
    categories.sort_by_cached_key(|c| {
        let rank = order
            .iter()
            .position(|k| *k == c.key)
            .unwrap_or(order.len());
        (rank, c.name.to_lowercase())
    });
}

/// Regular files directly inside `dir` whose name matches `matcher`,
/// sorted by file name.
pub fn list_note_files(dir: &Path, matcher: &GlobMatcher) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        if !entry.path().is_file() {
            continue;
        }
        if matcher.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

pub fn note_matcher(pattern: &str) -> Result<GlobMatcher> {
    Ok(Glob::new(pattern)
        .with_context(|| format!("Invalid note glob: {}", pattern))?
        .compile_matcher())
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "<html></html>").unwrap();
    }

    fn keys(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.key.as_str()).collect()
    }

    #[test]
    fn test_skips_hidden_ignored_and_empty_dirs() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join(".drafts/a.html"));
        touch(&root.join(".git/index.html"));
        touch(&root.join("__pycache__/x.html"));
        touch(&root.join("assets/logo.html"));
        touch(&root.join("data/notes.html"));
        touch(&root.join("scripts/run.html"));
        touch(&root.join("Empty/readme.md"));
        fs::create_dir_all(root.join("Nothing")).unwrap();
        touch(&root.join("index.html"));
        touch(&root.join("Physics/waves.html"));

        let cats = discover_categories(root, &Config::default()).unwrap();
        assert_eq!(keys(&cats), vec!["physics"]);
        assert_eq!(cats[0].name, "Physics");
        assert_eq!(cats[0].file_count(), 1);
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("Upper/NOTE.HTML"));
        touch(&tmp.path().join("Upper/page.htm"));

        let cats = discover_categories(tmp.path(), &Config::default()).unwrap();
        assert!(cats.is_empty());
    }

    #[test]
    fn test_nested_html_does_not_count() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("Deep/inner/page.html"));

        let cats = discover_categories(tmp.path(), &Config::default()).unwrap();
        assert!(cats.is_empty());
    }

    #[test]
    fn test_priority_order_then_alphabetical() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("zeta/a.html"));
        touch(&root.join("Alpha/a.html"));
        touch(&root.join("Diffusion/a.html"));
        touch(&root.join("TimeSeries/a.html"));
        touch(&root.join("StochasticProcess/a.html"));

        let cats = discover_categories(root, &Config::default()).unwrap();
        assert_eq!(
            keys(&cats),
            vec!["timeseries", "diffusion", "stochasticprocess", "alpha", "zeta"]
        );
        assert_eq!(cats[0].name, "时间序列");
        assert_eq!(cats[1].name, "扩散模型");
    }

    #[test]
    fn test_colliding_keys_get_suffixes_in_name_order() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("my-notes/a.html"));
        touch(&root.join("My Notes/a.html"));
        touch(&root.join("my_notes/a.html"));

        let cats = discover_categories(root, &Config::default()).unwrap();
        let mut got: Vec<(String, String)> = cats
            .iter()
            .map(|c| (c.dir.file_name().unwrap().to_string_lossy().to_string(), c.key.clone()))
            .collect();
        got.sort();

        // Case-insensitive name order: "my notes" < "my-notes" < "my_notes"
        assert_eq!(
            got,
            vec![
                ("My Notes".to_string(), "my-notes".to_string()),
                ("my-notes".to_string(), "my-notes-2".to_string()),
                ("my_notes".to_string(), "my-notes-3".to_string()),
            ]
        );
    }

    #[test]
    fn test_exclude_globs() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("draft-ideas/a.html"));
        touch(&tmp.path().join("Kept/a.html"));

        let mut cfg = Config::default();
        cfg.categories.exclude_globs = vec!["draft-*".to_string()];

        let cats = discover_categories(tmp.path(), &cfg).unwrap();
        assert_eq!(keys(&cats), vec!["kept"]);
    }

    #[test]
    fn test_files_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("Topic");
        touch(&dir.join("b.html"));
        touch(&dir.join("a.html"));
        touch(&dir.join("C.html"));
        touch(&dir.join("notes.txt"));

        let matcher = note_matcher("*.html").unwrap();
        let files = list_note_files(&dir, &matcher).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["C.html", "a.html", "b.html"]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");
        assert!(discover_categories(&missing, &Config::default()).is_err());
    }
}
