//! TOML configuration for the notes index.
//!
//! Every field has a default, so running without a config file reproduces
//! the stock homepage layout: notes under `<root>/<Category>/*.html`, index
//! written to `<root>/data/notes.json`.

use anyhow::{Context, Result};
use globset::Glob;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::slug::slugify;

/// File name looked up under the root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "notes-index.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub categories: CategoriesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IndexConfig {
    /// Output file, relative to the root unless absolute.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_note_glob")]
    pub note_glob: String,
    /// Display name of the synthetic category covering every note.
    #[serde(default = "default_all_label")]
    pub all_label: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            note_glob: default_note_glob(),
            all_label: default_all_label(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("data").join("notes.json")
}
fn default_note_glob() -> String {
    "*.html".to_string()
}
fn default_all_label() -> String {
    "全部".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct CategoriesConfig {
    /// Category keys listed first, in this order.
    #[serde(default = "default_order")]
    pub order: Vec<String>,
    #[serde(default = "default_ignored_dirs")]
    pub ignored_dirs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    /// Exact directory name to display name.
    #[serde(default = "default_name_overrides")]
    pub name_overrides: BTreeMap<String, String>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
            ignored_dirs: default_ignored_dirs(),
            exclude_globs: Vec::new(),
            name_overrides: default_name_overrides(),
        }
    }
}

fn default_order() -> Vec<String> {
    ["timeseries", "diffusion", "randomprocess", "stochasticprocess"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_ignored_dirs() -> Vec<String> {
    [".git", "__pycache__", "assets", "data", "scripts"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_name_overrides() -> BTreeMap<String, String> {
    [
        ("TimeSeries", "时间序列"),
        ("Diffusion", "扩散模型"),
        ("RandomProcess", "随机过程"),
        ("StochasticProcess", "随机过程"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Config {
    /// Output path resolved against `root`.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.index.output)
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

/// Load the config for `root`.
///
/// An explicit path must exist. Without one, `<root>/notes-index.toml` is
/// used when present and the built-in defaults otherwise.
pub fn resolve_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let candidate = root.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        load_config(&candidate)
    } else {
        tracing::debug!(path = %candidate.display(), "no config file, using defaults");
        Ok(Config::default())
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.index.output.as_os_str().is_empty() {
        anyhow::bail!("index.output must not be empty");
    }

    if config.index.note_glob.trim().is_empty() {
        anyhow::bail!("index.note_glob must not be empty");
    }
    Glob::new(&config.index.note_glob)
        .with_context(|| format!("index.note_glob is not a valid glob: '{}'", config.index.note_glob))?;

    for pattern in &config.categories.exclude_globs {
        Glob::new(pattern)
            .with_context(|| format!("categories.exclude_globs has an invalid glob: '{}'", pattern))?;
    }

    for key in &config.categories.order {
        if key.is_empty() || slugify(key) != *key {
            anyhow::bail!(
                "categories.order entry '{}' is not a category key (expected lower-case letters, digits and single hyphens)",
                key
            );
        }
    }

    Ok(())
}
