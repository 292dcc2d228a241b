use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::discover::discover_categories;

pub fn list_categories(root: &Path, config: &Config) -> Result<()> {
    let categories = discover_categories(root, config)?;

    println!("{:<24} {:>6}  NAME", "KEY", "NOTES");
    for category in &categories {
        println!(
            "{:<24} {:>6}  {}",
            category.key,
            category.file_count(),
            category.name
        );
    }

    if categories.is_empty() {
        println!("(no categories under {})", root.display());
    }

    Ok(())
}
