//! Display strings for notes and categories.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn chapter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^chap(?:ter|er)(\d+)$").expect("valid regex"))
}

fn diffusion_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^diffusion[-_ ]?(\d+)$").expect("valid regex"))
}

fn decimal_digit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d$").expect("valid regex"))
}

fn camel_boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"))
}

/// Human title for a note file stem.
///
/// `chapter3` / `chap03` become `第3章`, `diffusion-7` becomes `Diffusion 7`,
/// `vae` becomes `VAE`; anything else has `_` and `-` turned into spaces.
pub fn pretty_title(stem: &str) -> String {
    if let Some(caps) = chapter_re().captures(stem) {
        return format!("第{}章", number(&caps[1]));
    }

    if let Some(caps) = diffusion_re().captures(stem) {
        return format!("Diffusion {}", number(&caps[1]));
    }

    if stem.to_uppercase() == "VAE" {
        return "VAE".to_string();
    }

    spaced(stem)
}

/// Display name for a category directory.
///
/// Exact override hits win. Otherwise camel-case boundaries get a space and
/// `_` / `-` become spaces; the raw name is kept if nothing is left.
pub fn pretty_category_name(name: &str, overrides: &BTreeMap<String, String>) -> String {
    if let Some(display) = overrides.get(name) {
        return display.clone();
    }

    let split = camel_boundary_re().replace_all(name, "${1} ${2}");
    let display = spaced(&split);
    if display.is_empty() {
        name.to_string()
    } else {
        display
    }
}

fn spaced(text: &str) -> String {
    text.replace(['_', '-'], " ").trim().to_string()
}

/// Decimal value of a run of Unicode digits, without leading zeros.
///
/// Digit runs can be longer than any integer type, so this stays textual.
fn number(digits: &str) -> String {
    let ascii: String = digits.chars().map(ascii_digit).collect();
    let trimmed = ascii.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

// Nd digits come in contiguous blocks running zero to nine, and adjacent
// blocks each hold exactly ten, so the value is the offset into the run.
fn ascii_digit(c: char) -> char {
    if let Some(d) = c.to_digit(10) {
        return char::from(b'0' + d as u8);
    }

    let is_digit = |cp: u32| {
        char::from_u32(cp)
            .map(|ch| decimal_digit_re().is_match(ch.encode_utf8(&mut [0; 4])))
            .unwrap_or(false)
    };

    let mut start = c as u32;
    while start > 0 && is_digit(start - 1) {
        start -= 1;
    }
    let value = (c as u32 - start) % 10;
    char::from(b'0' + value as u8)
}
