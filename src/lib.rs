//! # notes-index
//!
//! Builds the JSON index that drives a static notes homepage.
//!
//! Notes are plain `.html` files grouped into one directory per category
//! under a root. A run scans those directories, derives a key and display
//! name per category and a title and timestamps per note, and writes the
//! whole listing to `data/notes.json`.
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌─────────────┐   ┌────────────┐
//! │  discover  │──▶│   index    │──▶│  aggregate  │──▶│   export   │
//! │ categories │   │ note meta  │   │ sort+counts │   │ notes.json │
//! └────────────┘   └────────────┘   └─────────────┘   └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! notes-index                       # scan ., write ./data/notes.json
//! notes-index --root ~/site build   # scan another root
//! notes-index build --dry-run       # print the JSON instead
//! notes-index categories            # show discovered categories
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration with built-in defaults |
//! | [`models`] | Index document types |
//! | [`slug`] | Slugs and unique category keys |
//! | [`title`] | Note titles and category display names |
//! | [`discover`] | Category directory discovery |
//! | [`index`] | Note metadata and aggregation |
//! | [`export`] | JSON output and the build command |
//! | [`categories`] | Category listing command |

pub mod categories;
pub mod config;
pub mod discover;
pub mod export;
pub mod index;
pub mod models;
pub mod slug;
pub mod title;
