//! Configuration management for the craftwiki application.
//!
//! This crate handles loading, validating, and persisting the settings that
//! shape wiki and HTML output.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`wiki`]: Image directory, icon size and row kind codes of wiki output
//! - [`html`]: Base URLs of HTML links and images
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! The first file found wins; there is no merging between files:
//!
//! 1. Local config (`./craftwiki.json5` or `./craftwiki.json`)
//! 2. User config (`~/.config/craftwiki/config.json5` or `~/.config/craftwiki/config.json`)
//! 3. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   wiki: { image_dir: "Ref_img", image_size: 20, row_kind_suffix: false },
//!   html: {
//!     page_base_url: "https://wikiwiki.jp/sf-jp/",
//!     image_base_url: "https://cdn.wikiwiki.jp/to/w/sf-jp/Ref_img/::ref/",
//!   },
//!   // optional catalog dump used by default
//!   catalog: "catalog.json",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use craftwiki_config::Config;
//!
//! # fn example() -> craftwiki_config::Result<()> {
//! let config = Config::load()?;
//! println!("Icons are {}px", config.wiki.image_size);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod html;
pub mod persistence;
pub mod wiki;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use html::HtmlConfig;
pub use wiki::WikiConfig;
