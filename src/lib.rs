//! Transcan - translatable string extractor
//!
//! Transcan walks a project tree, extracts the strings passed to translation
//! calls (`$this->trans('...')` in PHP, `{intl l='...'}` in templates), looks up
//! their current translations and writes PHP translation catalogs.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanner, string table, translators and catalog writer
//! - `error`: Library error type
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use error::{Error, Result};
