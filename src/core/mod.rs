//! Extraction pipeline: walk a tree, extract strings, look up translations, write catalogs.
//!
//! ## Module Structure
//!
//! - `mode`: Scan modes and the file extensions they accept
//! - `extract`: Pattern matching of translation calls and string literals
//! - `table`: Deduplicated string table keyed by content hash
//! - `translator`: Translation lookup trait and an in-memory implementation
//! - `catalog`: Reading catalog files and the catalog-backed translator
//! - `scanner`: Recursive directory walk producing a [`ScanOutcome`]
//! - `writer`: Serializing a string table to a catalog file

pub mod catalog;
pub mod extract;
mod mode;
mod scanner;
mod table;
pub mod translator;
mod writer;

pub use catalog::{CatalogTranslator, catalog_path, load_catalog};
pub use mode::ScanMode;
pub use scanner::{ScanOutcome, Scanner};
pub use table::{StringEntry, StringTable, content_hash};
pub use translator::{MemoryTranslator, TransParams, Translator};
pub use writer::{CatalogWriter, escape_quotes, write_catalog};
