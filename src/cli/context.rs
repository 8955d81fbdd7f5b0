use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    core::{CatalogTranslator, ScanMode, ScanOutcome, Scanner, catalog_path},
};

/// Settings for one scan, merged from CLI arguments, the config file and defaults.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--locale fr_FR`)
/// 2. `.transcanrc.json` config file
/// 3. Built-in defaults
///
/// Relative paths from the config file are resolved against the directory
/// containing it.
#[derive(Debug)]
pub struct ScanContext {
    pub config: Config,
    pub directory: PathBuf,
    pub mode: ScanMode,
    pub locale: String,
    pub domain: String,
    pub project_root: PathBuf,
    pub catalogs_root: PathBuf,
}

impl ScanContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        // Rejected before anything is read from disk.
        let mode: ScanMode = args.mode.parse()?;

        let search_dir = args
            .project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let loaded = load_config(&search_dir)?;
        let config_dir = loaded
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let config = loaded.config;

        let project_root = args
            .project_root
            .clone()
            .unwrap_or_else(|| config_dir.join(&config.project_root));
        let catalogs_root = args
            .catalogs_root
            .clone()
            .unwrap_or_else(|| config_dir.join(&config.catalogs_root));

        let locale = args.locale.clone().unwrap_or_else(|| config.locale.clone());
        let domain = args.domain.clone().unwrap_or_else(|| config.domain.clone());
        if locale.trim().is_empty() || domain.trim().is_empty() {
            anyhow::bail!("Locale and domain must not be empty");
        }

        if let Some(path) = &loaded.path {
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }

        Ok(Self {
            config,
            directory: args.directory.clone(),
            mode,
            locale,
            domain,
            project_root,
            catalogs_root,
        })
    }

    /// Catalog file for the current domain and locale.
    pub fn catalog_file(&self) -> PathBuf {
        catalog_path(&self.catalogs_root, &self.domain, &self.locale)
    }

    /// Scan `directory`, looking translations up in the existing catalog.
    pub fn scan(&self) -> Result<ScanOutcome> {
        let translator = CatalogTranslator::new(&self.catalogs_root);
        let known = translator
            .preload(&self.domain, &self.locale)
            .with_context(|| "Failed to load existing translations")?;
        tracing::debug!(
            known,
            catalog = %self.catalog_file().display(),
            "Loaded existing translations"
        );

        let scanner = Scanner::new(translator, &self.project_root)
            .with_ignores(self.config.ignore_patterns()?);

        Ok(scanner.scan(&self.directory, self.mode, &self.locale, &self.domain))
    }
}
