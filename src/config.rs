use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".transcanrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base directory that recorded file paths are relative to.
    #[serde(default = "default_project_root")]
    pub project_root: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Catalogs are read from and written to `<catalogsRoot>/<domain>/<locale>.php`.
    #[serde(default = "default_catalogs_root")]
    pub catalogs_root: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,
}

fn default_project_root() -> String {
    "./".to_string()
}

fn default_locale() -> String {
    "en_US".to_string()
}

fn default_domain() -> String {
    "messages".to_string()
}

fn default_catalogs_root() -> String {
    "./I18n".to_string()
}

fn default_create_if_missing() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            locale: default_locale(),
            domain: default_domain(),
            catalogs_root: default_catalogs_root(),
            ignores: Vec::new(),
            create_if_missing: default_create_if_missing(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if an `ignores` pattern is not a valid glob, or if the
    /// locale or domain is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.locale.trim().is_empty() {
            bail!("'locale' must not be empty");
        }
        if self.domain.trim().is_empty() {
            bail!("'domain' must not be empty");
        }

        Ok(())
    }

    /// Compiled `ignores` patterns. Call [`Config::validate`] first.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern: \"{}\"", p)))
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
