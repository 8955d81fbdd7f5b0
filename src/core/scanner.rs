use std::{
    fs, io,
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::WalkDir;

use crate::{
    core::{
        ScanMode, StringEntry, StringTable, content_hash, extract::extract_strings,
        translator::{TransParams, Translator},
    },
    error::Result,
    utils::{relative_path, resolve_path},
};

/// Result of scanning a directory tree.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub strings: StringTable,
    /// Number of distinct strings added by this scan.
    pub new_count: usize,
    /// Files with an allowed extension that were read.
    pub files_scanned: usize,
    /// Unreadable files and directories that were skipped.
    pub skipped_count: usize,
}

/// Walks a directory tree and collects translatable strings.
pub struct Scanner<T: Translator> {
    translator: T,
    project_root: PathBuf,
    ignores: Vec<Pattern>,
}

impl<T: Translator> Scanner<T> {
    /// `project_root` is the base that recorded file paths are made relative to.
    pub fn new(translator: T, project_root: impl AsRef<Path>) -> Self {
        Self {
            translator,
            project_root: resolve_path(project_root.as_ref()),
            ignores: Vec::new(),
        }
    }

    /// Skip files and directories whose project-relative path matches one of `patterns`.
    pub fn with_ignores(mut self, patterns: Vec<Pattern>) -> Self {
        self.ignores = patterns;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Like [`Scanner::scan`], with the mode given by name.
    ///
    /// Fails with [`Error::InvalidMode`](crate::Error::InvalidMode) before touching the
    /// filesystem if `mode` is not a known scan mode.
    pub fn scan_named(
        &self,
        directory: &Path,
        mode: &str,
        locale: &str,
        domain: &str,
    ) -> Result<ScanOutcome> {
        let mode = mode.parse::<ScanMode>()?;
        Ok(self.scan(directory, mode, locale, domain))
    }

    /// Recursively collect translatable strings under `directory`.
    ///
    /// A missing directory, or a root that is not a directory, contributes
    /// nothing. Unreadable entries are logged, counted in
    /// [`ScanOutcome::skipped_count`] and skipped.
    pub fn scan(
        &self,
        directory: &Path,
        mode: ScanMode,
        locale: &str,
        domain: &str,
    ) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        if let Ok(meta) = fs::metadata(directory)
            && !meta.is_dir()
        {
            tracing::debug!(path = %directory.display(), "Not a directory, ignoring it");
            return outcome;
        }

        let mut walker = WalkDir::new(directory)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    if e.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound) {
                        tracing::debug!(path = ?e.path(), "Directory does not exist, ignoring it");
                    } else {
                        tracing::warn!(error = %e, "Cannot access path, skipping");
                        outcome.skipped_count += 1;
                    }
                    continue;
                }
            };

            let path = entry.path();
            let is_dir = entry.file_type().is_dir();

            if entry.depth() > 0 && self.is_ignored(path) {
                if is_dir {
                    walker.skip_current_dir();
                }
                continue;
            }

            if is_dir {
                tracing::debug!("Walking in {}, in mode {}", path.display(), mode);
                continue;
            }

            let accepted = entry.file_type().is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| mode.accepts_extension(ext));
            if !accepted {
                continue;
            }

            let content = match fs::read(path) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Cannot read file, skipping"
                    );
                    outcome.skipped_count += 1;
                    continue;
                }
            };
            outcome.files_scanned += 1;

            if content.is_empty() {
                continue;
            }

            let short_path = relative_path(path, &self.project_root);
            tracing::debug!("Examining file {}", short_path);
            self.collect(&content, &short_path, mode, locale, domain, &mut outcome);
        }

        outcome
    }

    fn collect(
        &self,
        content: &str,
        short_path: &str,
        mode: ScanMode,
        locale: &str,
        domain: &str,
        outcome: &mut ScanOutcome,
    ) {
        let found = extract_strings(content, mode);
        if found.is_empty() {
            return;
        }
        tracing::debug!(strings = ?found, "Strings found");

        let params = TransParams::new();
        for text in found {
            if text.is_empty() {
                continue;
            }

            let hash = content_hash(&text);
            if let Some(entry) = outcome.strings.get_mut(&hash) {
                entry.add_file(short_path);
                continue;
            }

            let translation = self.translator.trans(&text, &params, domain, locale, false);
            outcome.strings.insert(
                hash,
                StringEntry::new(text, translation, short_path.to_string()),
            );
            outcome.new_count += 1;
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.ignores.is_empty() {
            return false;
        }
        let relative = relative_path(path, &self.project_root);
        self.ignores.iter().any(|p| p.matches(&relative))
    }
}
