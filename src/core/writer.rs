use std::{
    collections::HashMap,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    core::StringTable,
    error::{Error, Result},
};

const HEADER: &str = "<?php\n\nreturn array(\n";
const FOOTER: &str = ");\n";

/// Writes a translation catalog as a PHP file returning a `text => translation` array.
pub struct CatalogWriter {
    file_path: PathBuf,
    create_if_missing: bool,
}

impl CatalogWriter {
    pub fn new(path: impl Into<PathBuf>, create_if_missing: bool) -> Self {
        Self {
            file_path: path.into(),
            create_if_missing,
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Write every entry of `strings` whose translation in `overlay` is non-empty.
    ///
    /// Entries are ordered by text. Existing content is replaced. Returns the
    /// number of entries written.
    pub fn write(
        &self,
        strings: &StringTable,
        overlay: &HashMap<String, String>,
    ) -> Result<usize> {
        if !self.file_path.exists()
            && self.create_if_missing
            && let Some(dir) = self.file_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|source| self.error(source))?;
        }

        let file = File::create(&self.file_path).map_err(|source| self.error(source))?;
        let mut out = BufWriter::new(file);

        let written = render(strings, overlay, &mut out).map_err(|source| self.error(source))?;
        out.flush().map_err(|source| self.error(source))?;

        tracing::debug!(path = %self.file_path.display(), written, "Wrote translation file");
        Ok(written)
    }

    fn error(&self, source: io::Error) -> Error {
        Error::FileWrite {
            path: self.file_path.clone(),
            source,
        }
    }
}

/// Write `strings` with their `overlay` translations to `path`.
pub fn write_catalog(
    path: &Path,
    strings: &StringTable,
    overlay: &HashMap<String, String>,
    create_if_missing: bool,
) -> Result<usize> {
    CatalogWriter::new(path, create_if_missing).write(strings, overlay)
}

fn render<W: Write>(
    strings: &StringTable,
    overlay: &HashMap<String, String>,
    out: &mut W,
) -> io::Result<usize> {
    out.write_all(HEADER.as_bytes())?;

    let mut written = 0;
    for (hash, entry) in strings.sorted_by_text() {
        let Some(translation) = overlay.get(hash).filter(|t| !t.is_empty()) else {
            continue;
        };
        writeln!(
            out,
            "    '{}' => '{}',",
            escape_quotes(&entry.text),
            escape_quotes(translation)
        )?;
        written += 1;
    }

    out.write_all(FOOTER.as_bytes())?;
    Ok(written)
}

/// Escape a value for a single-quoted PHP literal.
///
/// Backslashes go first so that an escaped quote or a trailing backslash in
/// the value cannot terminate the literal.
pub fn escape_quotes(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}
