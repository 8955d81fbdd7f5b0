//! Reading translation catalogs produced by [`CatalogWriter`](super::CatalogWriter).
//!
//! A catalog is a PHP file returning a flat `'text' => 'translation'` array.
//! Catalogs live at `<root>/<domain>/<locale>.php`.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    core::translator::{TransParams, Translator, apply_params, miss},
    error::{Error, Result},
};

pub type Catalog = HashMap<String, String>;

pub fn catalog_path(root: &Path, domain: &str, locale: &str) -> PathBuf {
    root.join(domain).join(format!("{}.php", locale))
}

/// Load a catalog file. A missing file is an empty catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Catalog::new()),
        Err(source) => {
            return Err(Error::CatalogRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    parse_catalog(&content).map_err(|offset| Error::CatalogParse {
        path: path.to_path_buf(),
        line: line_of(&content, offset),
    })
}

/// Parse catalog source. On failure returns the byte offset where parsing stopped.
pub fn parse_catalog(content: &str) -> std::result::Result<Catalog, usize> {
    let mut cursor = Cursor::new(content);
    let mut catalog = Catalog::new();

    cursor.skip_ws();
    cursor.eat("<?php");
    cursor.skip_ws();
    if !cursor.eat("return") {
        return Err(cursor.pos);
    }
    cursor.skip_ws();
    if !cursor.eat("array(") && !cursor.eat("[") {
        return Err(cursor.pos);
    }

    loop {
        cursor.skip_ws();
        if cursor.eat(")") || cursor.eat("]") {
            break;
        }
        let text = cursor.literal().ok_or(cursor.pos)?;
        cursor.skip_ws();
        if !cursor.eat("=>") {
            return Err(cursor.pos);
        }
        cursor.skip_ws();
        let translation = cursor.literal().ok_or(cursor.pos)?;
        catalog.insert(text, translation);
        cursor.skip_ws();
        cursor.eat(",");
    }

    cursor.skip_ws();
    cursor.eat(";");
    cursor.skip_ws();
    if !cursor.rest().is_empty() {
        return Err(cursor.pos);
    }

    Ok(catalog)
}

fn line_of(content: &str, offset: usize) -> usize {
    content[..offset.min(content.len())].matches('\n').count() + 1
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    /// A single-quoted PHP literal: `\'` and `\\` are the only escapes.
    fn literal(&mut self) -> Option<String> {
        let rest = self.rest();
        let mut chars = rest.char_indices();
        if chars.next()?.1 != '\'' {
            return None;
        }

        let mut value = String::new();
        while let Some((i, c)) = chars.next() {
            match c {
                '\'' => {
                    self.pos += i + 1;
                    return Some(value);
                }
                '\\' => match rest[i + 1..].chars().next() {
                    Some(next @ ('\'' | '\\')) => {
                        value.push(next);
                        chars.next();
                    }
                    _ => value.push('\\'),
                },
                _ => value.push(c),
            }
        }
        None
    }
}

/// [`Translator`] backed by catalog files on disk.
///
/// Catalogs are read on first use for each (domain, locale) pair and cached.
pub struct CatalogTranslator {
    root: PathBuf,
    cache: RefCell<HashMap<(String, String), Catalog>>,
}

impl CatalogTranslator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the catalog for (domain, locale) now, surfacing read and parse errors.
    pub fn preload(&self, domain: &str, locale: &str) -> Result<usize> {
        let key = (domain.to_string(), locale.to_string());
        if let Some(catalog) = self.cache.borrow().get(&key) {
            return Ok(catalog.len());
        }
        let catalog = load_catalog(&catalog_path(&self.root, domain, locale))?;
        let len = catalog.len();
        self.cache.borrow_mut().insert(key, catalog);
        Ok(len)
    }
}

impl Translator for CatalogTranslator {
    fn trans(
        &self,
        text: &str,
        params: &TransParams,
        domain: &str,
        locale: &str,
        allow_fallback: bool,
    ) -> String {
        if let Err(e) = self.preload(domain, locale) {
            tracing::warn!(domain, locale, error = %e, "Ignoring unreadable translation catalog");
            self.cache
                .borrow_mut()
                .insert((domain.to_string(), locale.to_string()), Catalog::new());
        }

        let cache = self.cache.borrow();
        cache
            .get(&(domain.to_string(), locale.to_string()))
            .and_then(|catalog| catalog.get(text))
            .filter(|translation| !translation.is_empty())
            .map(|translation| apply_params(translation, params))
            .unwrap_or_else(|| miss(text, params, allow_fallback))
    }
}
