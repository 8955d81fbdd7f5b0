use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::Error;

/// Selects which files are examined and which call pattern marks a translatable string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// `$this->trans('...')` calls in PHP sources.
    Php,
    /// `{intl l='...'}` tags in templates.
    Template,
}

impl ScanMode {
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            ScanMode::Php => &["php"],
            ScanMode::Template => &["html", "tpl", "xml", "txt"],
        }
    }

    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.allowed_extensions().contains(&ext)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Php => "php",
            ScanMode::Template => "template",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "php" => Ok(ScanMode::Php),
            "template" | "tpl" => Ok(ScanMode::Template),
            _ => Err(Error::InvalidMode(value.to_string())),
        }
    }
}
