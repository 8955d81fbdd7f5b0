use std::collections::HashMap;

/// Placeholder substitutions applied to a translated message, e.g. `%name` → `Bob`.
pub type TransParams = HashMap<String, String>;

/// Translation lookup used while scanning.
pub trait Translator {
    /// Translate `text` in `domain` for `locale`.
    ///
    /// On a miss, returns `text` itself when `allow_fallback` is set and an empty
    /// string otherwise.
    fn trans(
        &self,
        text: &str,
        params: &TransParams,
        domain: &str,
        locale: &str,
        allow_fallback: bool,
    ) -> String;
}

pub(crate) fn apply_params(message: &str, params: &TransParams) -> String {
    params
        .iter()
        .fold(message.to_string(), |acc, (key, value)| acc.replace(key, value))
}

pub(crate) fn miss(text: &str, params: &TransParams, allow_fallback: bool) -> String {
    if allow_fallback {
        apply_params(text, params)
    } else {
        String::new()
    }
}

/// In-memory translations keyed by (domain, locale, text).
#[derive(Debug, Default, Clone)]
pub struct MemoryTranslator {
    messages: HashMap<(String, String), HashMap<String, String>>,
}

impl MemoryTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, domain: &str, locale: &str, text: &str, translation: &str) {
        self.messages
            .entry((domain.to_string(), locale.to_string()))
            .or_default()
            .insert(text.to_string(), translation.to_string());
    }

    pub fn with(mut self, domain: &str, locale: &str, text: &str, translation: &str) -> Self {
        self.add(domain, locale, text, translation);
        self
    }
}

impl Translator for MemoryTranslator {
    fn trans(
        &self,
        text: &str,
        params: &TransParams,
        domain: &str,
        locale: &str,
        allow_fallback: bool,
    ) -> String {
        self.messages
            .get(&(domain.to_string(), locale.to_string()))
            .and_then(|catalog| catalog.get(text))
            .filter(|translation| !translation.is_empty())
            .map(|translation| apply_params(translation, params))
            .unwrap_or_else(|| miss(text, params, allow_fallback))
    }
}
