//! UI language preference.
//!
//! # Responsibility
//! - Parse and persist the two-letter language code.
//!
//! # Invariants
//! - Unknown or missing codes resolve to `Language::Es`.
//! - The preference never changes grid content.

use crate::storage::{KeyValueStore, StorageResult};
use log::{info, warn};

/// Languages the UI ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Parses a language code, case-insensitive, surrounding whitespace ignored.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// The other supported language; backs the settings toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }
}

/// Reads the stored preference, falling back to the default language.
pub fn load_language(adapter: &dyn KeyValueStore, key: &str) -> Language {
    match adapter.read(key) {
        Ok(Some(raw)) => Language::parse(&raw).unwrap_or_else(|| {
            warn!("event=language_load module=settings status=fallback reason=unknown_code");
            Language::default()
        }),
        Ok(None) => Language::default(),
        Err(err) => {
            warn!(
                "event=language_load module=settings status=fallback error_code=read_failed error={}",
                err
            );
            Language::default()
        }
    }
}

/// Persists `language` synchronously.
///
/// Unlike grid and record writes, the caller learns about failures so the
/// toggle can stay on the previous value.
pub fn save_language(
    adapter: &dyn KeyValueStore,
    key: &str,
    language: Language,
) -> StorageResult<()> {
    adapter.write(key, language.code())?;
    info!(
        "event=language_save module=settings status=ok language={}",
        language.code()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_language, save_language, Language};
    use crate::storage::MemoryKeyValueStore;

    #[test]
    fn parse_accepts_known_codes_only() {
        assert_eq!(Language::parse(" EN "), Some(Language::En));
        assert_eq!(Language::parse("es"), Some(Language::Es));
        assert_eq!(Language::parse("fr"), None);
    }

    #[test]
    fn toggled_flips_between_languages() {
        assert_eq!(Language::Es.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn load_falls_back_to_spanish() {
        let empty = MemoryKeyValueStore::new();
        assert_eq!(load_language(&empty, "language"), Language::Es);

        let unknown = MemoryKeyValueStore::with_entries([("language", "klingon")]);
        assert_eq!(load_language(&unknown, "language"), Language::Es);
    }

    #[test]
    fn save_then_load_round_trips() {
        let adapter = MemoryKeyValueStore::new();
        save_language(&adapter, "language", Language::En).unwrap();
        assert_eq!(load_language(&adapter, "language"), Language::En);
    }
}
