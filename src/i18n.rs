// ABOUTME: Translation resources with default/fallback locale resolution.
// ABOUTME: Loads the embedded locale tables once and resolves dotted keys.

use std::collections::HashMap;

/// Locale the UI renders in when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "sv";
/// Locale consulted when a key is missing from the default locale.
pub const FALLBACK_LOCALE: &str = "en";

const SV_TABLE: &str = include_str!("../locales/sv.json");
const EN_TABLE: &str = include_str!("../locales/en.json");

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("locale table '{locale}' is not a flat string map: {source}")]
    InvalidTable {
        locale: String,
        source: serde_json::Error,
    },
}

/// Per-language key→string tables with default/fallback resolution.
///
/// Lookup order for `translate`: default locale, then fallback locale,
/// then the raw key itself so a missing entry stays visible instead of
/// rendering blank.
pub struct Localizer {
    resources: HashMap<String, HashMap<String, String>>,
    default_locale: String,
    fallback_locale: String,
}

impl Localizer {
    pub fn new(
        resources: HashMap<String, HashMap<String, String>>,
        default_locale: &str,
        fallback_locale: &str,
    ) -> Self {
        Self {
            resources,
            default_locale: default_locale.to_string(),
            fallback_locale: fallback_locale.to_string(),
        }
    }

    /// Build a localizer from the locale tables embedded in the binary.
    pub fn from_embedded_tables() -> Result<Self, LocaleError> {
        let mut resources = HashMap::new();
        for (locale, raw) in [(DEFAULT_LOCALE, SV_TABLE), (FALLBACK_LOCALE, EN_TABLE)] {
            let table: HashMap<String, String> =
                serde_json::from_str(raw).map_err(|source| LocaleError::InvalidTable {
                    locale: locale.to_string(),
                    source,
                })?;
            resources.insert(locale.to_string(), table);
        }
        Ok(Self::new(resources, DEFAULT_LOCALE, FALLBACK_LOCALE))
    }

    /// Resolve a key in the default locale, falling back per the lookup order.
    pub fn translate(&self, key: &str) -> String {
        self.translate_in(&self.default_locale, key)
            .or_else(|| self.translate_in(&self.fallback_locale, key))
            .unwrap_or(key)
            .to_string()
    }

    /// Resolve a key in one specific locale, without fallback.
    pub fn translate_in(&self, locale: &str, key: &str) -> Option<&str> {
        self.resources.get(locale)?.get(key).map(String::as_str)
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }
}

/// Substitute `{{name}}` placeholders with the given values.
///
/// Values are inserted verbatim; the templates are trusted, so nothing
/// is escaped.
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in values {
        rendered = rendered.replace(&format!("{{{{{name}}}}}"), value);
    }
    rendered
}

lazy_static::lazy_static! {
    static ref EMBEDDED: Localizer =
        Localizer::from_embedded_tables().expect("embedded locale tables are valid");
}

/// The process-wide localizer over the embedded tables.
pub fn embedded() -> &'static Localizer {
    &EMBEDDED
}
