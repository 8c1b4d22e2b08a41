//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry is the routing allow-list. It uses a singleton pattern with
//! `OnceLock` to ensure thread-safe initialization and access.

use std::fmt;
use std::sync::OnceLock;

use crate::i18n::messages::{self, Messages};

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code used in the URL path (e.g., "en", "zh")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Chinese")
    pub name: &'static str,

    /// Native name of the locale (e.g., "English", "中文")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "en_US")
    pub og_locale: &'static str,

    /// Layout direction; `None` means left-to-right
    pub direction: Option<TextDirection>,

    /// Whether this is the default locale (only one should be true)
    pub is_default: bool,

    /// Message catalog for this locale
    pub messages: &'static Messages,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// Matching is exact: "EN" or "en-US" are not supported codes.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All supported locales in display order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self.locales.iter().filter(|l| l.is_default).collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Text direction for a locale code, left-to-right when unmapped.
    pub fn direction(&self, code: &str) -> TextDirection {
        self.get_by_code(code)
            .and_then(|locale| locale.direction)
            .unwrap_or_default()
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            direction: Some(TextDirection::Ltr),
            is_default: true,
            messages: &messages::ENGLISH,
        },
        LocaleConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            og_locale: "zh_CN",
            direction: None,
            is_default: false,
            messages: &messages::CHINESE,
        },
        LocaleConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            og_locale: "ar_AR",
            direction: Some(TextDirection::Rtl),
            is_default: false,
            messages: &messages::ARABIC,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LocaleRegistry::get().get_by_code("en").unwrap();
        assert_eq!(config.code, "en");
        assert_eq!(config.og_locale, "en_US");
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_is_exact() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("EN").is_none());
        assert!(registry.get_by_code("en-US").is_none());
        assert!(registry.get_by_code(" en").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_list_all_contains_supported_locales() {
        let codes: Vec<_> = LocaleRegistry::get()
            .list_all()
            .iter()
            .map(|l| l.code)
            .collect();
        assert_eq!(codes, vec!["en", "zh", "ar"]);
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(LocaleRegistry::get().default_locale().code, "en");
    }

    #[test]
    fn test_direction_mapping() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.direction("en"), TextDirection::Ltr);
        assert_eq!(registry.direction("ar"), TextDirection::Rtl);
    }

    #[test]
    fn test_direction_defaults_to_ltr_when_unmapped() {
        let registry = LocaleRegistry::get();
        // zh has no explicit direction entry
        assert_eq!(registry.direction("zh"), TextDirection::Ltr);
        assert_eq!(registry.direction("xx"), TextDirection::Ltr);
    }

    #[test]
    fn test_text_direction_display() {
        assert_eq!(TextDirection::Ltr.to_string(), "ltr");
        assert_eq!(TextDirection::Rtl.to_string(), "rtl");
    }
}
