//! Locale type: validated locale representation.
//!
//! A `Locale` can only be constructed from a code present in the registry,
//! so any locale that reaches page rendering is a member of the allow-list.

use std::fmt;

use thiserror::Error;

use crate::i18n::{LocaleConfig, LocaleRegistry, Messages, TextDirection};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported locale: '{0}'")]
pub struct UnsupportedLocale(pub String);

/// A validated locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const CHINESE: Locale = Locale { code: "zh" };
    pub const ARABIC: Locale = Locale { code: "ar" };

    /// Create a Locale from a URL path segment.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is in the registry
    /// * `Err(UnsupportedLocale)` otherwise; no case folding or region
    ///   stripping is attempted
    pub fn from_code(code: &str) -> Result<Locale, UnsupportedLocale> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(|config| Locale { code: config.code })
            .ok_or_else(|| UnsupportedLocale(code.to_string()))
    }

    /// Like `from_code`, but falls back to the default locale.
    ///
    /// Only metadata generation uses this; page routing must reject.
    pub fn from_code_or_default(code: &str) -> Locale {
        Self::from_code(code).unwrap_or_else(|_| Self::default_locale())
    }

    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// All supported locales in display order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry. This should never
    /// happen if the Locale was constructed properly (via `from_code` or
    /// constants).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    pub fn direction(&self) -> TextDirection {
        LocaleRegistry::get().direction(self.code)
    }

    pub fn messages(&self) -> &'static Messages {
        self.config().messages
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
