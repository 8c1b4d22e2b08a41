//! Internationalization (i18n) module for multi-locale support.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales, their text
//!   direction and message catalog
//! - `locale`: Validated `Locale` type; construction is the routing allow-list check
//! - `messages`: Static message catalogs, one per locale
//!
//! # Example
//!
//! ```rust,ignore
//! use pdfcraft_site::i18n::Locale;
//!
//! let arabic = Locale::from_code("ar")?;
//! assert_eq!(arabic.direction().as_str(), "rtl");
//! let title = arabic.messages().contact.hero_title;
//! ```

mod locale;
mod messages;
mod registry;

pub use locale::{Locale, UnsupportedLocale};
pub use messages::{
    CommonStrings, ContactStrings, FormStrings, InAppStrings, Messages, MethodStrings,
    NavLabel, StaticPageStrings,
};
pub use registry::{LocaleConfig, LocaleRegistry, TextDirection};
