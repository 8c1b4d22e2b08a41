//! Site and navigation configuration.
//!
//! Plain read-only constants consumed by the page shell and the metadata
//! builder. Navigation labels are catalog keys, not display text.

use crate::i18n::{Locale, Messages, NavLabel};

/// External profile links.
#[derive(Debug, Clone, Copy)]
pub struct SiteLinks {
    pub github: &'static str,
    pub twitter: &'static str,
}

/// SEO-related settings.
#[derive(Debug, Clone, Copy)]
pub struct SeoConfig {
    /// Page title template; `%s` is replaced by the page title
    pub title_template: &'static str,
    pub default_title: &'static str,
    pub twitter_handle: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub og_image: &'static str,
    pub links: SiteLinks,
    pub creator: &'static str,
    pub keywords: &'static [&'static str],
    pub seo: SeoConfig,
}

pub const SITE: SiteConfig = SiteConfig {
    name: "PDFCraft",
    description: "Professional PDF Tools - Free, Private & Browser-Based. Merge, split, compress, convert, and edit PDF files online without uploading to servers.",
    url: "https://pdf.iaas.eu.cc",
    og_image: "/images/og-image.png",
    links: SiteLinks {
        github: "https://github.com/ytzhiyun/pdfcraft",
        twitter: "https://twitter.com/Anyway889",
    },
    creator: "PDFCraft Team",
    keywords: &[
        "PDF tools",
        "PDF editor",
        "merge PDF",
        "split PDF",
        "compress PDF",
        "convert PDF",
        "free PDF tools",
        "online PDF editor",
        "browser-based PDF",
        "private PDF processing",
    ],
    seo: SeoConfig {
        title_template: "%s | PDFCraft",
        default_title: "PDFCraft - Professional PDF Tools",
        twitter_handle: "@pdfcraft",
    },
};

impl SiteConfig {
    /// Apply the SEO title template to a page title.
    ///
    /// An empty page title yields the default site title.
    pub fn page_title(&self, title: &str) -> String {
        if title.trim().is_empty() {
            return self.seo.default_title.to_string();
        }
        self.seo.title_template.replace("%s", title)
    }

    /// Canonical absolute URL for a site-relative path.
    pub fn canonical_url(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    pub fn keywords_meta(&self) -> String {
        self.keywords.join(", ")
    }
}

/// A navigation entry. `href` is locale-relative ("/" is the locale home).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: NavLabel,
    pub href: &'static str,
}

impl NavItem {
    /// Locale-prefixed link target.
    pub fn href_for(&self, locale: Locale) -> String {
        locale_href(locale, self.href)
    }

    pub fn title(&self, messages: &Messages) -> &'static str {
        messages.nav_label(self.label)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavConfig {
    pub main_nav: &'static [NavItem],
    pub footer_nav: &'static [NavItem],
}

pub const NAV: NavConfig = NavConfig {
    main_nav: &[
        NavItem {
            label: NavLabel::Home,
            href: "/",
        },
        NavItem {
            label: NavLabel::Tools,
            href: "/tools",
        },
        NavItem {
            label: NavLabel::About,
            href: "/about",
        },
        NavItem {
            label: NavLabel::Faq,
            href: "/faq",
        },
    ],
    footer_nav: &[
        NavItem {
            label: NavLabel::Privacy,
            href: "/privacy",
        },
        NavItem {
            label: NavLabel::Terms,
            href: "/terms",
        },
        NavItem {
            label: NavLabel::Contact,
            href: "/contact",
        },
    ],
};

/// Prefix a locale-relative path with the locale segment.
pub fn locale_href(locale: Locale, path: &str) -> String {
    if path == "/" || path.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}{}", locale.code(), path)
    }
}
